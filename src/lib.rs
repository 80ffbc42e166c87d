//! kleio - Git metadata queries for changelog and release-notes tooling.
//!
//! # Overview
//!
//! kleio is the git-facing layer of a changelog generator. It answers three
//! questions about a repository on disk: which version tags exist, which
//! commits lie between two releases, and where a named remote points. Every
//! query is a stateless read delegated to git2; nothing is cached and
//! nothing is written.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use kleio::{Settings, commits_between, list_version_tags, open_repository};
//!
//! # fn main() -> Result<(), kleio::GitError> {
//! let settings = Settings::default();
//! let repo = open_repository(Path::new("path/to/repo"))?;
//!
//! for candidate in list_version_tags(&repo, &settings)? {
//!     println!("tag: {candidate}");
//! }
//!
//! let previous = semver::Version::new(1, 0, 0);
//! for commit in commits_between(&repo, &settings, Some(&previous), None)? {
//!     println!("{}", commit?.summary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod git;

// Re-export commonly used types
pub use config::Settings;
pub use error::GitError;
pub use git::{
    CommitInfo, CommitWalk, commits_between, latest_version, list_version_tags, open_repository,
    parse_version, remote_url,
};
