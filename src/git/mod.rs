//! Git operations using git2-rs.
//!
//! All queries are stateless reads. Callers open a fresh handle with
//! [`open_repository`] for each call and pass it by reference; nothing in
//! this module caches handles or repository state between calls.

pub mod commits;
pub mod remote;
pub mod tags;

pub use commits::{CommitInfo, CommitWalk, commits_between};
pub use remote::remote_url;
pub use tags::{latest_version, list_version_tags, parse_version};

use std::path::Path;

use git2::Repository;

use crate::error::GitError;

/// Open the repository rooted at `path`.
///
/// The path itself must be a repository root (or a `.git` directory); no
/// upward discovery is performed.
pub fn open_repository(path: &Path) -> Result<Repository, GitError> {
    Repository::open(path).map_err(|source| GitError::RepositoryNotFound {
        path: path.to_path_buf(),
        source,
    })
}
