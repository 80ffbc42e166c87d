//! Error types for kleio modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository at '{}': {source}", path.display())]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to list references: {0}")]
    ListReferences(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to peel reference '{0}' to a commit: {1}")]
    PeelFailed(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to look up remote '{0}': {1}")]
    RemoteLookup(String, #[source] git2::Error),

    #[error("Remote '{0}' has a URL that is not valid UTF-8")]
    RemoteUrlEncoding(String),

    #[error("Commit {bound} was never reached walking back from {start}")]
    BoundUnreachable { bound: String, start: String },
}
