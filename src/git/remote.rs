//! Remote URL lookup.

use git2::{ErrorCode, Repository};
use tracing::debug;

use crate::error::GitError;

/// URL of the named remote, or `None` when no such remote is configured.
///
/// Absence is a normal outcome, not an error; the host tool decides whether
/// a missing remote matters. Pass `settings.default_remote` for the usual
/// `origin` lookup.
pub fn remote_url(repo: &Repository, name: &str) -> Result<Option<String>, GitError> {
    let remote = match repo.find_remote(name) {
        Ok(remote) => remote,
        Err(e) if e.code() == ErrorCode::NotFound => {
            debug!(remote = name, "Remote not configured");
            return Ok(None);
        }
        Err(e) => return Err(GitError::RemoteLookup(name.to_string(), e)),
    };

    match remote.url() {
        Some(url) => Ok(Some(url.to_string())),
        None => Err(GitError::RemoteUrlEncoding(name.to_string())),
    }
}
