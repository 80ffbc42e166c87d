//! Version tag enumeration.

use git2::Repository;
use semver::Version;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::GitError;

/// List candidate version strings from the repository's tag references.
///
/// A reference qualifies iff its full name starts with
/// `refs/tags/<version_tag_prefix>`; the remainder after that combined
/// prefix is returned verbatim. The result is unordered and carries no
/// semver guarantee; run the candidates through [`parse_version`] when a
/// [`Version`] is needed.
pub fn list_version_tags(repo: &Repository, settings: &Settings) -> Result<Vec<String>, GitError> {
    let ref_prefix = settings.tag_ref_prefix();
    let mut candidates = Vec::new();

    for reference in repo.references().map_err(GitError::ListReferences)? {
        let reference = reference.map_err(GitError::ListReferences)?;
        let Some(name) = reference.name() else {
            warn!("Skipping reference whose name is not valid UTF-8");
            continue;
        };
        if let Some(candidate) = name.strip_prefix(ref_prefix.as_str()) {
            candidates.push(candidate.to_string());
        }
    }

    debug!(
        count = candidates.len(),
        prefix = %ref_prefix,
        "Enumerated version tag candidates"
    );
    Ok(candidates)
}

/// Parse a candidate string produced by [`list_version_tags`].
pub fn parse_version(candidate: &str) -> Option<Version> {
    Version::parse(candidate).ok()
}

/// Highest version among the repository's version tags.
///
/// Candidates that do not parse as semver are ignored. Returns `None` when
/// no tag carries a parseable version.
pub fn latest_version(
    repo: &Repository,
    settings: &Settings,
) -> Result<Option<Version>, GitError> {
    let latest = list_version_tags(repo, settings)?
        .iter()
        .filter_map(|candidate| parse_version(candidate))
        .max();

    if latest.is_none() {
        debug!("No parseable version tags found in repository");
    }
    Ok(latest)
}
