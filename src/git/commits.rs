//! Commit walks between release points.

use chrono::{DateTime, TimeZone, Utc};
use git2::{Commit, Oid, Repository, Revwalk};
use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::error::GitError;

/// A commit yielded by [`commits_between`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub id: String,
    pub summary: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
    pub parent_ids: Vec<String>,
}

impl CommitInfo {
    fn from_commit(commit: &Commit) -> Self {
        let time = commit.time();
        let timestamp = Utc
            .timestamp_opt(time.seconds(), 0)
            .single()
            .unwrap_or_else(Utc::now);

        CommitInfo {
            id: commit.id().to_string(),
            summary: commit.summary().unwrap_or("").to_string(),
            message: commit.message().unwrap_or("").to_string(),
            author_name: commit.author().name().unwrap_or("").to_string(),
            author_email: commit.author().email().unwrap_or("").to_string(),
            timestamp,
            parent_ids: commit.parent_ids().map(|id| id.to_string()).collect(),
        }
    }
}

/// Walk commits from one release back toward another.
///
/// `to` names the start of the walk; when omitted, the tip of
/// `settings.default_branch` is used instead. `from` is the exclusive lower
/// bound; when omitted, the walk runs to the root of history. Both versions
/// resolve through `refs/tags/<prefix><version>`, eagerly, so a missing tag
/// fails here rather than mid-iteration.
///
/// The returned [`CommitWalk`] yields newest-first in the order the
/// underlying revwalk provides. It is lazy and single-use; call this
/// function again for a fresh walk.
///
/// A lower bound that is not an ancestor of the start point is never
/// reached, and the walk then covers all history reachable from the start.
/// Set [`Settings::strict_ancestry`] to turn that case into
/// [`GitError::BoundUnreachable`].
pub fn commits_between<'repo>(
    repo: &'repo Repository,
    settings: &Settings,
    from: Option<&Version>,
    to: Option<&Version>,
) -> Result<CommitWalk<'repo>, GitError> {
    let lower_bound = from
        .map(|version| resolve_version_tag(repo, settings, version))
        .transpose()?;

    let start = match to {
        Some(version) => resolve_version_tag(repo, settings, version)?,
        None => resolve_branch_tip(repo, &settings.default_branch)?,
    };

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(start).map_err(GitError::RevwalkError)?;

    debug!(start = %start, lower_bound = ?lower_bound, "Starting commit walk");

    Ok(CommitWalk {
        repo,
        revwalk,
        lower_bound,
        start,
        strict: settings.strict_ancestry,
        finished: false,
    })
}

fn resolve_version_tag(
    repo: &Repository,
    settings: &Settings,
    version: &Version,
) -> Result<Oid, GitError> {
    let ref_name = format!("{}{}", settings.tag_ref_prefix(), version);
    let reference = repo
        .find_reference(&ref_name)
        .map_err(|e| GitError::ReferenceNotFound(ref_name.clone(), e))?;
    let commit = reference
        .peel_to_commit()
        .map_err(|e| GitError::PeelFailed(ref_name, e))?;
    Ok(commit.id())
}

fn resolve_branch_tip(repo: &Repository, branch_name: &str) -> Result<Oid, GitError> {
    let branch = repo
        .find_branch(branch_name, git2::BranchType::Local)
        .map_err(|e| GitError::ReferenceNotFound(branch_name.to_string(), e))?;
    let commit = branch
        .get()
        .peel_to_commit()
        .map_err(|e| GitError::PeelFailed(branch_name.to_string(), e))?;
    Ok(commit.id())
}

/// Lazy producer for [`commits_between`].
///
/// Stops at the exclusive lower bound; the start commit itself is the first
/// item. Dropping the walk early performs no further repository reads.
pub struct CommitWalk<'repo> {
    repo: &'repo Repository,
    revwalk: Revwalk<'repo>,
    lower_bound: Option<Oid>,
    start: Oid,
    strict: bool,
    finished: bool,
}

impl Iterator for CommitWalk<'_> {
    type Item = Result<CommitInfo, GitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.revwalk.next() {
            None => {
                self.finished = true;
                // History exhausted without hitting the bound. The lenient
                // default treats this as a complete walk.
                match (self.strict, self.lower_bound) {
                    (true, Some(bound)) => Some(Err(GitError::BoundUnreachable {
                        bound: bound.to_string(),
                        start: self.start.to_string(),
                    })),
                    _ => None,
                }
            }
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(GitError::RevwalkError(e)))
            }
            Some(Ok(oid)) => {
                if self.lower_bound == Some(oid) {
                    self.finished = true;
                    return None;
                }
                match self.repo.find_commit(oid) {
                    Ok(commit) => Some(Ok(CommitInfo::from_commit(&commit))),
                    Err(e) => {
                        self.finished = true;
                        Some(Err(GitError::ParseCommit(e)))
                    }
                }
            }
        }
    }
}
