//! Query settings supplied by the surrounding tool.
//!
//! kleio keeps no module-level state: every query receives a [`Settings`]
//! reference. The struct deserializes from a partial TOML table, with
//! per-field defaults filling anything the host tool's config omits.

use serde::{Deserialize, Serialize};

fn default_version_tag_prefix() -> String {
    "v".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

/// Settings for git metadata queries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Tag-name prefix that marks a version tag. A tag reference is a
    /// version tag iff its full name starts with `refs/tags/<prefix>`.
    /// An empty prefix matches every tag.
    #[serde(default = "default_version_tag_prefix")]
    pub version_tag_prefix: String,

    /// Remote consulted when the caller asks for "the" remote URL.
    #[serde(default = "default_remote")]
    pub default_remote: String,

    /// Branch whose tip starts the commit walk when no upper version
    /// is given.
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// When true, a commit walk whose lower bound is not an ancestor of
    /// the start point ends with [`GitError::BoundUnreachable`] instead
    /// of silently exhausting reachable history.
    ///
    /// [`GitError::BoundUnreachable`]: crate::error::GitError::BoundUnreachable
    #[serde(default)]
    pub strict_ancestry: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version_tag_prefix: default_version_tag_prefix(),
            default_remote: default_remote(),
            default_branch: default_branch(),
            strict_ancestry: false,
        }
    }
}

impl Settings {
    /// Full reference-name prefix for version tags, e.g. `refs/tags/v`.
    pub fn tag_ref_prefix(&self) -> String {
        format!("refs/tags/{}", self.version_tag_prefix)
    }
}
