//! Read-only access to version tags
//!
//! The [TagSource] trait lists tag names; [latest_version] picks the highest
//! version among them. Implementations:
//!
//! - [repository::Git2TagSource]: tags of a local repository via the `git2` crate
//! - [mock::MockTagSource]: in-memory tags for testing
//!
//! Functions here never create, delete or push refs.

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::domain::{SemanticVersion, TagPattern};
use crate::error::Result;

/// Source of tag names
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
pub trait TagSource: Send + Sync {
    /// Get all tag names, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// A tag together with the version it names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub name: String,
    pub version: SemanticVersion,
}

/// Collect every tag matching `pattern`, sorted by ascending version
///
/// Tags that do not match the pattern are skipped.
pub fn version_tags<S: TagSource + ?Sized>(
    source: &S,
    pattern: &TagPattern,
) -> Result<Vec<VersionTag>> {
    let mut tags = Vec::new();
    for name in source.list_tags()? {
        if let Some(version) = pattern.extract(&name)? {
            tags.push(VersionTag { name, version });
        }
    }

    tags.sort_by(|a, b| a.version.cmp(&b.version));
    Ok(tags)
}

/// Find the tag with the highest version
///
/// # Arguments
/// * `source` - Where to read tag names from
/// * `pattern` - Tag naming pattern, e.g. "v{version}"
/// * `include_prereleases` - Whether pre-release versions are candidates
///
/// # Returns
/// * `Ok(Some(tag))` - Highest version tag
/// * `Ok(None)` - No tag matches
pub fn latest_version<S: TagSource + ?Sized>(
    source: &S,
    pattern: &TagPattern,
    include_prereleases: bool,
) -> Result<Option<VersionTag>> {
    let latest = version_tags(source, pattern)?
        .into_iter()
        .filter(|tag| include_prereleases || tag.version.is_release())
        .last();

    Ok(latest)
}
