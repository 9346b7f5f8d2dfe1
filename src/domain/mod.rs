//! Domain logic - version values independent of git and I/O

pub mod build;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use build::BuildInfo;
pub use prerelease::{Identifier, PreReleaseInfo};
pub use tag::TagPattern;
pub use version::{ComponentUpdate, MetadataUpdate, SemanticVersion, VersionUpdate};
