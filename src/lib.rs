pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod grammar;
pub mod release;
pub mod ui;

pub use domain::{
    BuildInfo, ComponentUpdate, Identifier, MetadataUpdate, PreReleaseInfo, SemanticVersion,
    TagPattern, VersionUpdate,
};
pub use error::{Result, VersionError};
pub use grammar::{find_versions, parse_version, SEMANTIC_VERSION_PATTERN};
