use thiserror::Error;

/// Unified error type for semantic-version operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Could not parse semantic version. \"{0}\" is not valid.")]
    Parse(String),

    #[error("Invalid version component: {0}")]
    Validation(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Release error: {0}")]
    Release(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in semantic-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a parse error for the offending text
    pub fn parse(text: impl Into<String>) -> Self {
        VersionError::Parse(text.into())
    }

    /// Create a validation error with context
    pub fn validation(msg: impl Into<String>) -> Self {
        VersionError::Validation(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VersionError::Tag(msg.into())
    }

    /// Create a release error with context
    pub fn release(msg: impl Into<String>) -> Self {
        VersionError::Release(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }
}
