use crate::domain::TagPattern;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "semver.toml";

/// File looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semver.toml";

/// Represents the complete configuration for the semantic-version tool.
///
/// Holds the naming patterns used by tag lookup and release planning.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

/// Returns the default tag naming pattern.
fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Returns the default pending release branch pattern.
fn default_pending_branch_pattern() -> String {
    "pending-releases/v{version}".to_string()
}

/// Returns the default release branch pattern.
fn default_release_branch_pattern() -> String {
    "releases/v{version}".to_string()
}

/// Configuration for version tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl TagsConfig {
    /// Compile the configured tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.pattern.as_str())
    }
}

/// Configuration for release planning.
///
/// Both patterns take a `{version}` placeholder: the pending branch receives the
/// pre-release version, the release branch the plain release version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_pending_branch_pattern")]
    pub pending_branch_pattern: String,

    #[serde(default = "default_release_branch_pattern")]
    pub release_branch_pattern: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            pending_branch_pattern: default_pending_branch_pattern(),
            release_branch_pattern: default_release_branch_pattern(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver.toml` in current directory
/// 3. `.semver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tags.pattern, "v{version}");
        assert_eq!(
            config.release.pending_branch_pattern,
            "pending-releases/v{version}"
        );
        assert_eq!(config.release.release_branch_pattern, "releases/v{version}");
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config("[tags]\npattern = \"release-{version}\"\n").unwrap();
        assert_eq!(config.tags.pattern, "release-{version}");
        assert_eq!(config.release, ReleaseConfig::default());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(parse_config("[tags\npattern = 1").is_err());
    }

    #[test]
    fn test_tag_pattern_from_config() {
        let config = Config::default();
        assert!(config.tags.tag_pattern().unwrap().matches("v1.0.0"));
    }
}
