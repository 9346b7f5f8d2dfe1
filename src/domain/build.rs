use crate::error::{Result, VersionError};
use crate::grammar::BUILD_IDENTIFIER_RE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Build metadata, the dot-separated sequence after `+` in `1.0.0+build.1`
///
/// Identifiers are kept verbatim; `001` stays `001`. Build metadata has no
/// part in precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct BuildInfo {
    parts: Vec<String>,
}

impl BuildInfo {
    /// Create build metadata from its identifiers
    ///
    /// Fails if `parts` is empty or an identifier is empty or contains
    /// characters outside `[0-9A-Za-z-]`.
    pub fn new(parts: Vec<String>) -> Result<Self> {
        if parts.is_empty() {
            return Err(VersionError::validation(
                "Build metadata must have at least one identifier",
            ));
        }

        if let Some(bad) = parts.iter().find(|p| !BUILD_IDENTIFIER_RE.is_match(p)) {
            return Err(VersionError::validation(format!(
                "Invalid build identifier: '{}'",
                bad
            )));
        }

        Ok(BuildInfo { parts })
    }

    /// Parse dot-separated build metadata such as "sha.5114f85"
    pub fn parse(s: &str) -> Result<Self> {
        BuildInfo::new(s.split('.').map(str::to_string).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl TryFrom<Vec<String>> for BuildInfo {
    type Error = VersionError;

    fn try_from(parts: Vec<String>) -> Result<Self> {
        BuildInfo::new(parts)
    }
}

impl From<BuildInfo> for Vec<String> {
    fn from(info: BuildInfo) -> Self {
        info.parts
    }
}

impl FromStr for BuildInfo {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        BuildInfo::parse(s)
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_parse() {
        let build = BuildInfo::parse("build.1").unwrap();
        assert_eq!(build.parts(), &["build", "1"]);
        assert_eq!(build.to_string(), "build.1");
    }

    #[test]
    fn test_build_keeps_leading_zeros() {
        let build = BuildInfo::parse("001").unwrap();
        assert_eq!(build.to_string(), "001");
    }

    #[test]
    fn test_build_new_empty() {
        assert!(BuildInfo::new(vec![]).is_err());
    }

    #[test]
    fn test_build_rejects_invalid_identifiers() {
        assert!(BuildInfo::new(vec![String::new()]).is_err());
        assert!(BuildInfo::new(vec!["a.b".to_string()]).is_err());
        assert!(BuildInfo::parse("exp+sha").is_err());
    }

    #[test]
    fn test_build_serde_shape() {
        let build = BuildInfo::parse("build.1").unwrap();
        assert_eq!(serde_json::to_string(&build).unwrap(), r#"["build","1"]"#);
        assert!(serde_json::from_str::<BuildInfo>("[]").is_err());
    }
}
