use crate::domain::SemanticVersion;
use crate::error::{Result, VersionError};
use crate::grammar::{self, SEMANTIC_VERSION_PATTERN};
use regex::Regex;

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a new tag pattern
    ///
    /// The pattern must contain the `{version}` placeholder exactly once.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        match pattern.matches(PLACEHOLDER).count() {
            1 => {}
            0 => {
                return Err(VersionError::tag(format!(
                    "Pattern '{}' must contain {{version}} placeholder",
                    pattern
                )))
            }
            _ => {
                return Err(VersionError::tag(format!(
                    "Pattern '{}' must contain {{version}} only once",
                    pattern
                )))
            }
        }

        // Escape everything, then swap the escaped placeholder for the grammar
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", SEMANTIC_VERSION_PATTERN);
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| VersionError::tag(format!("Invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &SemanticVersion) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.matcher.is_match(tag)
    }

    /// Extract the version from a tag that matches this pattern
    ///
    /// # Returns
    /// * `Ok(Some(version))` - Tag matches the pattern
    /// * `Ok(None)` - Tag does not match the pattern
    /// * `Err` - Tag matches the grammar but a component overflows
    pub fn extract(&self, tag: &str) -> Result<Option<SemanticVersion>> {
        match self.matcher.captures(tag) {
            Some(captures) => grammar::from_captures(&captures)
                .map(Some)
                .map_err(|_| VersionError::parse(tag)),
            None => Ok(None),
        }
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("v{version}").expect("Default tag pattern is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.format(&v("1.2.3")), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}-final").unwrap();
        assert_eq!(pattern.format(&v("1.2.3-rc.1")), "release-1.2.3-rc.1-final");
    }

    #[test]
    fn test_pattern_matches() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert!(pattern.matches("v1.2.3"));
        assert!(pattern.matches("v1.2.3-alpha.1+build"));
        assert!(!pattern.matches("release-1.2.3"));
        assert!(!pattern.matches("v01.2.3"));
    }

    #[test]
    fn test_pattern_extract() {
        let pattern = TagPattern::new("pkg@{version}").unwrap();
        assert_eq!(
            pattern.extract("pkg@2.0.0-beta.1").unwrap(),
            Some(v("2.0.0-beta.1"))
        );
        assert_eq!(pattern.extract("other@2.0.0").unwrap(), None);
    }

    #[test]
    fn test_pattern_escapes_literals() {
        let pattern = TagPattern::new("v.{version}").unwrap();
        assert!(pattern.matches("v.1.0.0"));
        assert!(!pattern.matches("vx1.0.0"));
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(matches!(TagPattern::new("v"), Err(VersionError::Tag(_))));
        assert!(TagPattern::new("{version}-{version}").is_err());
    }

    #[test]
    fn test_pattern_default() {
        assert_eq!(TagPattern::default().as_str(), "v{version}");
    }
}
