use crate::domain::{BuildInfo, PreReleaseInfo};
use crate::error::{Result, VersionError};
use crate::grammar;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// See https://semver.org/spec/v2.0.0.html. Values are immutable; derive a
/// modified copy with [`SemanticVersion::with`].
///
/// Equality is structural and includes build metadata. Precedence, which
/// ignores build metadata, is [`SemanticVersion::compare_to`]. The `Ord` impl
/// orders by precedence and breaks remaining ties on build metadata so that
/// it agrees with `Eq`.
///
/// Serializes as `{major, minor, patch, prerelease?, build?}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prerelease: Option<PreReleaseInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build: Option<BuildInfo>,
}

impl SemanticVersion {
    /// Create a release version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion::from_parts(major, minor, patch, None, None)
    }

    /// Create a version from already validated parts
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<PreReleaseInfo>,
        build: Option<BuildInfo>,
    ) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    /// Parse a complete version string (e.g., "1.0.0-alpha.1+build.5")
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - Parsed version
    /// * `Err(VersionError::Parse)` - If `text` does not match the grammar
    pub fn parse(text: &str) -> Result<Self> {
        grammar::parse_version(text)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&PreReleaseInfo> {
        self.prerelease.as_ref()
    }

    pub fn build(&self) -> Option<&BuildInfo> {
        self.build.as_ref()
    }

    /// True once the public API is declared stable, i.e. major > 0
    pub fn is_stable(&self) -> bool {
        self.major > 0
    }

    /// True if this version has no pre-release identifiers
    pub fn is_release(&self) -> bool {
        self.prerelease.is_none()
    }

    /// Compare precedence, ignoring build metadata
    ///
    /// Returns `Less` if this version is older than `other`, `Equal` if they
    /// have the same precedence, `Greater` if this version is newer.
    pub fn compare_to(&self, other: &SemanticVersion) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| PreReleaseInfo::compare(self.prerelease(), other.prerelease()))
    }

    pub fn has_same_precedence(&self, other: &SemanticVersion) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    /// Derive a new version with `update` applied
    ///
    /// Fields not named by the update keep this version's value. Updates are
    /// independent: incrementing patch leaves the pre-release in place.
    ///
    /// # Example
    /// ```
    /// # use semantic_version::domain::{SemanticVersion, VersionUpdate};
    /// let v = SemanticVersion::parse("1.0.0-alpha.1").unwrap();
    /// let bumped = v.with(VersionUpdate::new().increment_patch()).unwrap();
    /// assert_eq!(bumped.to_string(), "1.0.1-alpha.1");
    /// ```
    pub fn with(&self, update: VersionUpdate) -> Result<SemanticVersion> {
        Ok(SemanticVersion::from_parts(
            update.major.apply(self.major, "major")?,
            update.minor.apply(self.minor, "minor")?,
            update.patch.apply(self.patch, "patch")?,
            update.prerelease.apply(self.prerelease.as_ref()),
            update.build.apply(self.build.as_ref()),
        ))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other).then_with(|| {
            let a = self.build.as_ref().map(BuildInfo::parts);
            let b = other.build.as_ref().map(BuildInfo::parts);
            a.cmp(&b)
        })
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Update applied to a numeric component by [`SemanticVersion::with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentUpdate {
    #[default]
    Keep,
    Set(u64),
    /// Current value + 1
    Increment,
}

impl ComponentUpdate {
    fn apply(self, current: u64, name: &str) -> Result<u64> {
        match self {
            ComponentUpdate::Keep => Ok(current),
            ComponentUpdate::Set(n) => Ok(n),
            ComponentUpdate::Increment => current.checked_add(1).ok_or_else(|| {
                VersionError::validation(format!("Cannot increment {} beyond {}", name, current))
            }),
        }
    }
}

impl From<u64> for ComponentUpdate {
    fn from(n: u64) -> Self {
        ComponentUpdate::Set(n)
    }
}

/// Update applied to pre-release or build metadata by [`SemanticVersion::with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataUpdate<T> {
    Keep,
    Clear,
    Replace(T),
}

impl<T: Clone> MetadataUpdate<T> {
    fn apply(self, current: Option<&T>) -> Option<T> {
        match self {
            MetadataUpdate::Keep => current.cloned(),
            MetadataUpdate::Clear => None,
            MetadataUpdate::Replace(value) => Some(value),
        }
    }
}

impl<T> Default for MetadataUpdate<T> {
    fn default() -> Self {
        MetadataUpdate::Keep
    }
}

/// Set of field updates for [`SemanticVersion::with`]
///
/// The default keeps every field. Build one with struct update syntax or the
/// chained helpers:
///
/// ```
/// # use semantic_version::domain::VersionUpdate;
/// let release = VersionUpdate::new().increment_patch().clear_prerelease();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionUpdate {
    pub major: ComponentUpdate,
    pub minor: ComponentUpdate,
    pub patch: ComponentUpdate,
    pub prerelease: MetadataUpdate<PreReleaseInfo>,
    pub build: MetadataUpdate<BuildInfo>,
}

impl VersionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn major(mut self, update: impl Into<ComponentUpdate>) -> Self {
        self.major = update.into();
        self
    }

    pub fn minor(mut self, update: impl Into<ComponentUpdate>) -> Self {
        self.minor = update.into();
        self
    }

    pub fn patch(mut self, update: impl Into<ComponentUpdate>) -> Self {
        self.patch = update.into();
        self
    }

    pub fn increment_major(self) -> Self {
        self.major(ComponentUpdate::Increment)
    }

    pub fn increment_minor(self) -> Self {
        self.minor(ComponentUpdate::Increment)
    }

    pub fn increment_patch(self) -> Self {
        self.patch(ComponentUpdate::Increment)
    }

    /// Replace the pre-release; `None` clears it
    pub fn prerelease(mut self, prerelease: Option<PreReleaseInfo>) -> Self {
        self.prerelease = match prerelease {
            Some(p) => MetadataUpdate::Replace(p),
            None => MetadataUpdate::Clear,
        };
        self
    }

    /// Replace the build metadata; `None` clears it
    pub fn build(mut self, build: Option<BuildInfo>) -> Self {
        self.build = match build {
            Some(b) => MetadataUpdate::Replace(b),
            None => MetadataUpdate::Clear,
        };
        self
    }

    pub fn clear_prerelease(self) -> Self {
        self.prerelease(None)
    }

    pub fn clear_build(self) -> Self {
        self.build(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_version_parse() {
        let version = v("1.2.3");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(version, SemanticVersion::new(1, 2, 3));
    }

    #[test]
    fn test_version_from_str() {
        let version: SemanticVersion = "0.1.0-rc.1".parse().unwrap();
        assert_eq!(version.to_string(), "0.1.0-rc.1");
    }

    #[test]
    fn test_version_display() {
        assert_eq!(SemanticVersion::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(v("1.0.0-alpha.1+build.1").to_string(), "1.0.0-alpha.1+build.1");
        assert_eq!(v("1.0.0+build.1").to_string(), "1.0.0+build.1");
    }

    #[test]
    fn test_version_is_stable() {
        assert!(v("1.0.0-alpha").is_stable());
        assert!(!v("0.9.9").is_stable());
    }

    #[test]
    fn test_release_beats_prerelease() {
        assert_eq!(v("1.0.1").compare_to(&v("1.0.1-alpha.1")), Ordering::Greater);
        assert_eq!(v("1.0.1-alpha.1").compare_to(&v("1.0.1")), Ordering::Less);
    }

    #[test]
    fn test_numeric_components_decide_first() {
        assert_eq!(v("2.0.0-alpha").compare_to(&v("1.9.9")), Ordering::Greater);
        assert_eq!(v("1.10.0").compare_to(&v("1.9.0")), Ordering::Greater);
        assert_eq!(v("1.0.2").compare_to(&v("1.0.10")), Ordering::Less);
    }

    #[test]
    fn test_compare_ignores_build() {
        let a = v("1.0.0+build.1");
        let b = v("1.0.0+build.2");
        assert_eq!(a.compare_to(&b), Ordering::Equal);
        assert!(a.has_same_precedence(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_ord_breaks_ties_on_build() {
        assert!(v("1.0.0") < v("1.0.0+build"));
        assert!(v("1.0.0+build.1") < v("1.0.0+build.2"));
        assert!(v("1.0.0+zzz") < v("1.0.1"));
    }

    #[test]
    fn test_with_clear_prerelease() {
        let version = v("1.0.0-alpha.1");
        let updated = version.with(VersionUpdate::new().clear_prerelease()).unwrap();
        assert_eq!(updated.to_string(), "1.0.0");
        // Receiver is untouched.
        assert_eq!(version.to_string(), "1.0.0-alpha.1");
    }

    #[test]
    fn test_with_increment_keeps_prerelease() {
        let version = v("1.0.0-alpha.1");
        let updated = version.with(VersionUpdate::new().increment_patch()).unwrap();
        assert_eq!(updated.to_string(), "1.0.1-alpha.1");
    }

    #[test]
    fn test_with_increment_and_clear() {
        let version = v("1.0.0-alpha.1");
        let updated = version
            .with(VersionUpdate {
                patch: ComponentUpdate::Increment,
                prerelease: MetadataUpdate::Clear,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.to_string(), "1.0.1");
    }

    #[test]
    fn test_with_increment_does_not_reset_lower_fields() {
        let updated = v("1.2.3").with(VersionUpdate::new().increment_major()).unwrap();
        assert_eq!(updated, SemanticVersion::new(2, 2, 3));
    }

    #[test]
    fn test_with_set_and_replace() {
        let updated = v("1.2.3+old")
            .with(
                VersionUpdate::new()
                    .minor(7)
                    .patch(0)
                    .prerelease(Some(PreReleaseInfo::parse("rc.2").unwrap()))
                    .build(Some(BuildInfo::parse("new").unwrap())),
            )
            .unwrap();
        assert_eq!(updated.to_string(), "1.7.0-rc.2+new");
    }

    #[test]
    fn test_with_default_is_identity() {
        let version = v("3.1.4-beta.5+exp.sha");
        assert_eq!(version.with(VersionUpdate::default()).unwrap(), version);
    }

    #[test]
    fn test_with_increment_overflow() {
        let version = SemanticVersion::new(u64::MAX, 0, 0);
        assert!(matches!(
            version.with(VersionUpdate::new().increment_major()),
            Err(VersionError::Validation(_))
        ));
    }

    #[test]
    fn test_serialize_record() {
        let json = serde_json::to_value(v("1.0.0")).unwrap();
        assert_eq!(json, serde_json::json!({"major": 1, "minor": 0, "patch": 0}));

        let json = serde_json::to_value(v("1.0.0-alpha.1+build.1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "major": 1,
                "minor": 0,
                "patch": 0,
                "prerelease": ["alpha", 1],
                "build": ["build", "1"],
            })
        );
    }

    #[test]
    fn test_deserialize_record() {
        let version: SemanticVersion =
            serde_json::from_str(r#"{"major":2,"minor":1,"patch":0,"prerelease":["rc",3]}"#)
                .unwrap();
        assert_eq!(version, v("2.1.0-rc.3"));
    }

    #[test]
    fn test_deserialize_rejects_invalid_record() {
        assert!(serde_json::from_str::<SemanticVersion>(r#"{"major":-1,"minor":0,"patch":0}"#)
            .is_err());
        assert!(serde_json::from_str::<SemanticVersion>(
            r#"{"major":1,"minor":0,"patch":0,"prerelease":["1"]}"#
        )
        .is_err());
        assert!(serde_json::from_str::<SemanticVersion>(r#"{"major":1.5,"minor":0,"patch":0}"#)
            .is_err());
    }
}
