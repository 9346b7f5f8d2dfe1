//! Release planning
//!
//! Computes what a release pipeline should do for a given version: which
//! registry dist-tag to publish under, which git tag to create, and which
//! branches and pull request carry a pre-release over to its release. Nothing
//! here touches git, the network or the filesystem.

use crate::config::Config;
use crate::domain::{SemanticVersion, TagPattern, VersionUpdate};
use crate::error::{Result, VersionError};
use serde::Serialize;

/// Registry dist-tag for a version: its first pre-release identifier
///
/// Release versions have no dist-tag and publish on the registry default.
pub fn dist_tag(version: &SemanticVersion) -> Option<String> {
    version.prerelease().map(|p| p.first().to_string())
}

/// Decisions for publishing a version as-is
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishPlan {
    pub version: SemanticVersion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_tag: Option<String>,
    pub git_tag: String,
}

impl PublishPlan {
    pub fn new(version: &SemanticVersion, config: &Config) -> Result<Self> {
        let tag_pattern = config.tags.tag_pattern()?;

        Ok(PublishPlan {
            version: version.clone(),
            dist_tag: dist_tag(version),
            git_tag: tag_pattern.format(version),
        })
    }
}

/// Decisions for promoting a pre-release to its release version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleasePlan {
    pub prerelease_version: SemanticVersion,
    pub release_version: SemanticVersion,
    /// Branch recording that the pre-release is pending release
    pub pending_branch: String,
    /// Branch the release pull request targets
    pub target_branch: String,
    pub pull_request_title: String,
}

impl ReleasePlan {
    /// Plan the release of a pre-release version
    ///
    /// The release version drops both pre-release and build metadata.
    ///
    /// # Returns
    /// * `Ok(ReleasePlan)` - Planned branches and title
    /// * `Err(VersionError::Release)` - If `version` is not a pre-release
    pub fn new(version: &SemanticVersion, config: &Config) -> Result<Self> {
        if version.is_release() {
            return Err(VersionError::release(format!(
                "Cannot release \"{}\" directly! Use a prerelease version first!",
                version
            )));
        }

        let release_version = version.with(VersionUpdate::new().clear_prerelease().clear_build())?;

        let pending = TagPattern::new(config.release.pending_branch_pattern.as_str())?;
        let target = TagPattern::new(config.release.release_branch_pattern.as_str())?;

        Ok(ReleasePlan {
            pending_branch: pending.format(version),
            target_branch: target.format(&release_version),
            pull_request_title: format!("Release {} as {}", version, release_version),
            prerelease_version: version.clone(),
            release_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_dist_tag() {
        assert_eq!(dist_tag(&v("1.0.0-beta.2")), Some("beta".to_string()));
        assert_eq!(dist_tag(&v("1.0.0-3.next")), Some("3".to_string()));
        assert_eq!(dist_tag(&v("1.0.0+build")), None);
    }

    #[test]
    fn test_publish_plan_prerelease() {
        let plan = PublishPlan::new(&v("2.1.0-next.4"), &Config::default()).unwrap();
        assert_eq!(plan.dist_tag.as_deref(), Some("next"));
        assert_eq!(plan.git_tag, "v2.1.0-next.4");
    }

    #[test]
    fn test_publish_plan_release() {
        let plan = PublishPlan::new(&v("2.1.0"), &Config::default()).unwrap();
        assert_eq!(plan.dist_tag, None);
        assert_eq!(plan.git_tag, "v2.1.0");
    }

    #[test]
    fn test_release_plan() {
        let plan = ReleasePlan::new(&v("1.4.0-rc.1+ci.7"), &Config::default()).unwrap();
        assert_eq!(plan.release_version, v("1.4.0"));
        assert_eq!(plan.pending_branch, "pending-releases/v1.4.0-rc.1+ci.7");
        assert_eq!(plan.target_branch, "releases/v1.4.0");
        assert_eq!(plan.pull_request_title, "Release 1.4.0-rc.1+ci.7 as 1.4.0");
    }

    #[test]
    fn test_release_plan_rejects_release_version() {
        let err = ReleasePlan::new(&v("1.4.0"), &Config::default()).unwrap_err();
        assert!(matches!(err, VersionError::Release(_)));
        assert!(err.to_string().contains("Cannot release"));
    }

    #[test]
    fn test_release_plan_invalid_branch_pattern() {
        let mut config = Config::default();
        config.release.release_branch_pattern = "releases/latest".to_string();
        assert!(matches!(
            ReleasePlan::new(&v("1.4.0-rc.1"), &config),
            Err(VersionError::Tag(_))
        ));
    }
}
