//! SemVer 2.0.0 grammar
//!
//! The patterns follow https://semver.org/spec/v2.0.0.html with ASCII digit
//! classes. They are compiled once on first use and never change afterwards.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::domain::{BuildInfo, Identifier, PreReleaseInfo, SemanticVersion};
use crate::error::{Result, VersionError};

/// Unanchored version grammar, usable inside larger patterns.
///
/// Capture groups: `major`, `minor`, `patch`, `prerelease`, `build`.
/// The alphanumeric alternative comes first so that an identifier such as
/// `1abc` is taken whole instead of stopping after the leading digit.
pub const SEMANTIC_VERSION_PATTERN: &str = concat!(
    r"(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>(?:[0-9A-Za-z-]*[A-Za-z-][0-9A-Za-z-]*|0|[1-9][0-9]*)",
    r"(?:\.(?:[0-9A-Za-z-]*[A-Za-z-][0-9A-Za-z-]*|0|[1-9][0-9]*))*))?",
    r"(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?"
);

lazy_static! {
    static ref SEMANTIC_VERSION_RE: Regex =
        Regex::new(&format!("^{}$", SEMANTIC_VERSION_PATTERN)).expect("Invalid version grammar");
    static ref EMBEDDED_VERSION_RE: Regex =
        Regex::new(SEMANTIC_VERSION_PATTERN).expect("Invalid version grammar");
    pub(crate) static ref NUMERIC_IDENTIFIER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*)$").expect("Invalid identifier grammar");
    pub(crate) static ref ALPHANUMERIC_IDENTIFIER_RE: Regex =
        Regex::new(r"^[0-9A-Za-z-]*[A-Za-z-][0-9A-Za-z-]*$").expect("Invalid identifier grammar");
    pub(crate) static ref BUILD_IDENTIFIER_RE: Regex =
        Regex::new(r"^[0-9A-Za-z-]+$").expect("Invalid identifier grammar");
}

/// Parses `text` as a complete semantic version.
///
/// The whole string must match; surrounding whitespace or a `v` prefix is
/// rejected. Any failure is reported as [`VersionError::Parse`] naming `text`.
pub fn parse_version(text: &str) -> Result<SemanticVersion> {
    let captures = SEMANTIC_VERSION_RE
        .captures(text)
        .ok_or_else(|| VersionError::parse(text))?;

    from_captures(&captures).map_err(|_| VersionError::parse(text))
}

/// Iterates over every version embedded in `text`, left to right.
///
/// Candidates whose numbers do not fit the component type are skipped.
pub fn find_versions(text: &str) -> impl Iterator<Item = SemanticVersion> + '_ {
    EMBEDDED_VERSION_RE
        .captures_iter(text)
        .filter_map(|captures| from_captures(&captures).ok())
}

/// Builds a version from the capture groups of [`SEMANTIC_VERSION_PATTERN`].
pub(crate) fn from_captures(captures: &Captures<'_>) -> Result<SemanticVersion> {
    let major = component(captures, "major")?;
    let minor = component(captures, "minor")?;
    let patch = component(captures, "patch")?;

    let prerelease = match captures.name("prerelease") {
        Some(m) => {
            let identifiers = m
                .as_str()
                .split('.')
                .map(Identifier::parse)
                .collect::<Result<Vec<_>>>()?;
            Some(PreReleaseInfo::new(identifiers)?)
        }
        None => None,
    };

    let build = match captures.name("build") {
        Some(m) => Some(BuildInfo::new(
            m.as_str().split('.').map(str::to_string).collect(),
        )?),
        None => None,
    };

    Ok(SemanticVersion::from_parts(major, minor, patch, prerelease, build))
}

fn component(captures: &Captures<'_>, name: &str) -> Result<u64> {
    let text = captures
        .name(name)
        .map(|m| m.as_str())
        .ok_or_else(|| VersionError::validation(format!("missing {} component", name)))?;

    text.parse::<u64>().map_err(|_| {
        VersionError::validation(format!("\"{}\" is not valid for {}", text, name))
    })
}
