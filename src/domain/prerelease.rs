//! Pre-release identifiers for semantic versioning
//!
//! A pre-release is the dot-separated sequence after `-` in `1.0.0-alpha.1`.
//! Precedence follows https://semver.org/#spec-item-11.

use crate::error::{Result, VersionError};
use crate::grammar::{ALPHANUMERIC_IDENTIFIER_RE, NUMERIC_IDENTIFIER_RE};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single pre-release identifier
///
/// Purely numeric identifiers are always [`Identifier::Numeric`] so that they
/// compare numerically. Serialized as a bare number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric identifier, e.g. the `1` in `alpha.1`
    Numeric(u64),
    /// Identifier with at least one non-digit, e.g. `alpha` or `0a`
    AlphaNumeric(String),
}

impl Identifier {
    /// Classify a textual identifier by its shape.
    ///
    /// `0` and digits without a leading zero become [`Identifier::Numeric`];
    /// anything containing a letter or hyphen becomes
    /// [`Identifier::AlphaNumeric`]. Empty text, leading zeros and characters
    /// outside `[0-9A-Za-z-]` are rejected.
    pub fn parse(s: &str) -> Result<Self> {
        if NUMERIC_IDENTIFIER_RE.is_match(s) {
            let n = s.parse::<u64>().map_err(|_| {
                VersionError::validation(format!("Numeric identifier '{}' is too large", s))
            })?;
            return Ok(Identifier::Numeric(n));
        }

        Identifier::alphanumeric(s)
    }

    /// Create an alphanumeric identifier, rejecting all-digit text
    pub fn alphanumeric(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if !ALPHANUMERIC_IDENTIFIER_RE.is_match(&s) {
            return Err(VersionError::validation(format!(
                "Invalid pre-release identifier: '{}'",
                s
            )));
        }
        Ok(Identifier::AlphaNumeric(s))
    }

    /// Returns true for numeric identifiers
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    fn validate(&self) -> Result<()> {
        match self {
            Identifier::Numeric(_) => Ok(()),
            Identifier::AlphaNumeric(s) if ALPHANUMERIC_IDENTIFIER_RE.is_match(s) => Ok(()),
            Identifier::AlphaNumeric(s) => Err(VersionError::validation(format!(
                "Non-number pre-release identifiers must have at least one non-digit: '{}'",
                s
            ))),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            // String ordering is byte-wise, which is ASCII order here.
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

impl FromStr for Identifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Identifier::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Non-empty, ordered sequence of pre-release identifiers
///
/// # Examples
/// - "alpha" -> [AlphaNumeric("alpha")]
/// - "beta.1" -> [AlphaNumeric("beta"), Numeric(1)]
/// - "rc.1.0a" -> [AlphaNumeric("rc"), Numeric(1), AlphaNumeric("0a")]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Identifier>", into = "Vec<Identifier>")]
pub struct PreReleaseInfo {
    parts: Vec<Identifier>,
}

impl PreReleaseInfo {
    /// Create a pre-release from already classified identifiers
    ///
    /// # Returns
    /// * `Ok(PreReleaseInfo)` - Validated pre-release
    /// * `Err` - If `parts` is empty or an alphanumeric identifier is all digits
    pub fn new(parts: Vec<Identifier>) -> Result<Self> {
        if parts.is_empty() {
            return Err(VersionError::validation(
                "Pre-release must have at least one identifier",
            ));
        }

        for part in &parts {
            part.validate()?;
        }

        Ok(PreReleaseInfo { parts })
    }

    /// Parse a dot-separated pre-release such as "beta.1"
    ///
    /// # Examples
    /// ```
    /// # use semantic_version::domain::{Identifier, PreReleaseInfo};
    /// let pr = PreReleaseInfo::parse("beta.1").unwrap();
    /// assert_eq!(pr.parts()[1], Identifier::Numeric(1));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let parts = s
            .split('.')
            .map(Identifier::parse)
            .collect::<Result<Vec<_>>>()?;
        PreReleaseInfo::new(parts)
    }

    /// The identifiers in order
    pub fn parts(&self) -> &[Identifier] {
        &self.parts
    }

    /// The leading identifier, used as a registry dist-tag
    pub fn first(&self) -> &Identifier {
        // Non-empty by construction.
        &self.parts[0]
    }

    /// Compare optional pre-releases of two versions with equal major.minor.patch
    ///
    /// A missing pre-release (a release) ranks above any pre-release.
    pub fn compare(a: Option<&PreReleaseInfo>, b: Option<&PreReleaseInfo>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.compare_to(b),
        }
    }

    /// Positional precedence comparison
    ///
    /// The first differing identifier decides; if one sequence is a prefix of
    /// the other, the shorter one is lower.
    pub fn compare_to(&self, other: &PreReleaseInfo) -> Ordering {
        for (a, b) in self.parts.iter().zip(other.parts.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        self.parts.len().cmp(&other.parts.len())
    }

    pub fn is_newer(&self, other: &PreReleaseInfo) -> bool {
        self.compare_to(other) == Ordering::Greater
    }

    pub fn is_older(&self, other: &PreReleaseInfo) -> bool {
        self.compare_to(other) == Ordering::Less
    }
}

impl Ord for PreReleaseInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl PartialOrd for PreReleaseInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<Vec<Identifier>> for PreReleaseInfo {
    type Error = VersionError;

    fn try_from(parts: Vec<Identifier>) -> Result<Self> {
        PreReleaseInfo::new(parts)
    }
}

impl From<PreReleaseInfo> for Vec<Identifier> {
    fn from(info: PreReleaseInfo) -> Self {
        info.parts
    }
}

impl FromStr for PreReleaseInfo {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        PreReleaseInfo::parse(s)
    }
}

impl fmt::Display for PreReleaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
