use crate::error::{AutoverError, Result};
use semver::Version;
use std::fmt;

/// Requested-version pattern from a spec file.
///
/// A pattern is either a fully concrete version ("2.0.0", "1.2.3-rc.1") or a
/// version prefix with trailing wildcard segments ("1.2.*", "1.*", "*").
/// Wildcard segments are contiguous and trail the pattern; a concrete segment
/// never follows a wildcard segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionPattern {
    /// Fully concrete version, honored verbatim.
    Exact(Version),
    /// Leading fixed numeric segments followed by trailing wildcard segments.
    Wildcard { fixed: Vec<u64>, wildcards: usize },
}

impl VersionPattern {
    /// Parse a pattern string.
    ///
    /// Without a wildcard token the text must be a full semantic version
    /// (pre-release and build metadata allowed). With one, each `.`-separated
    /// segment is either a non-negative integer or `*`, at most three
    /// segments total.
    ///
    /// # Example
    /// ```
    /// # use autover::domain::VersionPattern;
    /// let pattern = VersionPattern::parse("1.2.*").unwrap();
    /// assert!(!pattern.is_exact());
    /// assert!(VersionPattern::parse("1.*.2").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if !text.contains('*') {
            let version = Version::parse(text).map_err(|e| {
                AutoverError::spec(format!("'{}' is not a valid version: {}", text, e))
            })?;
            return Ok(VersionPattern::Exact(version));
        }

        let segments: Vec<&str> = text.split('.').collect();
        if segments.len() > 3 {
            return Err(AutoverError::spec(format!(
                "'{}' has more than three segments",
                text
            )));
        }

        let mut fixed = Vec::new();
        let mut wildcards = 0usize;
        for segment in segments {
            if segment == "*" {
                wildcards += 1;
            } else if wildcards > 0 {
                return Err(AutoverError::spec(format!(
                    "'{}' has a concrete segment after a wildcard",
                    text
                )));
            } else {
                let value = segment.parse::<u64>().map_err(|_| {
                    AutoverError::spec(format!(
                        "segment '{}' in '{}' is not a non-negative integer",
                        segment, text
                    ))
                })?;
                fixed.push(value);
            }
        }

        Ok(VersionPattern::Wildcard { fixed, wildcards })
    }

    /// Whether this pattern pins a single concrete version.
    pub fn is_exact(&self) -> bool {
        matches!(self, VersionPattern::Exact(_))
    }

    /// Check whether a version agrees with this pattern's fixed numeric
    /// segments. Wildcard positions are unconstrained; pre-release and build
    /// metadata are not compared.
    pub fn matches_fixed_prefix(&self, version: &Version) -> bool {
        match self {
            VersionPattern::Exact(exact) => {
                version.major == exact.major
                    && version.minor == exact.minor
                    && version.patch == exact.patch
            }
            VersionPattern::Wildcard { fixed, .. } => fixed
                .iter()
                .enumerate()
                .all(|(index, segment)| numeric_segment(version, index) == *segment),
        }
    }

    /// Index of the first wildcard position (0 = major), if any.
    pub fn first_wildcard_index(&self) -> Option<usize> {
        match self {
            VersionPattern::Exact(_) => None,
            VersionPattern::Wildcard { fixed, .. } => Some(fixed.len()),
        }
    }
}

impl fmt::Display for VersionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPattern::Exact(version) => write!(f, "{}", version),
            VersionPattern::Wildcard { fixed, wildcards } => {
                let mut parts: Vec<String> = fixed.iter().map(u64::to_string).collect();
                parts.extend(std::iter::repeat("*".to_string()).take(*wildcards));
                write!(f, "{}", parts.join("."))
            }
        }
    }
}

/// Numeric segment of a version by position: 0 = major, 1 = minor, 2 = patch.
pub(crate) fn numeric_segment(version: &Version, index: usize) -> u64 {
    match index {
        0 => version.major,
        1 => version.minor,
        _ => version.patch,
    }
}
