//! Version spec file parsing.
//!
//! The spec file is a small key=value text file (conventionally
//! `version.properties`) with two recognized keys:
//!
//! - `version` - the requested version pattern, e.g. `1.2.*` or `2.0.0`.
//!   Absent means "no explicit request": the next version is derived from
//!   the version the build already declares.
//! - `tagPrefix` - prefix shared by the release tags, e.g. `v`. Defaults to
//!   the empty string.

use crate::domain::VersionPattern;
use crate::error::Result;

const VERSION_KEY: &str = "version";
const TAG_PREFIX_KEY: &str = "tagPrefix";

/// Raw key/value content of a spec file, before pattern interpretation.
///
/// Extraction never fails. The literal `version` value is kept verbatim so
/// the orchestrator's fallback can reuse it even when it fails to parse as a
/// pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSpec {
    pub version: Option<String>,
    pub tag_prefix: String,
}

impl RawSpec {
    /// Extract recognized keys from key=value lines.
    ///
    /// Blank lines and `#` comment lines are skipped; lines without `=` and
    /// unknown keys are ignored; whitespace around keys and values is
    /// trimmed. An empty `version` value counts as absent.
    pub fn parse(content: &str) -> Self {
        let mut raw = RawSpec::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                VERSION_KEY if !value.is_empty() => raw.version = Some(value.to_string()),
                TAG_PREFIX_KEY => raw.tag_prefix = value.to_string(),
                _ => {}
            }
        }

        raw
    }
}

/// Requested version: an explicit pattern from the spec file, or derived
/// from the version the build already declares.
///
/// Modeled as a tagged variant rather than an optional pattern so the two
/// computation paths downstream stay exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedVersion {
    Explicit(VersionPattern),
    Derived,
}

/// Interpreted version spec: the requested version plus the tag prefix all
/// tag queries are scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub requested: RequestedVersion,
    pub tag_prefix: String,
}

impl VersionSpec {
    /// Parse spec file content in one step.
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_raw(&RawSpec::parse(content))
    }

    /// Interpret an already-extracted [RawSpec].
    ///
    /// Fails with a malformed-spec error when the `version` value violates
    /// the pattern grammar.
    pub fn from_raw(raw: &RawSpec) -> Result<Self> {
        let requested = match &raw.version {
            Some(text) => RequestedVersion::Explicit(VersionPattern::parse(text)?),
            None => RequestedVersion::Derived,
        };

        Ok(VersionSpec {
            requested,
            tag_prefix: raw.tag_prefix.clone(),
        })
    }
}
