use crate::collector::collect_versions;
use crate::domain::{DeductedVersion, VersionPattern};
use crate::error::Result;
use crate::git::{Git2TagSource, TagSource};
use crate::picker::pick_next_version;
use crate::resolver::find_previous_version;
use crate::spec::{RawSpec, RequestedVersion, VersionSpec};
use semver::Version;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Version used when deduction fails and the spec requested nothing.
pub const FALLBACK_VERSION: &str = "0.0.1-SNAPSHOT";

/// Literal substituted for wildcard tokens in a fallback version.
pub const UNSPECIFIED: &str = "unspecified";

/// Spec file conventionally read from the project directory.
pub const SPEC_FILE_NAME: &str = "version.properties";

/// Orchestrates one version deduction over a tag source.
///
/// Holds the spec file content and the tag source; every call to
/// [deduce_version](VersionDeducer::deduce_version) reads the source fresh
/// and produces an independent result.
pub struct VersionDeducer<S: TagSource> {
    source: S,
    spec_content: String,
}

impl<S: TagSource> VersionDeducer<S> {
    pub fn new(source: S, spec_content: impl Into<String>) -> Self {
        VersionDeducer {
            source,
            spec_content: spec_content.into(),
        }
    }

    /// Deduce the next version from existing tags and the version spec.
    ///
    /// `current_build_version` is the version the calling build declares
    /// before deduction; it is used verbatim when the spec has no `version`
    /// key. Never fails: any error along the pipeline degrades to a
    /// best-effort default result, so a mis-configured spec or an offline
    /// tag source lowers the quality of the version instead of aborting the
    /// calling build.
    pub fn deduce_version(&self, current_build_version: &str) -> DeductedVersion {
        let raw = RawSpec::parse(&self.spec_content);
        let mut previous = None;
        let mut diagnostics = Vec::new();

        match self.try_deduce(&raw, current_build_version, &mut previous, &mut diagnostics) {
            Ok(deducted) => deducted,
            Err(err) => {
                debug!(error = %err, "version deduction failed, falling back to a reasonable default");
                let next_version = match &raw.version {
                    Some(requested) => requested.replace('*', UNSPECIFIED),
                    None => FALLBACK_VERSION.to_string(),
                };
                diagnostics.push(format!(
                    "deduction failed ({}); using fallback version '{}'",
                    err, next_version
                ));
                DeductedVersion {
                    next_version,
                    // Whatever was resolved before the failure; never
                    // re-derived on the fallback path.
                    previous_version: previous,
                    tag_prefix: raw.tag_prefix,
                    diagnostics,
                }
            }
        }
    }

    fn try_deduce(
        &self,
        raw: &RawSpec,
        current_build_version: &str,
        previous: &mut Option<Version>,
        diagnostics: &mut Vec<String>,
    ) -> Result<DeductedVersion> {
        let spec = VersionSpec::from_raw(raw)?;
        let versions = collect_versions(&self.source, &spec.tag_prefix)?;

        if let RequestedVersion::Explicit(pattern) = &spec.requested {
            *previous = find_previous_version(&versions, pattern);
        }

        let picked = pick_next_version(previous.as_ref(), &spec, current_build_version);
        diagnostics.push(picked.explanation);

        // Without a requested pattern the previous version is only
        // meaningful relative to the version just picked, so it resolves
        // afterwards, against that version pinned exactly.
        if matches!(spec.requested, RequestedVersion::Derived) {
            if let Ok(next) = Version::parse(&picked.version) {
                *previous = find_previous_version(&versions, &VersionPattern::Exact(next));
            }
        }

        diagnostics.push(match previous.as_ref() {
            Some(version) => format!("previous version: {}", version),
            None => "no previous version".to_string(),
        });

        Ok(DeductedVersion {
            next_version: picked.version,
            previous_version: previous.clone(),
            tag_prefix: spec.tag_prefix,
            diagnostics: std::mem::take(diagnostics),
        })
    }
}

impl VersionDeducer<Git2TagSource> {
    /// Open the git repository at `project_dir` and read its
    /// `version.properties`.
    ///
    /// A missing spec file behaves as an empty one: the deduced version is
    /// then the version the build declares.
    pub fn from_dir<P: AsRef<Path>>(project_dir: P) -> Result<Self> {
        let dir = project_dir.as_ref();
        let source = Git2TagSource::open(dir)?;

        let spec_path = dir.join(SPEC_FILE_NAME);
        let spec_content = if spec_path.exists() {
            fs::read_to_string(&spec_path)?
        } else {
            debug!(path = %spec_path.display(), "no spec file, deriving from the build version only");
            String::new()
        };

        Ok(VersionDeducer::new(source, spec_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockTagSource;

    #[test]
    fn test_deduces_next_patch_from_tags() {
        let source = MockTagSource::with_tags(["v1.2.0", "v1.2.3", "v1.3.0"]);
        let deducer = VersionDeducer::new(source, "version=1.2.*\ntagPrefix=v\n");

        let deducted = deducer.deduce_version("unspecified");
        assert_eq!(deducted.next_version, "1.2.4");
        assert_eq!(deducted.previous_version, Some(Version::new(1, 2, 3)));
        assert_eq!(deducted.tag_prefix, "v");
    }

    #[test]
    fn test_first_release_in_line() {
        let source = MockTagSource::with_tags(["v1.2.3"]);
        let deducer = VersionDeducer::new(source, "version=2.0.*\ntagPrefix=v\n");

        let deducted = deducer.deduce_version("unspecified");
        assert_eq!(deducted.next_version, "2.0.0");
        assert_eq!(deducted.previous_version, None);
    }

    #[test]
    fn test_derived_mode_resolves_previous_after_picking() {
        let source = MockTagSource::with_tags(["v3.3.0", "v3.4.0"]);
        let deducer = VersionDeducer::new(source, "tagPrefix=v\n");

        let deducted = deducer.deduce_version("3.4.0-SNAPSHOT");
        assert_eq!(deducted.next_version, "3.4.0-SNAPSHOT");
        // 3.4.0 ranks above 3.4.0-SNAPSHOT, so the predecessor is 3.3.0.
        assert_eq!(deducted.previous_version, Some(Version::new(3, 3, 0)));
    }

    #[test]
    fn test_derived_mode_with_unparsable_build_version() {
        let source = MockTagSource::with_tags(["v1.0.0"]);
        let deducer = VersionDeducer::new(source, "tagPrefix=v\n");

        let deducted = deducer.deduce_version("unspecified");
        assert_eq!(deducted.next_version, "unspecified");
        assert_eq!(deducted.previous_version, None);
    }

    #[test]
    fn test_fallback_replaces_wildcard_with_unspecified() {
        let source = MockTagSource::failing("git tag exited with status 128");
        let deducer = VersionDeducer::new(source, "version=2.*\n");

        let deducted = deducer.deduce_version("unspecified");
        assert_eq!(deducted.next_version, "2.unspecified");
        assert_eq!(deducted.previous_version, None);
        assert!(deducted
            .diagnostics
            .iter()
            .any(|line| line.contains("fallback")));
    }

    #[test]
    fn test_fallback_without_requested_version() {
        let source = MockTagSource::failing("boom");
        let deducer = VersionDeducer::new(source, "tagPrefix=v\n");

        let deducted = deducer.deduce_version("unspecified");
        assert_eq!(deducted.next_version, FALLBACK_VERSION);
        assert_eq!(deducted.tag_prefix, "v");
    }

    #[test]
    fn test_fallback_on_malformed_spec() {
        let source = MockTagSource::with_tags(["v1.0.0"]);
        let deducer = VersionDeducer::new(source, "version=1.*.2\n");

        let deducted = deducer.deduce_version("unspecified");
        assert_eq!(deducted.next_version, "1.unspecified.2");
    }

    #[test]
    fn test_exact_request_reports_predecessor() {
        let source = MockTagSource::with_tags(["v1.9.3", "v1.8.0"]);
        let deducer = VersionDeducer::new(source, "version=2.0.0\ntagPrefix=v\n");

        let deducted = deducer.deduce_version("unspecified");
        assert_eq!(deducted.next_version, "2.0.0");
        assert_eq!(deducted.previous_version, Some(Version::new(1, 9, 3)));
    }
}
