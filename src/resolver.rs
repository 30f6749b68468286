use crate::domain::VersionPattern;
use semver::Version;
use std::collections::BTreeSet;

/// Find the most recent known version relevant to a pattern.
///
/// A wildcard pattern selects the maximum among versions whose fixed
/// (non-wildcard) segments match it exactly. An exact pattern selects the
/// immediate predecessor of the version it pins: the maximum version
/// strictly below it by full semantic-version precedence.
///
/// `None` is a valid outcome, e.g. the first release under a new major line.
pub fn find_previous_version(
    versions: &BTreeSet<Version>,
    pattern: &VersionPattern,
) -> Option<Version> {
    match pattern {
        VersionPattern::Exact(requested) => versions
            .iter()
            .rev()
            .find(|version| *version < requested)
            .cloned(),
        VersionPattern::Wildcard { .. } => versions
            .iter()
            .rev()
            .find(|version| pattern.matches_fixed_prefix(version))
            .cloned(),
    }
}
