use crate::error::Result;
use crate::git::TagSource;
use semver::Version;
use std::collections::BTreeSet;
use tracing::trace;

/// Collect the semantic versions present in the tag history.
///
/// Asks the source once for the tag names sharing `tag_prefix`, strips the
/// prefix, and parses each remainder as a semantic version. Tags that do not
/// parse are expected (unrelated or hand-made tags) and are skipped without
/// error. Two tags parsing to the same version collapse into one value.
///
/// An empty result means no release exists yet and is valid.
pub fn collect_versions<S: TagSource>(source: &S, tag_prefix: &str) -> Result<BTreeSet<Version>> {
    let names = source.list_tag_names(tag_prefix)?;

    let mut versions = BTreeSet::new();
    for name in names {
        let Some(remainder) = name.strip_prefix(tag_prefix) else {
            continue;
        };
        match Version::parse(remainder) {
            Ok(version) => {
                versions.insert(version);
            }
            Err(_) => trace!(tag = %name, "skipping tag that does not parse as a version"),
        }
    }

    Ok(versions)
}
