use crate::domain::pattern::{numeric_segment, VersionPattern};
use crate::spec::{RequestedVersion, VersionSpec};
use semver::Version;
use tracing::debug;

/// Next version plus a one-line explanation of how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedNext {
    pub version: String,
    pub explanation: String,
}

/// Compute the concrete next version for a spec.
///
/// - An exact requested pattern is honored verbatim, regardless of previous
///   version or tags present.
/// - A wildcard pattern keeps its fixed segments; the first wildcard
///   position becomes one greater than the previous version's segment when
///   a previous version with a matching fixed prefix exists, `0` otherwise;
///   every later position becomes `0`.
/// - With no requested pattern at all, the version the build already
///   declares passes through unmodified.
pub fn pick_next_version(
    previous: Option<&Version>,
    spec: &VersionSpec,
    current_build_version: &str,
) -> PickedNext {
    let picked = match &spec.requested {
        RequestedVersion::Derived => PickedNext {
            version: current_build_version.to_string(),
            explanation: format!(
                "using version '{}' declared by the build (spec has no 'version' key)",
                current_build_version
            ),
        },
        RequestedVersion::Explicit(pattern) => match pattern {
            VersionPattern::Exact(_) => PickedNext {
                version: pattern.to_string(),
                explanation: format!("spec requests exact version '{}'", pattern),
            },
            VersionPattern::Wildcard { fixed, .. } => {
                let matching_previous =
                    previous.filter(|version| pattern.matches_fixed_prefix(version));

                let mut parts = [0u64; 3];
                for (index, segment) in fixed.iter().enumerate() {
                    parts[index] = *segment;
                }
                if let Some(previous) = matching_previous {
                    let index = fixed.len();
                    parts[index] = numeric_segment(previous, index) + 1;
                }
                let next = Version::new(parts[0], parts[1], parts[2]);

                let explanation = match matching_previous {
                    Some(previous) => format!(
                        "incremented wildcard of '{}' over previous version {}",
                        pattern, previous
                    ),
                    None => format!("first version matching '{}'", pattern),
                };
                PickedNext {
                    version: next.to_string(),
                    explanation,
                }
            }
        },
    };

    debug!(version = %picked.version, "{}", picked.explanation);
    picked
}
