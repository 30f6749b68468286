use semver::Version;
use serde::Serialize;
use std::fmt;

/// Result of one version deduction.
///
/// This is the sole externally observable output of the engine: the version
/// string to build with, the most recent released version relevant to it (if
/// any), and the tag prefix both were resolved under. The diagnostics list
/// explains how the result was reached; callers decide whether to surface it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeductedVersion {
    pub next_version: String,
    pub previous_version: Option<Version>,
    pub tag_prefix: String,
    pub diagnostics: Vec<String>,
}

impl fmt::Display for DeductedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.previous_version {
            Some(previous) => write!(f, "{} (previous: {})", self.next_version, previous),
            None => write!(f, "{} (no previous version)", self.next_version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_previous() {
        let deducted = DeductedVersion {
            next_version: "1.2.4".to_string(),
            previous_version: Some(Version::new(1, 2, 3)),
            tag_prefix: "v".to_string(),
            diagnostics: vec![],
        };
        assert_eq!(deducted.to_string(), "1.2.4 (previous: 1.2.3)");
    }

    #[test]
    fn test_display_without_previous() {
        let deducted = DeductedVersion {
            next_version: "1.0.0".to_string(),
            previous_version: None,
            tag_prefix: String::new(),
            diagnostics: vec![],
        };
        assert_eq!(deducted.to_string(), "1.0.0 (no previous version)");
    }

    #[test]
    fn test_serializes_to_json() {
        let deducted = DeductedVersion {
            next_version: "1.2.4".to_string(),
            previous_version: Some(Version::new(1, 2, 3)),
            tag_prefix: "v".to_string(),
            diagnostics: vec!["previous version: 1.2.3".to_string()],
        };
        let json = serde_json::to_string(&deducted).unwrap();
        assert!(json.contains("\"next_version\":\"1.2.4\""));
        assert!(json.contains("\"previous_version\":\"1.2.3\""));
        assert!(json.contains("\"tag_prefix\":\"v\""));
    }
}
