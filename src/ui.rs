//! Pure formatting functions for CLI output.
//!
//! Everything here only prints; deduction results are computed elsewhere.
//! Human-readable output goes to stdout, errors and diagnostics to stderr.

use crate::domain::DeductedVersion;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Print a deduction result: next version highlighted, context below it.
pub fn display_deducted(deducted: &DeductedVersion) {
    println!(
        "\x1b[1mDeduced version:\x1b[0m \x1b[32m{}\x1b[0m",
        deducted.next_version
    );

    match &deducted.previous_version {
        Some(previous) => println!(
            "  Previous release: \x1b[36m{}{}\x1b[0m",
            deducted.tag_prefix, previous
        ),
        None => println!("  Previous release: none"),
    }

    if !deducted.tag_prefix.is_empty() {
        println!("  Tag prefix: {}", deducted.tag_prefix);
    }
}

/// Print the diagnostics trail, one dimmed line each.
pub fn display_diagnostics(diagnostics: &[String]) {
    for line in diagnostics {
        eprintln!("\x1b[2m  - {}\x1b[0m", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_deducted_with_previous() {
        display_deducted(&DeductedVersion {
            next_version: "1.2.4".to_string(),
            previous_version: Some(Version::new(1, 2, 3)),
            tag_prefix: "v".to_string(),
            diagnostics: vec![],
        });
    }

    #[test]
    fn test_display_deducted_without_previous() {
        display_deducted(&DeductedVersion {
            next_version: "1.0.0".to_string(),
            previous_version: None,
            tag_prefix: String::new(),
            diagnostics: vec![],
        });
    }

    #[test]
    fn test_display_diagnostics() {
        display_diagnostics(&[
            "first version matching '1.0.*'".to_string(),
            "no previous version".to_string(),
        ]);
    }
}
