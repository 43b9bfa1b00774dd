//! Text output formatter for human-readable display
//!
//! One line per update with a colored change-class label, plus a summary
//! line.

use crate::domain::PackageUpdate;
use crate::output::OutputFormatter;
use colored::Colorize;
use semver::Version;
use std::io::{self, Write};

/// Semantic version change class between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeClass {
    Major,
    Minor,
    Patch,
    Unknown,
}

impl ChangeClass {
    /// Classify the jump from `old` to `new`
    fn from_versions(old: &str, new: &str) -> Self {
        match (Version::parse(old), Version::parse(new)) {
            (Ok(old), Ok(new)) => {
                if new.major != old.major {
                    ChangeClass::Major
                } else if new.minor != old.minor {
                    ChangeClass::Minor
                } else {
                    ChangeClass::Patch
                }
            }
            _ => ChangeClass::Unknown,
        }
    }

    /// Display label with color
    fn colored_label(&self) -> String {
        match self {
            ChangeClass::Major => "major".red().bold().to_string(),
            ChangeClass::Minor => "minor".yellow().to_string(),
            ChangeClass::Patch => "patch".green().to_string(),
            ChangeClass::Unknown => "?".dimmed().to_string(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ChangeClass::Major => "major",
            ChangeClass::Minor => "minor",
            ChangeClass::Patch => "patch",
            ChangeClass::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, updates: &[PackageUpdate], writer: &mut dyn Write) -> io::Result<()> {
        if updates.is_empty() {
            return Ok(());
        }

        for update in updates {
            let class = ChangeClass::from_versions(&update.current_version, &update.new_version);
            writeln!(
                writer,
                "  {}: {} → {} ({})",
                update.include.bold(),
                update.current_version,
                update.new_version.cyan(),
                class.colored_label()
            )?;
        }

        let noun = if updates.len() == 1 { "update" } else { "updates" };
        writeln!(writer)?;
        writeln!(writer, "{} {} available", updates.len(), noun)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(updates: &[PackageUpdate]) -> String {
        // Force plain output so assertions don't depend on the terminal
        colored::control::set_override(false);
        let mut out = Vec::new();
        TextFormatter::new().format(updates, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_list_produces_no_output() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn test_one_line_per_update() {
        let updates = vec![
            PackageUpdate::new("Newtonsoft.Json", "13.0.1", "13.0.3"),
            PackageUpdate::new("Serilog", "3.1.0", "4.0.0"),
        ];
        let text = render(&updates);
        assert!(text.contains("Newtonsoft.Json: 13.0.1 → 13.0.3 (patch)"));
        assert!(text.contains("Serilog: 3.1.0 → 4.0.0 (major)"));
        assert!(text.contains("2 updates available"));
    }

    #[test]
    fn test_singular_summary() {
        let updates = vec![PackageUpdate::new("Serilog", "3.1.0", "3.2.0")];
        let text = render(&updates);
        assert!(text.contains("1 update available"));
    }

    #[test]
    fn test_change_class_major() {
        assert_eq!(ChangeClass::from_versions("1.2.3", "2.0.0"), ChangeClass::Major);
    }

    #[test]
    fn test_change_class_minor() {
        assert_eq!(ChangeClass::from_versions("1.2.3", "1.3.0"), ChangeClass::Minor);
    }

    #[test]
    fn test_change_class_patch() {
        assert_eq!(ChangeClass::from_versions("1.2.3", "1.2.4"), ChangeClass::Patch);
    }

    #[test]
    fn test_change_class_unknown_for_unparsable() {
        assert_eq!(ChangeClass::from_versions("abc", "1.2.4"), ChangeClass::Unknown);
        assert_eq!(ChangeClass::Unknown.label(), "?");
    }
}
