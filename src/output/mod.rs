//! Output formatting for update decisions
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//!
//! Formatters write nothing when the decision list is empty; the caller
//! reports "no updates found" on the log side instead.

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::PackageUpdate;
use std::io::Write;

/// Trait for decision-list formatters
pub trait OutputFormatter {
    /// Format and write the update decisions
    fn format(&self, updates: &[PackageUpdate], writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter from the CLI flags
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter::new())
    } else {
        Box::new(TextFormatter::new())
    }
}
