//! JSON output formatter for machine processing

use crate::domain::PackageUpdate;
use crate::output::OutputFormatter;
use std::io::{self, Write};

/// JSON formatter: pretty-printed array of update decisions
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, updates: &[PackageUpdate], writer: &mut dyn Write) -> io::Result<()> {
        if updates.is_empty() {
            return Ok(());
        }
        let document = serde_json::to_string_pretty(updates)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", document)
    }
}
