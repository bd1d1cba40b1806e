//! @ai:module:intent Plain-text entity frequency report
//! @ai:module:layer infrastructure
//! @ai:module:public_api RecordReporter, RecordReporterTrait
//! @ai:module:stateless true

use crate::report::aggregator::EntityFrequencyTable;
use anyhow::{Context, Result};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for the entity record report
pub trait RecordReporterTrait: Send + Sync {
    /// @ai:intent Write one `title: count` line per entity
    fn generate(&self, table: &EntityFrequencyTable, output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes the entity frequency table as text
pub struct RecordReporter;

impl RecordReporter {
    /// @ai:intent Create a new record reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the table, one line per title
    /// @ai:effects pure
    fn render(table: &EntityFrequencyTable) -> String {
        let mut output = String::new();

        for (title, count) in table.iter() {
            let _ = writeln!(output, "{}: {}", title, count);
        }

        output
    }
}

impl Default for RecordReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordReporterTrait for RecordReporter {
    /// @ai:effects fs:write
    fn generate(&self, table: &EntityFrequencyTable, output_path: &Path) -> Result<()> {
        std::fs::write(output_path, Self::render(table))
            .with_context(|| format!("Failed to write {}", output_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_one_line_per_title() {
        let mut table = EntityFrequencyTable::new();
        table.record("Rust");
        table.record("Ferris");
        table.record("Rust");

        assert_eq!(RecordReporter::render(&table), "Ferris: 1\nRust: 2\n");
    }

    #[test]
    fn test_generate_overwrites_previous_report() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("record.txt");
        std::fs::write(&output, "stale: 9\nold: 1\n").unwrap();

        let mut table = EntityFrequencyTable::new();
        table.record("X");

        RecordReporter::new().generate(&table, &output).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "X: 1\n");
    }
}
