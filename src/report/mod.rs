//! @ai:module:intent Aggregation and report generation for analyzed tweets
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, SummaryAggregator, SentimentSummary, EntityFrequencyTable

pub mod aggregator;
pub mod json_report;
pub mod record;

pub use aggregator::{
    EntityFrequencyTable, RunCounts, SentimentSummary, SummaryAggregator, SummaryAggregatorTrait,
};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use record::{RecordReporter, RecordReporterTrait};

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    record: RecordReporter,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            record: RecordReporter::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Write the entity record and the JSON summary
    /// @ai:effects fs:write
    pub fn generate_all(
        &self,
        summary: &SentimentSummary,
        record_path: &Path,
        summary_path: &Path,
    ) -> Result<()> {
        self.record.generate(&summary.entities, record_path)?;
        self.json.generate(summary, summary_path)?;

        tracing::info!(
            "Reports written to {} and {}",
            record_path.display(),
            summary_path.display()
        );
        Ok(())
    }

    /// @ai:intent Remove reports left behind by an earlier run
    /// @ai:effects fs:write
    pub fn clear(&self, record_path: &Path, summary_path: &Path) -> Result<()> {
        for path in [record_path, summary_path] {
            match std::fs::remove_file(path) {
                Ok(()) => tracing::info!("Removed stale report {}", path.display()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => {
                    return Err(err).with_context(|| format!("Failed to remove {}", path.display()))
                }
            }
        }
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
