//! @ai:module:intent Machine-readable run summary written next to the record
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, JsonReporterTrait
//! @ai:module:stateless true

use crate::report::aggregator::SentimentSummary;
use anyhow::{Context, Result};
use std::path::Path;

/// @ai:intent Trait for the summary.json report
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Write the summary as pretty-printed JSON
    fn generate(&self, summary: &SentimentSummary, output_path: &Path) -> Result<()>;
}

/// @ai:intent Serializes a run summary to disk
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new summary reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the summary; identical inputs give identical bytes
    /// @ai:effects pure
    fn render(summary: &SentimentSummary) -> Result<String> {
        let mut json = serde_json::to_string_pretty(summary)
            .with_context(|| format!("Failed to serialize summary for '{}'", summary.query))?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:effects fs:write
    fn generate(&self, summary: &SentimentSummary, output_path: &Path) -> Result<()> {
        std::fs::write(output_path, Self::render(summary)?)
            .with_context(|| format!("Failed to write {}", output_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregator::EntityFrequencyTable;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn summary() -> SentimentSummary {
        let mut entities = EntityFrequencyTable::new();
        entities.record("Rust");

        SentimentSummary {
            query: "rustlang".to_string(),
            fetched: 2,
            scored: 1,
            positive: 1,
            negative: 0,
            sentiment_failures: 1,
            entity_failures: 0,
            entities,
            most_frequent: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_generate_json_report() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("summary.json");

        reporter.generate(&summary(), &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["query"], "rustlang");
        assert_eq!(value["entities"]["Rust"], 1);
        assert_eq!(value["most_frequent"][0], "Rust");
    }

    #[test]
    fn test_summary_carries_only_run_fields() {
        let rendered = JsonReporter::render(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "entities",
                "entity_failures",
                "fetched",
                "most_frequent",
                "negative",
                "positive",
                "query",
                "scored",
                "sentiment_failures",
            ]
        );
        assert_eq!(rendered, JsonReporter::render(&summary()).unwrap());
    }

    #[test]
    fn test_unwritable_path_names_the_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing").join("summary.json");

        let err = JsonReporter::new().generate(&summary(), &output).unwrap_err();
        assert!(err.to_string().contains("summary.json"));
    }
}
