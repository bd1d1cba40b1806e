//! @ai:module:intent Tally sentiment polarity and entity frequencies
//! @ai:module:layer application
//! @ai:module:public_api EntityFrequencyTable, SentimentSummary, SummaryAggregator, SummaryAggregatorTrait
//! @ai:module:stateless true

use crate::analysis::{Entity, SentimentResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// @ai:intent Occurrence count per entity title, iterated in title order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityFrequencyTable {
    counts: BTreeMap<String, usize>,
}

impl EntityFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Count one more occurrence of `title`
    /// @ai:effects state:write
    pub fn record(&mut self, title: &str) {
        *self.counts.entry(title.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, title: &str) -> Option<usize> {
        self.counts.get(title).copied()
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// @ai:intent Every title whose count equals the maximum
    /// @ai:effects pure
    pub fn most_frequent(&self) -> Vec<String> {
        let Some(max) = self.counts.values().copied().max() else {
            return Vec::new();
        };

        self.iter()
            .filter(|(_, count)| *count == max)
            .map(|(title, _)| title.to_string())
            .collect()
    }
}

impl<'a> FromIterator<&'a Entity> for EntityFrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a Entity>>(iter: I) -> Self {
        let mut table = Self::new();
        for entity in iter {
            table.record(&entity.title);
        }
        table
    }
}

/// @ai:intent Aggregated outcome of a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub query: String,
    pub fetched: usize,
    pub scored: usize,
    pub positive: usize,
    pub negative: usize,
    pub sentiment_failures: u32,
    pub entity_failures: u32,
    pub entities: EntityFrequencyTable,
    pub most_frequent: Vec<String>,
}

impl SentimentSummary {
    pub fn unique_entities(&self) -> usize {
        self.entities.len()
    }
}

/// @ai:intent Per-run counters gathered by the analysis loop
#[derive(Debug, Clone, Default)]
pub struct RunCounts {
    pub fetched: usize,
    pub sentiment_failures: u32,
    pub entity_failures: u32,
}

/// @ai:intent Trait for summary aggregation
pub trait SummaryAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate successful results into a summary
    fn aggregate(
        &self,
        query: &str,
        scores: &[SentimentResult],
        entities: &[Entity],
        counts: &RunCounts,
    ) -> SentimentSummary;
}

/// @ai:intent Aggregates successful analysis results
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// @ai:intent Create a new aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummaryAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryAggregatorTrait for SummaryAggregator {
    /// @ai:intent Positive is score > 0, negative is score < 0; zero and missing count as neither
    /// @ai:effects pure
    fn aggregate(
        &self,
        query: &str,
        scores: &[SentimentResult],
        entities: &[Entity],
        counts: &RunCounts,
    ) -> SentimentSummary {
        let positive = scores
            .iter()
            .filter(|s| s.score.is_some_and(|v| v > 0.0))
            .count();
        let negative = scores
            .iter()
            .filter(|s| s.score.is_some_and(|v| v < 0.0))
            .count();

        let table: EntityFrequencyTable = entities.iter().collect();
        let most_frequent = table.most_frequent();

        SentimentSummary {
            query: query.to_string(),
            fetched: counts.fetched,
            scored: scores.len(),
            positive,
            negative,
            sentiment_failures: counts.sentiment_failures,
            entity_failures: counts.entity_failures,
            entities: table,
            most_frequent,
        }
    }
}
