//! @ai:module:intent Drive search, per-tweet analysis and reporting for one run
//! @ai:module:layer application
//! @ai:module:public_api SentimentPipeline, RunOutcome
//! @ai:module:stateless false

use crate::analysis::{AnalysisClientTrait, ApiStatus, Entity, SentimentResult};
use crate::config::{AppConfig, OutputConfig};
use crate::input::SearchParameters;
use crate::pipeline::artifacts::{write_raw_tweets, ErrorLog, FailureKind};
use crate::report::{
    ReportGenerator, RunCounts, SentimentSummary, SummaryAggregator, SummaryAggregatorTrait,
};
use crate::search::SearchClientTrait;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// @ai:intent How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The search returned nothing; nothing was written and earlier reports were removed.
    NoMatches,
    /// Sentiment failures reached the requested count; earlier reports were removed.
    TooManyFailures {
        failures: u32,
        requested: u32,
        error_log: PathBuf,
    },
    Completed(SentimentSummary),
}

/// @ai:intent Results kept from the analysis loop
#[derive(Debug, Default)]
struct AnalysisBatch {
    scores: Vec<SentimentResult>,
    entities: Vec<Entity>,
    counts: RunCounts,
}

/// @ai:intent Runs the fetch, analyze, report sequence
pub struct SentimentPipeline<S: SearchClientTrait, A: AnalysisClientTrait> {
    search: Arc<S>,
    analysis: Arc<A>,
    output: OutputConfig,
    skip_entities_on_sentiment_failure: bool,
    aggregator: SummaryAggregator,
    reporter: ReportGenerator,
}

impl<S: SearchClientTrait, A: AnalysisClientTrait> SentimentPipeline<S, A> {
    /// @ai:intent Create a pipeline over the given clients
    /// @ai:effects pure
    pub fn new(search: Arc<S>, analysis: Arc<A>, config: &AppConfig) -> Self {
        Self {
            search,
            analysis,
            output: config.output.clone(),
            skip_entities_on_sentiment_failure: config.repustate.skip_entities_on_sentiment_failure,
            aggregator: SummaryAggregator::new(),
            reporter: ReportGenerator::new(),
        }
    }

    /// @ai:intent Execute one complete run
    /// @ai:effects network, fs:write
    pub async fn run(&self, params: &SearchParameters) -> Result<RunOutcome> {
        let tweets = self.search.fetch_tweet_texts(params).await?;

        if tweets.is_empty() {
            tracing::info!("No tweets matched '{}'", params.query());
            self.clear_reports()?;
            return Ok(RunOutcome::NoMatches);
        }

        std::fs::create_dir_all(&self.output.dir).with_context(|| {
            format!("Failed to create output directory {}", self.output.dir.display())
        })?;

        write_raw_tweets(&self.output.tweets_path(), &tweets)?;

        let (batch, error_log) = self.analyze(&tweets).await?;

        if batch.counts.sentiment_failures >= params.count() {
            tracing::warn!(
                "{} of {} sentiment requests failed, skipping report",
                batch.counts.sentiment_failures,
                params.count()
            );
            self.clear_reports()?;
            return Ok(RunOutcome::TooManyFailures {
                failures: batch.counts.sentiment_failures,
                requested: params.count(),
                error_log,
            });
        }

        let summary = self.aggregator.aggregate(
            params.query(),
            &batch.scores,
            &batch.entities,
            &batch.counts,
        );

        self.reporter.generate_all(
            &summary,
            &self.output.record_path(),
            &self.output.summary_path(),
        )?;

        Ok(RunOutcome::Completed(summary))
    }

    /// Keeps record.txt and summary.json from describing a different run.
    fn clear_reports(&self) -> Result<()> {
        self.reporter
            .clear(&self.output.record_path(), &self.output.summary_path())
    }

    /// @ai:intent Analyze every tweet in order, logging service-level failures
    /// @ai:effects network, fs:write
    async fn analyze(&self, tweets: &[String]) -> Result<(AnalysisBatch, PathBuf)> {
        let mut error_log = ErrorLog::create(&self.output.error_log_path())?;
        let mut batch = AnalysisBatch {
            counts: RunCounts {
                fetched: tweets.len(),
                ..Default::default()
            },
            ..Default::default()
        };
        let total = tweets.len();

        for (index, tweet) in tweets.iter().enumerate() {
            tracing::debug!("[{}/{}] Analyzing tweet", index + 1, total);

            let sentiment = self.analysis.score_sentiment(tweet).await?;

            // Both calls are issued per tweet unless configured otherwise.
            let entities = if sentiment.is_failure() && self.skip_entities_on_sentiment_failure {
                None
            } else {
                Some(self.analysis.extract_entities(tweet).await?)
            };

            if sentiment.is_failure() {
                // Only sentiment failures count toward the abort threshold.
                batch.counts.sentiment_failures += 1;
                tracing::warn!(
                    "[{}/{}] Sentiment request failed: {}",
                    index + 1,
                    total,
                    sentiment.failure_description()
                );
                error_log.record(tweet, FailureKind::Sentiment, sentiment.failure_description())?;
                continue;
            }

            let Some(entities) = entities else {
                continue;
            };

            if entities.is_failure() {
                batch.counts.entity_failures += 1;
                tracing::warn!(
                    "[{}/{}] Entities request failed: {}",
                    index + 1,
                    total,
                    entities.failure_description()
                );
                error_log.record(tweet, FailureKind::Entities, entities.failure_description())?;
                continue;
            }

            batch.scores.push(sentiment);
            batch.entities.extend(entities.entities);
        }

        if error_log.entries() > 0 {
            tracing::info!("Logged {} failed tweets", error_log.entries());
        }

        let path = error_log.finish()?;
        Ok((batch, path))
    }
}
