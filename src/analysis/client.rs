//! @ai:module:intent Repustate client for sentiment scores and entity extraction
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalysisClientTrait, RepustateClient, MockAnalysisClient
//! @ai:module:stateless false

use crate::analysis::types::{EntityResult, SentimentResult};
use crate::config::RepustateConfig;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// @ai:intent Trait for the text analysis seam
#[allow(async_fn_in_trait)]
pub trait AnalysisClientTrait: Send + Sync {
    /// @ai:intent Score the sentiment of one text
    async fn score_sentiment(&self, text: &str) -> Result<SentimentResult>;

    /// @ai:intent Find the named entities in one text
    async fn extract_entities(&self, text: &str) -> Result<EntityResult>;
}

/// @ai:intent HTTP client bound to one Repustate API key
pub struct RepustateClient {
    client: reqwest::Client,
    score_url: String,
    entities_url: String,
}

impl RepustateClient {
    /// @ai:intent Create a client and derive both endpoint URLs from the key
    /// @ai:pre config.api_key is non-empty
    /// @ai:effects pure
    pub fn new(config: &RepustateConfig) -> Result<Self> {
        let base = config.base_url.trim_end_matches('/');

        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            score_url: format!("{}/{}/score.json", base, config.api_key),
            entities_url: format!("{}/{}/entities.json", base, config.api_key),
        })
    }

    /// @ai:intent POST `text` as a form and parse the body whatever the HTTP status
    /// @ai:effects network
    async fn post_text<T: DeserializeOwned>(&self, url: &str, text: &str, kind: &str) -> Result<T> {
        let response = self
            .client
            .post(url)
            .form(&[("text", text)])
            .send()
            .await
            .with_context(|| format!("Failed to send {} request to Repustate", kind))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read Repustate {} response", kind))?;

        parse_body(kind, status, &body)
    }
}

/// @ai:intent Parse a Repustate body without looking at the HTTP status
/// @ai:effects pure
///
/// Service-level failures arrive as a JSON body with status "Fail",
/// possibly under a 4xx code; only an unparseable body is fatal.
fn parse_body<T: DeserializeOwned>(kind: &str, status: StatusCode, body: &str) -> Result<T> {
    serde_json::from_str(body).with_context(|| {
        format!("Failed to parse Repustate {} response ({}): {}", kind, status, body)
    })
}

impl AnalysisClientTrait for RepustateClient {
    async fn score_sentiment(&self, text: &str) -> Result<SentimentResult> {
        self.post_text(&self.score_url, text, "sentiment").await
    }

    async fn extract_entities(&self, text: &str) -> Result<EntityResult> {
        self.post_text(&self.entities_url, text, "entities").await
    }
}

/// @ai:intent Analysis client answering from a fixed table keyed by text
pub struct MockAnalysisClient {
    responses: HashMap<String, (SentimentResult, EntityResult)>,
    sentiment_calls: AtomicUsize,
    entity_calls: AtomicUsize,
}

impl MockAnalysisClient {
    /// @ai:intent Create a mock with no scripted texts
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            sentiment_calls: AtomicUsize::new(0),
            entity_calls: AtomicUsize::new(0),
        }
    }

    /// Script the two responses returned for `text`.
    pub fn with_response(
        mut self,
        text: impl Into<String>,
        sentiment: SentimentResult,
        entities: EntityResult,
    ) -> Self {
        self.responses.insert(text.into(), (sentiment, entities));
        self
    }

    pub fn sentiment_calls(&self) -> usize {
        self.sentiment_calls.load(Ordering::SeqCst)
    }

    pub fn entity_calls(&self) -> usize {
        self.entity_calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, text: &str) -> Option<&(SentimentResult, EntityResult)> {
        self.responses.get(text)
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisClientTrait for MockAnalysisClient {
    /// @ai:intent Return the scripted sentiment, or a failure for unknown texts
    /// @ai:effects state:write
    async fn score_sentiment(&self, text: &str) -> Result<SentimentResult> {
        self.sentiment_calls.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .lookup(text)
            .map(|(sentiment, _)| sentiment.clone())
            .unwrap_or_else(|| SentimentResult::fail("text not scripted")))
    }

    /// @ai:intent Return the scripted entities, or a failure for unknown texts
    /// @ai:effects state:write
    async fn extract_entities(&self, text: &str) -> Result<EntityResult> {
        self.entity_calls.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .lookup(text)
            .map(|(_, entities)| entities.clone())
            .unwrap_or_else(|| EntityResult::fail("text not scripted")))
    }
}
