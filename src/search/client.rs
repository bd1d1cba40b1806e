//! @ai:module:intent Twitter search client returning analyzable tweet texts
//! @ai:module:layer infrastructure
//! @ai:module:public_api SearchClientTrait, TwitterClient, MockSearchClient
//! @ai:module:stateless false

use crate::config::TwitterConfig;
use crate::input::SearchParameters;
use crate::search::oauth::{OAuthCredentials, OAuthSigner};
use crate::search::status::{extract_text, SearchResponse};
use anyhow::{Context, Result};
use reqwest::StatusCode;

/// @ai:intent Trait for the tweet search seam
#[allow(async_fn_in_trait)]
pub trait SearchClientTrait: Send + Sync {
    /// @ai:intent Run one search and return the text of every result in service order
    async fn fetch_tweet_texts(&self, params: &SearchParameters) -> Result<Vec<String>>;
}

/// @ai:intent Authenticated client for the Twitter v1.1 search endpoint
pub struct TwitterClient {
    client: reqwest::Client,
    signer: OAuthSigner,
    search_url: String,
}

impl TwitterClient {
    /// @ai:intent Create a client from configured credentials
    /// @ai:pre credentials were checked by AppConfig::validate_credentials
    /// @ai:effects pure
    pub fn new(config: &TwitterConfig) -> Result<Self> {
        let signer = OAuthSigner::new(OAuthCredentials {
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            access_token: config.access_token.clone(),
            access_secret: config.access_secret.clone(),
        });

        let client = reqwest::Client::builder()
            .user_agent(concat!("tweet-sentiment/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            signer,
            search_url: config.search_url.clone(),
        })
    }

    /// @ai:intent Build the query string sent with the search call
    /// @ai:effects pure
    fn query_params(params: &SearchParameters) -> Vec<(&'static str, String)> {
        vec![
            ("q", params.query().to_string()),
            ("count", params.count().to_string()),
            ("until", params.until().format("%Y-%m-%d").to_string()),
            ("result_type", params.result_type().as_str().to_string()),
            ("tweet_mode", "extended".to_string()),
        ]
    }
}

impl SearchClientTrait for TwitterClient {
    /// @ai:effects network
    async fn fetch_tweet_texts(&self, params: &SearchParameters) -> Result<Vec<String>> {
        let query = Self::query_params(params);
        let authorization = self
            .signer
            .authorization_header("GET", &self.search_url, &query)?;

        tracing::info!(
            "Searching tweets for '{}' (count {}, until {}, {})",
            params.query(),
            params.count(),
            params.until(),
            params.result_type()
        );

        let response = self
            .client
            .get(&self.search_url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .query(&query)
            .send()
            .await
            .context("Failed to send request to Twitter search API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Twitter search response")?;

        let body = parse_search_body(status, &body)?;
        let texts: Vec<String> = body.statuses.iter().map(extract_text).collect();
        tracing::info!("Search returned {} tweets", texts.len());

        Ok(texts)
    }
}

/// @ai:intent Reject non-2xx responses, then parse the search body
/// @ai:effects pure
fn parse_search_body(status: StatusCode, body: &str) -> Result<SearchResponse> {
    if !status.is_success() {
        anyhow::bail!("Twitter search API error ({}): {}", status, body);
    }

    serde_json::from_str(body).context("Failed to parse Twitter search response")
}

/// @ai:intent Search client returning a fixed list of tweets
pub struct MockSearchClient {
    tweets: Vec<String>,
}

impl MockSearchClient {
    /// @ai:intent Create a mock that returns `tweets` for any query
    /// @ai:effects pure
    pub fn new(tweets: Vec<String>) -> Self {
        Self { tweets }
    }
}

impl SearchClientTrait for MockSearchClient {
    /// @ai:intent Return at most `count` canned tweets
    /// @ai:effects pure
    async fn fetch_tweet_texts(&self, params: &SearchParameters) -> Result<Vec<String>> {
        Ok(self
            .tweets
            .iter()
            .take(params.count() as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ResultType;
    use chrono::NaiveDate;

    fn params(count: u32) -> SearchParameters {
        let until = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        SearchParameters::new("rust lang", count, until, ResultType::Recent).unwrap()
    }

    #[test]
    fn test_query_params_request_extended_mode() {
        let query = TwitterClient::query_params(&params(10));

        assert_eq!(
            query,
            vec![
                ("q", "rust lang".to_string()),
                ("count", "10".to_string()),
                ("until", "2024-05-02".to_string()),
                ("result_type", "recent".to_string()),
                ("tweet_mode", "extended".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = TwitterConfig {
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
            access_token: "at".to_string(),
            access_secret: "as".to_string(),
            ..Default::default()
        };

        let client = TwitterClient::new(&config).unwrap();
        assert_eq!(client.search_url, "https://api.twitter.com/1.1/search/tweets.json");
    }

    #[test]
    fn test_non_success_search_is_fatal() {
        let body = r#"{"errors": [{"code": 32, "message": "Could not authenticate you."}]}"#;
        let err = parse_search_body(StatusCode::UNAUTHORIZED, body).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Could not authenticate you."));
    }

    #[test]
    fn test_success_search_body_parses() {
        let body = r#"{"statuses": [{"full_text": "hello"}, {"text": "short"}]}"#;
        let response = parse_search_body(StatusCode::OK, body).unwrap();

        let texts: Vec<String> = response.statuses.iter().map(extract_text).collect();
        assert_eq!(texts, vec!["hello", "short"]);
    }

    #[test]
    fn test_malformed_search_body_is_fatal() {
        assert!(parse_search_body(StatusCode::OK, "not json").is_err());
    }

    #[tokio::test]
    async fn test_mock_respects_count() {
        let client = MockSearchClient::new(vec!["a".into(), "b".into(), "c".into()]);
        let texts = client.fetch_tweet_texts(&params(2)).await.unwrap();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
