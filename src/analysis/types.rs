//! @ai:module:intent Response shapes of the Repustate sentiment and entities endpoints
//! @ai:module:layer domain
//! @ai:module:public_api SentimentResult, EntityResult, Entity, ApiStatus
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// Status value Repustate uses to mark a rejected request.
const FAILURE_STATUS: &str = "Fail";

/// @ai:intent Service-level outcome carried in every response
pub trait ApiStatus {
    fn status(&self) -> &str;

    fn description(&self) -> Option<&str>;

    /// @ai:intent Whether the service rejected the text
    /// @ai:effects pure
    fn is_failure(&self) -> bool {
        self.status().eq_ignore_ascii_case(FAILURE_STATUS)
    }

    /// @ai:intent Failure description, or a placeholder when the service sent none
    /// @ai:effects pure
    fn failure_description(&self) -> &str {
        self.description().unwrap_or("no description")
    }
}

/// @ai:intent Parsed `score.json` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// @ai:intent Parsed `entities.json` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityResult {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// @ai:intent One named thing found in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub title: String,
}

impl SentimentResult {
    pub fn ok(score: f64) -> Self {
        Self {
            status: "OK".to_string(),
            score: Some(score),
            description: None,
        }
    }

    pub fn fail(description: impl Into<String>) -> Self {
        Self {
            status: FAILURE_STATUS.to_string(),
            score: None,
            description: Some(description.into()),
        }
    }
}

impl EntityResult {
    pub fn ok<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            status: "OK".to_string(),
            entities: titles
                .into_iter()
                .map(|title| Entity { title: title.into() })
                .collect(),
            description: None,
        }
    }

    pub fn fail(description: impl Into<String>) -> Self {
        Self {
            status: FAILURE_STATUS.to_string(),
            entities: Vec::new(),
            description: Some(description.into()),
        }
    }
}

impl ApiStatus for SentimentResult {
    fn status(&self) -> &str {
        &self.status
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl ApiStatus for EntityResult {
    fn status(&self) -> &str {
        &self.status
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
