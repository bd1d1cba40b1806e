//! @ai:module:intent Search parameters and validation of user-entered values
//! @ai:module:layer domain
//! @ai:module:public_api SearchParameters, ResultType, parse_query, parse_count, parse_until, parse_result_type
//! @ai:module:stateless true

use crate::error::InputError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound on tweets fetched by a single search call.
pub const TWEET_COUNT_CEILING: u32 = 100;

/// @ai:intent Ordering strategy requested from the search service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Mixed,
    Recent,
    Popular,
}

impl ResultType {
    /// @ai:intent Get the wire representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Mixed => "mixed",
            ResultType::Recent => "recent",
            ResultType::Popular => "popular",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(ResultType::Mixed),
            "recent" => Ok(ResultType::Recent),
            "popular" => Ok(ResultType::Popular),
            _ => Err(InputError::InvalidResultType(s.trim().to_string())),
        }
    }
}

/// @ai:intent Immutable parameters for one search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    query: String,
    count: u32,
    until: NaiveDate,
    result_type: ResultType,
}

impl SearchParameters {
    /// @ai:intent Build parameters, rejecting a blank query or out-of-range count
    /// @ai:effects pure
    pub fn new(
        query: impl Into<String>,
        count: u32,
        until: NaiveDate,
        result_type: ResultType,
    ) -> Result<Self, InputError> {
        let query = parse_query(&query.into())?;
        let count = check_count(u64::from(count))?;

        Ok(Self {
            query,
            count,
            until,
            result_type,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    pub fn result_type(&self) -> ResultType {
        self.result_type
    }
}

/// @ai:intent Accept any non-blank search keywords
/// @ai:effects pure
pub fn parse_query(raw: &str) -> Result<String, InputError> {
    let query = raw.trim();

    if query.is_empty() {
        Err(InputError::EmptyQuery)
    } else {
        Ok(query.to_string())
    }
}

/// @ai:intent Accept a positive integer below the search ceiling
/// @ai:effects pure
pub fn parse_count(raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::InvalidCount(trimmed.to_string()));
    }

    // Digits only, so the only parse failure left is overflow.
    let value = trimmed.parse::<u64>().unwrap_or(u64::MAX);
    check_count(value)
}

fn check_count(value: u64) -> Result<u32, InputError> {
    if value == 0 || value >= u64::from(TWEET_COUNT_CEILING) {
        return Err(InputError::CountOutOfRange {
            value,
            max: TWEET_COUNT_CEILING - 1,
        });
    }

    Ok(value as u32)
}

/// @ai:intent Parse an optional YYYY-MM-DD cutoff, blank meaning `today`
/// @ai:effects pure
pub fn parse_until(raw: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(today);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}

/// @ai:intent Parse an optional result type, blank meaning mixed
/// @ai:effects pure
pub fn parse_result_type(raw: &str) -> Result<ResultType, InputError> {
    if raw.trim().is_empty() {
        Ok(ResultType::default())
    } else {
        raw.parse()
    }
}
