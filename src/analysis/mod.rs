//! @ai:module:intent Sentiment and entity analysis through Repustate
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalysisClientTrait, RepustateClient, MockAnalysisClient, SentimentResult, EntityResult

pub mod client;
pub mod types;

pub use client::{AnalysisClientTrait, MockAnalysisClient, RepustateClient};
pub use types::{ApiStatus, Entity, EntityResult, SentimentResult};
