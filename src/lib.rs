//! @ai:module:intent Tweet sentiment and entity summary library
//! @ai:module:layer application
//! @ai:module:public_api config, input, logging, search, analysis, pipeline, report, prompt

pub mod analysis;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod search;

pub use analysis::{AnalysisClientTrait, MockAnalysisClient, RepustateClient};
pub use config::AppConfig;
pub use error::{ConfigError, InputError};
pub use input::{ResultType, SearchParameters};
pub use pipeline::{RunOutcome, SentimentPipeline};
pub use prompt::Prompter;
pub use report::{EntityFrequencyTable, SentimentSummary};
pub use search::{MockSearchClient, SearchClientTrait, TwitterClient};
