//! @ai:module:intent Run orchestration and the files it writes
//! @ai:module:layer application
//! @ai:module:public_api SentimentPipeline, RunOutcome, ErrorLog

pub mod artifacts;
pub mod runner;

pub use artifacts::{write_raw_tweets, ErrorLog, FailureKind};
pub use runner::{RunOutcome, SentimentPipeline};
