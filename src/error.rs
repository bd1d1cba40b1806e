//! @ai:module:intent Define typed error kinds for input validation and configuration
//! @ai:module:layer domain
//! @ai:module:public_api InputError, ConfigError
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Reasons a prompted value is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("search keywords must not be empty")]
    EmptyQuery,

    #[error("'{0}' is not a number")]
    InvalidCount(String),

    #[error("tweet count must be between 1 and {max}, got {value}")]
    CountOutOfRange { value: u64, max: u32 },

    #[error("'{0}' is not a date formatted as YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown result type '{0}', expected mixed, recent or popular")]
    InvalidResultType(String),
}

/// @ai:intent Reasons the run configuration cannot be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing credential {field} (set it in the config file or via {env_var})")]
    MissingCredential {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
