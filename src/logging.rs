//! @ai:module:intent Tracing subscriber setup for the binary
//! @ai:module:layer infrastructure
//! @ai:module:public_api init, env_filter, DEFAULT_LOG_FILTER

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, blank or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "tweet_sentiment=info";

/// @ai:intent Build the filter from a `RUST_LOG` value, falling back to the default
/// @ai:effects pure
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// @ai:intent Install the fmt subscriber writing to stderr
/// @ai:effects env, io
pub fn init() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_level_is_kept() {
        let filter = env_filter(Some("tweet_sentiment=debug"));
        assert_eq!(filter.to_string(), "tweet_sentiment=debug");
    }

    #[test]
    fn test_unset_uses_default() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(env_filter(Some("  ")).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_value_uses_default() {
        assert_eq!(env_filter(Some("tweet_sentiment=[")).to_string(), DEFAULT_LOG_FILTER);
    }
}
