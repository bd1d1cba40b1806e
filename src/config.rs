//! @ai:module:intent Configuration structs for the tweet sentiment run
//! @ai:module:layer infrastructure
//! @ai:module:public_api AppConfig, TwitterConfig, RepustateConfig, OutputConfig
//! @ai:module:stateless true

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tweet-sentiment.toml";

/// @ai:intent Main configuration for a run
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub twitter: TwitterConfig,
    #[serde(default)]
    pub repustate: RepustateConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// @ai:intent Credentials and endpoint for the Twitter search API
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub consumer_secret: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub access_secret: String,
    #[serde(default = "default_search_url")]
    pub search_url: String,
}

/// @ai:intent API key, endpoint base and call policy for Repustate
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepustateConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_repustate_base_url")]
    pub base_url: String,
    /// Skip the entities call for a tweet whose sentiment call already failed.
    #[serde(default)]
    pub skip_entities_on_sentiment_failure: bool,
}

/// @ai:intent Locations of the files written by a run
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_tweets_file")]
    pub tweets_file: String,
    #[serde(default = "default_error_log_file")]
    pub error_log_file: String,
    #[serde(default = "default_record_file")]
    pub record_file: String,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: String::new(),
            access_secret: String::new(),
            search_url: default_search_url(),
        }
    }
}

impl Default for RepustateConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_repustate_base_url(),
            skip_entities_on_sentiment_failure: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            tweets_file: default_tweets_file(),
            error_log_file: default_error_log_file(),
            record_file: default_record_file(),
            summary_file: default_summary_file(),
        }
    }
}

fn default_search_url() -> String {
    "https://api.twitter.com/1.1/search/tweets.json".to_string()
}

fn default_repustate_base_url() -> String {
    "https://api.repustate.com/v4".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_tweets_file() -> String {
    "tweets.txt".to_string()
}

fn default_error_log_file() -> String {
    "ErrorLog.txt".to_string()
}

fn default_record_file() -> String {
    "record.txt".to_string()
}

fn default_summary_file() -> String {
    "summary.json".to_string()
}

impl AppConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// @ai:intent Load the given file, else the default file if present, else defaults
    /// @ai:effects fs:read
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);

                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// @ai:intent Override credentials from process environment variables
    /// @ai:effects env
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Non-empty values returned by `lookup` replace the configured credentials.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let slots: [(&str, &mut String); 5] = [
            ("TWITTER_CONSUMER_KEY", &mut self.twitter.consumer_key),
            ("TWITTER_CONSUMER_SECRET", &mut self.twitter.consumer_secret),
            ("TWITTER_ACCESS_TOKEN", &mut self.twitter.access_token),
            ("TWITTER_ACCESS_SECRET", &mut self.twitter.access_secret),
            ("REPUSTATE_API_KEY", &mut self.repustate.api_key),
        ];

        for (name, slot) in slots {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
    }

    /// @ai:intent Check every credential is present before clients are built
    /// @ai:effects pure
    pub fn validate_credentials(&self) -> Result<(), ConfigError> {
        let required = [
            ("twitter.consumer_key", "TWITTER_CONSUMER_KEY", &self.twitter.consumer_key),
            ("twitter.consumer_secret", "TWITTER_CONSUMER_SECRET", &self.twitter.consumer_secret),
            ("twitter.access_token", "TWITTER_ACCESS_TOKEN", &self.twitter.access_token),
            ("twitter.access_secret", "TWITTER_ACCESS_SECRET", &self.twitter.access_secret),
            ("repustate.api_key", "REPUSTATE_API_KEY", &self.repustate.api_key),
        ];

        for (field, env_var, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingCredential { field, env_var });
            }
        }

        Ok(())
    }
}

impl OutputConfig {
    pub fn tweets_path(&self) -> PathBuf {
        self.dir.join(&self.tweets_file)
    }

    pub fn error_log_path(&self) -> PathBuf {
        self.dir.join(&self.error_log_file)
    }

    pub fn record_path(&self) -> PathBuf {
        self.dir.join(&self.record_file)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.dir.join(&self.summary_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn filled() -> AppConfig {
        let mut config = AppConfig::default();
        config.twitter.consumer_key = "ck".to_string();
        config.twitter.consumer_secret = "cs".to_string();
        config.twitter.access_token = "at".to_string();
        config.twitter.access_secret = "as".to_string();
        config.repustate.api_key = "rk".to_string();
        config
    }

    #[test]
    fn test_defaults_match_artifact_names() {
        let config = AppConfig::default();
        assert_eq!(config.output.tweets_path(), PathBuf::from("./tweets.txt"));
        assert_eq!(config.output.error_log_path(), PathBuf::from("./ErrorLog.txt"));
        assert_eq!(config.output.record_path(), PathBuf::from("./record.txt"));
        assert_eq!(config.repustate.base_url, "https://api.repustate.com/v4");
        assert!(!config.repustate.skip_entities_on_sentiment_failure);
    }

    #[test]
    fn test_validate_accepts_complete_credentials() {
        assert!(filled().validate_credentials().is_ok());
    }

    #[test]
    fn test_validate_reports_first_blank_credential() {
        let mut config = filled();
        config.twitter.access_secret = "   ".to_string();

        match config.validate_credentials() {
            Err(ConfigError::MissingCredential { field, env_var }) => {
                assert_eq!(field, "twitter.access_secret");
                assert_eq!(env_var, "TWITTER_ACCESS_SECRET");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_replace_only_non_empty_values() {
        let mut config = filled();
        let env: HashMap<&str, &str> =
            [("REPUSTATE_API_KEY", "from-env"), ("TWITTER_CONSUMER_KEY", "")]
                .into_iter()
                .collect();

        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.repustate.api_key, "from-env");
        assert_eq!(config.twitter.consumer_key, "ck");
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tweet-sentiment.toml");
        std::fs::write(
            &path,
            r#"
[repustate]
api_key = "key"
skip_entities_on_sentiment_failure = true

[output]
dir = "out"
"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.repustate.api_key, "key");
        assert!(config.repustate.skip_entities_on_sentiment_failure);
        assert_eq!(config.output.record_path(), PathBuf::from("out/record.txt"));
        assert_eq!(config.twitter.search_url, default_search_url());
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[twitter\nconsumer_key = ").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));
    }
}
