//! @ai:module:intent Raw tweet file and per-item error log written during a run
//! @ai:module:layer infrastructure
//! @ai:module:public_api write_raw_tweets, ErrorLog, FailureKind
//! @ai:module:stateless false

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// @ai:intent Which analysis call rejected a tweet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Sentiment,
    Entities,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Sentiment => "Sentiment request error",
            FailureKind::Entities => "Entities request error",
        }
    }
}

/// Tweets may contain line breaks; artifacts are line oriented.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// @ai:intent Write every tweet on its own line, replacing previous content
/// @ai:effects fs:write
pub fn write_raw_tweets(path: &Path, tweets: &[String]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for tweet in tweets {
        writeln!(writer, "{}", single_line(tweet))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote {} tweets to {}", tweets.len(), path.display());
    Ok(())
}

/// @ai:intent Error log holding a tweet line and an error line per failure
pub struct ErrorLog {
    writer: BufWriter<File>,
    path: PathBuf,
    entries: usize,
}

impl ErrorLog {
    /// @ai:intent Create or truncate the log file
    /// @ai:effects fs:write
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            entries: 0,
        })
    }

    /// @ai:intent Append one failed tweet and its error description
    /// @ai:effects fs:write
    pub fn record(&mut self, tweet: &str, kind: FailureKind, description: &str) -> Result<()> {
        writeln!(self.writer, "{}", single_line(tweet))?;
        writeln!(self.writer, "{}: {}", kind.label(), single_line(description))?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// @ai:intent Flush and close the log, returning its path
    /// @ai:effects fs:write
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(self.path)
    }
}
