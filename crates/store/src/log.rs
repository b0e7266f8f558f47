//! Append-only JSON Lines run log, one file per day.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Daily JSON Lines run log.
///
/// Each appended entry becomes exactly one line in
/// `<dir>/YYYY-MM-DD.jsonl`; the directory is created on first use.
#[derive(Debug, Clone)]
pub struct RunLog {
    dir: PathBuf,
}

impl RunLog {
    /// Create a log rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The log directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Append one entry as a single line to today's log file.
    ///
    /// Returns the path of the file written to.
    pub fn append<T: Serialize>(&self, entry: &T) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self
            .dir
            .join(format!("{}.jsonl", Utc::now().format("%Y-%m-%d")));
        let mut line = serde_json::to_string(entry).context("failed to serialize log entry")?;
        line.push('\n');

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("failed to append to {}", path.display()))?;

        Ok(path)
    }
}
