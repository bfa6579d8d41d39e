//! Configuration for an aggregation run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fetcher::DEFAULT_TIMEOUT_SECS;
use crate::writer::DEFAULT_SPLIT_THRESHOLD;

/// Run configuration, loadable from YAML. Every field has a default, so a
/// partial (or absent) config file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the index page listing the categorized sources.
    pub index_url: String,

    /// Category headings to process, in order. Order matters: entries are
    /// attributed to the first category that sees them.
    pub categories: Vec<String>,

    /// Per-source fetch timeout in seconds.
    pub timeout_secs: u64,

    /// Split threshold for output files, in bytes.
    pub split_threshold: u64,

    /// Directory output files are written to.
    pub output_dir: PathBuf,

    /// Maximum in-flight fetches within a category.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_url: "https://firebog.net/".to_string(),
            categories: vec![
                "Suspicious Lists".to_string(),
                "Advertising Lists".to_string(),
                "Tracking & Telemetry Lists".to_string(),
                "Malicious Lists".to_string(),
                "Other Lists".to_string(),
            ],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            output_dir: PathBuf::from("."),
            concurrency: 6,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
