//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "bogsweep")]
#[command(author, version, about = "Categorized domain blocklist aggregator")]
pub struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "bogsweep.yaml")]
    pub config: PathBuf,

    /// Index page URL
    #[arg(long)]
    pub index_url: Option<String>,

    /// Category heading to process (repeatable; order determines entry
    /// attribution)
    #[arg(short = 'C', long = "category")]
    pub categories: Vec<String>,

    /// Per-source fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Split threshold for output files, in bytes
    #[arg(long)]
    pub split_threshold: Option<u64>,

    /// Output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Maximum in-flight fetches within a category
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fold CLI overrides into a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ref url) = self.index_url {
            config.index_url = url.clone();
        }
        if !self.categories.is_empty() {
            config.categories = self.categories.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(threshold) = self.split_threshold {
            config.split_threshold = threshold;
        }
        if let Some(ref dir) = self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        config
    }
}
