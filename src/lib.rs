//! # bogsweep - Categorized Domain Blocklist Aggregator
//!
//! Scrapes a blocklist index page (firebog.net style), fetches every listed
//! source, deduplicates entries globally across categories, and writes one
//! sorted text file per category, splitting files that exceed a size
//! threshold.
//!
//! ## Pipeline
//!
//! ```text
//! index page --(listing)--> categories
//!   for each category, in order:
//!     fetch sources --(sanitize + dedup)--> novel entries
//!     write <slug>.txt, split into <slug>_partN.txt above the threshold
//! ```
//!
//! Deduplication is global and first-seen-wins: an entry is written only by
//! the first category that encounters it, so category order is part of the
//! contract. Per-source fetch failures are recorded and skipped; only the
//! index fetch and filesystem errors abort a run.
//!
//! ## Example
//!
//! ```no_run
//! use bogsweep::config::Config;
//! use bogsweep::fetcher::HttpFetcher;
//! use bogsweep::pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let fetcher = HttpFetcher::new(config.timeout())?;
//!     let summary = pipeline::run(&config, &fetcher).await?;
//!     println!("{} unique domains", summary.total_unique);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`listing`] - index-page parsing into categories and sources
//! - [`fetcher`] - HTTP retrieval behind the [`fetcher::SourceFetch`] trait
//! - [`processor`] - per-category fetching and merging
//! - [`dedup`] - the run-wide seen-entry set
//! - [`sanitize`] - line and filename normalization
//! - [`writer`] - artifact writing and size-bounded splitting
//! - [`pipeline`] - whole-run orchestration

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod fetcher;
pub mod listing;
pub mod pipeline;
pub mod processor;
pub mod sanitize;
pub mod utils;
pub mod writer;

pub use config::Config;
pub use error::FetchError;
pub use pipeline::{run, RunSummary};
