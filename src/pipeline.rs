//! Run orchestration: index page to output artifacts.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::dedup::DedupSet;
use crate::fetcher::SourceFetch;
use crate::listing::parse_listing;
use crate::processor::{process_category, CategoryResult};
use crate::utils::{format_bytes, format_count};
use crate::writer::{write_category, Artifact};

/// One category's processing result plus the files it produced.
#[derive(Debug)]
pub struct CategoryReport {
    pub result: CategoryResult,
    pub artifacts: Vec<Artifact>,
}

/// Structured outcome of a whole run, sufficient for any reporting layer.
#[derive(Debug)]
pub struct RunSummary {
    /// Per-category reports, in processing order.
    pub reports: Vec<CategoryReport>,
    /// Target headings that were not found on the index page.
    pub missing: Vec<String>,
    /// Grand total of unique entries across all categories.
    pub total_unique: usize,
}

impl RunSummary {
    /// Total sources that failed to fetch, across all categories.
    pub fn failed_sources(&self) -> usize {
        self.reports.iter().map(|r| r.result.failed()).sum()
    }
}

/// Execute one aggregation run.
///
/// Only two things are fatal: failing to fetch the index page itself, and
/// filesystem errors while writing artifacts. Missing categories and failed
/// sources are warnings carried in the summary.
///
/// Categories are processed in the configured order against one shared
/// [`DedupSet`], so an entry lands in the first category that sees it.
pub async fn run(config: &Config, fetcher: &dyn SourceFetch) -> Result<RunSummary> {
    info!("Fetching index page {}", config.index_url);
    let html = fetcher
        .fetch_text(&config.index_url)
        .await
        .context("Failed to fetch index page")?;

    let parsed = parse_listing(&html, &config.categories);
    for name in &parsed.missing {
        warn!("Category not found on index page: '{name}'");
    }

    let mut seen = DedupSet::new();
    let mut reports = Vec::with_capacity(parsed.categories.len());

    for category in &parsed.categories {
        let result = process_category(category, fetcher, &mut seen, config.concurrency).await;

        let artifacts = if result.novel.is_empty() {
            warn!("No new entries for category: {}", result.category.name);
            Vec::new()
        } else {
            write_category(
                &config.output_dir,
                &result.category.name,
                &result.novel,
                config.split_threshold,
            )?
        };

        for artifact in &artifacts {
            info!(
                "Wrote {} ({}, {} entries)",
                artifact.path.display(),
                format_bytes(artifact.bytes),
                format_count(artifact.lines)
            );
        }

        reports.push(CategoryReport { result, artifacts });
    }

    Ok(RunSummary {
        reports,
        missing: parsed.missing,
        total_unique: seen.len(),
    })
}
