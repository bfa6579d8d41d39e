//! Category processing: fetch every source, merge novel entries.

use std::collections::BTreeSet;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::dedup::DedupSet;
use crate::error::FetchError;
use crate::fetcher::SourceFetch;
use crate::listing::Category;
use crate::sanitize::sanitize_line;
use crate::utils::format_count;

/// What happened to one source of a category.
#[derive(Debug)]
pub struct FetchOutcome {
    pub label: String,
    pub url: String,
    /// Entries this source contributed, or why it failed.
    pub result: Result<usize, FetchError>,
}

/// Everything one category produced: its novel entries (sorted) and the
/// per-source outcomes, in source order.
#[derive(Debug)]
pub struct CategoryResult {
    pub category: Category,
    pub novel: BTreeSet<String>,
    pub outcomes: Vec<FetchOutcome>,
}

impl CategoryResult {
    /// Sources that fetched successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Sources that failed to fetch.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Process one category against the shared dedup set.
///
/// Sources are fetched with at most `concurrency` requests in flight, but
/// merged strictly in listed order on this task, so which source (and which
/// category) gets credit for an entry is deterministic and identical to a
/// fully sequential run. Fetch failures are recorded per source and never
/// abort the category.
pub async fn process_category(
    category: &Category,
    fetcher: &dyn SourceFetch,
    seen: &mut DedupSet,
    concurrency: usize,
) -> CategoryResult {
    info!("Processing category: {}", category.name);

    for label in &category.excluded {
        info!("Skipping excluded list: {label}");
    }

    let bodies: Vec<Result<String, FetchError>> = stream::iter(&category.sources)
        .map(|source| fetcher.fetch_text(&source.url))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut novel = BTreeSet::new();
    let mut outcomes = Vec::with_capacity(category.sources.len());

    for (source, body) in category.sources.iter().zip(bodies) {
        let result = match body {
            Ok(text) => {
                let mut added = 0usize;
                for line in text.lines() {
                    if let Some(entry) = sanitize_line(line) {
                        if seen.insert(entry) {
                            novel.insert(entry.to_string());
                            added += 1;
                        }
                    }
                }
                info!("{} - added {} new entries", source.label, format_count(added));
                Ok(added)
            }
            Err(e) => {
                warn!("{} - {}", source.label, e);
                Err(e)
            }
        };
        outcomes.push(FetchOutcome {
            label: source.label.clone(),
            url: source.url.clone(),
            result,
        });
    }

    CategoryResult {
        category: category.clone(),
        novel,
        outcomes,
    }
}
