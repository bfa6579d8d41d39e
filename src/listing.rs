//! Index-page parsing.
//!
//! The index page lists each category as an `<h2>` heading followed by a
//! `<ul>` of member lists. A member marked with the `bdCross` class is
//! crossed out on the page and must not be fetched; everything else carries
//! two hyperlinks, the second of which points at the raw list.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Class marking a crossed-out (excluded) member on the index page.
const EXCLUDED_CLASS: &str = "bdCross";

/// One source list inside a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    /// Display label from the index page.
    pub label: String,
    /// URL of the raw list.
    pub url: String,
}

/// A named grouping of source lists, as parsed from the index page.
///
/// Immutable after parsing; lives for one processing pass.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    /// Active members, in page order.
    pub sources: Vec<SourceRef>,
    /// Labels of members explicitly crossed out on the page.
    pub excluded: Vec<String>,
}

/// Result of parsing the index page against a set of target headings.
#[derive(Debug)]
pub struct ParsedListing {
    /// Categories found, in target order.
    pub categories: Vec<Category>,
    /// Target headings absent from the page, in target order.
    pub missing: Vec<String>,
}

/// Extract the target categories from raw index-page markup.
///
/// Pure parse: targets absent from the page land in `missing` rather than
/// erroring, and members without the expected two hyperlinks are skipped.
pub fn parse_listing(html: &str, targets: &[String]) -> ParsedListing {
    let document = Html::parse_document(html);
    // Literal selectors, valid by construction.
    let h2_selector = Selector::parse("h2").unwrap();
    let li_selector = Selector::parse("li").unwrap();
    let a_selector = Selector::parse("a").unwrap();

    let mut categories = Vec::new();
    let mut missing = Vec::new();

    for target in targets {
        let heading = document
            .select(&h2_selector)
            .find(|h2| h2.text().collect::<String>().trim() == target);
        let Some(heading) = heading else {
            missing.push(target.clone());
            continue;
        };

        let list = heading
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "ul");
        let Some(list) = list else {
            // Heading without a member list is as good as absent.
            missing.push(target.clone());
            continue;
        };

        let mut sources = Vec::new();
        let mut excluded = Vec::new();

        for item in list.select(&li_selector) {
            let links: Vec<ElementRef> = item.select(&a_selector).collect();
            let label = links
                .first()
                .map(|a| member_label(*a))
                .unwrap_or_default();

            if item.value().classes().any(|c| c == EXCLUDED_CLASS) {
                excluded.push(label);
                continue;
            }

            // A well-formed member has a detail link and a raw-list link.
            let url = links.get(1).and_then(|a| a.value().attr("href"));
            match url {
                Some(url) => sources.push(SourceRef {
                    label,
                    url: url.to_string(),
                }),
                None => debug!("Skipping malformed member '{}' in '{}'", label, target),
            }
        }

        categories.push(Category {
            name: target.clone(),
            sources,
            excluded,
        });
    }

    ParsedListing {
        categories,
        missing,
    }
}

fn member_label(link: ElementRef) -> String {
    link.text()
        .collect::<String>()
        .trim()
        .trim_end_matches(':')
        .to_string()
}
