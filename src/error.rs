//! Error types for bogsweep.

use thiserror::Error;

/// Failure to retrieve one source list.
///
/// Always tagged with the URL so per-source outcomes can be reported without
/// extra bookkeeping. A fetch failure is local to its source and never aborts
/// the surrounding category.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("failed to fetch {url}: {cause}")]
    Unreachable { url: String, cause: String },
}

impl FetchError {
    /// The URL the failed request was sent to.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url } | FetchError::Unreachable { url, .. } => url,
        }
    }
}
