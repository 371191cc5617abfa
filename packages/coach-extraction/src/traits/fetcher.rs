//! Page fetching seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::FetchedPage;

/// Delivers `(url, html, final_url)` for a URL.
///
/// Scheduling, politeness and retries belong to the implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a single page.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;

    /// Try each URL in order and return the first that fetches.
    ///
    /// Used for guessed homepages where most candidates do not resolve.
    async fn fetch_first(&self, urls: &[String]) -> Option<FetchedPage> {
        for url in urls {
            match self.fetch(url).await {
                Ok(page) => return Some(page),
                Err(e) => {
                    tracing::debug!(url = %url, error = %e, "Candidate URL failed");
                }
            }
        }
        None
    }
}
