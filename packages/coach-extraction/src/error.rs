//! Typed errors for the coach extraction library.
//!
//! The classifiers never fail: missing data is expressed as `None` or a low
//! score. Errors only surface at the I/O seams (fetching and storage).

use thiserror::Error;

/// Errors that can occur around the extraction core.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Fetching a page failed
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Fetcher returned a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ExtractionError {
    /// Wrap any error raised by a fetcher implementation.
    pub fn fetch(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Wrap any error raised by a storage backend.
    pub fn storage(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Storage(source.into())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message() {
        let err = ExtractionError::fetch("https://example.edu/staff", "connection reset");
        assert_eq!(
            err.to_string(),
            "fetch failed for https://example.edu/staff: connection reset"
        );
    }

    #[test]
    fn test_http_status_message() {
        let err = ExtractionError::HttpStatus {
            url: "https://example.edu".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 for https://example.edu");
    }

    #[test]
    fn test_storage_error_keeps_source() {
        let err = ExtractionError::storage("disk full");
        assert_eq!(err.to_string(), "storage error: disk full");
        assert!(std::error::Error::source(&err).is_some());
    }
}
