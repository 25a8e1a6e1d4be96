//! Error types for link scraping

use thiserror::Error;

/// Errors that can occur while scraping links
///
/// Invalid URLs and malformed HTML are not errors: bad URLs are silently
/// filtered and HTML parsing is best-effort. Only HTTP client construction
/// and individual redirect resolution requests can fail.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to construct the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// A redirect resolution request could not be completed
    #[error("Unable to get URL \"{url}\": {reason}")]
    Resolution { url: String, reason: String },
}

/// Result type for link scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;
