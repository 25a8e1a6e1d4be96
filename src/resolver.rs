//! Redirect resolution over HTTP
//!
//! HTTP-level redirects are authoritative: the client follows them and the
//! final response URL becomes the effective destination. Content scanning of
//! the final body only surfaces *probable* targets that a browser's script
//! engine would have triggered but that this crate never executes.

use crate::error::{Result, ScrapeError};
use crate::scan::{scan_meta_redirect, scan_script_redirects};
use crate::types::RedirectOutcome;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;

/// Maximum number of HTTP redirects followed per resolution
const REDIRECTS_MAX: usize = 10;

/// Connect timeout per resolution request
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total timeout per resolution request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolve a URL to its effective destination
///
/// The seam the link extractor depends on; tests substitute deterministic
/// implementations for the live HTTP resolver.
pub trait ResolveRedirects {
    /// Follow `url` to its network-effective destination
    ///
    /// With `include_probable`, the final response body is scanned for
    /// unexecuted redirect targets (meta-refresh first, then script
    /// assignments in source order).
    fn resolve(&self, url: &str, include_probable: bool) -> Result<RedirectOutcome>;
}

impl<T: ResolveRedirects + ?Sized> ResolveRedirects for &T {
    fn resolve(&self, url: &str, include_probable: bool) -> Result<RedirectOutcome> {
        (**self).resolve(url, include_probable)
    }
}

/// Live resolver backed by a blocking HTTP client
#[derive(Debug)]
pub struct RedirectResolver {
    client: Client,
}

impl RedirectResolver {
    /// Build a resolver with redirect-following enabled and bounded timeouts
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(REDIRECTS_MAX))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl ResolveRedirects for RedirectResolver {
    fn resolve(&self, url: &str, include_probable: bool) -> Result<RedirectOutcome> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Resolution {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let effective = response.url().to_string();

        let mut probable = Vec::new();
        if include_probable {
            let body = response.text().map_err(|e| ScrapeError::Resolution {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

            if let Some(meta_url) = scan_meta_redirect(&body) {
                probable.push(meta_url);
            }
            probable.extend(scan_script_redirects(&body));
        }

        debug!(
            "Resolved {url} to {effective} ({} probable redirect(s))",
            probable.len()
        );

        Ok(RedirectOutcome {
            source: url.to_string(),
            effective,
            probable,
        })
    }
}
