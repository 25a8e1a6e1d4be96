//! Message-level scraping orchestration

use crate::error::Result;
use crate::extract::LinkExtractor;
use crate::resolver::{RedirectResolver, ResolveRedirects};
use crate::types::{LinkRecord, MessageData};
use tracing::debug;

/// Scrapes outbound links from the HTML body of a mail message
#[derive(Debug)]
pub struct Scraper<R = RedirectResolver> {
    extractor: LinkExtractor<R>,
}

impl Scraper<RedirectResolver> {
    /// Build a scraper backed by the live HTTP resolver
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: LinkExtractor::new()?,
        })
    }
}

impl<R: ResolveRedirects> Scraper<R> {
    /// Build a scraper around an existing extractor
    pub const fn with_extractor(extractor: LinkExtractor<R>) -> Self {
        Self { extractor }
    }

    /// Extract ranked links from a message's HTML body parts
    ///
    /// Non-HTML parts are skipped. When a message carries several HTML
    /// parts, the result of the last one wins; results are not merged
    /// across parts. A message without any HTML part yields an empty list.
    #[must_use]
    pub fn get_links(&self, message: &MessageData, follow_redirects: bool) -> Vec<LinkRecord> {
        let mut links = Vec::new();

        for body in &message.bodies {
            if body.content_type.is_html() {
                links = self.extractor.extract_links(&body.content, follow_redirects);
            }
        }

        debug!(
            "Scraped {} link(s) from message {} ({})",
            links.len(),
            message.uid,
            message.from
        );

        links
    }
}
