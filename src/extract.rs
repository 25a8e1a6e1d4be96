//! Link extraction from HTML documents

use crate::error::Result;
use crate::resolver::{RedirectResolver, ResolveRedirects};
use crate::types::{LinkRecord, RedirectOutcome};
use crate::validate::is_valid_url;
use scraper::{Html, Selector};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::warn;

/// Extracts outbound links from HTML, optionally resolving redirects
///
/// One `extract_links` call owns one redirect cache: each distinct href is
/// resolved at most once per call and nothing is shared across calls.
#[derive(Debug)]
pub struct LinkExtractor<R = RedirectResolver> {
    resolver: R,
}

impl LinkExtractor<RedirectResolver> {
    /// Build an extractor backed by the live HTTP resolver
    pub fn new() -> Result<Self> {
        Ok(Self {
            resolver: RedirectResolver::new()?,
        })
    }
}

impl<R: ResolveRedirects> LinkExtractor<R> {
    /// Build an extractor with a caller-supplied resolver
    pub const fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Extract a deduplicated, engagement-ranked list of links from HTML
    ///
    /// Anchors without a valid absolute href contribute nothing. Anchors
    /// sharing a destination are merged into one record: distinct trimmed
    /// texts and distinct valid image sources accumulate in discovery order.
    /// With `follow_redirects`, each distinct href is resolved once and its
    /// effective URL becomes the destination; a failed resolution falls back
    /// to the raw href and is logged, never propagated. Records are ranked
    /// by descending engagement, ties keeping discovery order.
    pub fn extract_links(&self, html: &str, follow_redirects: bool) -> Vec<LinkRecord> {
        let Ok(anchor_selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };
        let Ok(image_selector) = Selector::parse("img[src]") else {
            return Vec::new();
        };

        // Parsing is best-effort: broken markup yields whatever tree the
        // parser recovers, never an error.
        let document = Html::parse_document(html);

        let mut cache: HashMap<String, RedirectOutcome> = HashMap::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut records: Vec<LinkRecord> = Vec::new();

        for anchor in document.select(&anchor_selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !is_valid_url(href) {
                continue;
            }

            let (destination, probable) = if follow_redirects {
                self.destination_for(href, &mut cache)
            } else {
                (href.to_string(), Vec::new())
            };

            // Destinations are deduplicated by exact string value; only the
            // record-creating anchor may attach probable redirects.
            let slot = slots.get(&destination).copied().unwrap_or_else(|| {
                let mut record = LinkRecord::new(destination.clone());
                record.redirects = probable;
                records.push(record);
                slots.insert(destination, records.len() - 1);
                records.len() - 1
            });
            let record = &mut records[slot];

            let text = anchor.text().collect::<String>().trim().to_string();
            if !text.is_empty() && !record.texts.contains(&text) {
                record.texts.push(text);
            }

            for image in anchor.select(&image_selector) {
                let Some(src) = image.value().attr("src") else {
                    continue;
                };
                let src = src.trim();
                if !src.is_empty()
                    && is_valid_url(src)
                    && !record.images.iter().any(|known| known == src)
                {
                    record.images.push(src.to_string());
                }
            }
        }

        rank_by_engagement(records)
    }

    /// Resolve an href through the per-call cache
    ///
    /// Returns the effective destination, plus the probable redirect list
    /// only when this call actually hit the resolver (repeat hrefs reuse the
    /// cached destination and record nothing new). Failed resolutions are
    /// cached as fallback-to-source outcomes so the at-most-once guarantee
    /// holds for them too.
    fn destination_for(
        &self,
        href: &str,
        cache: &mut HashMap<String, RedirectOutcome>,
    ) -> (String, Vec<String>) {
        if let Some(cached) = cache.get(href) {
            return (cached.effective.clone(), Vec::new());
        }

        let outcome = match self.resolver.resolve(href, true) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Keeping unresolved href as destination: {e}");
                RedirectOutcome::unresolved(href)
            }
        };

        let result = (outcome.effective.clone(), outcome.probable.clone());
        cache.insert(href.to_string(), outcome);
        result
    }
}

/// Stable rank by descending engagement score
///
/// The tie-break on discovery order is explicit rather than an artifact of
/// sort stability: equal scores keep the order anchors were first seen in.
fn rank_by_engagement(records: Vec<LinkRecord>) -> Vec<LinkRecord> {
    let mut indexed: Vec<(usize, LinkRecord)> = records.into_iter().enumerate().collect();
    indexed.sort_by_key(|(discovered, record)| (Reverse(record.engagement()), *discovered));
    indexed.into_iter().map(|(_, record)| record).collect()
}
