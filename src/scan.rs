//! Redirect detection in HTML content
//!
//! Two heuristics over pages that redirect without an HTTP `Location`
//! header: meta-refresh tags and script-assigned locations. Neither executes
//! anything; both only surface candidate targets.

use crate::validate::{clean_url, is_valid_url};
use regex::Regex;
use scraper::{Html, Selector};

// Matches `self.location = '...'`, `top.location = "..."` and the window
// variant. The script scan runs over the raw source rather than the parsed
// DOM: parsers do not expose script bodies reliably.
static SCRIPT_LOCATION_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r#"(?:self|top|window)\.location\s*=\s*(?:'([^']*)'|"([^"]*)")"#).unwrap()
});

/// Find the first meta-refresh redirect target in an HTML document
///
/// Scans `<meta>` elements carrying an `http-equiv` attribute for a
/// `;`-delimited `content` parameter of the form `url=<value>` (case
/// insensitive). The value is cleaned and validated; the first valid URL in
/// document order wins. Malformed HTML is parsed best-effort and never fails.
#[must_use]
pub fn scan_meta_redirect(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("meta[http-equiv][content]").ok()?;

    for meta in document.select(&selector) {
        let Some(content) = meta.value().attr("content") else {
            continue;
        };

        for param in content.split(';') {
            let param = param.trim();

            let Some(value) = strip_url_prefix(param) else {
                continue;
            };

            let url = clean_url(value);
            if is_valid_url(&url) {
                return Some(url);
            }
        }
    }

    None
}

/// Find all script-assigned location targets in raw HTML source
///
/// Matches `(self|top|window).location = '<value>'` and the double-quoted
/// variant. Each value is cleaned and validated; results are returned in
/// order of appearance, duplicates included.
#[must_use]
pub fn scan_script_redirects(html: &str) -> Vec<String> {
    let mut urls = Vec::new();

    for caps in SCRIPT_LOCATION_REGEX.captures_iter(html) {
        let Some(raw) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };

        let url = clean_url(raw.as_str());
        if is_valid_url(&url) {
            urls.push(url);
        }
    }

    urls
}

/// Strip a case-insensitive `url=` prefix, returning the remainder
fn strip_url_prefix(param: &str) -> Option<&str> {
    let prefix = param.get(..4)?;

    if prefix.eq_ignore_ascii_case("url=") {
        param.get(4..)
    } else {
        None
    }
}
