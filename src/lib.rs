// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Link Scraper
//!
//! Extracts hyperlinks from HTML email bodies and resolves each link to its
//! true destination by following HTTP redirects and detecting client-side
//! redirect techniques (meta-refresh tags, script-based location
//! assignment).
//!
//! # Features
//!
//! - Anchor extraction with text and image aggregation per destination
//! - Engagement-based ranking of extracted links
//! - HTTP redirect following with bounded hops and timeouts
//! - Heuristic detection of meta-refresh and script redirects
//! - Tolerant of malformed markup; a bad link never fails an extraction
//!
//! # Example
//!
//! ```rust
//! use mail_link_extract::LinkExtractor;
//!
//! let html = r#"<a href="http://example.com/offer">Click here</a>
//!               <a href="http://example.com/offer">Last chance</a>"#;
//!
//! let extractor = LinkExtractor::new().unwrap();
//! let links = extractor.extract_links(html, false);
//!
//! assert_eq!(links.len(), 1);
//! assert_eq!(links[0].url, "http://example.com/offer");
//! assert_eq!(links[0].texts, vec!["Click here", "Last chance"]);
//! ```

mod error;
mod extract;
mod resolver;
mod scan;
mod scrape;
mod types;
mod validate;

pub use error::{Result, ScrapeError};
pub use extract::LinkExtractor;
pub use resolver::{RedirectResolver, ResolveRedirects};
pub use scan::{scan_meta_redirect, scan_script_redirects};
pub use scrape::Scraper;
pub use types::*;
pub use validate::{clean_url, is_valid_url};
