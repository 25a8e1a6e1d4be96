//! Core types for scraped messages and links

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mail message as delivered by the mailbox layer
///
/// How the message was fetched and decoded is not this crate's concern; the
/// scraper only consumes the summary fields and the decoded body parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageData {
    /// Mailbox-assigned message UID
    pub uid: String,

    /// Charset the body parts were decoded to
    pub charset: String,

    /// Sender address
    pub from: Sender,

    /// Decoded subject line
    pub subject: String,

    /// Date sent
    pub date: DateTime<Utc>,

    /// Decoded body parts in mailbox order
    pub bodies: Vec<BodyPart>,
}

impl MessageData {
    /// Check whether the message carries at least one HTML body part
    #[must_use]
    pub fn has_html_body(&self) -> bool {
        self.bodies.iter().any(|b| b.content_type.is_html())
    }
}

/// Sender address with optional display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sender {
    /// Display name (e.g., "John Doe")
    pub name: Option<String>,

    /// Email address (e.g., "john@example.com")
    pub address: String,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// One decoded body part of a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPart {
    /// Declared content type of this part
    pub content_type: ContentType,

    /// Decoded text content
    pub content: String,
}

impl BodyPart {
    /// Build an HTML body part
    #[must_use]
    pub fn html(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Html,
            content: content.into(),
        }
    }

    /// Build a plain-text body part
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Plain,
            content: content.into(),
        }
    }
}

/// Declared content type of a body part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Plain,
    Other(String),
}

impl ContentType {
    /// Only HTML parts are eligible for link extraction
    #[must_use]
    pub const fn is_html(&self) -> bool {
        matches!(self, Self::Html)
    }
}

/// The outcome of resolving one URL through its redirects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedirectOutcome {
    /// The URL the resolution started from
    pub source: String,

    /// Final URL after all HTTP-level redirects were followed
    pub effective: String,

    /// Redirect targets detected in the final page's content but never
    /// followed (meta-refresh first, then script assignments in source order)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub probable: Vec<String>,
}

impl RedirectOutcome {
    /// Outcome for a URL that could not be resolved: the source stands in
    /// for the effective destination and nothing probable was scanned
    #[must_use]
    pub fn unresolved(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            source: url.clone(),
            effective: url,
            probable: Vec::new(),
        }
    }
}

/// One outbound link aggregated across all anchors pointing at it
///
/// Optional collections are omitted from serialized output when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkRecord {
    /// Destination URL (exact string, used for deduplication)
    pub url: String,

    /// Distinct anchor texts in discovery order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub texts: Vec<String>,

    /// Distinct image sources found inside the anchors, in discovery order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Probable redirect targets detected when the destination was resolved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirects: Vec<String>,
}

impl LinkRecord {
    /// Create an empty record for a destination URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Engagement score used for ranking: distinct texts plus distinct images
    #[must_use]
    pub fn engagement(&self) -> usize {
        self.texts.len() + self.images.len()
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
