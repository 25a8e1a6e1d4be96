//! URL validation and cleaning

use url::Url;

/// Characters stripped from both ends of a candidate URL before validation
const TRIM_CHARS: &[char] = &['"', '\'', ' ', '\t', '\n', '\r', '\0', '\u{0B}'];

/// Check whether a candidate string is a well-formed absolute HTTP(S) URL
///
/// Anything that fails the grammar, uses another scheme (`javascript:`,
/// `mailto:`, ...) or lacks an authority is rejected. Never performs network
/// access and never panics on malformed input.
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Clean a URL extracted from redirect markup before validation
///
/// Removes literal `$` characters, un-escapes backslash-escaped characters
/// and trims surrounding quotes, whitespace and control characters.
#[must_use]
pub fn clean_url(url: &str) -> String {
    let unescaped = strip_escapes(&url.replace('$', ""));

    unescaped.trim_matches(TRIM_CHARS).to_string()
}

/// Un-escape backslash-escaped characters (`\"` becomes `"`, `\\` becomes `\`)
fn strip_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }

    out
}
