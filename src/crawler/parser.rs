//! Search results parser
//!
//! Pulls candidate profile URLs out of one search results page. Profiles live
//! at top-level paths (`/username`), so any anchor resolving to a path with
//! exactly one non-empty segment is a candidate, except for a few known
//! listing pages.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Top-level path names that are listings rather than profiles
pub const NON_PROFILE_SEGMENTS: &[&str] = &["search", "collections", "galleries"];

/// Extracts candidate profile URLs from a search results page
///
/// URLs are absolute, in document order, and de-duplicated within the page.
///
/// # Example
///
/// ```
/// use folio_scout::crawler::parse_search_page;
/// use url::Url;
///
/// let html = r#"<a href="/alice">A</a><a href="/gallery/1/x">P</a>"#;
/// let base = Url::parse("https://www.behance.net/").unwrap();
/// let urls = parse_search_page(html, &base);
/// assert_eq!(urls[0].as_str(), "https://www.behance.net/alice");
/// assert_eq!(urls.len(), 1);
/// ```
pub fn parse_search_page(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = resolve_link(href, base_url) else {
            continue;
        };
        if !is_profile_path(&url) {
            continue;
        }

        if seen.insert(url.to_string()) {
            tracing::debug!("Discovered profile URL: {}", url);
            urls.push(url);
        }
    }

    urls
}

/// True when the path is a single non-denylisted segment
pub fn is_profile_path(url: &Url) -> bool {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [segment] => !NON_PROFILE_SEGMENTS
            .iter()
            .any(|denied| segment.eq_ignore_ascii_case(denied)),
        _ => false,
    }
}

/// Resolves an href against the base URL
///
/// Returns None for empty hrefs, `javascript:`/`mailto:`/`tel:`/`data:` links
/// and anything that is not HTTP(S) after resolution.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url),
        _ => None,
    }
}
