//! Crawl frontier over paginated search results
//!
//! The frontier is a pull-based, single-pass producer of candidate profile URLs
//! for one keyword. Each call to [`ProfileFrontier::next_url`] hands out the
//! next queued URL and only fetches another search page once the queue is
//! drained. Dropping the frontier abandons the crawl with no further requests.
//!
//! # Termination
//!
//! In priority order:
//! 1. the page budget is used up
//! 2. a search page cannot be fetched
//! 3. a search page yields no candidates
//!
//! None of these is an error.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::parse_search_page;
use crate::crawler::throttle::sleep_with_jitter;
use crate::crawler::ScraperConfig;
use crate::ScrapeError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::VecDeque;
use url::Url;

/// Path of the user search endpoint, relative to the site root
pub const SEARCH_PATH: &str = "search/users";

/// Characters left unescaped in the keyword, besides ASCII alphanumerics
const KEYWORD_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Builds the search results URL for `keyword` and a 1-based `page`
///
/// # Example
///
/// ```
/// use folio_scout::crawler::search_url;
/// use url::Url;
///
/// let base = Url::parse("https://www.behance.net").unwrap();
/// let url = search_url(&base, "graphic designer", 2).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://www.behance.net/search/users?search=graphic%20designer&tracking_source=typeahead_search_direction&page=2"
/// );
/// ```
pub fn search_url(base_url: &Url, keyword: &str, page: u32) -> Result<Url, ScrapeError> {
    let mut url = site_root(base_url)
        .join(SEARCH_PATH)
        .map_err(|e| ScrapeError::SearchUrl {
            base: base_url.to_string(),
            message: e.to_string(),
        })?;

    let query = format!(
        "search={}&tracking_source=typeahead_search_direction&page={}",
        utf8_percent_encode(keyword, KEYWORD_ENCODE_SET),
        page
    );
    url.set_query(Some(&query));

    Ok(url)
}

/// The base URL with a trailing slash, so relative joins stay under it
pub fn site_root(base_url: &Url) -> Url {
    let mut root = base_url.clone();
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root.set_query(None);
    root.set_fragment(None);
    root
}

/// Lazily discovers profile URLs page by page
pub struct ProfileFrontier<'a> {
    fetcher: &'a PageFetcher,
    site_root: Url,
    keyword: String,
    delay_range: (f64, f64),
    max_pages: u32,

    /// Next search page to fetch (1-based)
    next_page: u32,

    /// Candidates from the current page not yet handed out
    pending: VecDeque<Url>,

    exhausted: bool,
}

impl<'a> ProfileFrontier<'a> {
    /// Creates a frontier for one keyword; nothing is fetched until the first pull
    pub fn new(fetcher: &'a PageFetcher, config: &ScraperConfig, keyword: &str) -> Self {
        Self {
            fetcher,
            site_root: site_root(&config.base_url),
            keyword: keyword.to_string(),
            delay_range: config.delay_range,
            max_pages: config.max_pages,
            next_page: 1,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Returns the next candidate profile URL, or `None` once the crawl has ended
    ///
    /// Candidates are unique within a page; the same URL may reappear on a later
    /// page and de-duplication across pages is left to the caller.
    pub async fn next_url(&mut self) -> Option<Url> {
        loop {
            if let Some(url) = self.pending.pop_front() {
                return Some(url);
            }
            if self.exhausted {
                return None;
            }

            if self.next_page > self.max_pages {
                tracing::info!("Page budget of {} reached, stopping", self.max_pages);
                self.exhausted = true;
                return None;
            }

            // Be polite between search pages.
            if self.next_page > 1 {
                sleep_with_jitter(self.delay_range.0, self.delay_range.1).await;
            }

            let page = self.next_page;
            self.next_page += 1;
            self.load_page(page).await;
        }
    }

    /// Number of search pages fetched or attempted so far
    pub fn pages_visited(&self) -> u32 {
        self.next_page - 1
    }

    async fn load_page(&mut self, page: u32) {
        let url = match search_url(&self.site_root, &self.keyword, page) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("{}", e);
                self.exhausted = true;
                return;
            }
        };

        tracing::info!("Fetching search results page {}: {}", page, url);
        let Some(html) = self.fetcher.fetch(url.as_str()).await else {
            tracing::warn!("Empty response for search page {}, stopping", page);
            self.exhausted = true;
            return;
        };

        let candidates = parse_search_page(&html, &self.site_root);
        if candidates.is_empty() {
            tracing::info!("No more profiles found on page {}, stopping", page);
            self.exhausted = true;
            return;
        }

        tracing::debug!("Page {} yielded {} candidates", page, candidates.len());
        self.pending.extend(candidates);
    }
}
