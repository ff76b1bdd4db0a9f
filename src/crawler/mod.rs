//! Crawler module for discovering and scraping profile pages
//!
//! This module contains the network-facing half of the scraper:
//! - HTTP fetching that reports failures as absent pages
//! - Jittered politeness delays between search pages
//! - Search results parsing and the paginated crawl frontier
//! - Run orchestration (de-duplication, profile cap, failure isolation)

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
pub mod throttle;

pub use coordinator::{Scraper, ScraperConfig};
pub use fetcher::{build_http_client, PageFetcher, DEFAULT_USER_AGENT};
pub use frontier::{search_url, site_root, ProfileFrontier, SEARCH_PATH};
pub use parser::{is_profile_path, parse_search_page, NON_PROFILE_SEGMENTS};
pub use throttle::sleep_with_jitter;
