//! Run orchestration
//!
//! Composes the frontier and the extraction engine:
//! - pulls candidate URLs from the frontier and skips ones already seen this run
//! - fetches and extracts each new profile, skipping (and logging) failures
//! - stops as soon as the profile cap is met, abandoning the frontier

use crate::config::Settings;
use crate::crawler::fetcher::{build_http_client, PageFetcher, DEFAULT_USER_AGENT};
use crate::crawler::frontier::ProfileFrontier;
use crate::extract::extract_profile;
use crate::model::ProfileRecord;
use crate::ScrapeError;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Everything the crawl needs from the settings
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Root of the target site
    pub base_url: Url,

    /// Politeness delay bounds between search pages, in seconds
    pub delay_range: (f64, f64),

    /// Maximum number of search result pages to fetch
    pub max_pages: u32,

    /// `User-Agent` header for every request
    pub user_agent: String,

    /// Timeout for a single request
    pub request_timeout: Duration,
}

impl ScraperConfig {
    /// Creates a config with default delays, budget and user agent
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            delay_range: (1.0, 3.0),
            max_pages: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(20),
        }
    }
}

impl From<&Settings> for ScraperConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            delay_range: settings.delay_range,
            max_pages: settings.max_pages,
            user_agent: settings.user_agent.clone(),
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
        }
    }
}

/// Scrapes freelancer profiles matching a keyword
pub struct Scraper {
    config: ScraperConfig,
    fetcher: PageFetcher,
}

impl Scraper {
    /// Builds the scraper and its HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to run
    /// * `Err(ScrapeError)` - The base URL cannot anchor relative paths or the
    ///   HTTP client could not be built
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ScrapeError::SearchUrl {
                base: config.base_url.to_string(),
                message: "URL cannot be a base".to_string(),
            });
        }

        let client = build_http_client(&config.user_agent, config.request_timeout)?;

        Ok(Self {
            config,
            fetcher: PageFetcher::new(client),
        })
    }

    /// Starts a fresh frontier for `keyword`
    pub fn frontier(&self, keyword: &str) -> ProfileFrontier<'_> {
        ProfileFrontier::new(&self.fetcher, &self.config, keyword)
    }

    /// Scrapes up to `max_profiles` profiles matching `keyword`
    ///
    /// Records come back in discovery order with pairwise distinct URLs. A
    /// profile that fails to fetch is logged and skipped; it never ends the run.
    pub async fn run(&self, keyword: &str, max_profiles: usize) -> Vec<ProfileRecord> {
        let mut profiles = Vec::new();
        if max_profiles == 0 {
            tracing::info!("Profile cap is 0, nothing to scrape");
            return profiles;
        }

        // Scoped to this call so repeated runs never share state.
        let mut seen_urls: HashSet<String> = HashSet::new();
        let mut frontier = self.frontier(keyword);

        while let Some(profile_url) = frontier.next_url().await {
            if !seen_urls.insert(profile_url.to_string()) {
                tracing::debug!("Skipping already seen profile {}", profile_url);
                continue;
            }

            tracing::info!(
                "Scraping profile {}/{}: {}",
                profiles.len() + 1,
                max_profiles,
                profile_url
            );

            match self.scrape_profile(&profile_url).await {
                Ok(profile) => profiles.push(profile),
                Err(e) => {
                    tracing::warn!("Failed to scrape profile {}: {}", profile_url, e);
                    continue;
                }
            }

            if profiles.len() >= max_profiles {
                tracing::info!("Reached requested max profiles = {}", max_profiles);
                break;
            }
        }

        tracing::info!(
            "Collected {} profiles from {} search pages",
            profiles.len(),
            frontier.pages_visited()
        );

        profiles
    }

    /// Fetches and extracts a single profile page
    pub async fn scrape_profile(&self, url: &Url) -> Result<ProfileRecord, ScrapeError> {
        let html = self
            .fetcher
            .fetch(url.as_str())
            .await
            .ok_or_else(|| ScrapeError::EmptyResponse {
                url: url.to_string(),
            })?;

        Ok(extract_profile(&html, url))
    }
}
