use crate::crawler::DEFAULT_USER_AGENT;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.behance.net";
pub const DEFAULT_DELAY_RANGE: (f64, f64) = (1.0, 3.0);
pub const DEFAULT_MAX_PAGES: u32 = 5;
pub const DEFAULT_KEYWORD: &str = "graphic designer";
pub const DEFAULT_MAX_PROFILES: usize = 50;
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root URL of the target site
    pub base_url: Url,

    /// Politeness delay bounds between search pages, in seconds
    pub delay_range: (f64, f64),

    /// Maximum number of search result pages to fetch
    pub max_pages: u32,

    /// Keyword used when none is given on the command line
    pub default_keyword: String,

    /// Profile cap used when none is given on the command line
    pub default_max_profiles: usize,

    /// Directory export files are written to
    pub output_dir: PathBuf,

    /// `User-Agent` header sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            delay_range: DEFAULT_DELAY_RANGE,
            max_pages: DEFAULT_MAX_PAGES,
            default_keyword: DEFAULT_KEYWORD.to_string(),
            default_max_profiles: DEFAULT_MAX_PROFILES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

pub(crate) fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
}
