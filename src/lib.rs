//! Folio-Scout: a resilient freelancer directory scraper
//!
//! This crate walks the paginated search results of a portfolio site, extracts one
//! normalized record per profile page and hands the records to tabular exporters.
//! Extraction is built from ordered fallback heuristics so markup drift degrades
//! records to empty fields instead of failing the run.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Cannot build search URL from base {base}: {message}")]
    SearchUrl { base: String, message: String },

    #[error("Empty response when fetching profile {url}")]
    EmptyResponse { url: String },
}

/// Settings-file errors
///
/// These never abort a run: the loader logs them and falls back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Root element of the settings file must be a table")]
    NotATable,
}

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{load_settings, Settings};
pub use crawler::{PageFetcher, ProfileFrontier, Scraper, ScraperConfig};
pub use extract::extract_profile;
pub use model::{stable_id, ProfileRecord, ProjectRecord};
pub use output::{ExportError, ExportFormat, ExportManager};
