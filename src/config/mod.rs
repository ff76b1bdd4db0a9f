//! Settings module for Folio-Scout
//!
//! This module loads the optional settings file and merges it over built-in
//! defaults. Loading never fails: a missing or unreadable file, or any single
//! invalid value, falls back to the default with a logged warning.
//!
//! # Example
//!
//! ```no_run
//! use folio_scout::config::load_settings;
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("config/settings.toml"));
//! println!("Crawling at most {} pages", settings.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Settings, DEFAULT_BASE_URL, DEFAULT_DELAY_RANGE, DEFAULT_KEYWORD, DEFAULT_MAX_PAGES,
    DEFAULT_MAX_PROFILES, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser and validation functions
pub use parser::{load_settings, merge_settings, read_settings_table};
pub use validation::{validate_delay_range, MIN_DELAY_RANGE};
