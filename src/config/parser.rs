use crate::config::types::Settings;
use crate::config::validation::{
    parse_base_url, parse_delay_range, parse_non_empty_string, parse_positive_u32,
    parse_positive_u64, parse_positive_usize,
};
use crate::ConfigError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Loads settings from `path`, falling back to defaults
///
/// Never fails. A missing file, an unreadable or malformed file, or a root that
/// is not a table yields the built-in defaults; invalid individual values fall
/// back one key at a time. Every fallback is logged as a warning.
///
/// Files ending in `.json` are read as JSON, anything else as TOML.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        tracing::warn!(
            "Settings file not found at {}, using built-in defaults",
            path.display()
        );
        return Settings::default();
    }

    match read_settings_table(path) {
        Ok(table) => {
            let settings = merge_settings(&table);
            tracing::debug!("Loaded settings: {:?}", settings);
            settings
        }
        Err(e) => {
            tracing::warn!(
                "Failed to read settings from {}: {}; falling back to built-in defaults",
                path.display(),
                e
            );
            Settings::default()
        }
    }
}

/// Reads and parses the settings file into a key/value table
///
/// # Returns
///
/// * `Ok(Map)` - The root table
/// * `Err(ConfigError)` - The file could not be read or parsed, or its root is
///   not a table
pub fn read_settings_table(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let value: Value = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };

    match value {
        Value::Object(table) => Ok(table),
        _ => Err(ConfigError::NotATable),
    }
}

/// Merges a settings table over the defaults, one key at a time
///
/// Keys are kebab-case (`max-pages`); the snake_case spelling is accepted too.
/// `behance-base-url` is read when `base-url` is absent.
pub fn merge_settings(table: &Map<String, Value>) -> Settings {
    let defaults = Settings::default();

    Settings {
        base_url: merge_key(
            table,
            &["base-url", "behance-base-url"],
            parse_base_url,
            defaults.base_url,
        ),
        delay_range: merge_key(
            table,
            &["delay-range"],
            parse_delay_range,
            defaults.delay_range,
        ),
        max_pages: merge_key(table, &["max-pages"], parse_positive_u32, defaults.max_pages),
        default_keyword: merge_key(
            table,
            &["default-keyword"],
            parse_non_empty_string,
            defaults.default_keyword,
        ),
        default_max_profiles: merge_key(
            table,
            &["default-max-profiles"],
            parse_positive_usize,
            defaults.default_max_profiles,
        ),
        output_dir: merge_key(
            table,
            &["output-dir"],
            |value| parse_non_empty_string(value).map(PathBuf::from),
            defaults.output_dir,
        ),
        user_agent: merge_key(
            table,
            &["user-agent"],
            parse_non_empty_string,
            defaults.user_agent,
        ),
        request_timeout_secs: merge_key(
            table,
            &["request-timeout-secs"],
            parse_positive_u64,
            defaults.request_timeout_secs,
        ),
    }
}

/// Looks up the first of `keys` present, in kebab-case or snake_case
fn merge_key<T>(
    table: &Map<String, Value>,
    keys: &[&str],
    parse: impl Fn(&Value) -> Option<T>,
    default: T,
) -> T {
    let found = keys.iter().find_map(|key| {
        table
            .get(*key)
            .or_else(|| table.get(&key.replace('-', "_")))
            .map(|value| (*key, value))
    });

    let Some((key, value)) = found else {
        return default;
    };

    match parse(value) {
        Some(parsed) => parsed,
        None => {
            tracing::warn!("Invalid {} in settings ({}); using default", key, value);
            default
        }
    }
}
