//! Folio-Scout main entry point
//!
//! Command-line interface: scrape freelancer profiles for a keyword and export
//! them. Exit codes: 0 success, 1 scraping failure, 2 unsupported export
//! format, 3 export failure.

use clap::Parser;
use folio_scout::config::load_settings;
use folio_scout::crawler::{Scraper, ScraperConfig};
use folio_scout::output::{base_filename, parse_format_list, ExportError, ExportManager};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_SCRAPE_FAILED: u8 = 1;
const EXIT_UNSUPPORTED_FORMAT: u8 = 2;
const EXIT_EXPORT_FAILED: u8 = 3;

/// Folio-Scout: freelancer directory scraper
///
/// Walks the search results for a keyword, extracts one record per profile and
/// writes the records as JSON, CSV, Excel and/or HTML.
#[derive(Parser, Debug)]
#[command(name = "folio-scout")]
#[command(version)]
#[command(about = "Scrapes freelancer profiles from a portfolio site search", long_about = None)]
struct Cli {
    /// Keyword to search for (e.g. "graphic designer")
    #[arg(short, long)]
    keyword: Option<String>,

    /// Maximum number of profiles to scrape
    #[arg(short = 'n', long)]
    max_profiles: Option<usize>,

    /// Directory to store output files
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Comma-separated output formats: json,csv,excel,html
    #[arg(short, long, default_value = "json")]
    formats: String,

    /// Path to the settings file (TOML, or JSON by extension)
    #[arg(short, long, value_name = "FILE", default_value = "config/settings.toml")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let settings = load_settings(&cli.config);

    let keyword = cli
        .keyword
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| settings.default_keyword.clone());
    let max_profiles = cli.max_profiles.unwrap_or(settings.default_max_profiles);
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| settings.output_dir.clone());

    // Reject bad format names before touching the network.
    let formats = match parse_format_list(&cli.formats) {
        Ok(formats) => formats,
        Err(e) => {
            tracing::error!("Export failed due to unsupported format: {}", e);
            return ExitCode::from(EXIT_UNSUPPORTED_FORMAT);
        }
    };

    tracing::info!("Starting scrape for keyword '{}'", keyword);
    let scraper = match Scraper::new(ScraperConfig::from(&settings)) {
        Ok(scraper) => scraper,
        Err(e) => {
            tracing::error!("Unexpected error during scraping: {}", e);
            return ExitCode::from(EXIT_SCRAPE_FAILED);
        }
    };

    let profiles = scraper.run(&keyword, max_profiles).await;
    tracing::info!("Scraping complete. Collected {} profiles", profiles.len());

    let records = match profiles
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Unexpected error while preparing records: {}", e);
            return ExitCode::from(EXIT_SCRAPE_FAILED);
        }
    };

    let base = base_filename(&keyword, chrono::Utc::now());
    let result = ExportManager::new(&output_dir)
        .and_then(|exporter| exporter.export_formats(&records, &formats, &base));

    match result {
        Ok(paths) => {
            for path in &paths {
                tracing::info!("Wrote {}", path.display());
            }
            tracing::info!("All done. Files written under '{}'", output_dir.display());
            ExitCode::SUCCESS
        }
        Err(ExportError::UnsupportedFormat(format)) => {
            tracing::error!("Export failed due to unsupported format: {}", format);
            ExitCode::from(EXIT_UNSUPPORTED_FORMAT)
        }
        Err(e) => {
            tracing::error!("Unexpected error during export: {}", e);
            ExitCode::from(EXIT_EXPORT_FAILED)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("folio_scout=info,warn"),
            1 => EnvFilter::new("folio_scout=debug,info"),
            2 => EnvFilter::new("folio_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
