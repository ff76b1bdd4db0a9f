//! Output module for exporting scraped records
//!
//! This module handles:
//! - Parsing requested format names (`json`, `csv`, `excel`/`xlsx`, `html`)
//! - Building timestamped base filenames
//! - Writing one file per format into the output directory

mod csv_output;
mod excel;
mod html;
mod json;
mod traits;

pub use csv_output::CsvExporter;
pub use excel::ExcelExporter;
pub use html::{format_html_table, HtmlExporter};
pub use json::JsonExporter;
pub use traits::{Cell, ExportError, Exporter, OutputResult, Table};

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Prefix of every export file name
pub const FILE_PREFIX: &str = "behance_freelancers";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Csv,
    Excel,
    Html,
}

impl ExportFormat {
    /// The exporter writing this format
    pub fn exporter(&self) -> Box<dyn Exporter> {
        match self {
            Self::Json => Box::new(JsonExporter),
            Self::Csv => Box::new(CsvExporter),
            Self::Excel => Box::new(ExcelExporter),
            Self::Html => Box::new(HtmlExporter),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" => Ok(Self::Excel),
            "html" => Ok(Self::Html),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Excel => "excel",
            Self::Html => "html",
        };
        write!(f, "{}", name)
    }
}

/// Parses a comma-separated format list
///
/// Blank entries are ignored, duplicates (including `excel`/`xlsx`) collapse
/// to one, and an empty list means JSON only.
///
/// # Example
///
/// ```
/// use folio_scout::output::{parse_format_list, ExportFormat};
///
/// let formats = parse_format_list("json, CSV,,xlsx").unwrap();
/// assert_eq!(formats, vec![ExportFormat::Json, ExportFormat::Csv, ExportFormat::Excel]);
/// assert!(parse_format_list("json,pdf").is_err());
/// ```
pub fn parse_format_list(list: &str) -> OutputResult<Vec<ExportFormat>> {
    parse_formats(list.split(','))
}

/// Parses individual format names; see [`parse_format_list`]
pub fn parse_formats<I, S>(names: I) -> OutputResult<Vec<ExportFormat>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut formats = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        let format = name.parse::<ExportFormat>()?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }

    if formats.is_empty() {
        formats.push(ExportFormat::Json);
    }
    Ok(formats)
}

/// Replaces every character other than alphanumerics, `-` and `_` with `_`
pub fn sanitize_keyword(keyword: &str) -> String {
    keyword
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds `<prefix>_<keyword>_<YYYYMMDDTHHMMSSZ>`
pub fn base_filename(keyword: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}",
        FILE_PREFIX,
        sanitize_keyword(keyword),
        now.format("%Y%m%dT%H%M%SZ")
    )
}

/// Writes records to every requested format in one directory
#[derive(Debug, Clone)]
pub struct ExportManager {
    output_dir: PathBuf,
}

impl ExportManager {
    /// Creates the manager, creating `output_dir` if it does not exist
    pub fn new(output_dir: impl Into<PathBuf>) -> OutputResult<Self> {
        let mut output_dir = output_dir.into();
        if output_dir.as_os_str().is_empty() {
            output_dir = PathBuf::from(".");
        }

        if !output_dir.exists() {
            tracing::info!("Creating output directory: {}", output_dir.display());
            std::fs::create_dir_all(&output_dir)?;
        }

        Ok(Self { output_dir })
    }

    /// Exports `records` to each format named in `formats`
    ///
    /// All names are validated before anything is written, so an unsupported
    /// format leaves the directory untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PathBuf>)` - Paths of the written files, in request order
    /// * `Err(ExportError)` - Unsupported format or a write failure
    pub fn export(
        &self,
        records: &[Value],
        formats: &[&str],
        base_filename: &str,
    ) -> OutputResult<Vec<PathBuf>> {
        let formats = parse_formats(formats)?;
        self.export_formats(records, &formats, base_filename)
    }

    /// Exports `records` to already parsed formats
    pub fn export_formats(
        &self,
        records: &[Value],
        formats: &[ExportFormat],
        base_filename: &str,
    ) -> OutputResult<Vec<PathBuf>> {
        tracing::debug!(
            "Exporting {} records to formats {:?} with base filename '{}'",
            records.len(),
            formats,
            base_filename
        );

        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            let exporter = format.exporter();
            let path = self
                .output_dir
                .join(format!("{}.{}", base_filename, exporter.extension()));

            tracing::info!("Writing {} output to {}", format, path.display());
            if let Err(e) = exporter.write(records, &path) {
                tracing::error!("Failed to write {} output: {}", format, e);
                return Err(e);
            }
            written.push(path);
        }

        Ok(written)
    }
}
