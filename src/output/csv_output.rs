//! CSV exporter

use crate::output::traits::{Cell, Exporter, OutputResult, Table};
use serde_json::Value;
use std::path::Path;

/// Comma-separated file with a header row
///
/// Nested values (categories, projects, ...) are written as compact JSON.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write(&self, records: &[Value], path: &Path) -> OutputResult<()> {
        let table = Table::from_records(records);
        if table.is_empty() {
            tracing::warn!("No records to export; writing empty CSV to {}", path.display());
        }

        let mut writer = csv::Writer::from_path(path)?;
        if !table.columns.is_empty() {
            writer.write_record(&table.columns)?;
        }
        for row in &table.rows {
            writer.write_record(row.iter().map(Cell::to_text))?;
        }
        writer.flush()?;

        Ok(())
    }
}
