//! Exporter trait and associated error and table types
//!
//! Exporters receive records as plain JSON values, not as record structs, so
//! they work for any flat or nested row shape.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for export operations
pub type OutputResult<T> = Result<T, ExportError>;

/// Writes a sequence of records to one file format
pub trait Exporter {
    /// File extension without the dot
    fn extension(&self) -> &'static str;

    /// Writes `records` to `path`, replacing any existing file
    ///
    /// An empty slice must still produce a well-formed file.
    fn write(&self, records: &[Value], path: &Path) -> OutputResult<()>;
}

/// One cell of a flattened record
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Cell {
    /// Converts a JSON value; arrays and objects become compact JSON text
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => Cell::Number(n.clone()),
            Value::String(s) => Cell::Text(s.clone()),
            nested => Cell::Text(nested.to_string()),
        }
    }

    /// Plain text rendering used by text-based formats
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

/// Records flattened into columns and rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Union of record keys, in first-seen order
    pub columns: Vec<String>,

    /// One row per record, aligned with `columns`
    pub rows: Vec<Vec<Cell>>,
}

/// Column name used for records that are not JSON objects
pub const SCALAR_COLUMN: &str = "value";

impl Table {
    /// Flattens records into a table
    ///
    /// Missing keys become empty cells. No records means no columns.
    pub fn from_records(records: &[Value]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            let keys: Vec<&str> = match record {
                Value::Object(map) => map.keys().map(String::as_str).collect(),
                _ => vec![SCALAR_COLUMN],
            };
            for key in keys {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.to_string());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| match record {
                        Value::Object(map) => map.get(column).map_or(Cell::Empty, Cell::from_value),
                        scalar if column == SCALAR_COLUMN => Cell::from_value(scalar),
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
