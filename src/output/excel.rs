//! Excel (xlsx) exporter

use crate::output::traits::{Cell, Exporter, OutputResult, Table};
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use std::path::Path;

/// Longest string a single xlsx cell accepts
const MAX_CELL_CHARS: usize = 32_767;

/// Single-worksheet workbook with a header row
pub struct ExcelExporter;

impl Exporter for ExcelExporter {
    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn write(&self, records: &[Value], path: &Path) -> OutputResult<()> {
        let table = Table::from_records(records);
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, name) in table.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, name)?;
        }

        for (index, row) in table.rows.iter().enumerate() {
            let row_num = (index + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Empty => {}
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col, truncate_cell(text))?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(row_num, col, n.as_f64().unwrap_or_default())?;
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(row_num, col, *b)?;
                    }
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}

fn truncate_cell(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            tracing::warn!("Truncating cell of {} characters for xlsx", text.chars().count());
            &text[..end]
        }
        None => text,
    }
}
