//! HTML table exporter

use crate::output::traits::{Exporter, OutputResult, Table};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Standalone HTML document containing one table
pub struct HtmlExporter;

impl Exporter for HtmlExporter {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn write(&self, records: &[Value], path: &Path) -> OutputResult<()> {
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let html = format_html_table(&Table::from_records(records), &title);

        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(html.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Renders a table as an HTML document
pub fn format_html_table(table: &Table, title: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("</head>\n<body>\n");
    html.push_str("<table border=\"1\" class=\"dataframe\">\n");

    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    for column in &table.columns {
        html.push_str(&format!("      <th>{}</th>\n", escape_html(column)));
    }
    html.push_str("    </tr>\n  </thead>\n");

    html.push_str("  <tbody>\n");
    for row in &table.rows {
        html.push_str("    <tr>\n");
        for cell in row {
            html.push_str(&format!("      <td>{}</td>\n", escape_html(&cell.to_text())));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n");

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
