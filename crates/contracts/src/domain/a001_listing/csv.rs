//! Minimal CSV reader for bulk listing uploads.
//!
//! Lines are split on `\n` and fields on `,`. Quoting and escaping are not
//! supported; a comma inside a value shifts the remaining columns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::form::ListingForm;

/// One data line keyed by header name.
pub type CsvRecord = HashMap<String, String>;

/// Columns the listings service needs on every uploaded row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["product_type", "quantity", "unit", "pickup_window_duration"];

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|v| v.trim().to_string()).collect()
}

/// Header line followed by data lines. Fewer than two lines yields nothing.
fn header_and_rows(text: &str) -> Option<(Vec<String>, Vec<&str>)> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return None;
    }
    let headers = split_fields(lines[0]);
    let rows = lines[1..]
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect();
    Some((headers, rows))
}

fn to_record(headers: &[String], line: &str) -> CsvRecord {
    let values = split_fields(line);
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (header.clone(), values.get(idx).cloned().unwrap_or_default()))
        .collect()
}

/// Parse CSV text into header-keyed records. Missing trailing values are
/// filled with `""`; extra values are dropped.
pub fn parse_csv(text: &str) -> Vec<CsvRecord> {
    match header_and_rows(text) {
        Some((headers, rows)) => rows.into_iter().map(|line| to_record(&headers, line)).collect(),
        None => Vec::new(),
    }
}

impl ListingForm {
    /// Form state for one CSV row. Rows without an `upload_method` column
    /// count as CSV uploads.
    pub fn from_csv_record(record: &CsvRecord) -> Self {
        let field = |name: &str| record.get(name).cloned().unwrap_or_default();
        let upload_method = match field("upload_method") {
            m if m.is_empty() => "csv".to_string(),
            m => m,
        };
        ListingForm {
            product_type: field("product_type"),
            quantity: field("quantity"),
            unit: field("unit"),
            upload_method,
            pickup_window_duration: field("pickup_window_duration"),
            category: field("category"),
            description: field("description"),
            original_price: field("original_price"),
            discounted_price: field("discounted_price"),
            expiry_date: field("expiry_date"),
        }
    }
}

/// Summary of a CSV file shown before it is uploaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub row_count: usize,
    pub missing_columns: Vec<String>,
    /// `Row N: <message>` for every row that would fail the add-item checks.
    pub row_errors: Vec<String>,
}

impl CsvPreview {
    pub fn from_text(text: &str) -> Self {
        let Some((headers, rows)) = header_and_rows(text) else {
            return CsvPreview {
                headers: text
                    .trim()
                    .lines()
                    .next()
                    .map(split_fields)
                    .unwrap_or_default(),
                ..Default::default()
            };
        };

        let missing_columns = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect();

        let row_errors = rows
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let record = to_record(&headers, line);
                ListingForm::from_csv_record(&record)
                    .validate()
                    .err()
                    .map(|e| format!("Row {}: {}", idx + 1, e))
            })
            .collect();

        CsvPreview {
            row_count: rows.len(),
            headers,
            missing_columns,
            row_errors,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.row_count > 0 && self.missing_columns.is_empty() && self.row_errors.is_empty()
    }
}
