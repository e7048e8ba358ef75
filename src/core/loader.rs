//! Record loader.
//!
//! Reads a viewing-history CSV into [`RawRecord`]s, preserving row order.
//! Header names are matched case-insensitively after trimming, so
//! `" Title "` and `"title"` both find the title column.

use crate::models::record::{LoadReport, RawRecord};
use crate::utils::fs::ensure_input;
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header of the title column.
const TITLE_HEADER: &str = "title";

/// Header of the watch-date column.
const DATE_HEADER: &str = "date";

/// Column positions found in the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    title: usize,
    date: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Option<Self> {
        Some(Self {
            title: find_header(headers, TITLE_HEADER)?,
            date: find_header(headers, DATE_HEADER),
        })
    }
}

fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn find_header(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| normalize_header(h) == name)
}

/// Load records from a CSV file.
///
/// A missing file is reported as [`Error::InputNotFound`]; any other open
/// or decode failure is [`Error::InputRead`].
pub fn load_records(path: &Path) -> Result<LoadReport> {
    ensure_input(path)?;

    let file = File::open(path)
        .map_err(|e| Error::InputRead(format!("{}: {}", path.display(), e)))?;

    tracing::info!("Reading viewing history from {}", path.display());
    load_records_from_reader(file, &path.display().to_string())
}

/// Load records from any CSV reader.
///
/// `source` names the input in error messages.
pub fn load_records_from_reader<R: Read>(reader: R, source: &str) -> Result<LoadReport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut report = LoadReport::default();

    if headers.iter().all(|h| h.trim().is_empty()) {
        tracing::warn!("{} is empty", source);
        return Ok(report);
    }

    let columns = Columns::from_headers(&headers)
        .ok_or_else(|| Error::MissingTitleColumn(source.to_string()))?;

    if columns.date.is_none() {
        tracing::warn!("No 'Date' column in {}; dates will be blank", source);
    }

    for (row_idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| Error::InputRead(format!("{}: {}", source, e)))?;

        let title = match row.get(columns.title) {
            Some(title) if !title.trim().is_empty() => title,
            _ => {
                // Header is line 1.
                tracing::debug!("Skipping row {} without a title", row_idx + 2);
                report.skipped_rows += 1;
                continue;
            }
        };

        let date = columns
            .date
            .and_then(|i| row.get(i))
            .map(str::trim)
            .unwrap_or_default();

        report.records.push(RawRecord::new(title, date));
    }

    if report.skipped_rows > 0 {
        tracing::warn!("Skipped {} rows without a title", report.skipped_rows);
    }
    tracing::info!("Loaded {} records", report.records.len());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}Title"), "title");
        assert_eq!(normalize_header("  Date "), "date");
    }

    #[test]
    fn test_loads_in_row_order() {
        let csv = "Title,Date\nB,1/2/23\nA,1/1/23\n";
        let report = load_records_from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(
            report.records,
            vec![RawRecord::new("B", "1/2/23"), RawRecord::new("A", "1/1/23")]
        );
    }
}
