//! Read the first sheet of an uploaded spreadsheet into positional rows
//!
//! Workbooks (xlsx, xlsm, xlsb, xls, ods) go through calamine; `.csv` files
//! through the csv crate. Only the first sheet is read and the header row is
//! passed through untouched.

use std::io::{Cursor, Read};
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use encoding_rs::WINDOWS_1252;
use log::debug;

use super::cell::{Cell, RawRow};
use crate::import::ImportError;

/// Input formats accepted by the reader, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Workbook,
    Csv,
}

impl SpreadsheetFormat {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            other => Err(ImportError::read(format!(
                "unsupported file type '.{}' (expected .xlsx, .xls, .xlsb, .ods or .csv)",
                other
            ))),
        }
    }
}

/// Rows of a sheet, produced on demand and consumed once.
///
/// Row and column positions are absolute: blank leading rows and columns
/// that the workbook does not store are yielded as empty cells so the
/// header stays at row 0 and column indices match the sheet.
#[derive(Debug)]
pub struct SheetRows {
    source: RowSource,
}

#[derive(Debug)]
enum RowSource {
    Workbook {
        range: Range<Data>,
        first_row: usize,
        first_col: usize,
        total: usize,
        next: usize,
    },
    Delimited(std::vec::IntoIter<RawRow>),
}

impl SheetRows {
    fn from_range(range: Range<Data>) -> Self {
        let (first_row, first_col) = range
            .start()
            .map(|(row, col)| (row as usize, col as usize))
            .unwrap_or((0, 0));
        let total = if range.is_empty() {
            0
        } else {
            first_row + range.height()
        };

        Self {
            source: RowSource::Workbook {
                range,
                first_row,
                first_col,
                total,
                next: 0,
            },
        }
    }

    fn from_rows(rows: Vec<RawRow>) -> Self {
        Self {
            source: RowSource::Delimited(rows.into_iter()),
        }
    }
}

impl Iterator for SheetRows {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        match &mut self.source {
            RowSource::Workbook {
                range,
                first_row,
                first_col,
                total,
                next,
            } => {
                if *next >= *total {
                    return None;
                }
                let row_idx = *next;
                *next += 1;

                if row_idx < *first_row {
                    return Some(RawRow::empty());
                }

                let relative = row_idx - *first_row;
                let mut cells = vec![Cell::Empty; *first_col];
                cells.extend(
                    (0..range.width())
                        .map(|col| range.get((relative, col)).map(Cell::from).unwrap_or(Cell::Empty)),
                );
                Some(RawRow::new(cells))
            }
            RowSource::Delimited(rows) => rows.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            RowSource::Workbook { total, next, .. } => {
                let remaining = total.saturating_sub(*next);
                (remaining, Some(remaining))
            }
            RowSource::Delimited(rows) => rows.size_hint(),
        }
    }
}

/// Read the first sheet of a spreadsheet file
pub fn read_spreadsheet<P: AsRef<Path>>(path: P) -> Result<SheetRows, ImportError> {
    let path = path.as_ref();
    match SpreadsheetFormat::from_path(path)? {
        SpreadsheetFormat::Workbook => {
            let bytes = std::fs::read(path).map_err(|e| {
                ImportError::read(format!("failed to open {}: {}", path.display(), e))
            })?;
            debug!("Read {} bytes from {}", bytes.len(), path.display());
            read_workbook_bytes(bytes)
        }
        SpreadsheetFormat::Csv => {
            let file = std::fs::File::open(path).map_err(|e| {
                ImportError::read(format!("failed to open {}: {}", path.display(), e))
            })?;
            read_csv(file)
        }
    }
}

/// Read the first sheet of a workbook held in memory
pub fn read_workbook_bytes(bytes: Vec<u8>) -> Result<SheetRows, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => Range::empty(),
    };
    debug!("First sheet is {} rows x {} columns", range.height(), range.width());
    Ok(SheetRows::from_range(range))
}

/// Read comma-separated rows. Ragged rows are allowed.
///
/// Fields that are not valid UTF-8 are decoded as Windows-1252, which is
/// what spreadsheet programs write when saving CSV with a legacy code page.
pub fn read_csv<R: Read>(reader: R) -> Result<SheetRows, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record?;
        rows.push(record.iter().map(decode_field).collect::<RawRow>());
    }
    debug!("Read {} csv rows", rows.len());
    Ok(SheetRows::from_rows(rows))
}

fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
    }
}
