//! Spreadsheet bulk import
//!
//! read -> validate -> map -> batch upload. The header row is always the
//! first row of the sheet and is skipped before mapping.

pub mod batch;
pub mod drive;
pub mod error;
pub mod mapper;
pub mod sheet;
pub mod validate;

use std::path::Path;

use log::{info, warn};

pub use batch::{BatchConfig, BatchUploadResult, batch_upload};
pub use error::ImportError;
pub use validate::NO_VALID_RECORDS;

use mapper::map_rows;
use sheet::{RawRow, read_spreadsheet};
use validate::validate_rows;

use crate::api::SpeciesSink;
use crate::species::{Category, UploadRecord};

/// Records mapped from a sheet, ready to submit
#[derive(Debug, Clone)]
pub struct PreparedImport {
    /// Data rows read, header excluded
    pub row_count: usize,
    pub records: Vec<UploadRecord>,
}

impl PreparedImport {
    /// Data rows dropped because their identifying cell was blank
    pub fn skipped(&self) -> usize {
        self.row_count - self.records.len()
    }
}

/// Validate and map an already-read row sequence
pub fn prepare_rows<I>(rows: I, category: Category) -> Result<PreparedImport, ImportError>
where
    I: Iterator<Item = RawRow>,
{
    let data_rows: Vec<RawRow> = validate_rows(rows)?.skip(1).collect();
    let row_count = data_rows.len();
    let records = map_rows(data_rows, category);

    if records.is_empty() {
        warn!("No {} records in {} data rows", category.key(), row_count);
        return Err(ImportError::validation(NO_VALID_RECORDS));
    }

    let prepared = PreparedImport { row_count, records };
    info!(
        "Mapped {} {} records ({} rows skipped)",
        prepared.records.len(),
        category,
        prepared.skipped()
    );
    Ok(prepared)
}

/// Full import of a file into the sink.
///
/// The category is checked before the file is opened. Validation failures
/// become a rejected result with nothing sent; read failures and unknown
/// categories are returned as errors.
pub async fn run_import(
    path: &Path,
    category: &str,
    sink: &dyn SpeciesSink,
    config: &BatchConfig,
) -> Result<BatchUploadResult, ImportError> {
    let category: Category = category.parse()?;
    let rows = read_spreadsheet(path)?;
    run_import_rows(rows, category, sink, config).await
}

/// Same as [`run_import`] for rows that were already read
pub async fn run_import_rows<I>(
    rows: I,
    category: Category,
    sink: &dyn SpeciesSink,
    config: &BatchConfig,
) -> Result<BatchUploadResult, ImportError>
where
    I: Iterator<Item = RawRow>,
{
    match prepare_rows(rows, category) {
        Ok(prepared) => Ok(batch_upload(prepared.records, sink, config).await),
        Err(err) => settle(err),
    }
}

fn settle(err: ImportError) -> Result<BatchUploadResult, ImportError> {
    if err.is_fatal() {
        return Err(err);
    }
    Ok(BatchUploadResult::rejected(err.to_string()))
}
