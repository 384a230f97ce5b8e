//! Structural checks on the row sequence before mapping

use std::iter::Peekable;

use super::ImportError;

/// Result message when a file has no rows at all
pub const NO_DATA: &str = "No data provided for upload";

/// Result message when every data row was filtered out by the mapper
pub const NO_VALID_RECORDS: &str = "No valid records found to upload";

/// Reject a row sequence that is completely empty.
///
/// Only the first row is pulled, so the sequence can still be consumed
/// afterwards. Individual rows are not inspected here; blank rows are
/// dropped by the mapper.
pub fn validate_rows<I: Iterator>(rows: I) -> Result<Peekable<I>, ImportError> {
    let mut rows = rows.peekable();
    if rows.peek().is_none() {
        return Err(ImportError::validation(NO_DATA));
    }
    Ok(rows)
}
