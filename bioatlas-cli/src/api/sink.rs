//! Persistence seam for species rows

use async_trait::async_trait;
use serde_json::Value;

use crate::import::ImportError;
use crate::species::SpeciesRow;

/// Write sink for mapped species rows.
///
/// One call inserts one batch. Implementations return the inserted rows as
/// reported by the backend (at most `rows.len()` of them) or an
/// `ImportError::Write` describing the failure.
#[async_trait]
pub trait SpeciesSink: Send + Sync {
    async fn insert_species(&self, rows: &[SpeciesRow]) -> Result<Vec<Value>, ImportError>;
}

/// Sink for `--dry-run`: accepts every batch and echoes the rows back
/// without contacting the backend
#[derive(Debug, Default)]
pub struct PreviewSink;

#[async_trait]
impl SpeciesSink for PreviewSink {
    async fn insert_species(&self, rows: &[SpeciesRow]) -> Result<Vec<Value>, ImportError> {
        rows.iter()
            .map(|row| serde_json::to_value(row).map_err(|e| ImportError::write(e.to_string())))
            .collect()
    }
}
