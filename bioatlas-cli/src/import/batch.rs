//! Batched submission of mapped records
//!
//! Records go out in contiguous, order-preserving batches, one request at a
//! time, with a short pause between requests to stay under the backend's
//! rate limits. A failed batch does not stop the rest: its error is recorded
//! and the next batch is attempted. Failed batches are never retried.

use std::time::Duration;

use chrono::Utc;
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

use super::validate::NO_DATA;
use crate::api::SpeciesSink;
use crate::species::{SpeciesRow, UploadRecord};

pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(100);

/// Batch sizing and pacing for an upload
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Records per insert request
    pub batch_size: usize,
    /// Pause between consecutive requests
    pub delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            delay: DEFAULT_BATCH_DELAY,
        }
    }
}

impl BatchConfig {
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::new()
    }

    /// Number of requests needed for `records` records
    pub fn batch_count(&self, records: usize) -> usize {
        records.div_ceil(self.batch_size.max(1))
    }
}

#[derive(Debug)]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: BatchConfig::default(),
        }
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.config.delay = delay;
        self
    }

    pub fn build(self) -> BatchConfig {
        self.config
    }
}

impl Default for BatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an upload. Failures may be partial: `inserted_count` is what
/// actually landed even when `success` is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUploadResult {
    pub success: bool,
    pub inserted_count: usize,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
}

impl BatchUploadResult {
    /// Upload refused before anything was sent
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            inserted_count: 0,
            errors: vec![message.into()],
            data: None,
        }
    }

    pub fn inserted(data: Vec<Value>) -> Self {
        Self {
            success: true,
            inserted_count: data.len(),
            errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Some records landed and some did not
    pub fn is_partial(&self) -> bool {
        !self.success && self.inserted_count > 0
    }

    fn absorb(&mut self, other: BatchUploadResult) {
        self.inserted_count += other.inserted_count;
        self.errors.extend(other.errors);
        if let Some(rows) = other.data {
            self.data.get_or_insert_with(Vec::new).extend(rows);
        }
    }
}

/// Insert one batch with a single call to the sink
pub async fn upload_batch(rows: &[SpeciesRow], sink: &dyn SpeciesSink) -> BatchUploadResult {
    if rows.is_empty() {
        return BatchUploadResult::rejected(NO_DATA);
    }

    match sink.insert_species(rows).await {
        Ok(data) => BatchUploadResult::inserted(data),
        Err(e) => {
            error!("Bulk upload of {} records failed: {}", rows.len(), e);
            BatchUploadResult::rejected(e.to_string())
        }
    }
}

/// Submit all records in sequential batches and aggregate the outcome
pub async fn batch_upload(
    records: Vec<UploadRecord>,
    sink: &dyn SpeciesSink,
    config: &BatchConfig,
) -> BatchUploadResult {
    if records.is_empty() {
        return BatchUploadResult::rejected(NO_DATA);
    }

    let batch_size = config.batch_size.max(1);
    let batch_count = config.batch_count(records.len());
    let mut records = records.into_iter();
    let mut outcome = BatchUploadResult::default();

    for index in 0..batch_count {
        let stamped_at = Utc::now();
        let batch: Vec<SpeciesRow> = records
            .by_ref()
            .take(batch_size)
            .map(|record| SpeciesRow::stamped(record, stamped_at))
            .collect();

        info!(
            "Processing batch {}/{} ({} records)",
            index + 1,
            batch_count,
            batch.len()
        );
        outcome.absorb(upload_batch(&batch, sink).await);

        if index + 1 < batch_count {
            tokio::time::sleep(config.delay).await;
        }
    }

    outcome.success = outcome.errors.is_empty();
    info!(
        "Upload finished: {} inserted, {} errors",
        outcome.inserted_count,
        outcome.errors.len()
    );
    outcome
}
