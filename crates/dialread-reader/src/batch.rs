//! Batch reading
//!
//! Reads a batch of crops on a local worker pool. Crops are independent:
//! the output holds one outcome per input crop, in input order, whatever the
//! worker count. A crop that fails (wrong mask size, or a panic inside the
//! pipeline) is reported as [`CropOutcome::Failed`] and does not affect the
//! others.

use crate::error::ReaderResult;
use crate::reader::MeterReader;
use dialread_core::{LabelGrid, Reading, ReaderConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Result of reading one crop of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropOutcome {
    /// The crop was read
    Read(Reading),
    /// The crop could not be read
    Failed(String),
}

impl CropOutcome {
    /// The reading, if the crop succeeded.
    pub fn reading(&self) -> Option<&Reading> {
        match self {
            CropOutcome::Read(r) => Some(r),
            CropOutcome::Failed(_) => None,
        }
    }

    /// Check whether the crop failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, CropOutcome::Failed(_))
    }
}

/// Outcomes of a batch, indexed like the input crops
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<CropOutcome>,
}

impl BatchReport {
    /// Number of crops in the batch
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Successful readings, `None` at failed positions.
    pub fn readings(&self) -> Vec<Option<Reading>> {
        self.outcomes.iter().map(|o| o.reading().copied()).collect()
    }

    /// Indices of the crops that failed
    pub fn failed_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_failed())
            .map(|(i, _)| i)
            .collect()
    }
}

/// A meter reader bound to a worker pool
#[derive(Debug)]
pub struct BatchReader {
    reader: MeterReader,
    pool: rayon::ThreadPool,
}

impl BatchReader {
    /// Build a batch reader with `workers` threads (at least one).
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid configuration, or if the worker pool
    /// cannot be started.
    pub fn new(config: ReaderConfig, workers: usize) -> ReaderResult<Self> {
        let reader = MeterReader::new(config)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .build()?;
        Ok(Self { reader, pool })
    }

    /// The single-crop reader shared by the workers
    pub fn reader(&self) -> &MeterReader {
        &self.reader
    }

    /// Number of worker threads
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Read every crop of `masks`.
    pub fn read_batch(&self, masks: &[LabelGrid]) -> BatchReport {
        let reader = &self.reader;
        // each outcome is written to the slot of its crop index
        let mut outcomes = Vec::with_capacity(masks.len());
        self.pool.install(|| {
            masks
                .par_iter()
                .map(|mask| read_crop(reader, mask))
                .collect_into_vec(&mut outcomes)
        });
        let report = BatchReport { outcomes };

        let failed = report.failed_indices();
        if !failed.is_empty() {
            tracing::warn!(failed = ?failed, total = report.len(), "crops failed");
        }
        tracing::debug!(
            crops = report.len(),
            failed = failed.len(),
            workers = self.workers(),
            "batch read"
        );
        report
    }
}

/// Read a batch with a pool of `workers` threads built for this call.
pub fn read_batch(
    config: ReaderConfig,
    masks: &[LabelGrid],
    workers: usize,
) -> ReaderResult<BatchReport> {
    Ok(BatchReader::new(config, workers)?.read_batch(masks))
}

fn read_crop(reader: &MeterReader, mask: &LabelGrid) -> CropOutcome {
    match catch_unwind(AssertUnwindSafe(|| reader.read(mask))) {
        Ok(Ok(reading)) => CropOutcome::Read(reading),
        Ok(Err(e)) => CropOutcome::Failed(e.to_string()),
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            CropOutcome::Failed(format!("panic: {msg}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialread_test::{SyntheticDial, exact_geometry};

    fn crops() -> Vec<LabelGrid> {
        (0..6)
            .map(|i| {
                SyntheticDial::new(exact_geometry())
                    .ticks_evenly(10, 30, 10, 5)
                    .pointer(25 + 40 * i, 28 + 40 * i)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_worker_count_does_not_change_output() {
        let config = ReaderConfig::default().with_geometry(exact_geometry());
        let masks = crops();
        let one = read_batch(config.clone(), &masks, 1).unwrap();
        let many = read_batch(config, &masks, 8).unwrap();
        assert_eq!(one, many);
        assert_eq!(
            serde_json::to_string(&one).unwrap(),
            serde_json::to_string(&many).unwrap()
        );
    }

    #[test]
    fn test_order_preserved() {
        let config = ReaderConfig::default().with_geometry(exact_geometry());
        let masks = crops();
        let batch = BatchReader::new(config, 4).unwrap();
        let report = batch.read_batch(&masks);
        assert_eq!(report.len(), masks.len());
        for (mask, outcome) in masks.iter().zip(&report.outcomes) {
            let single = batch.reader().read(mask).unwrap();
            assert_eq!(outcome, &CropOutcome::Read(single));
        }
        // pointer moves right along the batch
        let ratios: Vec<f64> = report
            .readings()
            .into_iter()
            .map(|r| r.unwrap().ratio.to_sentinel())
            .collect();
        assert!(ratios.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bad_crop_isolated() {
        let config = ReaderConfig::default().with_geometry(exact_geometry());
        let mut masks = crops();
        masks.insert(2, LabelGrid::new(100, 100).unwrap());
        let report = read_batch(config, &masks, 3).unwrap();
        assert_eq!(report.failed_indices(), vec![2]);
        assert_eq!(report.readings().iter().filter(|r| r.is_some()).count(), 6);
    }

    #[test]
    fn test_zero_workers_uses_one() {
        let batch = BatchReader::new(ReaderConfig::default(), 0).unwrap();
        assert_eq!(batch.workers(), 1);
        assert!(batch.read_batch(&[]).is_empty());
    }
}
