//! Batch reading regression test
//!
//! Tests:
//!   (1) Batch results do not depend on the worker count
//!   (2) Batch results equal single-crop reads, in input order
//!   (3) Malformed crops fail alone
//!
//! Run with:
//! ```
//! cargo test -p dialread-reader --test batch_reg
//! ```

use dialread_core::{DialGeometry, LabelGrid, ReaderConfig};
use dialread_reader::{BatchReader, CropOutcome, MeterReader, read_batch};
use dialread_test::{RegParams, SyntheticDial};

/// Crops on the default geometry with the pointer moving across the dial.
fn make_crops(count: u32) -> Vec<LabelGrid> {
    (0..count)
        .map(|i| {
            let start = 25 + 90 * i;
            SyntheticDial::new(DialGeometry::default())
                .ticks_evenly(10, 30, 50, 6)
                .pointer(start, start + 3)
                .build()
                .expect("build crop")
        })
        .collect()
}

#[test]
fn batch_reg_worker_independence() {
    let mut rp = RegParams::new("batch_workers");

    let masks = make_crops(16);
    let baseline = read_batch(ReaderConfig::default(), &masks, 1).expect("batch 1");
    let baseline_json = serde_json::to_string(&baseline).expect("serialize");

    for workers in [2, 4, 8] {
        let report = read_batch(ReaderConfig::default(), &masks, workers).expect("batch");
        let json = serde_json::to_string(&report).expect("serialize");
        if rp.display() {
            eprintln!("  workers = {}: {} crops", workers, report.len());
        }
        rp.compare_strings(baseline_json.as_bytes(), json.as_bytes());
    }

    assert!(rp.cleanup(), "batch_workers regression test failed");
}

#[test]
fn batch_reg_matches_single() {
    let mut rp = RegParams::new("batch_single");

    let masks = make_crops(12);
    let single = MeterReader::new(ReaderConfig::default()).expect("reader");
    let batch = BatchReader::new(ReaderConfig::default(), 4).expect("batch reader");
    let report = batch.read_batch(&masks);

    rp.compare_values(masks.len() as f64, report.len() as f64, 0.0);
    for (mask, outcome) in masks.iter().zip(&report.outcomes) {
        let expected = single.read(mask).expect("single read");
        let got = outcome.reading().copied().expect("batch read");
        rp.compare_values(expected.scale_num as f64, got.scale_num as f64, 0.0);
        rp.compare_measurement(expected.scale_index, got.scale_index, 0.0);
        rp.compare_measurement(expected.ratio, got.ratio, 0.0);
    }

    assert!(rp.cleanup(), "batch_single regression test failed");
}

#[test]
fn batch_reg_failure_isolation() {
    let mut rp = RegParams::new("batch_failures");

    let mut masks = make_crops(6);
    masks.insert(0, LabelGrid::new(511, 512).expect("short mask"));
    masks.push(LabelGrid::new(1, 1).expect("tiny mask"));

    let report = read_batch(ReaderConfig::default(), &masks, 3).expect("batch");
    let failed = report.failed_indices();
    rp.compare_values(2.0, failed.len() as f64, 0.0);
    rp.compare_values(0.0, failed[0] as f64, 0.0);
    rp.compare_values(7.0, failed[1] as f64, 0.0);

    for outcome in &report.outcomes[1..7] {
        let ok = matches!(outcome, CropOutcome::Read(r) if r.scale_num == 50);
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "batch_failures regression test failed");
}
