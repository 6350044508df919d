//! dialread-reader - Meter reading from dial segmentation masks
//!
//! This crate turns a per-pixel label mask of a circular dial into a
//! reading:
//!
//! - **Reduction**: per-column pointer and scale counts of the unrolled strip
//! - **Denoising**: mean filtering of the scale signal
//! - **Bands**: tick and pointer bands located by an adjacent-pair scan
//! - **Calculation**: scale-index and ratio from band midpoints
//! - **Value**: physical meter value from a reading
//! - **Batch**: order-preserving parallel reading of many crops
//!
//! # Example
//!
//! ```
//! use dialread_core::{LabelGrid, ReaderConfig};
//! use dialread_reader::MeterReader;
//!
//! let reader = MeterReader::new(ReaderConfig::default()).unwrap();
//! let reading = reader.read(&LabelGrid::new(512, 512).unwrap()).unwrap();
//! assert_eq!(reading.scale_num, 0);
//! assert_eq!(reading.ratio.to_sentinel(), -1.0);
//! ```

pub mod band;
pub mod batch;
pub mod calc;
pub mod denoise;
mod error;
pub mod reader;
pub mod reduce;
pub mod value;

pub use band::{Band, Bands, band_midpoints, bands, pointer_band};
pub use batch::{BatchReader, BatchReport, CropOutcome, read_batch};
pub use calc::{EPS, compute_reading};
pub use denoise::{mean_filter, mean_filtered};
pub use error::{ReaderError, ReaderResult};
pub use reader::{MeterReader, ReadTrace};
pub use reduce::{ColumnSignals, reduce_columns};
pub use value::meter_value;
