//! dialread - Analog meter reading from dial segmentation masks
//!
//! Given a square per-pixel label mask of a circular pressure-gauge dial
//! (background, pointer, scale tick), dialread computes where the pointer
//! sits relative to the ticks.
//!
//! # Overview
//!
//! - Polar unrolling of the dial annulus into a rectangular strip
//! - Optional erosion of the mask before unrolling
//! - Per-column pointer and tick counts, mean filtering, band location
//! - Scale-index and ratio readings, and physical meter values
//! - Order-preserving parallel batches
//!
//! # Example
//!
//! ```
//! use dialread::{LabelGrid, ReaderConfig};
//! use dialread::reader::MeterReader;
//!
//! let reader = MeterReader::new(ReaderConfig::default()).unwrap();
//! let mask = LabelGrid::new(512, 512).unwrap();
//! let reading = reader.read(&mask).unwrap();
//! assert_eq!(reading.scale_num, 0);
//! assert!(!reading.scale_index.is_determined());
//! ```

// Re-export core types (shared by every stage)
pub use dialread_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use dialread_morph as morph;
pub use dialread_reader as reader;
pub use dialread_transform as transform;
