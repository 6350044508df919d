//! dialread-morph - Morphological operations on label masks
//!
//! Segmentation masks often carry thin spurs and touching blobs along tick
//! and pointer boundaries. A small erosion before reading separates them:
//!
//! - Brick (rectangular) erosion of a label grid: each output label is the
//!   minimum label in the window around it
//! - Label-aware erosion, where background always wins over pointer and
//!   pointer over scale, whatever the label values

mod error;
pub mod erode;

pub use erode::{erode_brick, erode_labels, erode_square};
pub use error::{MorphError, MorphResult};
