//! dialread Core - Basic data structures for analog meter reading
//!
//! This crate provides the data structures shared by every stage of the
//! dial reading pipeline:
//!
//! - [`LabelGrid`] / [`LabelGridMut`] - Per-pixel label container (immutable / mutable)
//! - [`ColumnSignal`] - Per-angular-column label counts
//! - [`ReaderConfig`] / [`DialGeometry`] / [`Labels`] - Validated configuration
//! - [`MeterCatalog`] / [`MeterType`] - Meter models for value conversion
//! - [`Reading`] / [`Measurement`] / [`MeterValue`] - Per-crop results

pub mod config;
pub mod error;
pub mod grid;
pub mod reading;
pub mod signal;

pub use config::{DialGeometry, Labels, MeterCatalog, MeterType, ReaderConfig};
pub use error::{Error, Result};
pub use grid::{LabelGrid, LabelGridMut};
pub use reading::{Measurement, MeterValue, Reading, UNDETERMINED_SENTINEL};
pub use signal::ColumnSignal;
