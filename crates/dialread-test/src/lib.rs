//! dialread-test - Regression test framework for dialread
//!
//! This crate provides:
//!
//! - [`RegParams`], an accumulator of value / measurement / grid checks that
//!   reports every failure at the end of a regression test
//! - [`SyntheticDial`], a builder for label masks with tick and pointer arcs
//!   at known unrolled columns
//!
//! # Usage
//!
//! ```ignore
//! use dialread_test::{RegParams, SyntheticDial, exact_geometry};
//!
//! let mut rp = RegParams::new("reading");
//! let mask = SyntheticDial::new(exact_geometry()).tick(10, 13).build()?;
//! rp.compare_values(1.0, scale_num as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print intermediate results

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use synth::{DialArc, SyntheticDial, exact_geometry};
