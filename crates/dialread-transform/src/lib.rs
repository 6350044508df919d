//! dialread-transform - Geometric transformations for dialread
//!
//! This crate provides the polar unrolling of a circular dial:
//!
//! - [`PolarUnroller`] maps the annulus of a square label mask into a
//!   rectangular strip (column = angle, row = radius)

mod error;
pub mod polar;

pub use error::{TransformError, TransformResult};
pub use polar::PolarUnroller;
