//! Polar unrolling of a circular dial
//!
//! Maps the annulus of a square label mask into a rectangular strip. Row 0
//! of the strip is the outermost sampled radius and radius decreases with
//! increasing row. Column 0 lies just past the downward vertical through the
//! dial center, and columns sweep through the left, top and right of the
//! dial, back to straight down at the last column.
//!
//! For output row `r` and column `c`:
//!
//! ```text
//! angle  = 2π / width × (c + 1)
//! radius = outer_radius − r − 1
//! y      = trunc(center_y + radius × cos(angle) + 0.5)
//! x      = trunc(center_x − radius × sin(angle) + 0.5)
//! ```
//!
//! The mapping depends only on the geometry, so it is computed once when
//! the unroller is built and reused for every mask.

use crate::error::{TransformError, TransformResult};
use dialread_core::{DialGeometry, LabelGrid, LabelGridMut};
use std::f64::consts::TAU;

/// Precomputed polar-to-rectangular sampler
#[derive(Debug, Clone)]
pub struct PolarUnroller {
    geometry: DialGeometry,
    /// Mask offset sampled by each unrolled pixel, row-major
    offsets: Vec<usize>,
}

impl PolarUnroller {
    /// Build an unroller for `geometry`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Core`] if the geometry does not validate,
    /// i.e. some sample would fall outside the mask.
    pub fn new(geometry: DialGeometry) -> TransformResult<Self> {
        geometry.validate()?;

        let w = geometry.unrolled_width;
        let h = geometry.unrolled_height;
        let side = geometry.mask_size as usize;
        let mut offsets = Vec::with_capacity(w as usize * h as usize);
        for row in 0..h {
            for col in 0..w {
                let (x, y) = source_pixel(&geometry, row, col);
                offsets.push(y as usize * side + x as usize);
            }
        }

        tracing::debug!(
            width = w,
            height = h,
            outer_radius = geometry.outer_radius,
            "polar unroller ready"
        );
        Ok(Self { geometry, offsets })
    }

    /// Geometry this unroller was built for.
    pub fn geometry(&self) -> &DialGeometry {
        &self.geometry
    }

    /// Unrolled image `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.geometry.unrolled_width, self.geometry.unrolled_height)
    }

    /// Mask pixel `(x, y)` sampled by unrolled row `row`, column `col`.
    pub fn source_pixel(&self, row: u32, col: u32) -> (u32, u32) {
        source_pixel(&self.geometry, row, col)
    }

    /// Unroll `mask` into a new strip.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MaskSize`] if the mask is not
    /// `mask_size` x `mask_size`.
    pub fn unroll(&self, mask: &LabelGrid) -> TransformResult<LabelGrid> {
        let (w, h) = self.dimensions();
        let mut out = LabelGridMut::new(w, h)?;
        self.unroll_into(mask, &mut out)?;
        Ok(out.into())
    }

    /// Unroll `mask` into a caller-provided strip.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MaskSize`] for a mask of the wrong size and
    /// [`dialread_core::Error::DimensionMismatch`] if `out` is not the
    /// unrolled size.
    pub fn unroll_into(&self, mask: &LabelGrid, out: &mut LabelGridMut) -> TransformResult<()> {
        let side = self.geometry.mask_size;
        if mask.dimensions() != (side, side) {
            return Err(TransformError::MaskSize {
                expected: side,
                width: mask.width(),
                height: mask.height(),
            });
        }
        let (w, h) = self.dimensions();
        if (out.width(), out.height()) != (w, h) {
            return Err(dialread_core::Error::DimensionMismatch {
                expected: (w, h),
                actual: (out.width(), out.height()),
            }
            .into());
        }

        let src = mask.as_slice();
        for (dst, &off) in out.as_mut_slice().iter_mut().zip(&self.offsets) {
            *dst = src[off];
        }
        Ok(())
    }
}

/// Compute the mask pixel sampled by unrolled `(row, col)`.
///
/// Valid only for a geometry that passed [`DialGeometry::validate`]; the
/// coordinates are then non-negative, so truncation after adding 0.5 rounds
/// to nearest.
fn source_pixel(geometry: &DialGeometry, row: u32, col: u32) -> (u32, u32) {
    let theta = TAU / f64::from(geometry.unrolled_width) * f64::from(col + 1);
    let rho = f64::from(geometry.radius_at_row(row));
    let y = (f64::from(geometry.center_y) + rho * theta.cos() + 0.5) as u32;
    let x = (f64::from(geometry.center_x) - rho * theta.sin() + 0.5) as u32;
    (x, y)
}
