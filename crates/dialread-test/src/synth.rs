//! Synthetic dial masks
//!
//! Builds label masks with tick and pointer arcs at known unrolled columns,
//! so reading tests can check results against exact expectations.
//!
//! Painting is done in two passes. The first fills every mask pixel of the
//! annulus with the label of the column its angle falls in, giving solid
//! arcs; [`SyntheticDial::build_geometric`] stops here. The second walks
//! every unrolled pixel and writes its column label to the mask pixel the
//! unroller samples for it. When no two columns share a mask pixel (the
//! angular step at the inner radius is at least one pixel) unrolling the
//! mask reproduces the arcs exactly; otherwise arc edges may bleed into a
//! neighbouring column.

use crate::error::{TestError, TestResult};
use dialread_core::{DialGeometry, LabelGrid, LabelGridMut, Labels};
use dialread_transform::PolarUnroller;

/// A band of unrolled columns `start..=end`, spanning every row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialArc {
    pub start: u32,
    pub end: u32,
}

impl DialArc {
    /// Column midpoint, as the band locator reports it
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.start) + f64::from(self.end)) / 2.0
    }

    fn covers(&self, col: u32) -> bool {
        (self.start..=self.end).contains(&col)
    }
}

/// Builder for synthetic dial masks
#[derive(Debug, Clone)]
pub struct SyntheticDial {
    geometry: DialGeometry,
    labels: Labels,
    ticks: Vec<DialArc>,
    pointers: Vec<DialArc>,
    speckles: Vec<(u32, u32, u8)>,
}

impl SyntheticDial {
    /// Start an empty dial for `geometry` with the default labels.
    pub fn new(geometry: DialGeometry) -> Self {
        Self {
            geometry,
            labels: Labels::default(),
            ticks: Vec::new(),
            pointers: Vec::new(),
            speckles: Vec::new(),
        }
    }

    /// Use custom label values
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Add a tick over columns `start..=end`.
    pub fn tick(mut self, start: u32, end: u32) -> Self {
        self.ticks.push(DialArc { start, end });
        self
    }

    /// Add `count` ticks of `width` columns, the first starting at `first`,
    /// each starting `spacing` columns after the previous one.
    pub fn ticks_evenly(mut self, first: u32, spacing: u32, count: u32, width: u32) -> Self {
        for i in 0..count {
            let start = first + i * spacing;
            self = self.tick(start, start + width.max(1) - 1);
        }
        self
    }

    /// Add a pointer arc over columns `start..=end`.
    pub fn pointer(mut self, start: u32, end: u32) -> Self {
        self.pointers.push(DialArc { start, end });
        self
    }

    /// Set a single mask pixel after the arcs are painted.
    pub fn speckle(mut self, x: u32, y: u32, label: u8) -> Self {
        self.speckles.push((x, y, label));
        self
    }

    /// Tick midpoints in insertion order
    pub fn tick_midpoints(&self) -> Vec<f64> {
        self.ticks.iter().map(DialArc::midpoint).collect()
    }

    /// Midpoint of the first pointer arc
    pub fn pointer_midpoint(&self) -> Option<f64> {
        self.pointers.first().map(DialArc::midpoint)
    }

    fn check_arcs(&self) -> TestResult<()> {
        let width = self.geometry.unrolled_width;
        for arc in self.ticks.iter().chain(&self.pointers) {
            if arc.start > arc.end || arc.end >= width {
                return Err(TestError::ArcOutOfRange {
                    start: arc.start,
                    end: arc.end,
                    width,
                });
            }
        }
        Ok(())
    }

    /// Label of unrolled column `col`; pointers win over ticks.
    fn label_at(&self, col: u32) -> u8 {
        if self.pointers.iter().any(|a| a.covers(col)) {
            self.labels.pointer
        } else if self.ticks.iter().any(|a| a.covers(col)) {
            self.labels.scale
        } else {
            self.labels.background
        }
    }

    /// Unrolled column nearest to the direction with `sin = sin_part` and
    /// `cos = cos_part` (both scaled by the radius).
    fn column_at(&self, sin_part: f64, cos_part: f64) -> u32 {
        let w = i64::from(self.geometry.unrolled_width);
        let theta = sin_part.atan2(cos_part).rem_euclid(std::f64::consts::TAU);
        let step = (theta / std::f64::consts::TAU * w as f64).round() as i64;
        (step - 1).rem_euclid(w) as u32
    }

    /// Build the unrolled strip directly, bypassing the mask.
    pub fn build_strip(&self) -> TestResult<LabelGrid> {
        self.check_arcs()?;
        let w = self.geometry.unrolled_width;
        let h = self.geometry.unrolled_height;
        let mut strip = LabelGridMut::new(w, h)?;
        for row in 0..h {
            for col in 0..w {
                strip.set_unchecked(col, row, self.label_at(col));
            }
        }
        Ok(strip.into())
    }

    /// Build the square label mask.
    ///
    /// Solid arcs, with every unroller sample overwritten by its column
    /// label.
    pub fn build(&self) -> TestResult<LabelGrid> {
        let mut mask = self.paint_arcs()?;
        let unroller = PolarUnroller::new(self.geometry)?;
        for col in 0..self.geometry.unrolled_width {
            let label = self.label_at(col);
            for row in 0..self.geometry.unrolled_height {
                let (x, y) = unroller.source_pixel(row, col);
                mask.set_unchecked(x, y, label);
            }
        }
        self.finish(mask)
    }

    /// Build the square label mask from the arc geometry alone.
    ///
    /// Pixels are labelled only by their own angle and radius, without
    /// consulting the unroller, so unrolling this mask checks the sampling
    /// geometry independently.
    pub fn build_geometric(&self) -> TestResult<LabelGrid> {
        let mask = self.paint_arcs()?;
        self.finish(mask)
    }

    /// Fill every annulus pixel with the label of the column its angle
    /// falls in.
    fn paint_arcs(&self) -> TestResult<LabelGridMut> {
        self.check_arcs()?;
        let g = &self.geometry;
        let side = g.mask_size;
        let mut mask = LabelGridMut::new(side, side)?;
        mask.fill(self.labels.background);

        // one pixel of margin around the sampled radii covers rounding
        let r_out = f64::from(g.radius_at_row(0)) + 1.0;
        let r_in = f64::from(g.radius_at_row(g.unrolled_height - 1)) - 1.0;
        for y in 0..side {
            for x in 0..side {
                let dx = f64::from(x) - f64::from(g.center_x);
                let dy = f64::from(y) - f64::from(g.center_y);
                let rho = dx.hypot(dy);
                if rho < r_in || rho > r_out {
                    continue;
                }
                let col = self.column_at(-dx, dy);
                mask.set_unchecked(x, y, self.label_at(col));
            }
        }
        Ok(mask)
    }

    fn finish(&self, mut mask: LabelGridMut) -> TestResult<LabelGrid> {
        for &(x, y, label) in &self.speckles {
            mask.set(x, y, label)?;
        }
        Ok(mask.into())
    }
}

/// Geometry whose columns never share a mask pixel.
///
/// 360 columns over radii 210..=249 of a 512x512 mask: the angular step at
/// the inner radius is about 3.7 pixels.
pub fn exact_geometry() -> DialGeometry {
    DialGeometry {
        mask_size: 512,
        center_x: 256,
        center_y: 256,
        outer_radius: 250,
        unrolled_height: 40,
        unrolled_width: 360,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_matches_unrolled_mask() {
        let dial = SyntheticDial::new(exact_geometry())
            .ticks_evenly(20, 40, 8, 4)
            .pointer(150, 153);
        let mask = dial.build().unwrap();
        let strip = dial.build_strip().unwrap();
        let unrolled = PolarUnroller::new(exact_geometry())
            .unwrap()
            .unroll(&mask)
            .unwrap();
        assert_eq!(unrolled, strip);
    }

    #[test]
    fn test_arc_out_of_range() {
        let dial = SyntheticDial::new(exact_geometry()).tick(350, 360);
        assert!(matches!(
            dial.build(),
            Err(TestError::ArcOutOfRange { end: 360, .. })
        ));
    }

    #[test]
    fn test_midpoints() {
        let dial = SyntheticDial::new(exact_geometry())
            .ticks_evenly(10, 20, 3, 5)
            .pointer(41, 44);
        assert_eq!(dial.tick_midpoints(), vec![12.0, 32.0, 52.0]);
        assert_eq!(dial.pointer_midpoint(), Some(42.5));
    }
}
