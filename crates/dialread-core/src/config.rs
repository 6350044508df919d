//! Reader configuration
//!
//! All geometric and labelling constants used by the reading pipeline live
//! here as named, overridable parameters. The defaults describe a 512x512
//! segmentation mask of a circular dial centred at (256, 256) whose
//! annulus between radius 130 and 250 is unrolled into a 120x1570 strip.
//!
//! Configurations are validated once, up front: the polar unroller samples
//! the mask without per-pixel bounds checks, so a geometry that could read
//! outside the mask is rejected by [`DialGeometry::validate`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Label values emitted by the segmentation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Background class
    pub background: u8,
    /// Pointer (needle) class
    pub pointer: u8,
    /// Scale-tick class
    pub scale: u8,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            background: 0,
            pointer: 1,
            scale: 2,
        }
    }
}

impl Labels {
    /// Check that the three label values are pairwise distinct.
    pub fn validate(&self) -> Result<()> {
        if self.background == self.pointer
            || self.background == self.scale
            || self.pointer == self.scale
        {
            return Err(Error::AmbiguousLabels {
                background: self.background,
                pointer: self.pointer,
                scale: self.scale,
            });
        }
        Ok(())
    }
}

/// Dial geometry and unrolled image size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialGeometry {
    /// Side length of the square label mask
    pub mask_size: u32,
    /// Dial center column in the mask
    pub center_x: u32,
    /// Dial center row in the mask
    pub center_y: u32,
    /// Outer radius of the unrolled annulus
    pub outer_radius: u32,
    /// Unrolled image height (radial band width)
    pub unrolled_height: u32,
    /// Unrolled image width (angular resolution)
    pub unrolled_width: u32,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            mask_size: 512,
            center_x: 256,
            center_y: 256,
            outer_radius: 250,
            unrolled_height: 120,
            unrolled_width: 1570,
        }
    }
}

impl DialGeometry {
    /// Radius sampled by unrolled row `row` (row 0 is the outermost).
    #[inline]
    pub fn radius_at_row(&self, row: u32) -> u32 {
        self.outer_radius - row - 1
    }

    /// Verify that every sample of the unroller lands inside the mask.
    ///
    /// The largest sampled radius is `outer_radius - 1`. Rounding adds 0.5
    /// and truncates, so a sample stays in bounds as long as the center is at
    /// least that far from each edge.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] for a zero-sized mask or unrolled image
    /// - [`Error::InvalidGeometry`] when the annulus does not fit
    pub fn validate(&self) -> Result<()> {
        if self.mask_size == 0 {
            return Err(Error::InvalidDimension {
                width: self.mask_size,
                height: self.mask_size,
            });
        }
        if self.unrolled_width == 0 || self.unrolled_height == 0 {
            return Err(Error::InvalidDimension {
                width: self.unrolled_width,
                height: self.unrolled_height,
            });
        }
        if self.unrolled_height > self.outer_radius {
            return Err(Error::InvalidGeometry(format!(
                "unrolled height {} exceeds outer radius {}",
                self.unrolled_height, self.outer_radius
            )));
        }

        let max_r = u64::from(self.outer_radius - 1);
        for (axis, center) in [("x", self.center_x), ("y", self.center_y)] {
            let center = u64::from(center);
            if center < max_r || center + max_r >= u64::from(self.mask_size) {
                return Err(Error::InvalidGeometry(format!(
                    "radius {} around center {axis}={center} leaves the {}x{} mask",
                    self.outer_radius, self.mask_size, self.mask_size
                )));
            }
        }
        Ok(())
    }
}

/// A meter model used to turn a scale-index into a physical value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterType {
    /// Physical value of one scale interval
    pub scale_value: f64,
    /// Full-scale range
    pub range: f64,
    /// Unit label
    pub unit: String,
}

impl MeterType {
    /// Create a meter type from its range and number of scale intervals.
    pub fn new(range: f64, intervals: u32, unit: impl Into<String>) -> Self {
        Self {
            scale_value: range / f64::from(intervals),
            range,
            unit: unit.into(),
        }
    }
}

/// Meter catalog: dials with more ticks than `threshold` are the first type,
/// all others the second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterCatalog {
    /// Tick-count threshold separating the two meter types
    pub threshold: usize,
    /// Used when `scale_num > threshold`
    pub dense: MeterType,
    /// Used otherwise
    pub sparse: MeterType,
}

impl Default for MeterCatalog {
    fn default() -> Self {
        Self {
            threshold: 40,
            dense: MeterType::new(25.0, 50, "MPa"),
            sparse: MeterType::new(1.6, 32, "MPa"),
        }
    }
}

impl MeterCatalog {
    /// Select the meter type for a dial with `scale_num` detected ticks.
    pub fn select(&self, scale_num: usize) -> &MeterType {
        if scale_num > self.threshold {
            &self.dense
        } else {
            &self.sparse
        }
    }
}

/// Complete reader configuration
///
/// # Examples
///
/// ```
/// use dialread_core::ReaderConfig;
///
/// let config = ReaderConfig::default().with_erosion(4);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.geometry.unrolled_width, 1570);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Dial geometry
    pub geometry: DialGeometry,
    /// Segmentation label values
    pub labels: Labels,
    /// Zero scale columns below the signal mean
    pub mean_filter: bool,
    /// Square erosion kernel applied to each mask before unrolling
    pub erode_kernel: Option<u32>,
    /// Meter types for value conversion
    pub meters: MeterCatalog,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            geometry: DialGeometry::default(),
            labels: Labels::default(),
            mean_filter: true,
            erode_kernel: None,
            meters: MeterCatalog::default(),
        }
    }
}

impl ReaderConfig {
    /// Replace the dial geometry
    pub fn with_geometry(mut self, geometry: DialGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Replace the label values
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the scale mean filter
    pub fn mean_filter(mut self, enable: bool) -> Self {
        self.mean_filter = enable;
        self
    }

    /// Erode each mask with a `kernel` x `kernel` square before reading
    pub fn with_erosion(mut self, kernel: u32) -> Self {
        self.erode_kernel = Some(kernel);
        self
    }

    /// Replace the meter catalog
    pub fn with_meters(mut self, meters: MeterCatalog) -> Self {
        self.meters = meters;
        self
    }

    /// Validate geometry, labels and erosion settings.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        self.labels.validate()?;
        if self.erode_kernel == Some(0) {
            return Err(Error::InvalidParameter(
                "erosion kernel size must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
