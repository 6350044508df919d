//! LabelGrid - Dense per-pixel label container
//!
//! `LabelGrid` holds one small integer label per pixel, row-major. It is
//! used both for the segmentation label mask of a meter crop and for the
//! unrolled (polar-to-rectangular) image derived from it.
//!
//! # Ownership model
//!
//! `LabelGrid` uses `Arc` for cheap cloning, so a batch of masks can be
//! handed to worker threads without copying pixel data. Labels are written
//! through a `LabelGridMut`, which converts into a `LabelGrid` with
//! `Into<LabelGrid>` once it is complete.

use crate::error::{Error, Result};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct GridData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GridData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(GridData {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Immutable, shareable label grid
///
/// # Examples
///
/// ```
/// use dialread_core::LabelGrid;
///
/// let mask = LabelGrid::new(512, 512).unwrap();
/// assert_eq!(mask.width(), 512);
/// assert_eq!(mask.get(10, 10), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    inner: Arc<GridData>,
}

impl LabelGrid {
    /// Create a new grid with every label set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(LabelGrid {
            inner: Arc::new(GridData::new(width, height)?),
        })
    }

    /// Create a grid from row-major label data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::DataLength {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(LabelGrid {
            inner: Arc::new(GridData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a grid by converting wider integer labels.
    ///
    /// Segmentation models usually emit `i64` class maps. Values outside
    /// `0..=255` are rejected.
    pub fn from_labels<T>(width: u32, height: u32, labels: &[T]) -> Result<Self>
    where
        T: Copy + TryInto<u8> + std::fmt::Debug,
    {
        let data = labels
            .iter()
            .map(|&v| {
                v.try_into()
                    .map_err(|_| Error::InvalidParameter(format!("label {v:?} does not fit in u8")))
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::from_vec(width, height, data)
    }

    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the label at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.offset(x, y)])
    }

    /// Get the label at (x, y) without a bounds check on each axis.
    ///
    /// # Panics
    ///
    /// Panics if the linear offset falls outside the grid.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[self.inner.offset(x, y)]
    }

    /// Borrow one row of labels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Borrow the row-major label data.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner.data
    }

    /// Count pixels carrying `label`.
    pub fn count_label(&self, label: u8) -> usize {
        self.inner.data.iter().filter(|&&v| v == label).count()
    }

    /// Check whether `label` occurs anywhere in the grid.
    pub fn contains_label(&self, label: u8) -> bool {
        self.inner.data.contains(&label)
    }
}

/// Mutable label grid
#[derive(Debug)]
pub struct LabelGridMut {
    inner: GridData,
}

impl LabelGridMut {
    /// Create a new zeroed mutable grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(LabelGridMut {
            inner: GridData::new(width, height)?,
        })
    }

    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Set the label at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if (x, y) is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, label: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            let len = self.inner.data.len();
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.inner.width as usize + x as usize,
                len,
            });
        }
        let off = self.inner.offset(x, y);
        self.inner.data[off] = label;
        Ok(())
    }

    /// Set the label at (x, y) without a bounds check on each axis.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, label: u8) {
        let off = self.inner.offset(x, y);
        self.inner.data[off] = label;
    }

    /// Set every label to `label`.
    pub fn fill(&mut self, label: u8) {
        self.inner.data.fill(label);
    }

    /// Borrow the row-major label data mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<LabelGridMut> for LabelGrid {
    fn from(grid: LabelGridMut) -> Self {
        LabelGrid {
            inner: Arc::new(grid.inner),
        }
    }
}
