//! ColumnSignal - Per-column label counts
//!
//! A `ColumnSignal` holds one non-negative count per angular column of an
//! unrolled dial image. Two are derived per meter crop: one for pointer
//! pixels and one for scale-tick pixels.

/// Per-column count signal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSignal {
    data: Vec<u32>,
}

impl ColumnSignal {
    /// Create an all-zero signal of `len` columns.
    pub fn zeros(len: usize) -> Self {
        ColumnSignal { data: vec![0; len] }
    }

    /// Create a signal from per-column counts.
    pub fn from_vec(data: Vec<u32>) -> Self {
        ColumnSignal { data }
    }

    /// Number of columns
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the signal has no columns
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the counts.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Borrow the counts mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Sum of all counts.
    pub fn sum(&self) -> u64 {
        self.data.iter().map(|&v| u64::from(v)).sum()
    }

    /// Arithmetic mean of all counts; 0.0 for an empty signal.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.sum() as f64 / self.data.len() as f64
    }
}

impl From<Vec<u32>> for ColumnSignal {
    fn from(data: Vec<u32>) -> Self {
        ColumnSignal { data }
    }
}
