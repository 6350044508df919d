//! Band location
//!
//! A band is a run of angular columns with positive signal, reduced to its
//! midpoint. The scan walks adjacent pairs `(s[i], s[i + 1])`, reading the
//! value past the last column as zero:
//!
//! - a band opens at `i` when both samples are positive;
//! - an open band closes when both samples are zero, ending at `i - 1`.
//!
//! Consequences that downstream band counts depend on:
//!
//! - a lone positive column never opens a band, including one at the
//!   final column;
//! - a single zero column inside a run does not close it, so two runs split
//!   by one empty column form one band;
//! - a band still open when the scan reaches the final column is dropped.

use dialread_core::ColumnSignal;
use serde::{Deserialize, Serialize};

/// A closed band of columns `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub start: usize,
    pub end: usize,
}

impl Band {
    /// Midpoint column of the band
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) as f64 / 2.0
    }

    /// Number of columns spanned
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Iterator over the closed bands of a signal, in increasing column order
#[derive(Debug, Clone)]
pub struct Bands<'a> {
    signal: &'a [u32],
    pos: usize,
    open: Option<usize>,
}

impl Iterator for Bands<'_> {
    type Item = Band;

    fn next(&mut self) -> Option<Band> {
        while self.pos < self.signal.len() {
            let i = self.pos;
            self.pos += 1;
            let cur = self.signal[i];
            let next = self.signal.get(i + 1).copied().unwrap_or(0);

            match self.open {
                None if cur > 0 && next > 0 => self.open = Some(i),
                Some(start) if cur == 0 && next == 0 => {
                    self.open = None;
                    return Some(Band { start, end: i - 1 });
                }
                _ => {}
            }
        }
        None
    }
}

/// Scan `signal` for bands.
pub fn bands(signal: &ColumnSignal) -> Bands<'_> {
    Bands {
        signal: signal.as_slice(),
        pos: 0,
        open: None,
    }
}

/// Midpoints of every closed band, in increasing column order.
pub fn band_midpoints(signal: &ColumnSignal) -> Vec<f64> {
    bands(signal).map(|b| b.midpoint()).collect()
}

/// The first closed band of the pointer signal.
///
/// Later bands are ignored, even if wider.
pub fn pointer_band(signal: &ColumnSignal) -> Option<Band> {
    bands(signal).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(v: &[u32]) -> ColumnSignal {
        ColumnSignal::from_vec(v.to_vec())
    }

    #[test]
    fn test_two_bands() {
        let s = sig(&[0, 0, 3, 3, 3, 0, 0, 5, 5, 0]);
        let found: Vec<Band> = bands(&s).collect();
        assert_eq!(
            found,
            vec![Band { start: 2, end: 4 }, Band { start: 7, end: 8 }]
        );
        assert_eq!(band_midpoints(&s), vec![3.0, 7.5]);
    }

    #[test]
    fn test_all_zero() {
        assert!(band_midpoints(&ColumnSignal::zeros(16)).is_empty());
    }

    #[test]
    fn test_final_column_only() {
        let mut v = vec![0; 10];
        v[9] = 4;
        assert!(band_midpoints(&sig(&v)).is_empty());
    }

    #[test]
    fn test_open_band_at_end_dropped() {
        assert!(band_midpoints(&sig(&[0, 0, 0, 2, 2, 2])).is_empty());
        // a single trailing zero closes against the zero past the end
        assert_eq!(band_midpoints(&sig(&[0, 2, 2, 2, 0])), vec![2.0]);
    }

    #[test]
    fn test_lone_positive_ignored() {
        assert!(band_midpoints(&sig(&[0, 0, 6, 0, 0, 0])).is_empty());
    }

    #[test]
    fn test_single_gap_merges() {
        let s = sig(&[1, 1, 0, 1, 1, 0, 0]);
        assert_eq!(bands(&s).collect::<Vec<_>>(), vec![Band { start: 0, end: 4 }]);
    }

    #[test]
    fn test_pointer_keeps_first() {
        let s = sig(&[0, 2, 2, 0, 0, 9, 9, 9, 9, 0, 0]);
        let b = pointer_band(&s).unwrap();
        assert_eq!(b, Band { start: 1, end: 2 });
        assert_eq!(b.width(), 2);
    }

    #[test]
    fn test_empty_signal() {
        assert!(pointer_band(&ColumnSignal::default()).is_none());
    }
}
