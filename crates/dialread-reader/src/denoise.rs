//! Scale signal denoising
//!
//! Tick marks produce much higher column counts than stray mis-segmented
//! pixels. Columns whose count is below the mean of the whole signal are
//! zeroed; columns at or above the mean pass through. An all-zero signal
//! has mean 0 and is left unchanged.

use dialread_core::ColumnSignal;

/// Zero every column below the signal mean, in place.
///
/// Returns the mean used as the threshold.
pub fn mean_filter(signal: &mut ColumnSignal) -> f64 {
    let mean = signal.mean();
    for v in signal.as_mut_slice() {
        if f64::from(*v) < mean {
            *v = 0;
        }
    }
    mean
}

/// Copying variant of [`mean_filter`].
pub fn mean_filtered(signal: &ColumnSignal) -> ColumnSignal {
    let mut out = signal.clone();
    mean_filter(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_signal_unchanged() {
        let s = ColumnSignal::from_vec(vec![7; 12]);
        assert_eq!(mean_filtered(&s), s);
    }

    #[test]
    fn test_all_zero_unchanged() {
        let mut s = ColumnSignal::zeros(10);
        assert_eq!(mean_filter(&mut s), 0.0);
        assert_eq!(s, ColumnSignal::zeros(10));
    }

    #[test]
    fn test_single_spike_survives() {
        let s = ColumnSignal::from_vec(vec![1, 2, 1, 100, 2, 1, 0, 1]);
        // mean = 108 / 8 = 13.5
        let f = mean_filtered(&s);
        assert_eq!(f.as_slice(), &[0, 0, 0, 100, 0, 0, 0, 0]);
    }

    #[test]
    fn test_value_equal_to_mean_kept() {
        // mean = 4
        let f = mean_filtered(&ColumnSignal::from_vec(vec![0, 4, 8, 4]));
        assert_eq!(f.as_slice(), &[0, 4, 8, 4]);
    }
}
