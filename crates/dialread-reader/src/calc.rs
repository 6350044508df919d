//! Reading calculation
//!
//! Combines tick midpoints `S[0..n]` (increasing) with the pointer midpoint
//! `P`:
//!
//! - scale-index: for the interval with `S[i] <= P < S[i+1]`,
//!   `i + 1 + (P - S[i]) / (S[i+1] - S[i] + EPS)`; undetermined if the
//!   pointer lies in no interval (including `n == 1`)
//! - ratio: `(P - S[0]) / (S[n-1] - S[0] + EPS)` whenever `n >= 1`; it may
//!   fall outside [0, 1] when the pointer is beyond the first or last tick
//!
//! With no ticks, or no pointer, both are undetermined.

use dialread_core::{Measurement, Reading};

/// Guard against zero-width intervals
pub const EPS: f64 = 1e-5;

/// Compute a reading from tick midpoints and the pointer midpoint.
pub fn compute_reading(scales: &[f64], pointer: Option<f64>) -> Reading {
    let scale_num = scales.len();
    let (Some(p), Some(&first), Some(&last)) = (pointer, scales.first(), scales.last()) else {
        return Reading {
            scale_num,
            ..Reading::empty()
        };
    };

    let scale_index = scales
        .windows(2)
        .position(|w| w[0] <= p && p < w[1])
        .map(|i| i as f64 + 1.0 + (p - scales[i]) / (scales[i + 1] - scales[i] + EPS));

    Reading {
        scale_num,
        scale_index: scale_index.into(),
        ratio: Measurement::Value((p - first) / (last - first + EPS)),
    }
}
