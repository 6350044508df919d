//! Column reduction
//!
//! Collapses the radius axis of an unrolled dial: for every angular column,
//! count the rows labelled as pointer and the rows labelled as scale tick.

use dialread_core::{ColumnSignal, LabelGrid, Labels};

/// Pointer and scale counts per unrolled column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSignals {
    pub pointer: ColumnSignal,
    pub scale: ColumnSignal,
}

/// Count pointer and scale labels in each column of `strip`.
///
/// Both signals have exactly `strip.width()` entries.
pub fn reduce_columns(strip: &LabelGrid, labels: &Labels) -> ColumnSignals {
    let w = strip.width() as usize;
    let mut pointer = vec![0u32; w];
    let mut scale = vec![0u32; w];

    for y in 0..strip.height() {
        for (col, &label) in strip.row(y).iter().enumerate() {
            if label == labels.pointer {
                pointer[col] += 1;
            } else if label == labels.scale {
                scale[col] += 1;
            }
        }
    }

    ColumnSignals {
        pointer: pointer.into(),
        scale: scale.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_column() {
        // 3 rows x 4 columns
        let strip = LabelGrid::from_vec(
            4,
            3,
            vec![
                0, 1, 2, 2, //
                0, 1, 2, 0, //
                1, 0, 2, 0,
            ],
        )
        .unwrap();
        let signals = reduce_columns(&strip, &Labels::default());
        assert_eq!(signals.pointer.as_slice(), &[1, 2, 0, 0]);
        assert_eq!(signals.scale.as_slice(), &[0, 0, 3, 1]);
    }

    #[test]
    fn test_all_pointer() {
        let strip = LabelGrid::from_vec(5, 3, vec![1; 15]).unwrap();
        let signals = reduce_columns(&strip, &Labels::default());
        assert_eq!(signals.pointer.sum(), 15);
        assert_eq!(signals.scale.sum(), 0);
        assert_eq!(signals.pointer.len(), 5);
    }

    #[test]
    fn test_all_scale() {
        let strip = LabelGrid::from_vec(5, 3, vec![2; 15]).unwrap();
        let signals = reduce_columns(&strip, &Labels::default());
        assert_eq!(signals.scale.sum(), 15);
        assert_eq!(signals.pointer.sum(), 0);
    }

    #[test]
    fn test_custom_labels() {
        let labels = Labels {
            background: 9,
            pointer: 3,
            scale: 7,
        };
        let strip = LabelGrid::from_vec(3, 1, vec![9, 3, 7]).unwrap();
        let signals = reduce_columns(&strip, &labels);
        assert_eq!(signals.pointer.as_slice(), &[0, 1, 0]);
        assert_eq!(signals.scale.as_slice(), &[0, 0, 1]);
    }
}
