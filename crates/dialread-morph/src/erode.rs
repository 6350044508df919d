//! Label erosion
//!
//! Erosion with a brick structuring element of `width` x `height`. The
//! element origin sits at `(width / 2, height / 2)`, so for output pixel
//! `(x, y)` the window covers columns `x - width/2 ..= x + (width - 1 - width/2)`
//! and the matching rows. Window positions outside the grid are ignored,
//! which leaves border labels as if the grid were padded with the maximum
//! label.
//!
//! The minimum over a rectangle is the minimum of its row minima, so the
//! operation is done as a horizontal pass followed by a vertical pass.
//!
//! The numeric minimum only shrinks features when background is the
//! smallest label. [`erode_labels`] ranks labels as background, pointer,
//! scale and then the remaining values, and takes the minimum rank, so
//! background always wins whatever the label values are.

use crate::error::{MorphError, MorphResult};
use dialread_core::{LabelGrid, LabelGridMut, Labels};

/// Erode a label mask with a `size` x `size` square, ranking labels so that
/// background wins over pointer and pointer over scale.
///
/// With the default labels (0, 1, 2) this is exactly [`erode_square`].
///
/// # Errors
///
/// Returns [`MorphError::Core`] if the labels are not distinct and
/// [`MorphError::InvalidSel`] if `size` is 0.
pub fn erode_labels(grid: &LabelGrid, size: u32, labels: &Labels) -> MorphResult<LabelGrid> {
    labels.validate()?;
    let (rank, unrank) = label_ranks(labels);
    let (w, h) = grid.dimensions();

    let ranked: Vec<u8> = grid.as_slice().iter().map(|&v| rank[v as usize]).collect();
    let eroded = erode_square(&LabelGrid::from_vec(w, h, ranked)?, size)?;
    let data = eroded.as_slice().iter().map(|&r| unrank[r as usize]).collect();
    Ok(LabelGrid::from_vec(w, h, data)?)
}

/// Rank of every label value and its inverse.
fn label_ranks(labels: &Labels) -> ([u8; 256], [u8; 256]) {
    let first = [labels.background, labels.pointer, labels.scale];
    let order = first
        .into_iter()
        .chain((0..=u8::MAX).filter(|v| !first.contains(v)));

    let mut rank = [0u8; 256];
    let mut unrank = [0u8; 256];
    for (r, label) in order.enumerate() {
        rank[label as usize] = r as u8;
        unrank[r] = label;
    }
    (rank, unrank)
}

/// Erode with a square `size` x `size` structuring element.
pub fn erode_square(grid: &LabelGrid, size: u32) -> MorphResult<LabelGrid> {
    erode_brick(grid, size, size)
}

/// Erode with a brick (rectangular) structuring element.
///
/// # Errors
///
/// Returns [`MorphError::InvalidSel`] if either dimension is 0.
pub fn erode_brick(grid: &LabelGrid, width: u32, height: u32) -> MorphResult<LabelGrid> {
    if width == 0 || height == 0 {
        return Err(MorphError::InvalidSel(format!(
            "brick size must be > 0, got {width}x{height}"
        )));
    }
    if width == 1 && height == 1 {
        return Ok(grid.clone());
    }

    let (w, h) = grid.dimensions();
    let mut tmp = LabelGridMut::new(w, h)?;
    erode_1d(grid.as_slice(), tmp.as_mut_slice(), w as usize, h as usize, width, true);
    let tmp: LabelGrid = tmp.into();
    let mut out = LabelGridMut::new(w, h)?;
    erode_1d(tmp.as_slice(), out.as_mut_slice(), w as usize, h as usize, height, false);
    Ok(out.into())
}

/// Running minimum along rows (`horizontal`) or columns.
fn erode_1d(src: &[u8], dst: &mut [u8], w: usize, h: usize, size: u32, horizontal: bool) {
    let size = size as usize;
    let before = size / 2;
    let after = size - 1 - before;
    let (len, lines, step, stride) = if horizontal { (w, h, 1, w) } else { (h, w, w, 1) };

    for line in 0..lines {
        let base = line * stride;
        for i in 0..len {
            let lo = i.saturating_sub(before);
            let hi = (i + after).min(len - 1);
            let mut min = u8::MAX;
            for j in lo..=hi {
                min = min.min(src[base + j * step]);
            }
            dst[base + i * step] = min;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: u32, h: u32, data: &[u8]) -> LabelGrid {
        LabelGrid::from_vec(w, h, data.to_vec()).unwrap()
    }

    #[test]
    fn test_zero_size_rejected() {
        let g = grid(2, 2, &[1, 1, 1, 1]);
        assert!(matches!(erode_square(&g, 0), Err(MorphError::InvalidSel(_))));
    }

    #[test]
    fn test_identity() {
        let g = grid(3, 1, &[0, 2, 1]);
        assert_eq!(erode_square(&g, 1).unwrap(), g);
    }

    #[test]
    fn test_even_window_origin() {
        // width 4: window is x-2 ..= x+1
        let g = grid(6, 1, &[2, 2, 2, 2, 2, 0]);
        let e = erode_brick(&g, 4, 1).unwrap();
        assert_eq!(e.as_slice(), &[2, 2, 2, 2, 0, 0]);
    }

    #[test]
    fn test_isolated_pixel_removed() {
        let mut data = vec![0u8; 25];
        data[12] = 2;
        let e = erode_square(&grid(5, 5, &data), 3).unwrap();
        assert_eq!(e.count_label(2), 0);
    }

    #[test]
    fn test_block_shrinks() {
        // 4x4 block of label 1 in a 6x6 grid shrinks to 2x2 under 3x3
        let mut data = vec![0u8; 36];
        for y in 1..5 {
            for x in 1..5 {
                data[y * 6 + x] = 1;
            }
        }
        let e = erode_square(&grid(6, 6, &data), 3).unwrap();
        assert_eq!(e.count_label(1), 4);
        assert_eq!(e.get(2, 2), Some(1));
        assert_eq!(e.get(1, 1), Some(0));
    }

    #[test]
    fn test_labels_background_wins() {
        let labels = Labels {
            background: 9,
            pointer: 3,
            scale: 7,
        };
        let g = grid(5, 1, &[9, 3, 3, 3, 9]);
        let e = erode_labels(&g, 3, &labels).unwrap();
        assert_eq!(e.as_slice(), &[9, 9, 3, 9, 9]);

        // pointer outranks scale where they touch
        let g = grid(4, 1, &[7, 7, 3, 3]);
        let e = erode_labels(&g, 2, &labels).unwrap();
        assert_eq!(e.as_slice(), &[7, 7, 3, 3]);
        let e = erode_labels(&grid(3, 1, &[7, 3, 7]), 3, &labels).unwrap();
        assert_eq!(e.as_slice(), &[3, 3, 3]);
    }

    #[test]
    fn test_labels_default_matches_square() {
        let data: Vec<u8> = (0..49).map(|i| ((i * 7 + i / 7) % 3) as u8).collect();
        let g = grid(7, 7, &data);
        assert_eq!(
            erode_labels(&g, 3, &Labels::default()).unwrap(),
            erode_square(&g, 3).unwrap()
        );
    }

    #[test]
    fn test_labels_duplicate_rejected() {
        let labels = Labels {
            background: 1,
            pointer: 1,
            scale: 2,
        };
        let g = grid(2, 2, &[1, 1, 1, 1]);
        assert!(matches!(
            erode_labels(&g, 3, &labels),
            Err(MorphError::Core(_))
        ));
    }

    #[test]
    fn test_border_not_eroded() {
        let g = grid(3, 3, &[2; 9]);
        assert_eq!(erode_square(&g, 3).unwrap(), g);
    }
}
