//! Projection profiles of a foreground mask
//!
//! A projection profile is a 1-D reduction of the 2-D mask: the count of
//! foreground pixels along one axis, used to locate where content is
//! concentrated along the orthogonal axis.

use ndarray::{Array1, Array2, Axis};

/// Count foreground pixels in each row of the mask
///
/// The result has one entry per mask row; a zero-sized mask yields an empty
/// vector.
pub fn row_profile(mask: &Array2<bool>) -> Array1<u32> {
    mask.map(|&cell| u32::from(cell)).sum_axis(Axis(1))
}

/// Count foreground pixels in each column of the mask
pub fn col_profile(mask: &Array2<bool>) -> Array1<u32> {
    mask.map(|&cell| u32::from(cell)).sum_axis(Axis(0))
}
