//! Conversion from interleaved pixels to a channel-first batch of one

use ndarray::{Array3, Array4, Axis};

/// Reorder `(h, w, c)` to `(1, c, h, w)` with standard (C-order) memory layout
pub fn to_batched_chw<T: Clone>(image: Array3<T>) -> Array4<T> {
    image
        .permuted_axes([2, 0, 1])
        .insert_axis(Axis(0))
        .as_standard_layout()
        .into_owned()
}
