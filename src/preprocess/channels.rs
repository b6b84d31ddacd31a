//! Channel normalization to exactly three color planes

use crate::io::configuration::OUTPUT_CHANNELS;
use crate::preprocess::TransformError;
use ndarray::{Array3, ArrayView2, ArrayViewD, Axis, Ix2, Ix3, s};

/// Convert an `(h, w)` or `(h, w, c)` pixel array into `(h, w, 3)`
///
/// Grayscale arrays are replicated into three planes. Gray+alpha arrays keep
/// only the gray plane before replication. Arrays with more than three
/// channels keep the first three.
///
/// # Errors
///
/// Returns an error if the array is neither 2- nor 3-dimensional or has no
/// channels
pub fn to_three_channels<T: Clone>(pixels: ArrayViewD<'_, T>) -> Result<Array3<T>, TransformError> {
    match pixels.ndim() {
        2 => replicate(pixels.into_dimensionality::<Ix2>()?),
        3 => {
            let image = pixels.into_dimensionality::<Ix3>()?;
            match image.len_of(Axis(2)) {
                0 => Err(TransformError::new("pixel array has no channels")),
                // Gray plus alpha
                1 | 2 => replicate(image.index_axis_move(Axis(2), 0)),
                _ => Ok(image.slice_move(s![.., .., ..OUTPUT_CHANNELS]).to_owned()),
            }
        }
        rank => Err(TransformError::new(format!(
            "expected a 2- or 3-dimensional pixel array, got {rank} dimensions"
        ))),
    }
}

fn replicate<T: Clone>(gray: ArrayView2<'_, T>) -> Result<Array3<T>, TransformError> {
    let (height, width) = gray.dim();
    gray.insert_axis(Axis(2))
        .broadcast((height, width, OUTPUT_CHANNELS))
        .map(|planes| planes.to_owned())
        .ok_or_else(|| TransformError::new("cannot replicate grayscale plane"))
}
