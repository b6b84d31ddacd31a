//! Geometric preprocessing that turns decoded pixels into model-ready tensors

/// Grayscale expansion and alpha removal
pub mod channels;
/// Central crop window arithmetic
pub mod crop;
/// Channel-first batch layout conversion
pub mod layout;
/// Spline zoom to a square target size
pub mod zoom;

use crate::math::interpolation::{InterpolationError, SplineOrder};
use ndarray::{Array4, ArrayViewD, ShapeError};
use num_traits::{Bounded, NumCast, ToPrimitive};
use std::error::Error;
use std::fmt;

/// Error raised when an image cannot go through the transform pipeline
#[derive(Debug, Clone)]
pub struct TransformError {
    message: String,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform error: {}", self.message)
    }
}

impl Error for TransformError {}

impl TransformError {
    /// Create an error with the given description
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<InterpolationError> for TransformError {
    fn from(err: InterpolationError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ShapeError> for TransformError {
    fn from(err: ShapeError) -> Self {
        Self::new(err.to_string())
    }
}

/// Run the full transform on one decoded image
///
/// Normalizes channels, crops the central region, zooms it to
/// `target_size × target_size` and returns a contiguous
/// `(1, 3, target_size, target_size)` tensor.
///
/// # Errors
///
/// Returns an error if the pixel array has an unsupported rank, the crop is
/// empty, or `target_size` is zero
pub fn prepare_tensor<T>(
    pixels: ArrayViewD<'_, T>,
    target_size: usize,
    order: SplineOrder,
) -> Result<Array4<T>, TransformError>
where
    T: Copy + ToPrimitive + NumCast + Bounded,
{
    let rgb = channels::to_three_channels(pixels)?;
    let cropped = crop::central_crop(rgb.view())?;
    let zoomed = zoom::zoom_to_square(cropped, target_size, order)?;
    Ok(layout::to_batched_chw(zoomed))
}
