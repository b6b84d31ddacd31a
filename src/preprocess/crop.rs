//! Central crop covering a fixed fraction of each spatial side

use crate::io::configuration::CENTRAL_CROP_FRACTION;
use crate::preprocess::TransformError;
use ndarray::{ArrayView3, s};

/// Spatial window selected by the central crop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// First row kept
    pub top: usize,
    /// First column kept
    pub left: usize,
    /// Number of rows kept
    pub height: usize,
    /// Number of columns kept
    pub width: usize,
}

impl CropWindow {
    /// Centered window keeping `fraction` of each side
    ///
    /// Side lengths are truncated toward zero and offsets use integer
    /// division, so odd margins leave the extra row or column at the end.
    pub fn central(height: usize, width: usize, fraction: f64) -> Self {
        let new_height = (height as f64 * fraction) as usize;
        let new_width = (width as f64 * fraction) as usize;
        Self {
            top: (height - new_height) / 2,
            left: (width - new_width) / 2,
            height: new_height,
            width: new_width,
        }
    }

    /// Check whether the window keeps no pixels
    pub const fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }
}

/// Crop the central region of an `(h, w, c)` image
///
/// # Errors
///
/// Returns an error if the image is too small to leave a non-empty crop
pub fn central_crop<T>(image: ArrayView3<'_, T>) -> Result<ArrayView3<'_, T>, TransformError> {
    let (height, width, _) = image.dim();
    let window = CropWindow::central(height, width, CENTRAL_CROP_FRACTION);

    if window.is_empty() {
        return Err(TransformError::new(format!(
            "{height}x{width} image is too small for a central crop"
        )));
    }

    Ok(image.slice_move(s![
        window.top..window.top + window.height,
        window.left..window.left + window.width,
        ..
    ]))
}
