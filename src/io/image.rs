//! Source image decoding into raw pixel arrays

use crate::io::error::{PrepareError, Result};
use image::{ColorType, DynamicImage};
use ndarray::{Array, Array2, ArrayD, IxDyn};
use std::path::Path;

/// Decode an image file into an `(h, w)` or `(h, w, c)` array of 8-bit samples
///
/// Grayscale sources stay two-dimensional; gray+alpha, RGB and RGBA sources
/// keep their channel count. Higher bit depths are reduced to 8 bits.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn decode_pixels(path: &Path) -> Result<ArrayD<u8>> {
    let img = image::open(path).map_err(|e| PrepareError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    pixels_from_image(&img).map_err(|reason| PrepareError::PixelLayout {
        path: path.to_path_buf(),
        reason,
    })
}

/// Arrange the samples of a decoded image into a row-major array
///
/// # Errors
///
/// Returns a description of the problem if the sample buffer does not match
/// the image dimensions
pub fn pixels_from_image(img: &DynamicImage) -> std::result::Result<ArrayD<u8>, String> {
    let height = img.height() as usize;
    let width = img.width() as usize;

    let (samples, channels) = match img.color() {
        ColorType::L8 | ColorType::L16 => {
            let gray = Array2::from_shape_vec((height, width), img.to_luma8().into_raw())
                .map_err(|e| e.to_string())?;
            return Ok(gray.into_dyn());
        }
        ColorType::La8 | ColorType::La16 => (img.to_luma_alpha8().into_raw(), 2),
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => (img.to_rgba8().into_raw(), 4),
        _ => (img.to_rgb8().into_raw(), 3),
    };

    Array::from_shape_vec(IxDyn(&[height, width, channels]), samples).map_err(|e| e.to_string())
}
