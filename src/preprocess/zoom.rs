//! Spline zoom of each color plane to a square output

use crate::math::interpolation::{InterpolationError, SplineOrder, resample_line};
use crate::preprocess::TransformError;
use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis, Dimension, Zip};
use num_traits::{Bounded, NumCast, ToPrimitive};

/// Zoom an `(h, w, c)` image to `(size, size, c)`
///
/// Each plane is resampled along rows and then columns; the result is rounded
/// half up and clamped into the range of `T`. Intended for integer sample types.
///
/// # Errors
///
/// Returns an error if the image is empty or `size` is zero
pub fn zoom_to_square<T>(
    image: ArrayView3<'_, T>,
    size: usize,
    order: SplineOrder,
) -> Result<Array3<T>, TransformError>
where
    T: Copy + ToPrimitive + NumCast + Bounded,
{
    let (height, width, channels) = image.dim();
    if height == 0 || width == 0 {
        return Err(TransformError::new("cannot zoom an empty image"));
    }
    if size == 0 {
        return Err(TransformError::new("target size must be positive"));
    }

    let mut output = Array3::from_elem((size, size, channels), T::min_value());

    for (plane, mut out_plane) in image
        .axis_iter(Axis(2))
        .zip(output.axis_iter_mut(Axis(2)))
    {
        let samples = plane.mapv(|value| value.to_f64().unwrap_or_default());
        let rows = resample_axis(samples.view(), Axis(0), size, order)?;
        let zoomed = resample_axis(rows.view(), Axis(1), size, order)?;

        Zip::from(&mut out_plane)
            .and(&zoomed)
            .for_each(|out, &value| *out = saturate(value));
    }

    Ok(output)
}

/// Resample every lane of `plane` along `axis` to `out_len` samples
///
/// # Errors
///
/// Returns an error if a lane is empty or `out_len` is zero
pub fn resample_axis(
    plane: ArrayView2<'_, f64>,
    axis: Axis,
    out_len: usize,
    order: SplineOrder,
) -> Result<Array2<f64>, InterpolationError> {
    let mut shape = plane.raw_dim();
    if let Some(len) = shape.slice_mut().get_mut(axis.index()) {
        *len = out_len;
    }
    let mut output = Array2::zeros(shape);

    for (lane, mut out_lane) in plane.lanes(axis).into_iter().zip(output.lanes_mut(axis)) {
        let resampled = resample_line(&lane.to_vec(), out_len, order)?;
        for (out, value) in out_lane.iter_mut().zip(resampled) {
            *out = value;
        }
    }

    Ok(output)
}

/// Round half up and clamp into the representable range of `T`
pub fn saturate<T>(value: f64) -> T
where
    T: NumCast + Bounded,
{
    let low = T::min_value().to_f64().unwrap_or(f64::MIN);
    let high = T::max_value().to_f64().unwrap_or(f64::MAX);
    let rounded = (value + 0.5).floor().clamp(low, high);
    NumCast::from(rounded).unwrap_or_else(T::min_value)
}
