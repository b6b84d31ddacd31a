//! Spline interpolation along one axis for image zooming
//!
//! Samples are first converted to B-spline coefficients (for orders above one)
//! and then evaluated at fractional positions. Boundaries are mirrored about the
//! edge samples (`d c b | a b c d | c b a`), as in the classic array zoom
//! routines.

use std::error::Error;
use std::fmt;

/// Error type for interpolation operations
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation error: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Degree of the interpolating spline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplineOrder {
    /// Nearest sample
    Nearest,
    /// Piecewise linear
    Linear,
    /// Cubic B-spline
    #[default]
    Cubic,
}

impl SplineOrder {
    /// Numeric degree of the spline
    pub const fn degree(self) -> u8 {
        match self {
            Self::Nearest => 0,
            Self::Linear => 1,
            Self::Cubic => 3,
        }
    }
}

impl TryFrom<u8> for SplineOrder {
    type Error = InterpolationError;

    fn try_from(degree: u8) -> Result<Self, Self::Error> {
        match degree {
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Linear),
            3 => Ok(Self::Cubic),
            other => Err(InterpolationError::new(format!(
                "unsupported spline order {other} (expected 0, 1 or 3)"
            ))),
        }
    }
}

// Single pole of the cubic B-spline recursive filter, sqrt(3) - 2
const CUBIC_POLE: f64 = -0.267_949_192_431_122_7;
const CUBIC_GAIN: f64 = 6.0;

/// Reflect an out-of-range index back into `0..len` without repeating edges
pub const fn mirror_index(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let mut wrapped = index.rem_euclid(period);
    if wrapped >= len as isize {
        wrapped = period - wrapped;
    }
    wrapped as usize
}

/// Position in the source line that output sample `out_index` maps to
///
/// Endpoints align: output sample 0 maps to source sample 0 and the last
/// output sample maps to the last source sample. A single output sample maps
/// to the origin.
pub fn source_coordinate(out_index: usize, in_len: usize, out_len: usize) -> f64 {
    if out_len <= 1 {
        return 0.0;
    }
    let scale = (in_len as f64 - 1.0) / (out_len as f64 - 1.0);
    out_index as f64 * scale
}

/// Convert samples into interpolation coefficients for `order`, in place
///
/// Orders below two interpolate the samples directly and leave them unchanged.
pub fn prefilter(line: &mut [f64], order: SplineOrder) {
    if order != SplineOrder::Cubic || line.len() < 2 {
        return;
    }

    let n = line.len();
    let z = CUBIC_POLE;

    for value in line.iter_mut() {
        *value *= CUBIC_GAIN;
    }

    // Causal initialization with mirrored boundary
    let z_n_1 = z.powi((n - 1) as i32);
    let last = line.last().copied().unwrap_or_default();
    let mut first = line.first().copied().unwrap_or_default() + z_n_1 * last;
    let mut z_i = z;
    for i in 1..n - 1 {
        let forward = line.get(i).copied().unwrap_or_default();
        let backward = line.get(n - 1 - i).copied().unwrap_or_default();
        first += z_i * z_n_1.mul_add(backward, forward);
        z_i *= z;
    }
    first /= z_n_1.mul_add(-z_n_1, 1.0);
    if let Some(value) = line.first_mut() {
        *value = first;
    }

    for i in 1..n {
        let previous = line.get(i - 1).copied().unwrap_or_default();
        if let Some(value) = line.get_mut(i) {
            *value = z.mul_add(previous, *value);
        }
    }

    // Anti-causal initialization with mirrored boundary
    let before_last = line.get(n - 2).copied().unwrap_or_default();
    if let Some(value) = line.last_mut() {
        *value = z.mul_add(before_last, *value) * z / z.mul_add(z, -1.0);
    }

    for i in (0..n - 1).rev() {
        let next = line.get(i + 1).copied().unwrap_or_default();
        if let Some(value) = line.get_mut(i) {
            *value = z * (next - *value);
        }
    }
}

/// Evaluate prefiltered coefficients at position `x`
///
/// # Errors
///
/// Returns an error if `coefficients` is empty or `x` is not finite
pub fn evaluate(
    coefficients: &[f64],
    x: f64,
    order: SplineOrder,
) -> Result<f64, InterpolationError> {
    let n = coefficients.len();
    if n == 0 {
        return Err(InterpolationError::new("No coefficients available"));
    }
    if !x.is_finite() {
        return Err(InterpolationError::new(format!(
            "sample position {x} is not finite"
        )));
    }

    let at = |index: isize| {
        coefficients
            .get(mirror_index(index, n))
            .copied()
            .ok_or_else(|| InterpolationError::new("Invalid index"))
    };

    match order {
        SplineOrder::Nearest => at((x + 0.5).floor() as isize),
        SplineOrder::Linear => {
            let base = x.floor();
            let t = x - base;
            let start = base as isize;
            Ok((1.0 - t).mul_add(at(start)?, t * at(start + 1)?))
        }
        SplineOrder::Cubic => {
            let base = x.floor();
            let t = x - base;
            let start = base as isize - 1;
            let weights = cubic_weights(t);
            let mut total = 0.0;
            for (offset, weight) in (0_isize..).zip(weights) {
                total = weight.mul_add(at(start + offset)?, total);
            }
            Ok(total)
        }
    }
}

/// Cubic B-spline basis weights for the four samples around fractional offset `t`
pub fn cubic_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let one_minus = 1.0 - t;
    [
        one_minus * one_minus * one_minus / 6.0,
        (3.0f64.mul_add(t3, -6.0 * t2) + 4.0) / 6.0,
        (3.0f64.mul_add(-t3, 3.0 * t2) + 3.0f64.mul_add(t, 1.0)) / 6.0,
        t3 / 6.0,
    ]
}

/// Resample a full line of samples to `out_len` samples
///
/// # Errors
///
/// Returns an error if `samples` is empty or `out_len` is zero
pub fn resample_line(
    samples: &[f64],
    out_len: usize,
    order: SplineOrder,
) -> Result<Vec<f64>, InterpolationError> {
    if out_len == 0 {
        return Err(InterpolationError::new("Output length must be positive"));
    }

    let mut coefficients = samples.to_vec();
    prefilter(&mut coefficients, order);

    (0..out_len)
        .map(|i| {
            evaluate(
                &coefficients,
                source_coordinate(i, samples.len(), out_len),
                order,
            )
        })
        .collect()
}
