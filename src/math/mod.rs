//! Mathematical utilities for resampling

/// Spline prefiltering and evaluation for one-dimensional resampling
pub mod interpolation;
