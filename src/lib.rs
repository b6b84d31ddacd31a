//! Deterministic preparation of preprocessed image tensors for classification benchmarks
//!
//! Selects a reproducible subset of source JPEG images, crops the central
//! region of each, zooms it to a square target size and stores it as a
//! channel-first `.npy` batch, alongside manifests listing the selected images
//! and produced tensors. Prepared batches are reused across runs unless
//! regeneration is forced.

/// Input/output operations, configuration and error handling
pub mod io;
/// Spline interpolation used for resampling
pub mod math;
/// Selection, preprocessing and cache control for a preparation run
pub mod pipeline;
/// Per-image geometric transforms
pub mod preprocess;

pub use io::error::{ErrorKind, PrepareError, Result};
