//! Batch preparation pipeline: selection, preprocessing and cache control

/// Per-image preprocessing into tensor files
pub mod batch;
/// Cache decision and run entry point
pub mod cache;
/// Validated run configuration
pub mod config;
/// Deterministic source image selection
pub mod selector;
