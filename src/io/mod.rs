/// Command-line interface and environment fallbacks
pub mod cli;
/// Constants and default values
pub mod configuration;
/// Error types and result handling
pub mod error;
/// Source image decoding
pub mod image;
/// Manifest file reading and writing
pub mod manifest;
/// Progress display and reporting
pub mod progress;
/// Tensor file naming and persistence
pub mod tensor;
