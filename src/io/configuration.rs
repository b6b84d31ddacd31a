//! Preprocessing constants and runtime configuration defaults

// Central crop policy shared by the Inception/MobileNet model family
/// Fraction of each spatial side kept by the central crop
pub const CENTRAL_CROP_FRACTION: f64 = 0.875;

/// Number of color channels in every produced tensor
pub const OUTPUT_CHANNELS: usize = 3;

/// Source file name extensions accepted by the selector (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 2] = [".jpg", ".jpeg"];

// Output settings
/// Suffix appended to the source file name to form the tensor file name
pub const TENSOR_SUFFIX: &str = ".npy";
/// Extension appended to manifest base names
pub const MANIFEST_EXTENSION: &str = ".txt";

/// Exact flag value that forces regeneration of cached batches
pub const PREPARE_ALWAYS_TOKEN: &str = "YES";

// Progress display settings
/// Number of processed images between progress log lines
pub const PROGRESS_REPORT_INTERVAL: usize = 10;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Default values for configurable parameters
/// Default number of images per batch
pub const DEFAULT_BATCH_SIZE: usize = 1;
/// Default number of batches
pub const DEFAULT_BATCH_COUNT: usize = 1;
/// Default number of leading images to skip
pub const DEFAULT_SKIP_IMAGES: usize = 0;
/// Default edge length of the produced tensors, in pixels
pub const DEFAULT_IMAGE_SIZE: usize = 224;
/// Default spline order used when zooming (cubic)
pub const DEFAULT_INTERPOLATION_ORDER: u8 = 3;

// Process exit codes per error kind
/// Exit code for I/O and decode failures
pub const EXIT_IO: u8 = 1;
/// Exit code for missing or invalid settings
pub const EXIT_CONFIGURATION: u8 = 2;
/// Exit code for source sets with nothing to process
pub const EXIT_EMPTY_INPUT: u8 = 3;
