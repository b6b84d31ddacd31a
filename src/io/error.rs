//! Error types and path context for batch preparation

use crate::io::configuration::{EXIT_CONFIGURATION, EXIT_EMPTY_INPUT, EXIT_IO};
use crate::preprocess::TransformError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Coarse classification of every failure the pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required setting is missing or invalid
    Configuration,
    /// The source set has nothing left to process
    EmptyInput,
    /// Decoding, reading or writing failed
    Io,
}

impl ErrorKind {
    /// Process exit code reported for this kind of failure
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Configuration => EXIT_CONFIGURATION,
            Self::EmptyInput => EXIT_EMPTY_INPUT,
            Self::Io => EXIT_IO,
        }
    }
}

/// Main error type for all preparation operations
#[derive(Debug)]
pub enum PrepareError {
    /// A required setting was not supplied
    MissingSetting {
        /// Name of the absent setting
        setting: &'static str,
    },

    /// A supplied setting failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The single-file override names a path that is not a file
    SingleFileNotFound {
        /// Path given as the override
        path: PathBuf,
    },

    /// The source directory does not exist or is not a directory
    SourceDirMissing {
        /// Configured source directory
        path: PathBuf,
    },

    /// The source directory holds no JPEG files
    NoMatchingImages {
        /// Directory that was scanned
        dir: PathBuf,
    },

    /// The skip offset consumed every candidate image
    SkipExhausted {
        /// Directory that was scanned
        dir: PathBuf,
        /// Configured skip offset
        skip: usize,
        /// Number of matching images found before skipping
        available: usize,
    },

    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Decoded pixels could not be arranged into an array
    PixelLayout {
        /// Path to the image file
        path: PathBuf,
        /// Description of the layout problem
        reason: String,
    },

    /// The crop, zoom or layout step rejected an image
    Transform {
        /// Path to the image file
        path: PathBuf,
        /// Underlying transform error
        source: TransformError,
    },

    /// Failed to write a tensor file
    TensorWrite {
        /// Destination of the tensor
        path: PathBuf,
        /// Underlying serialization error
        source: ndarray_npy::WriteNpyError,
    },

    /// Failed to read a tensor file back
    TensorRead {
        /// Path of the tensor
        path: PathBuf,
        /// Underlying deserialization error
        source: ndarray_npy::ReadNpyError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl PrepareError {
    /// Classify the error for reporting and exit codes
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingSetting { .. }
            | Self::InvalidParameter { .. }
            | Self::SingleFileNotFound { .. }
            | Self::SourceDirMissing { .. } => ErrorKind::Configuration,
            Self::NoMatchingImages { .. } | Self::SkipExhausted { .. } => ErrorKind::EmptyInput,
            Self::ImageLoad { .. }
            | Self::PixelLayout { .. }
            | Self::Transform { .. }
            | Self::TensorWrite { .. }
            | Self::TensorRead { .. }
            | Self::FileSystem { .. } => ErrorKind::Io,
        }
    }
}

impl fmt::Display for PrepareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting { setting } => {
                write!(f, "Required setting '{setting}' is not set")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SingleFileNotFound { path } => {
                write!(f, "Image file '{}' does not exist", path.display())
            }
            Self::SourceDirMissing { path } => {
                write!(f, "Input dir '{}' does not exist", path.display())
            }
            Self::NoMatchingImages { dir } => {
                write!(f, "Input dir '{}' does not contain image files", dir.display())
            }
            Self::SkipExhausted {
                dir,
                skip,
                available,
            } => {
                write!(
                    f,
                    "Input dir '{}' does not contain more files (skipping {skip} of {available})",
                    dir.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::PixelLayout { path, reason } => {
                write!(f, "Unusable pixel layout in '{}': {reason}", path.display())
            }
            Self::Transform { path, source } => {
                write!(f, "Failed to preprocess '{}': {source}", path.display())
            }
            Self::TensorWrite { path, source } => {
                write!(f, "Failed to write tensor '{}': {source}", path.display())
            }
            Self::TensorRead { path, source } => {
                write!(f, "Failed to read tensor '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PrepareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::Transform { source, .. } => Some(source),
            Self::TensorWrite { source, .. } => Some(source),
            Self::TensorRead { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for preparation results
pub type Result<T> = std::result::Result<T, PrepareError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert the error into [`PrepareError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PrepareError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PrepareError {
    PrepareError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
