//! Tensor file naming and `.npy` persistence

use crate::io::configuration::TENSOR_SUFFIX;
use crate::io::error::{PrepareError, Result};
use ndarray::Array4;
use std::path::{Path, PathBuf};

/// Destination of the tensor produced from source file `name`
pub fn tensor_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{name}{TENSOR_SUFFIX}"))
}

/// Write a batch tensor as a NumPy `.npy` file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_tensor(path: &Path, tensor: &Array4<u8>) -> Result<()> {
    ndarray_npy::write_npy(path, tensor).map_err(|e| PrepareError::TensorWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a batch tensor back from a `.npy` file
///
/// # Errors
///
/// Returns an error if the file is missing or does not hold a 4-dimensional
/// `u8` array
pub fn read_tensor(path: &Path) -> Result<Array4<u8>> {
    ndarray_npy::read_npy(path).map_err(|e| PrepareError::TensorRead {
        path: path.to_path_buf(),
        source: e,
    })
}
