//! Per-image preprocessing into one tensor file per selected source

use crate::io::error::{PrepareError, Result};
use crate::io::image::decode_pixels;
use crate::io::manifest::write_manifest;
use crate::io::progress::ProgressReporter;
use crate::io::tensor::{tensor_path, write_tensor};
use crate::math::interpolation::SplineOrder;
use crate::preprocess::prepare_tensor;
use std::path::{Path, PathBuf};

/// Turns selected source images into batch tensor files
pub struct BatchPreprocessor {
    source_dir: PathBuf,
    output_dir: PathBuf,
    target_size: usize,
    order: SplineOrder,
}

impl BatchPreprocessor {
    /// Preprocessor reading from `source_dir` and writing into `output_dir`
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        target_size: usize,
        order: SplineOrder,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            target_size,
            order,
        }
    }

    /// Process every selected image in order and return the tensor paths
    ///
    /// Stops at the first failure; nothing after the failing image is written.
    ///
    /// # Errors
    ///
    /// Returns an error if any image cannot be decoded, transformed or written
    pub fn process(
        &self,
        selected: &[String],
        progress: &mut ProgressReporter,
    ) -> Result<Vec<PathBuf>> {
        let mut produced = Vec::with_capacity(selected.len());

        for name in selected {
            produced.push(self.prepare_one(name)?);
            progress.advance(name);
        }

        progress.finish();
        Ok(produced)
    }

    /// Process the selection and record the produced paths in `manifest`
    ///
    /// The manifest is only written once every image has succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if processing fails or the manifest cannot be written
    pub fn process_into(
        &self,
        selected: &[String],
        manifest: &Path,
        progress: &mut ProgressReporter,
    ) -> Result<Vec<PathBuf>> {
        let produced = self.process(selected, progress)?;
        write_manifest(manifest, produced.iter().map(|path| path.display()))?;
        Ok(produced)
    }

    /// Decode, transform and persist a single source image
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded, transformed or written
    pub fn prepare_one(&self, name: &str) -> Result<PathBuf> {
        let source = self.source_dir.join(name);
        let destination = tensor_path(&self.output_dir, name);

        let pixels = decode_pixels(&source)?;
        log::debug!("Decoded {} with shape {:?}", name, pixels.shape());

        let tensor = prepare_tensor(pixels.view(), self.target_size, self.order)
            .map_err(|e| PrepareError::Transform { path: source, source: e })?;

        write_tensor(&destination, &tensor)?;
        Ok(destination)
    }
}
