//! Deterministic selection of the source images a run processes

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{PrepareError, Result, WithPath};
use crate::io::manifest::write_manifest;
use std::path::{Path, PathBuf};

/// Chooses a fixed-length, reproducibly ordered list of source file names
#[derive(Debug, Clone)]
pub struct ImageSelector {
    source_dir: PathBuf,
    single_file: Option<String>,
    skip: usize,
    count: usize,
}

impl ImageSelector {
    /// Selector over `source_dir`, or over one file in it when `single_file` is set
    pub fn new(
        source_dir: impl Into<PathBuf>,
        single_file: Option<String>,
        skip: usize,
        count: usize,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            single_file,
            skip,
            count,
        }
    }

    /// Produce the ordered selection
    ///
    /// Candidates are the JPEG files directly inside the source directory,
    /// sorted by name. After skipping, the first `count` are taken and the
    /// list is padded by repeating its last entry if fewer remain.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The single file or source directory does not exist
    /// - The directory holds no JPEG files, or the skip offset consumes them all
    /// - The directory cannot be listed
    pub fn select(&self) -> Result<Vec<String>> {
        if let Some(ref name) = self.single_file {
            let path = self.source_dir.join(name);
            if !path.is_file() {
                return Err(PrepareError::SingleFileNotFound { path });
            }
            return Ok(vec![name.clone()]);
        }

        if !self.source_dir.is_dir() {
            return Err(PrepareError::SourceDirMissing {
                path: self.source_dir.clone(),
            });
        }

        let mut files = self.list_images()?;
        if files.is_empty() {
            return Err(PrepareError::NoMatchingImages {
                dir: self.source_dir.clone(),
            });
        }

        files.sort();
        let available = files.len();
        let remaining = files.get(self.skip..).unwrap_or_default();
        if remaining.is_empty() {
            return Err(PrepareError::SkipExhausted {
                dir: self.source_dir.clone(),
                skip: self.skip,
                available,
            });
        }

        Ok(take_padded(remaining, self.count))
    }

    /// Select and record the selection in `manifest`, one name per line
    ///
    /// # Errors
    ///
    /// Returns an error if selection fails or the manifest cannot be written
    pub fn select_into(&self, manifest: &Path) -> Result<Vec<String>> {
        let images = self.select()?;
        write_manifest(manifest, &images)?;
        log::debug!(
            "Wrote {} image names to {}",
            images.len(),
            manifest.display()
        );
        Ok(images)
    }

    fn list_images(&self) -> Result<Vec<String>> {
        let dir = self.source_dir.as_path();
        let mut files = Vec::new();

        for entry in std::fs::read_dir(dir).with_path(dir, "list directory")? {
            let path = entry.with_path(dir, "list directory")?.path();
            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name() else {
                continue;
            };
            match name.to_str() {
                Some(name) if is_jpeg_name(name) => files.push(name.to_string()),
                Some(_) => {}
                None => log::warn!("Skipping non UTF-8 file name: {}", path.display()),
            }
        }

        Ok(files)
    }
}

/// Check whether a file name ends in `.jpg` or `.jpeg`, ignoring case
pub fn is_jpeg_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Take the first `count` names, repeating the last one if there are fewer
pub fn take_padded(names: &[String], count: usize) -> Vec<String> {
    let mut selected: Vec<String> = names.iter().take(count).cloned().collect();
    if let Some(last) = selected.last().cloned() {
        selected.resize(count, last);
    }
    selected
}
