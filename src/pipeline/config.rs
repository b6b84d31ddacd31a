//! Validated, immutable configuration for one preparation run

use crate::io::configuration::{
    DEFAULT_BATCH_COUNT, DEFAULT_BATCH_SIZE, DEFAULT_IMAGE_SIZE, DEFAULT_INTERPOLATION_ORDER,
    DEFAULT_SKIP_IMAGES, MANIFEST_EXTENSION,
};
use crate::io::error::{PrepareError, Result, invalid_parameter};
use crate::math::interpolation::SplineOrder;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Raw settings as supplied at the boundary, before validation
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Number of batches to prepare
    pub batch_count: usize,
    /// Number of images per batch
    pub batch_size: usize,
    /// Number of leading images (in sorted order) to skip
    pub skip_images: usize,
    /// Edge length of the produced tensors, in pixels
    pub image_size: usize,
    /// Directory holding the source dataset
    pub image_dir: Option<PathBuf>,
    /// Base name of the selected-image manifest
    pub image_list: Option<PathBuf>,
    /// Base name of the batch output directory
    pub batches_dir: Option<PathBuf>,
    /// Base name of the batch manifest
    pub batch_list: Option<PathBuf>,
    /// Directory recreated for downstream results
    pub results_dir: Option<PathBuf>,
    /// Regenerate batches even when a cached directory exists
    pub prepare_always: bool,
    /// Process only this file instead of a directory
    pub image_file: Option<PathBuf>,
    /// Degree of the spline used when zooming
    pub interpolation_order: u8,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            batch_count: DEFAULT_BATCH_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            skip_images: DEFAULT_SKIP_IMAGES,
            image_size: DEFAULT_IMAGE_SIZE,
            image_dir: None,
            image_list: None,
            batches_dir: None,
            batch_list: None,
            results_dir: None,
            prepare_always: false,
            image_file: None,
            interpolation_order: DEFAULT_INTERPOLATION_ORDER,
        }
    }
}

/// Resolved parameters of one run; never mutated after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    batch_count: usize,
    batch_size: usize,
    images_count: usize,
    skip_images: usize,
    image_size: usize,
    image_dir: PathBuf,
    single_image: Option<String>,
    image_list: PathBuf,
    batches_dir: PathBuf,
    batch_list: PathBuf,
    results_dir: PathBuf,
    prepare_always: bool,
    interpolation: SplineOrder,
    mode_suffix: String,
}

impl RunConfiguration {
    /// Validate raw settings and derive the namespaced output paths
    ///
    /// The mode suffix is derived from the configured sizes before a
    /// single-file override resets them, so both modes share output paths.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A count or size is zero, or the total image count overflows
    /// - A required path is missing, or the batches directory is not valid UTF-8
    /// - The single-file override does not name an existing file
    /// - The interpolation order is unsupported
    pub fn resolve(settings: RunSettings) -> Result<Self> {
        require_positive("batch_count", settings.batch_count)?;
        require_positive("batch_size", settings.batch_size)?;
        require_positive("image_size", settings.image_size)?;
        let images_count = settings
            .batch_size
            .checked_mul(settings.batch_count)
            .ok_or_else(|| {
                invalid_parameter(
                    "batch_size",
                    &settings.batch_size,
                    &format!("batch_size * batch_count ({}) overflows", settings.batch_count),
                )
            })?;

        let interpolation = SplineOrder::try_from(settings.interpolation_order).map_err(|e| {
            invalid_parameter("interpolation_order", &settings.interpolation_order, &e)
        })?;

        let mode_suffix = format!(
            "-{}-{}-{}",
            settings.image_size, settings.batch_size, settings.batch_count
        );

        let image_list = require_path("image_list", settings.image_list)?;
        let batches_dir = require_path("batches_dir", settings.batches_dir)?;
        // Batch manifest entries are written as text
        if batches_dir.to_str().is_none() {
            return Err(invalid_parameter(
                "batches_dir",
                &batches_dir.display(),
                &"path is not valid UTF-8",
            ));
        }
        let batch_list = require_path("batch_list", settings.batch_list)?;
        let results_dir = require_path("results_dir", settings.results_dir)?;

        let mut config = Self {
            batch_count: settings.batch_count,
            batch_size: settings.batch_size,
            images_count,
            skip_images: settings.skip_images,
            image_size: settings.image_size,
            image_dir: PathBuf::new(),
            single_image: None,
            image_list: with_suffix(&image_list, &mode_suffix, MANIFEST_EXTENSION),
            batches_dir: with_suffix(&batches_dir, &mode_suffix, ""),
            batch_list: with_suffix(&batch_list, &mode_suffix, MANIFEST_EXTENSION),
            results_dir,
            prepare_always: settings.prepare_always,
            interpolation,
            mode_suffix,
        };

        match settings.image_file.filter(|path| !path.as_os_str().is_empty()) {
            Some(file) => {
                let (dir, name) = split_single_file(&file)?;
                config.image_dir = dir;
                config.single_image = Some(name);
                config.prepare_always = true;
                config.batch_count = 1;
                config.batch_size = 1;
                config.images_count = 1;
                config.skip_images = 0;
            }
            None => {
                config.image_dir = require_path("image_dir", settings.image_dir)?;
            }
        }

        Ok(config)
    }

    /// Number of batches to prepare
    pub const fn batch_count(&self) -> usize {
        self.batch_count
    }

    /// Number of images per batch
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Total number of images a run selects
    pub const fn images_count(&self) -> usize {
        self.images_count
    }

    /// Number of leading images skipped
    pub const fn skip_images(&self) -> usize {
        self.skip_images
    }

    /// Edge length of the produced tensors
    pub const fn image_size(&self) -> usize {
        self.image_size
    }

    /// Directory the selected images are read from
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// File name of the single-file override, if active
    pub fn single_image(&self) -> Option<&str> {
        self.single_image.as_deref()
    }

    /// Selected-image manifest path, including the mode suffix
    pub fn image_list(&self) -> &Path {
        &self.image_list
    }

    /// Batch output directory, including the mode suffix
    pub fn batches_dir(&self) -> &Path {
        &self.batches_dir
    }

    /// Batch manifest path, including the mode suffix
    pub fn batch_list(&self) -> &Path {
        &self.batch_list
    }

    /// Directory recreated for downstream results
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Whether cached batches are always regenerated
    pub const fn prepare_always(&self) -> bool {
        self.prepare_always
    }

    /// Spline used to zoom crops to the target size
    pub const fn interpolation(&self) -> SplineOrder {
        self.interpolation
    }

    /// Path namespace `-{image_size}-{batch_size}-{batch_count}`
    pub fn mode_suffix(&self) -> &str {
        &self.mode_suffix
    }

    /// Log the resolved settings
    pub fn log_summary(&self) {
        if let Some(name) = self.single_image() {
            log::info!("Single file mode");
            log::info!("Image file: {name}");
        }
        log::info!("Batch size: {}", self.batch_size);
        log::info!("Batch count: {}", self.batch_count);
        log::info!("Batch list: {}", self.batch_list.display());
        log::info!("Skip images: {}", self.skip_images);
        log::info!("Image dir: {}", self.image_dir.display());
        log::info!("Image list: {}", self.image_list.display());
        log::info!("Image size: {}", self.image_size);
        log::info!("Batches dir: {}", self.batches_dir.display());
        log::info!("Results dir: {}", self.results_dir.display());
        log::debug!("Interpolation order: {}", self.interpolation.degree());
    }
}

fn require_positive(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be greater than zero"));
    }
    Ok(())
}

fn require_path(setting: &'static str, path: Option<PathBuf>) -> Result<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
        .ok_or(PrepareError::MissingSetting { setting })
}

/// Append `suffix` and `extension` to the final component of `base`
pub fn with_suffix(base: &Path, suffix: &str, extension: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    name.push(extension);
    PathBuf::from(name)
}

fn split_single_file(file: &Path) -> Result<(PathBuf, String)> {
    if !file.is_file() {
        return Err(PrepareError::SingleFileNotFound {
            path: file.to_path_buf(),
        });
    }

    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            invalid_parameter("image_file", &file.display(), &"file name is not valid UTF-8")
        })?;
    let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();

    Ok((dir, name.to_string()))
}
