//! Reuse-or-regenerate decision for prepared batches and the run entry point

use crate::io::error::{Result, WithPath};
use crate::io::progress::ProgressReporter;
use crate::pipeline::batch::BatchPreprocessor;
use crate::pipeline::config::RunConfiguration;
use crate::pipeline::selector::ImageSelector;
use std::path::{Path, PathBuf};

/// Whether prepared batches must be computed or can be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Batches must be (re)computed from the source images
    Fresh,
    /// A prior batch directory exists and is trusted as-is
    Reusable,
}

impl CacheState {
    /// Decide from the regenerate flag and the presence of the batch directory
    pub fn evaluate(prepare_always: bool, batches_dir: &Path) -> Self {
        if prepare_always || !batches_dir.is_dir() {
            Self::Fresh
        } else {
            Self::Reusable
        }
    }
}

/// Outcome of one preparation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationReport {
    /// Decision taken for this run
    pub state: CacheState,
    /// Selected source names (empty when batches were reused)
    pub selected: Vec<String>,
    /// Produced tensor paths (empty when batches were reused)
    pub batches: Vec<PathBuf>,
}

/// Gates image selection and preprocessing behind the cache decision
pub struct CacheController<'a> {
    config: &'a RunConfiguration,
    show_progress: bool,
}

impl<'a> CacheController<'a> {
    /// Controller for one run of `config`
    pub const fn new(config: &'a RunConfiguration) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Draw a progress bar while images are prepared
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the preparation step
    ///
    /// The results directory is always recreated. Batches are regenerated
    /// when forced or when no batch directory exists; otherwise the previous
    /// batches and manifests are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be recreated, or selection or
    /// preprocessing fails
    pub fn execute(&self) -> Result<PreparationReport> {
        let config = self.config;
        config.log_summary();

        recreate_dir(config.results_dir())?;

        let state = CacheState::evaluate(config.prepare_always(), config.batches_dir());
        match state {
            CacheState::Fresh => {
                recreate_dir(config.batches_dir())?;
                let (selected, batches) = self.prepare_batches()?;
                Ok(PreparationReport {
                    state,
                    selected,
                    batches,
                })
            }
            CacheState::Reusable => {
                log::info!("Batches preparation is skipped, use previous batches");
                Ok(PreparationReport {
                    state,
                    selected: Vec::new(),
                    batches: Vec::new(),
                })
            }
        }
    }

    fn prepare_batches(&self) -> Result<(Vec<String>, Vec<PathBuf>)> {
        let config = self.config;
        log::info!("Prepare images...");

        let selector = ImageSelector::new(
            config.image_dir(),
            config.single_image().map(str::to_string),
            config.skip_images(),
            config.images_count(),
        );
        let selected = selector.select_into(config.image_list())?;

        let preprocessor = BatchPreprocessor::new(
            config.image_dir(),
            config.batches_dir(),
            config.image_size(),
            config.interpolation(),
        );
        let mut progress = ProgressReporter::new(selected.len(), self.show_progress);
        let batches = preprocessor.process_into(&selected, config.batch_list(), &mut progress)?;

        Ok((selected, batches))
    }
}

/// Remove `path` if it is a directory, then create it empty
///
/// # Errors
///
/// Returns an error if removal or creation fails
pub fn recreate_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        std::fs::remove_dir_all(path).with_path(path, "remove directory")?;
    }
    std::fs::create_dir_all(path).with_path(path, "create directory")
}
