//! Command-line interface with environment fallbacks for batch preparation

use crate::io::configuration::{
    DEFAULT_BATCH_COUNT, DEFAULT_BATCH_SIZE, DEFAULT_IMAGE_SIZE, DEFAULT_INTERPOLATION_ORDER,
    DEFAULT_SKIP_IMAGES, PREPARE_ALWAYS_TOKEN,
};
use crate::io::error::Result;
use crate::pipeline::cache::{CacheController, PreparationReport};
use crate::pipeline::config::{RunConfiguration, RunSettings};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "batchprep")]
#[command(
    author,
    version,
    about = "Prepare preprocessed image tensors for classification benchmarks"
)]
/// Command-line arguments for the batch preparation step
pub struct Cli {
    /// Number of batches to prepare
    #[arg(long, env = "CK_BATCH_COUNT", default_value_t = DEFAULT_BATCH_COUNT)]
    pub batch_count: usize,

    /// Number of images per batch
    #[arg(long, env = "CK_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Number of leading images (in sorted order) to skip
    #[arg(long, env = "CK_SKIP_IMAGES", default_value_t = DEFAULT_SKIP_IMAGES)]
    pub skip_images: usize,

    /// Directory holding the source JPEG images
    #[arg(long, env = "CK_ENV_DATASET_IMAGENET_VAL", value_name = "DIR")]
    pub image_dir: Option<PathBuf>,

    /// Edge length of the produced tensors, in pixels
    #[arg(long, env = "CK_ENV_MOBILENET_RESOLUTION", default_value_t = DEFAULT_IMAGE_SIZE)]
    pub resolution: usize,

    /// Base name of the selected-image manifest
    #[arg(long, env = "CK_IMAGE_LIST", value_name = "PATH")]
    pub image_list: Option<PathBuf>,

    /// Base name of the batch output directory
    #[arg(long, env = "CK_BATCHES_DIR", value_name = "DIR")]
    pub batches_dir: Option<PathBuf>,

    /// Base name of the batch manifest
    #[arg(long, env = "CK_BATCH_LIST", value_name = "PATH")]
    pub batch_list: Option<PathBuf>,

    /// Directory recreated for downstream results
    #[arg(long, env = "CK_RESULTS_DIR", value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Regenerate batches when set to YES, even if cached batches exist
    #[arg(long, env = "CK_PREPARE_ALWAYS", value_name = "YES|NO")]
    pub prepare_always: Option<String>,

    /// Process only this image instead of a directory
    #[arg(long, env = "CK_IMAGE_FILE", value_name = "FILE")]
    pub image_file: Option<PathBuf>,

    /// Spline order used for zooming (0, 1 or 3)
    #[arg(long, env = "CK_INTERPOLATION_ORDER", default_value_t = DEFAULT_INTERPOLATION_ORDER)]
    pub interpolation_order: u8,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if the regenerate flag carries the exact forcing value
    pub fn force_regeneration(&self) -> bool {
        self.prepare_always.as_deref() == Some(PREPARE_ALWAYS_TOKEN)
    }

    /// Check if the progress bar should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for this invocation
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Raw settings carried by the arguments
    pub fn settings(&self) -> RunSettings {
        RunSettings {
            batch_count: self.batch_count,
            batch_size: self.batch_size,
            skip_images: self.skip_images,
            image_size: self.resolution,
            image_dir: self.image_dir.clone(),
            image_list: self.image_list.clone(),
            batches_dir: self.batches_dir.clone(),
            batch_list: self.batch_list.clone(),
            results_dir: self.results_dir.clone(),
            prepare_always: self.force_regeneration(),
            image_file: self.image_file.clone(),
            interpolation_order: self.interpolation_order,
        }
    }

    /// Resolve the arguments and run the preparation step
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or preparation fails
    pub fn run(&self) -> Result<PreparationReport> {
        let config = RunConfiguration::resolve(self.settings())?;
        CacheController::new(&config)
            .with_progress(self.should_show_progress())
            .execute()
    }
}
