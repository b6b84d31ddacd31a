//! Progress display and periodic progress logging for batch preparation

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REPORT_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Tracks how many images of a run have been prepared
///
/// Draws a progress bar when visible and logs a line every
/// [`PROGRESS_REPORT_INTERVAL`] images regardless of visibility.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    total: usize,
    prepared: usize,
}

impl ProgressReporter {
    /// Create a reporter for `total` images
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = visible.then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });

        Self {
            bar,
            total,
            prepared: 0,
        }
    }

    /// Create a reporter that never draws
    pub fn hidden(total: usize) -> Self {
        Self::new(total, false)
    }

    /// Record one finished image
    pub fn advance(&mut self, name: &str) {
        self.prepared += 1;

        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }

        if should_report(self.prepared) {
            log::info!("Prepared images: {} of {}", self.prepared, self.total);
        }
    }

    /// Number of images recorded so far
    pub const fn prepared(&self) -> usize {
        self.prepared
    }

    /// Number of images expected
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Clear the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Check whether a progress line is due after `prepared` images
pub const fn should_report(prepared: usize) -> bool {
    prepared > 0 && prepared % PROGRESS_REPORT_INTERVAL == 0
}
