//! Batch progress display for sheet processing

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sheets: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for a batch of sheets
///
/// One bar tracks the whole batch; the message slot names the sheet currently
/// being segmented. A sheet is a single pipeline step, so there is no
/// per-sheet sub-progress.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no bars yet
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the batch bar for the given sheet count
    pub fn initialize(&mut self, sheet_count: usize) {
        let bar = ProgressBar::new(sheet_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(bar);
    }

    /// Show the sheet currently being processed
    pub fn start_sheet(&self, path: &Path) {
        if let Some(ref bar) = self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark the current sheet as finished
    pub fn complete_sheet(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clear the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_and_clear();
        }
    }
}
