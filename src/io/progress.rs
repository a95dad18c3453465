//! Batch progress display for tiling many level files

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Levels: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many level files of a batch have been tiled
pub struct ProgressManager {
    bar: ProgressBar,
    tiles_generated: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            tiles_generated: 0,
        }
    }

    /// Size the bar for a batch
    pub fn initialize(&mut self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
        self.tiles_generated = 0;
    }

    /// Show which file is being tiled
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count a finished file and the tiles it produced
    pub fn complete_file(&mut self, tiles: usize, elapsed: Duration) {
        self.tiles_generated += tiles;
        self.bar.inc(1);
        self.bar.set_message(format!(
            "{} tiles ({:.1} ms)",
            self.tiles_generated,
            elapsed.as_secs_f64() * 1000.0
        ));
    }

    /// Total tiles generated so far in this batch
    pub const fn tiles_generated(&self) -> usize {
        self.tiles_generated
    }

    /// Number of files finished so far
    pub fn files_completed(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} tiles generated",
            self.tiles_generated
        ));
    }
}
