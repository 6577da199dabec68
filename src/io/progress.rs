//! Stage progress reporting for render jobs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// The fixed stages of one render job, in order
pub const STAGES: [&str; 3] = ["weaving", "rendering", "exporting"];

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks a render job through its weave, render and export stages
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress bar spanning all stages
    pub fn new() -> Self {
        let bar = ProgressBar::new(STAGES.len() as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Announce the next stage without advancing the bar
    pub fn start_stage(&self, stage: &'static str) {
        self.bar.set_message(stage);
    }

    /// Mark the current stage as completed
    pub fn complete_stage(&self) {
        self.bar.inc(1);
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
