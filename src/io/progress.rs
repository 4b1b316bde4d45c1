//! Region progress tracking for batch evaluation

use crate::io::configuration::{MIN_REGIONS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use crate::spatial::region::Region;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static REGION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Regions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display while regions are evaluated
///
/// Results are written through [`ProgressManager::suspend`] so that they do
/// not interleave with the bar.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden()),
        }
    }

    /// Size the bar for a batch of regions
    ///
    /// Single-region batches finish too quickly for a bar to be useful, so
    /// the bar stays hidden for them.
    pub fn initialize(&self, region_count: usize) {
        if region_count < MIN_REGIONS_FOR_PROGRESS {
            self.bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        self.bar.set_style(REGION_STYLE.clone());
        self.bar.set_length(region_count as u64);
        self.bar.set_position(0);
    }

    /// Show the region currently being evaluated
    pub fn start_region(&self, region: &Region) {
        self.bar
            .set_message(format!("{}x{}", region.width(), region.height()));
    }

    /// Mark one region as done
    pub fn complete_region(&self) {
        self.bar.inc(1);
    }

    /// Regions marked done so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Run `output` with the bar temporarily cleared
    pub fn suspend<F: FnOnce() -> R, R>(&self, output: F) -> R {
        self.bar.suspend(output)
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
