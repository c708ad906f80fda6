//! Per-collection progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Shows one progress bar per input collection
///
/// Bars advance once per candidate path and report how many records the
/// collection has emitted so far.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static COLLECTION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>24}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            bars: Vec::new(),
        }
    }

    /// Add a bar for a collection with `candidates` paths
    pub fn start_collection(&mut self, name: &str, candidates: usize) {
        let bar = ProgressBar::new(candidates as u64);
        bar.set_style(COLLECTION_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.bars.push(self.multi_progress.add(bar));
    }

    /// Advance the current collection by one candidate
    pub fn advance(&self, emitted: u64) {
        if let Some(bar) = self.bars.last() {
            bar.inc(1);
            bar.set_message(format!("{emitted} records"));
        }
    }

    /// Mark the current collection as done
    pub fn finish_collection(&self, emitted: u64) {
        if let Some(bar) = self.bars.last() {
            bar.finish_with_message(format!("✓ {emitted} records"));
        }
    }

    /// Number of collections started so far
    pub fn collection_count(&self) -> usize {
        self.bars.len()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
