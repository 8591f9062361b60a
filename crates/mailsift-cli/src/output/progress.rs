use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use mailsift_core::progress::ProgressSink;

/// Renders the pipeline's progress callback as an indicatif bar; the live
/// log lines are printed above it.
pub struct BarSink {
    bar: ProgressBar,
}

impl BarSink {
    pub fn new(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}/{len:3} files {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        BarSink { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for BarSink {
    fn file_started(&mut self, index: usize, _total: usize, name: &str) {
        self.bar.set_position(index.saturating_sub(1) as u64);
        self.bar.set_message(name.to_string());
    }

    fn message(&mut self, text: &str) {
        self.bar.println(text);
    }
}
