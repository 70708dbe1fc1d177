//! Progress display for multi-file batches

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar counting processed files and failures
pub struct ProgressTracker {
    bar: ProgressBar,
    failed: u64,
}

impl ProgressTracker {
    pub fn new(total_files: u64, operation: &str) -> Self {
        let bar = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} files {wide_msg}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix(operation.to_string());

        ProgressTracker { bar, failed: 0 }
    }

    /// Shows the file currently being processed
    pub fn start_file(&self, path: &str) {
        self.bar.set_message(path.to_string());
    }

    /// Marks the current file done
    pub fn finish_file(&mut self, succeeded: bool) {
        if !succeeded {
            self.failed += 1;
        }
        self.bar.inc(1);
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    pub fn finish(&self) {
        let done = self.bar.position();
        self.bar.finish_with_message(format!("{} ok, {} failed", done - self.failed, self.failed));
    }
}
