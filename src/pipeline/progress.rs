//! Progress bar utilities for segment extraction.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over the segments being extracted.
pub fn create_slice_progress(total_segments: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_segments == 0 {
        return None;
    }

    let pb = ProgressBar::new(total_segments as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} segments")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Increment a progress bar.
pub fn inc_progress(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}
