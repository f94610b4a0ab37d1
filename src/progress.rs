//! Progress reporting and run summary
//!
//! The spinner draws to stderr via indicatif, so matched paths streaming
//! to stdout stay clean.

use crate::walker::{WalkProgress, WalkResult};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter that displays walk status
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the progress display
    pub fn update(&self, progress: &WalkProgress) {
        let msg = format!(
            "Dirs: {} | Files: {} | Matches: {} | Queue: {} | Rate: {:.0}/s",
            format_number(progress.stats.dirs_scanned),
            format_number(progress.stats.files_scanned),
            format_number(progress.stats.matches_found),
            progress.queue_len,
            progress.files_per_second(),
        );

        self.bar.set_message(msg);
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a header at the start of the walk
pub fn print_header(root: &str, needle: &str, workers: usize) {
    eprintln!();
    eprintln!(
        "{} {}",
        style("ffind").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("{}", style("─".repeat(50)).dim());
    eprintln!("  {} {}", style("Root:").bold(), root);
    eprintln!(
        "  {} {}",
        style("Needle:").bold(),
        if needle.is_empty() { "(any)" } else { needle }
    );
    eprintln!("  {} {}", style("Workers:").bold(), workers);
    eprintln!();
}

/// Print a summary of the walk results
pub fn print_summary(result: &WalkResult) {
    let duration_secs = result.duration.as_secs_f64();
    let rate = if duration_secs > 0.0 {
        result.files_scanned as f64 / duration_secs
    } else {
        0.0
    };

    eprintln!();
    eprintln!(
        "{} {} match(es)",
        style("Found").green().bold(),
        format_number(result.matches_found)
    );
    eprintln!(
        "Scanned {} dirs, {} files",
        format_number(result.dirs_scanned),
        format_number(result.files_scanned)
    );
    if result.errors > 0 {
        eprintln!(
            "{} {} path(s) skipped on errors",
            style("Note:").yellow().bold(),
            format_number(result.errors)
        );
    }
    eprintln!("Threads: {}", result.workers);
    eprintln!("Time: {:.3} s ({:.0} files/sec)", duration_secs, rate);
}
