//! Progress reporting for the directory walker
//!
//! Provides a spinner during long walks using indicatif, plus styled
//! header and summary blocks.

use crate::walker::{format_size, WalkProgress, WalkStats};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner that displays walk status on stderr
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        bar.set_style(spinner_style);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the progress display
    pub fn update(&self, progress: &WalkProgress) {
        let msg = format!(
            "Dirs: {} | Files: {} | Size: {} | Rate: {:.0}/s",
            format_number(progress.dirs),
            format_number(progress.files),
            format_size(progress.bytes),
            progress.entries_per_second(),
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
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a summary of a directory walk
pub fn print_summary(path: &str, stats: &WalkStats) {
    let duration_secs = stats.duration.as_secs_f64();

    println!();
    if stats.completed {
        println!("{}", style("Walk Complete").green().bold());
    } else {
        println!("{}", style("Walk Interrupted").yellow().bold());
    }
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Path:").bold(), path);
    println!(
        "  {} {}",
        style("Directories:").bold(),
        format_number(stats.dirs)
    );
    println!("  {} {}", style("Files:").bold(), format_number(stats.files));
    println!(
        "  {} {}",
        style("Excluded:").bold(),
        format_number(stats.excluded)
    );
    println!(
        "  {} {} ({} bytes)",
        style("Total size:").bold(),
        format_size(stats.bytes),
        format_number(stats.bytes)
    );
    println!("  {} {:.2}s", style("Duration:").bold(), duration_secs);
    if stats.errors > 0 {
        println!(
            "  {} {}",
            style("Unreadable:").yellow().bold(),
            format_number(stats.errors)
        );
    }
    println!();
}

/// Print a header before running an exercise
pub fn print_header(task: &str) {
    println!();
    println!(
        "{} {}",
        style("recursion-tasks").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Task:").bold(), task);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }
}
