use serde::Serialize;

use super::stats::{RECENT_WINDOW, ScanTimers};
use crate::pipeline::clone::{CloneInstance, Target};

/// Summary metrics for one scan over a directory.
pub struct ScanMetrics {
    pub files_processed: usize,
    pub files_rejected: usize,
    pub files_skipped: usize,
    pub clones_found: usize,
    pub files_with_clones: usize,
    pub largest_clone: usize,
}

fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Print the scan summary with the running totals and timing footer.
pub fn print_summary(metrics: &ScanMetrics, timers: &ScanTimers) {
    let separator = separator(68);

    println!("{separator}");
    println!(" Clone Detection");
    println!();
    println!(" Files processed:      {:>42}", metrics.files_processed);
    println!(" Files rejected:       {:>42}", metrics.files_rejected);
    if metrics.files_skipped > 0 {
        println!(" Files skipped:        {:>42}", metrics.files_skipped);
    }
    println!(" Clones found:         {:>42}", metrics.clones_found);
    println!(" Files with clones:    {:>42}", metrics.files_with_clones);
    if metrics.largest_clone > 0 {
        println!(" Largest clone:        {:>37} lines", metrics.largest_clone);
    }
    println!();
    println!(
        " Processed {} files containing {} clones.",
        metrics.files_processed, metrics.clones_found
    );

    if timers.files_timed() > 0 {
        println!();
        println!(
            " Total time: {} ms; average per file: {} µs (last {}: {} µs)",
            timers.total().as_millis(),
            timers.average_micros(),
            RECENT_WINDOW.min(timers.files_timed()),
            timers.recent_average_micros()
        );
    }
    println!("{separator}");
}

/// Maximum clones shown by default (use `--show-all` to override).
pub const DEFAULT_CLONE_LIMIT: usize = 20;

/// Lines of the source region shown as a sample in the detailed report.
const SAMPLE_LINES: usize = 5;

/// Compute how many clones to display based on the `--show-all` flag.
pub fn display_limit(total: usize, show_all: bool) -> usize {
    if show_all { total } else { DEFAULT_CLONE_LIMIT.min(total) }
}

/// Print the summary followed by every displayed clone: its source span,
/// each target location, and a short code sample.
pub fn print_detailed(
    metrics: &ScanMetrics,
    timers: &ScanTimers,
    clones: &[CloneInstance],
    total_clones: usize,
) {
    print_summary(metrics, timers);

    if clones.is_empty() {
        return;
    }

    let separator = separator(68);

    println!();
    println!(" Clones (sorted by source span, then number of duplicates)");

    for (i, clone) in clones.iter().enumerate() {
        println!();
        println!("{separator}");
        println!(
            " [{}] {}:{}-{} ({} lines, {} duplicate{})",
            i + 1,
            clone.source_name(),
            clone.source_start(),
            clone.source_end(),
            clone.line_count(),
            clone.targets().len(),
            if clone.targets().len() == 1 { "" } else { "s" }
        );
        println!();
        for target in clone.targets() {
            println!("   -> {}:{}", target.name, target.start_line);
        }
        let sample: Vec<&str> = clone
            .source_lines()
            .iter()
            .take(SAMPLE_LINES)
            .map(|l| l.content.as_str())
            .collect();
        if !sample.is_empty() {
            println!();
            println!(" Sample:");
            for line in &sample {
                println!("   {line}");
            }
            if clone.line_count() > sample.len() {
                println!("   ...");
            }
        }
    }

    println!("{separator}");

    if clones.len() < total_clones {
        println!();
        println!(" Showing top {} of {} clones.", clones.len(), total_clones);
        println!(" Use --show-all to see all clones.");
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    metrics: JsonMetrics,
    clones: Vec<JsonClone<'a>>,
}

#[derive(Serialize)]
struct JsonMetrics {
    files_processed: usize,
    files_rejected: usize,
    files_skipped: usize,
    clones_found: usize,
    files_with_clones: usize,
    largest_clone: usize,
    average_micros_per_file: u128,
}

#[derive(Serialize)]
struct JsonClone<'a> {
    source: &'a str,
    start_line: usize,
    end_line: usize,
    lines: usize,
    targets: &'a [Target],
}

/// Serialize scan metrics and clones to a pretty-printed JSON string.
pub fn format_json(
    metrics: &ScanMetrics,
    timers: &ScanTimers,
    clones: &[CloneInstance],
) -> Result<String, Box<dyn std::error::Error>> {
    let output = JsonOutput {
        metrics: JsonMetrics {
            files_processed: metrics.files_processed,
            files_rejected: metrics.files_rejected,
            files_skipped: metrics.files_skipped,
            clones_found: metrics.clones_found,
            files_with_clones: metrics.files_with_clones,
            largest_clone: metrics.largest_clone,
            average_micros_per_file: timers.average_micros(),
        },
        clones: clones
            .iter()
            .map(|c| JsonClone {
                source: c.source_name(),
                start_line: c.source_start(),
                end_line: c.source_end(),
                lines: c.line_count(),
                targets: c.targets(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Print scan metrics and clones as pretty-printed JSON to stdout.
pub fn print_json(
    metrics: &ScanMetrics,
    timers: &ScanTimers,
    clones: &[CloneInstance],
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_json(metrics, timers, clones)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
