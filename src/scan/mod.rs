mod report;
mod stats;

use std::collections::HashSet;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::pipeline::{CloneDetector, Rejection};
use crate::store::{CloneStore, FileStore};
use crate::util::is_binary_reader;
use crate::walk;
use report::{ScanMetrics, display_limit, print_detailed, print_json, print_summary};
use stats::ScanTimers;

/// Progress note frequency while streaming a large corpus.
const STATS_FREQ: usize = 100;

/// Read a source file, returning `None` for binary content.
fn read_source(path: &Path) -> Result<Option<String>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    if is_binary_reader(&mut reader)? {
        return Ok(None);
    }
    Ok(Some(std::io::read_to_string(reader)?))
}

/// Stream every file under `path` through the clone-detection pipeline,
/// one at a time in walk order, then report what the corpus accumulated.
pub fn run(
    path: &Path,
    config: &Config,
    show_report: bool,
    show_all: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let file_store = Arc::new(FileStore::new());
    let clone_store = Arc::new(CloneStore::new());
    let detector = CloneDetector::new(config, Arc::clone(&file_store), Arc::clone(&clone_store));

    let mut timers = ScanTimers::default();
    let mut rejected = 0usize;
    let mut skipped = 0usize;

    for entry in walk::walk(path) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let file_path = entry.path();
        let name = file_path
            .strip_prefix(path)
            .unwrap_or(file_path)
            .display()
            .to_string();

        // Cheap name checks before touching the file; the pipeline still
        // enforces the same contract on whatever reaches it.
        if !name.ends_with(detector.extension()) {
            rejected += 1;
            continue;
        }
        if file_store.is_file_processed(&name) {
            eprintln!("warning: {name} has already been processed");
            rejected += 1;
            continue;
        }

        let contents = match read_source(file_path) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                skipped += 1; // binary
                continue;
            }
            Err(err) => {
                eprintln!("warning: {}: {err}", file_path.display());
                skipped += 1;
                continue;
            }
        };

        let started = Instant::now();
        match detector.process(&name, &contents) {
            Ok(processed) => {
                timers.record(started.elapsed());
                if detector.number_of_files() % STATS_FREQ == 0 {
                    eprintln!(
                        "note: {} files processed, {} clones so far (last: {})",
                        detector.number_of_files(),
                        detector.number_of_clones(),
                        processed.name
                    );
                }
            }
            Err(rejection @ Rejection::Duplicate { .. }) => {
                eprintln!("warning: {rejection}");
                rejected += 1;
            }
            Err(_) => rejected += 1,
        }
    }

    let mut clones = clone_store.all_clones();
    // largest source span first, then most duplicated
    clones.sort_by(|a, b| {
        b.line_count()
            .cmp(&a.line_count())
            .then(b.targets().len().cmp(&a.targets().len()))
    });

    let files_with_clones: HashSet<&str> = clones
        .iter()
        .flat_map(|c| {
            std::iter::once(c.source_name()).chain(c.targets().iter().map(|t| t.name.as_str()))
        })
        .collect();

    let metrics = ScanMetrics {
        files_processed: detector.number_of_files(),
        files_rejected: rejected,
        files_skipped: skipped,
        clones_found: detector.number_of_clones(),
        files_with_clones: files_with_clones.len(),
        largest_clone: clones.iter().map(|c| c.line_count()).max().unwrap_or(0),
    };

    if json {
        let limit = display_limit(clones.len(), show_all);
        print_json(&metrics, &timers, &clones[..limit])?;
    } else if show_report {
        let limit = display_limit(clones.len(), show_all);
        print_detailed(&metrics, &timers, &clones[..limit], clones.len());
    } else {
        print_summary(&metrics, &timers);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
