/// Clone records and the expansion/consolidation folds.
///
/// A `CloneInstance` starts life as a candidate built from one matching
/// chunk pair, grows by absorbing sliding continuations (expansion), and
/// finally merges with equal-identity clones into a canonical record
/// carrying every target location (consolidation).
use serde::Serialize;

use super::chunk::Chunk;
use super::preprocess::SourceLine;

/// A location where a duplicate of the source region was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub name: String,
    pub start_line: usize,
}

#[derive(Debug, Clone)]
pub struct CloneInstance {
    source_name: String,
    source_start: usize,
    source_end: usize,
    /// Unique by line number, ascending. First/last numbers always agree
    /// with `source_start`/`source_end`.
    source_lines: Vec<SourceLine>,
    /// Never empty after construction.
    targets: Vec<Target>,
}

impl CloneInstance {
    /// Build a candidate from one matching chunk pair. The source span is
    /// the incoming file's chunk; the single target is where the equal
    /// chunk sits in the stored file.
    pub fn from_match(
        source_name: &str,
        source_chunk: &Chunk,
        target_name: &str,
        target_chunk: &Chunk,
    ) -> Self {
        Self {
            source_name: source_name.to_string(),
            source_start: source_chunk.start_line(),
            source_end: source_chunk.end_line(),
            source_lines: source_chunk.lines().to_vec(),
            targets: vec![Target {
                name: target_name.to_string(),
                start_line: target_chunk.start_line(),
            }],
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn source_start(&self) -> usize {
        self.source_start
    }

    pub fn source_end(&self) -> usize {
        self.source_end
    }

    pub fn source_lines(&self) -> &[SourceLine] {
        &self.source_lines
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Number of content lines in the source region.
    pub fn line_count(&self) -> usize {
        self.source_lines.len()
    }

    /// True iff `other` is the one-line sliding continuation of this
    /// clone: our last source line number equals its second-to-last,
    /// i.e. the chunks overlap by exactly `chunk_size - 1` lines.
    fn is_next(&self, other: &CloneInstance) -> bool {
        if other.source_lines.len() < 2 {
            return false;
        }
        let Some(last) = self.source_lines.last() else {
            return false;
        };
        last.number == other.source_lines[other.source_lines.len() - 2].number
    }

    /// Absorb `other` if it continues this clone's source region. The
    /// source lines become the union of both, deduplicated by line number
    /// and sorted ascending; the end line is recomputed. Returns whether
    /// the expansion happened.
    pub fn maybe_expand_with(&mut self, other: &CloneInstance) -> bool {
        if !self.is_next(other) {
            return false;
        }
        for line in &other.source_lines {
            if !self.source_lines.iter().any(|l| l.number == line.number) {
                self.source_lines.push(line.clone());
            }
        }
        self.source_lines.sort_by_key(|l| l.number);
        if let Some(last) = self.source_lines.last() {
            self.source_end = last.number;
        }
        true
    }

    pub fn add_target(&mut self, target: Target) {
        self.targets.push(target);
    }
}

/// Identity is the source region alone: name plus start/end line numbers.
/// Targets and line content are deliberately excluded, so clones of the
/// same region compare equal no matter where their duplicates were found.
impl PartialEq for CloneInstance {
    fn eq(&self, other: &Self) -> bool {
        self.source_name == other.source_name
            && self.source_start == other.source_start
            && self.source_end == other.source_end
    }
}

impl Eq for CloneInstance {}

/// Merge candidates that continue the same duplicate region into one
/// clone spanning the full region.
///
/// A left-to-right fold: each candidate either extends the first
/// accumulated clone it continues, or starts a new one. Candidates arrive
/// in non-decreasing source order from the matcher, so forward merging is
/// sufficient; absorbed candidates are dropped from the output.
pub fn expand(candidates: Vec<CloneInstance>) -> Vec<CloneInstance> {
    let mut merged: Vec<CloneInstance> = Vec::new();
    for candidate in candidates {
        let absorbed = merged
            .iter_mut()
            .any(|clone| clone.maybe_expand_with(&candidate));
        if !absorbed {
            merged.push(candidate);
        }
    }
    merged
}

/// Collapse clones with identical source identity into one canonical
/// record carrying every target. Idempotent: the output has pairwise
/// distinct identities, so a second pass changes nothing.
pub fn consolidate(clones: Vec<CloneInstance>) -> Vec<CloneInstance> {
    let mut canonical: Vec<CloneInstance> = Vec::new();
    for clone in clones {
        match canonical.iter_mut().find(|c| **c == clone) {
            Some(existing) => {
                for target in clone.targets {
                    existing.add_target(target);
                }
            }
            None => canonical.push(clone),
        }
    }
    canonical
}

#[cfg(test)]
#[path = "clone_test.rs"]
mod tests;
