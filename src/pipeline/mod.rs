/// The clone-detection pipeline.
///
/// Every submitted file passes through the same sequential stages:
/// preprocess (strip comments and blanks) → chunkify (fixed-size sliding
/// windows) → match (against the full corpus) → expand (merge sliding
/// continuations) → consolidate (merge identical source regions). The
/// consolidated clones and the pruned file record are then appended to
/// the shared stores. A rejected submission short-circuits before
/// preprocessing and leaves both stores untouched.
pub mod chunk;
pub mod clone;
mod matcher;
pub mod preprocess;

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::store::{CloneStore, FileStore, StoredFile};
use chunk::chunkify;
use clone::{CloneInstance, consolidate, expand};

/// Expected, recoverable reasons a submission is not processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The file name does not end in the configured source extension.
    WrongType { name: String },
    /// A file with this name has already been processed.
    Duplicate { name: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::WrongType { name } => {
                write!(f, "{name} is not a source file, discarding")
            }
            Rejection::Duplicate { name } => {
                write!(f, "{name} has already been processed")
            }
        }
    }
}

impl Error for Rejection {}

/// A fully processed submission: its name and the consolidated clones it
/// introduced.
#[derive(Debug)]
pub struct ProcessedFile {
    pub name: String,
    pub clones: Vec<CloneInstance>,
}

/// Drives submissions through the pipeline against a shared corpus.
pub struct CloneDetector {
    chunk_size: usize,
    extension: String,
    file_store: Arc<FileStore>,
    clone_store: Arc<CloneStore>,
}

impl CloneDetector {
    pub fn new(config: &Config, file_store: Arc<FileStore>, clone_store: Arc<CloneStore>) -> Self {
        Self {
            chunk_size: config.chunk_size,
            extension: config.extension.clone(),
            file_store,
            clone_store,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Process one submitted file against the current corpus snapshot.
    ///
    /// The name reservation makes the duplicate check atomic with respect
    /// to concurrent submissions; matching then runs lock-free over the
    /// snapshot, and the store appends are single-writer batches.
    pub fn process(&self, name: &str, contents: &str) -> Result<ProcessedFile, Rejection> {
        if !name.ends_with(&self.extension) {
            return Err(Rejection::WrongType {
                name: name.to_string(),
            });
        }
        if !self.file_store.reserve(name) {
            return Err(Rejection::Duplicate {
                name: name.to_string(),
            });
        }

        let lines = preprocess::preprocess(contents);
        let chunks = chunkify(&lines, self.chunk_size);

        let corpus = self.file_store.all_files();
        let candidates = matcher::match_corpus(name, &chunks, &corpus);
        let clones = consolidate(expand(candidates));

        self.clone_store.store_clones(&clones);
        self.file_store.store_file(StoredFile {
            name: name.to_string(),
            chunks,
        });

        Ok(ProcessedFile {
            name: name.to_string(),
            clones,
        })
    }

    pub fn number_of_files(&self) -> usize {
        self.file_store.number_of_files()
    }

    pub fn number_of_clones(&self) -> usize {
        self.clone_store.number_of_clones()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
