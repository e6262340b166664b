/// Shared corpus and clone repositories.
///
/// Both stores sit behind an `RwLock` and are the only mutable state
/// shared between concurrent submissions. The duplicate-name check and
/// the name insertion happen under a single write lock (`reserve`), so
/// check-then-act cannot race; clone batches and file records append
/// under one write lock each, so two files never interleave partial
/// writes. Readers of the corpus snapshot proceed concurrently with
/// other readers.
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::pipeline::chunk::Chunk;
use crate::pipeline::clone::CloneInstance;

/// A processed file as the corpus keeps it: name and chunks only, with
/// the transient lines and candidates of the in-flight record pruned.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub name: String,
    pub chunks: Vec<Chunk>,
}

#[derive(Default)]
struct Corpus {
    names: HashSet<String>,
    files: Vec<Arc<StoredFile>>,
}

/// Repository of processed files.
#[derive(Default)]
pub struct FileStore {
    inner: RwLock<Corpus>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Corpus> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Corpus> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_file_processed(&self, name: &str) -> bool {
        self.read().names.contains(name)
    }

    /// Record `name` as processed if it is new, returning whether the
    /// reservation succeeded. Check and insert run under one write lock:
    /// of two concurrent submissions with the same name, exactly one
    /// passes.
    pub fn reserve(&self, name: &str) -> bool {
        self.write().names.insert(name.to_string())
    }

    /// Append a fully processed file record to the corpus.
    pub fn store_file(&self, file: StoredFile) {
        self.write().files.push(Arc::new(file));
    }

    /// Snapshot of every stored file, for matching. The snapshot is a
    /// list of cheap `Arc` clones; matching proceeds without holding the
    /// lock.
    pub fn all_files(&self) -> Vec<Arc<StoredFile>> {
        self.read().files.clone()
    }

    /// Count of fully stored files; reservations alone do not count.
    pub fn number_of_files(&self) -> usize {
        self.read().files.len()
    }
}

/// Repository of consolidated clones across the whole run.
#[derive(Default)]
pub struct CloneStore {
    inner: RwLock<Vec<CloneInstance>>,
}

impl CloneStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CloneInstance>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Append one file's consolidated clones as a single batch.
    pub fn store_clones(&self, clones: &[CloneInstance]) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(clones);
    }

    pub fn number_of_clones(&self) -> usize {
        self.read().len()
    }

    pub fn all_clones(&self) -> Vec<CloneInstance> {
        self.read().clone()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
