/// Brute-force chunk matching of an incoming file against the corpus.
///
/// Every chunk of the incoming file is compared against every chunk of
/// every stored file. The fingerprint check is a pre-filter only; a pair
/// counts as a match when `Chunk::matches` confirms position-wise equal
/// content, so hash collisions can never report a false pair.
use std::sync::Arc;

use super::chunk::Chunk;
use super::clone::CloneInstance;
use crate::store::StoredFile;

/// Compare the incoming file's chunks against one stored file, producing
/// one candidate clone per equal pair: the source span is the incoming
/// chunk, the single target is the stored chunk's location.
pub fn match_against(
    source_name: &str,
    chunks: &[Chunk],
    stored: &StoredFile,
) -> Vec<CloneInstance> {
    let mut candidates = Vec::new();
    for chunk in chunks {
        for other in &stored.chunks {
            if chunk.fingerprint() == other.fingerprint() && chunk.matches(other) {
                candidates.push(CloneInstance::from_match(
                    source_name,
                    chunk,
                    &stored.name,
                    other,
                ));
            }
        }
    }
    candidates
}

/// Match the incoming file against every file in the corpus snapshot, in
/// store order. A stored file with the same content as the incoming one
/// (an identical earlier submission) is compared like any other file;
/// self-matches are reported, not filtered.
pub fn match_corpus(
    source_name: &str,
    chunks: &[Chunk],
    corpus: &[Arc<StoredFile>],
) -> Vec<CloneInstance> {
    corpus
        .iter()
        .flat_map(|stored| match_against(source_name, chunks, stored))
        .collect()
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
