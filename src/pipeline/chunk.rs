/// Fixed-size windows of content-bearing lines, the unit of comparison.
///
/// Every chunk carries an FNV-1a fingerprint of its content. The
/// fingerprint is strictly a pre-filter: equality is always decided by
/// `matches`, which compares line text position by position.
use super::preprocess::SourceLine;

#[derive(Debug, Clone)]
pub struct Chunk {
    lines: Vec<SourceLine>,
    fingerprint: u64,
}

impl Chunk {
    fn new(lines: Vec<SourceLine>) -> Self {
        let fingerprint = fingerprint(&lines);
        Self { lines, fingerprint }
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    /// Original line number of the first line in the window.
    pub fn start_line(&self) -> usize {
        self.lines.first().map_or(0, |l| l.number)
    }

    /// Original line number of the last line in the window.
    pub fn end_line(&self) -> usize {
        self.lines.last().map_or(0, |l| l.number)
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Content equality: same length and position-wise equal line text.
    /// Line numbers are deliberately excluded.
    pub fn matches(&self, other: &Chunk) -> bool {
        self.lines.len() == other.lines.len()
            && self
                .lines
                .iter()
                .zip(&other.lines)
                .all(|(a, b)| a.content == b.content)
    }
}

/// FNV-1a hash of the chunk's line contents, with a separator byte between
/// lines so shifted line boundaries do not collide.
fn fingerprint(lines: &[SourceLine]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325; // FNV offset basis
    for line in lines {
        for byte in line.content.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x100000001b3); // FNV prime
        }
        hash ^= 0xff;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Slide a window of `chunk_size` over the content-bearing lines,
/// producing every contiguous window in original order. Fewer than
/// `chunk_size` content lines yields no chunks; that is a valid outcome,
/// not an error.
pub fn chunkify(lines: &[SourceLine], chunk_size: usize) -> Vec<Chunk> {
    let content: Vec<&SourceLine> = lines.iter().filter(|l| l.has_content()).collect();
    if content.len() < chunk_size || chunk_size == 0 {
        return Vec::new();
    }
    (0..=content.len() - chunk_size)
        .map(|i| {
            Chunk::new(
                content[i..i + chunk_size]
                    .iter()
                    .map(|l| (*l).clone())
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod tests;
