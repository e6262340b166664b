use super::*;

fn lines(specs: &[(usize, &str)]) -> Vec<SourceLine> {
    specs.iter().map(|(n, c)| SourceLine::new(*n, c)).collect()
}

#[test]
fn too_few_content_lines_yields_no_chunks() {
    let ls = lines(&[(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
    assert!(chunkify(&ls, 5).is_empty());
}

#[test]
fn exact_window_yields_one_chunk() {
    let ls = lines(&[(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]);
    let chunks = chunkify(&ls, 5);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].start_line(), 1);
    assert_eq!(chunks[0].end_line(), 5);
}

#[test]
fn sliding_window_overlaps_by_one() {
    let ls = lines(&[(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e"), (6, "f")]);
    let chunks = chunkify(&ls, 5);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].start_line(), 1);
    assert_eq!(chunks[1].start_line(), 2);
    assert_eq!(chunks[1].end_line(), 6);
}

#[test]
fn blank_lines_are_skipped_but_numbering_kept() {
    let ls = lines(&[(1, "a"), (2, ""), (3, "b"), (4, ""), (5, "c")]);
    let chunks = chunkify(&ls, 3);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].start_line(), 1);
    assert_eq!(chunks[0].end_line(), 5);
    let texts: Vec<&str> = chunks[0].lines().iter().map(|l| l.content.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn equality_ignores_line_numbers() {
    let a = chunkify(&lines(&[(1, "x"), (2, "y")]), 2);
    let b = chunkify(&lines(&[(10, "x"), (20, "y")]), 2);
    assert!(a[0].matches(&b[0]));
    assert_eq!(a[0].fingerprint(), b[0].fingerprint());
}

#[test]
fn equality_rejects_different_content() {
    let a = chunkify(&lines(&[(1, "x"), (2, "y")]), 2);
    let b = chunkify(&lines(&[(1, "x"), (2, "z")]), 2);
    assert!(!a[0].matches(&b[0]));
}

#[test]
fn fingerprint_separates_shifted_boundaries() {
    let a = chunkify(&lines(&[(1, "ab"), (2, "cd")]), 2);
    let b = chunkify(&lines(&[(1, "a"), (2, "bcd")]), 2);
    assert_ne!(a[0].fingerprint(), b[0].fingerprint());
    assert!(!a[0].matches(&b[0]));
}

#[test]
fn fingerprint_is_deterministic() {
    let a = chunkify(&lines(&[(1, "let x = 42;"), (2, "return x;")]), 2);
    let b = chunkify(&lines(&[(1, "let x = 42;"), (2, "return x;")]), 2);
    assert_eq!(a[0].fingerprint(), b[0].fingerprint());
}

#[test]
fn chunk_count_matches_sliding_range() {
    let specs: Vec<(usize, String)> = (1..=12).map(|n| (n, format!("line {n}"))).collect();
    let ls: Vec<SourceLine> = specs.iter().map(|(n, c)| SourceLine::new(*n, c)).collect();
    assert_eq!(chunkify(&ls, 5).len(), 8); // 12 - 5 + 1
}
