use std::path::Path;

use ignore::WalkBuilder;

/// Build a directory walker that respects `.gitignore`, skips `.git`, and
/// yields entries in sorted path order so files enter the corpus in a
/// deterministic sequence.
pub fn walk(path: &Path) -> ignore::Walk {
    WalkBuilder::new(path)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir()) && entry.file_name() == ".git")
        })
        .build()
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
