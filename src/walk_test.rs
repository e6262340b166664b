use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use super::*;

fn walked_files(root: &std::path::Path) -> Vec<PathBuf> {
    walk(root)
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[test]
fn yields_files_in_sorted_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.java"), "x").unwrap();
    fs::write(dir.path().join("a.java"), "x").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.java"), "x").unwrap();

    let files = walked_files(dir.path());
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
        .collect();
    assert_eq!(names, vec!["a.java", "b.java", "sub/c.java"]);
}

#[test]
fn skips_git_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/config.java"), "x").unwrap();
    fs::write(dir.path().join("a.java"), "x").unwrap();

    let files = walked_files(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("a.java"));
}

#[test]
fn visits_hidden_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.java"), "x").unwrap();

    let files = walked_files(dir.path());
    assert_eq!(files.len(), 1);
}
