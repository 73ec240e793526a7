//! Hygiene: enforces coding standards at test time
//!
//! Scans the client crate's production sources for patterns that can crash
//! the page or hide failures. Each pattern has a budget; the budget only
//! ratchets down.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget)` pairs. Lines that are only comments are not counted.
const BUDGETS: &[(&str, usize)] = &[
    // Panics abort hydration and leave a dead page.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss. The discards are cfg-disabled parameters in browser-only
    // helpers; the `.ok()` calls turn absent browser APIs into `None`.
    ("let _ =", 6),
    (".ok()", 8),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, minus sibling `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_source = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_source || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

fn check(pattern: &str) {
    let Some(&(_, max)) = BUDGETS.iter().find(|(p, _)| *p == pattern) else {
        panic!("no budget configured for {pattern}");
    };
    let files = source_files();
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let detail = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{detail}");
}

#[test]
fn scans_the_source_tree() {
    assert!(!source_files().is_empty(), "no sources found; run from the client crate directory");
}

#[test]
fn unwrap_budget() {
    check(".unwrap()");
}

#[test]
fn expect_budget() {
    check(".expect(");
}

#[test]
fn panic_budget() {
    check("panic!(");
}

#[test]
fn unreachable_budget() {
    check("unreachable!(");
}

#[test]
fn todo_budget() {
    check("todo!(");
}

#[test]
fn unimplemented_budget() {
    check("unimplemented!(");
}

#[test]
fn silent_discard_budget() {
    check("let _ =");
}

#[test]
fn dot_ok_budget() {
    check(".ok()");
}

#[test]
fn allow_dead_code_budget() {
    check("#[allow(dead_code)]");
}
