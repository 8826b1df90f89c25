//! Keeps literal comparisons against generator vocabulary (`"int"`, `"self"`, `"println"`, ...) inside
//! `faxc_core::lang`. Everything else asks the registries.

use std::fs;
use std::path::{Path, PathBuf};

use faxc_core::lang::conventions::{ENTRYPOINT_NAME, SELF_NAME};
use faxc_core::lang::{primitives, runtime};

fn vocabulary() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = primitives::PRIMITIVE_TYPES.iter().map(|t| t.canonical).collect();
    words.extend(runtime::RUNTIME_HELPERS.iter().map(|h| h.canonical));
    words.extend([SELF_NAME, ENTRYPOINT_NAME]);
    words
}

/// Source directories outside the registries; `tests/` trees are never listed.
fn scanned_dirs(root: &Path) -> Vec<PathBuf> {
    vec![
        root.join("src"),
        root.join("crates/faxc_syntax/src"),
        root.join("crates/faxc_core/src"),
    ]
}

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            if !path.ends_with("lang") {
                rust_files(&path, out);
            }
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

fn compares_against(line: &str, word: &str) -> bool {
    let code = line.trim_start();
    if code.starts_with("//") {
        return false;
    }
    [format!("== \"{word}\""), format!("!= \"{word}\""), format!("\"{word}\" =>")]
        .iter()
        .any(|pattern| code.contains(pattern.as_str()))
}

#[test]
fn vocabulary_checks_go_through_faxc_core() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let words = vocabulary();
    let mut files = Vec::new();
    for dir in scanned_dirs(&root) {
        rust_files(&dir, &mut files);
    }
    assert!(!files.is_empty(), "no sources found under {}", root.display());

    let mut offenders = Vec::new();
    for path in &files {
        let contents = fs::read_to_string(path).unwrap();
        for (idx, line) in contents.lines().enumerate() {
            if words.iter().any(|w| compares_against(line, w)) {
                let rel = path.strip_prefix(&root).unwrap_or(path);
                offenders.push(format!("{}:{}: {}", rel.display(), idx + 1, line.trim()));
            }
        }
    }
    assert!(
        offenders.is_empty(),
        "compare through faxc_core::lang instead of string literals:\n{}",
        offenders.join("\n")
    );
}

#[test]
fn comment_lines_are_ignored() {
    assert!(compares_against(r#"    if name == "self" {"#, SELF_NAME));
    assert!(compares_against(r#"        "main" => true,"#, ENTRYPOINT_NAME));
    assert!(!compares_against(r#"    // name == "self" is handled upstream"#, SELF_NAME));
}
