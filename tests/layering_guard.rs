//! Layering guardrails for the workspace crates.
//!
//! - `faxc_core` is pure vocabulary and must stay dependency-free.
//! - `faxc_syntax` must never depend on the code generator (`faxc`).

/// Dependency names listed in a manifest's `[dependencies]` table.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }
    deps
}

#[test]
fn core_vocabulary_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/faxc_core/Cargo.toml"));
    assert!(deps.is_empty(), "faxc_core must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_crate_does_not_depend_on_codegen() {
    let deps = main_dependencies(include_str!("../crates/faxc_syntax/Cargo.toml"));
    assert!(
        !deps.iter().any(|d| d == "faxc"),
        "`faxc` must not appear in faxc_syntax [dependencies]"
    );
}

#[test]
fn codegen_depends_on_both_layers() {
    let deps = main_dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "faxc_core"));
    assert!(deps.iter().any(|d| d == "faxc_syntax"));
}
