//! CLI command implementations
//!
//! All functions return `CliResult` rather than exiting; [`super::run`] owns the process exit.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use faxc_core::lang::cpp_keywords;
use miette::Diagnostic;

use super::{CliError, CliResult, ExitCode};
use crate::backend::CppCodegen;
use crate::config::CodegenConfig;

/// Maximum AST document size (100 MB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read an AST document from disk with size validation.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{shown}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "AST file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{shown}': {e}")))
}

/// Check that `name` can be used as the program namespace.
pub fn validate_namespace(name: &str) -> CliResult<()> {
    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_start || !valid_rest {
        return Err(CliError::failure(format!(
            "Invalid namespace '{name}': expected a C++ identifier"
        )));
    }
    if cpp_keywords::is_keyword(name) {
        return Err(CliError::failure(format!(
            "Invalid namespace '{name}': C++ reserved word"
        )));
    }
    Ok(())
}

/// Render a diagnostic as `error[code]: message` plus an optional help line.
pub fn format_diagnostic(err: &dyn Diagnostic) -> String {
    let mut out = match err.code() {
        Some(code) => format!("error[{code}]: {err}"),
        None => format!("error: {err}"),
    };
    if let Some(help) = err.help() {
        out.push_str(&format!("\n  help: {help}"));
    }
    out
}

/// Decode and generate one AST file.
#[tracing::instrument(skip(config), fields(file = %file_path.display()))]
pub fn generate_file(file_path: &Path, config: CodegenConfig) -> CliResult<String> {
    let source = read_source(file_path)?;
    CppCodegen::with_config(config)
        .generate_from_json(&source)
        .map_err(|e| CliError::failure(format!("{}: {}", file_path.display(), format_diagnostic(&e))))
}

/// Generate C++ and write it to `output`, or stdout when no output path is given.
pub fn emit_cpp(file_path: &Path, output: Option<&Path>, config: CodegenConfig) -> CliResult<ExitCode> {
    let code = generate_file(file_path, config)?;
    match output {
        Some(out) => {
            fs::write(out, &code)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", out.display(), e)))?;
            tracing::info!(output = %out.display(), bytes = code.len(), "wrote translation unit");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(code.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {e}")))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Decode and generate without writing anything.
pub fn check_file(file_path: &Path, config: CodegenConfig) -> CliResult<ExitCode> {
    let code = generate_file(file_path, config)?;
    tracing::info!(bytes = code.len(), "check passed");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::backend::CodegenError;
    use faxc_syntax::ast::Loc;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("faxc_cmd_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_validate_namespace() {
        assert!(validate_namespace("fax_app").is_ok());
        assert!(validate_namespace("_ns2").is_ok());
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("2fast").is_err());
        assert!(validate_namespace("a::b").is_err());
        assert!(validate_namespace("namespace").is_err());
    }

    #[test]
    fn test_format_diagnostic_includes_code_and_help() {
        let err = CodegenError::Unsupported {
            kind: "ImportStatement",
            context: "outside the top level",
            loc: Loc::new("body[0].body.body[0]", None),
        };
        let text = format_diagnostic(&err);
        assert_eq!(
            text,
            concat!(
                "error[faxc::codegen::unsupported]: unsupported construct: ImportStatement outside the top level ",
                "at body[0].body.body[0]"
            )
        );
        let internal = format_diagnostic(&CodegenError::ScopeUnderflow);
        assert!(internal.contains("\n  help: "));
    }

    #[test]
    fn test_generate_file() {
        let path = temp_file("ok.json", r#"{"type": "Program", "body": []}"#);
        let code = generate_file(&path, CodegenConfig::default().with_banner(false)).unwrap();
        assert!(code.starts_with("#include \"fax_runtime.hpp\"\n"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_generate_file_reports_decode_error() {
        let path = temp_file("bad.json", r#"{"type": "Program", "body": [{"type": "Lambda"}]}"#);
        let err = generate_file(&path, CodegenConfig::default()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("error[faxc::syntax::unrecognized_node]"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = read_source(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_emit_to_output_file() {
        let input = temp_file("emit.json", r#"{"type": "Program", "body": []}"#);
        let output = std::env::temp_dir().join(format!("faxc_cmd_{}_emit.cpp", std::process::id()));
        emit_cpp(&input, Some(&output), CodegenConfig::default()).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("} // namespace fax_app"));
        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }
}
