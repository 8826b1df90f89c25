//! Error types for C++ code generation.
//!
//! [`CodegenError`] covers failures of the generation pass itself; [`GenerationError`] is what the public facade
//! returns and also carries decoding failures when the caller hands over raw JSON.

use miette::Diagnostic;
use thiserror::Error;

use faxc_syntax::SyntaxError;
use faxc_syntax::ast::Loc;

/// Error raised while walking a decoded program.
#[derive(Debug, Error, Diagnostic)]
pub enum CodegenError {
    /// A scope was exited that was never entered.
    #[error("internal error: scope stack underflow")]
    #[diagnostic(
        code(faxc::codegen::internal),
        help("this is a bug in the code generator, please report it together with the input AST")
    )]
    ScopeUnderflow,

    /// A known node kind sits somewhere it cannot be rendered.
    #[error("unsupported construct: {kind} {context} at {loc}")]
    #[diagnostic(code(faxc::codegen::unsupported))]
    Unsupported {
        kind: &'static str,
        context: &'static str,
        loc: Loc,
    },
}

impl CodegenError {
    pub(crate) fn unsupported(kind: &'static str, context: &'static str, loc: &Loc) -> Self {
        CodegenError::Unsupported {
            kind,
            context,
            loc: loc.clone(),
        }
    }
}

/// Error during C++ code generation.
///
/// Wraps everything that can go wrong between a JSON document and the finished translation unit.
///
/// ## Examples
///
/// ```rust
/// use faxc::backend::{CppCodegen, GenerationError};
///
/// let codegen = CppCodegen::new();
/// match codegen.generate_from_json(r#"{"type": "Program", "body": [{"type": "Yield"}]}"#) {
///     Ok(code) => println!("{code}"),
///     Err(GenerationError::Syntax(e)) => eprintln!("bad input: {e}"),
///     Err(GenerationError::Codegen(e)) => eprintln!("generation failed: {e}"),
/// }
/// ```
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    /// The AST document could not be decoded
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
    /// The generation pass failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Codegen(#[from] CodegenError),
}
