//! Error types for AST document decoding.
//!
//! These errors describe problems with the *input document* (as opposed to code generation failures). They are
//! raised before any output is produced.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Loc;

/// Error while turning a JSON document into a [`crate::ast::Program`].
#[derive(Debug, Error, Diagnostic)]
pub enum SyntaxError {
    /// The input is not valid JSON at all.
    #[error("invalid AST document: {0}")]
    #[diagnostic(
        code(faxc::syntax::json),
        help("the input must be the JSON AST produced by the Fax-lang parser")
    )]
    Json(#[from] serde_json::Error),

    /// A required field is missing, a field has the wrong shape, or the root is not a `Program`.
    #[error("malformed AST at {}: {message}", display_path(.path))]
    #[diagnostic(code(faxc::syntax::malformed))]
    Malformed { path: String, message: String },

    /// A node carries a `"type"` tag the generator does not know.
    #[error("unrecognized node kind `{kind}` at {loc}")]
    #[diagnostic(
        code(faxc::syntax::unrecognized_node),
        help("the parser and the code generator disagree on the AST format; regenerate the AST with a matching parser")
    )]
    UnrecognizedNode { kind: String, loc: Loc },
}

impl SyntaxError {
    pub(crate) fn malformed(path: &str, message: impl Into<String>) -> Self {
        SyntaxError::Malformed {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_root() {
        let err = SyntaxError::malformed("", "expected an object");
        assert_eq!(err.to_string(), "malformed AST at <root>: expected an object");
    }

    #[test]
    fn test_unrecognized_message_names_kind_and_path() {
        let err = SyntaxError::UnrecognizedNode {
            kind: "Lambda".to_string(),
            loc: Loc::new("body[0].body", None),
        };
        assert_eq!(err.to_string(), "unrecognized node kind `Lambda` at body[0].body");
    }
}
