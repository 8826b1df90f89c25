//! Shared syntax layer for the Fax-lang code generator: AST types and the JSON document decoder.
//!
//! The upstream Fax-lang parser serializes a program as a JSON node graph. This crate turns such a document into a
//! closed, strongly-typed [`ast::Program`], rejecting malformed documents and unknown node kinds before any code is
//! generated.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names, map types, or emit C++.
//! - Every decoded node remembers its tree path (and source position when the document carries one) so later stages
//!   can point at the offending node.
//!
//! ## Examples
//! ```rust
//! use faxc_syntax::decode;
//!
//! let program = decode::decode_program(r#"{"type": "Program", "body": []}"#).unwrap();
//! assert!(program.body.is_empty());
//! ```

pub mod ast;
pub mod decode;
pub mod errors;

pub use errors::SyntaxError;
