#![forbid(unsafe_code)]
//! Fax-lang Code Generator
//!
//! Turns the JSON AST produced by the Fax-lang parser into a single C++ translation unit that builds against the
//! `fax_std` runtime (`fax_runtime.hpp`).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod config;

pub use faxc_syntax::ast;
pub use faxc_syntax::decode;

pub use backend::{CodegenError, CppCodegen, GenerationError};
pub use config::CodegenConfig;
