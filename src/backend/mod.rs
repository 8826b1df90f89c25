//! Fax-lang Compiler Backend
//!
//! This module handles code generation from the decoded AST to C++ source code.
//!
//! The pipeline is:
//! 1. JSON document → `faxc_syntax::decode` → `Program`
//! 2. `Program` → [`CppCodegen`] → one C++ translation unit
//!
//! ## Module Organization
//!
//! - `codegen/` - Code generation from AST to C++
//!   - `mod.rs` - [`CppCodegen`] facade and the per-pass generator context
//!   - `symbols.rs` - Mangling, global registry, scope tracking
//!   - `types.rs` - Type annotation translation
//!   - `expressions.rs` - Expression emission
//!   - `statements.rs` - Statement, function and struct emission
//!   - `program.rs` - Translation unit assembly
//! - `cpp_emitter.rs` - Low-level C++ code string builder

#![deny(clippy::unwrap_used)]

pub mod codegen;
pub mod cpp_emitter;

pub use codegen::{CodegenError, CppCodegen, GenerationError};
