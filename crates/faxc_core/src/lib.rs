//! Provide the canonical vocabulary shared by the Fax-lang code generator.
//!
//! This crate is intentionally small and dependency-free. It holds the closed tables the backend consults while
//! translating a Fax-lang AST into C++:
//! - the C++ reserved-word table used for identifier escaping,
//! - the primitive type table,
//! - the names exported by the external C++ runtime (`fax_runtime.hpp`),
//! - well-known identifiers and type-annotation spellings.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no AST types.

pub mod lang;
