//! Fax-lang → C++ vocabulary registries.
//!
//! This module is the “front door” for translation vocabulary: target reserved words, primitive types,
//! runtime collaborator names, and source-language conventions.
//!
//! The design goal is to avoid stringly-typed checks scattered across the backend.
//! Instead, callers look up spellings through the registry tables and helpers here.
//!
//! ## Examples
//! ```rust
//! use faxc_core::lang::{cpp_keywords, primitives};
//!
//! assert!(cpp_keywords::is_keyword("class"));
//! assert_eq!(primitives::cpp_spelling("string"), Some("std::string"));
//! ```

pub mod conventions;
pub mod cpp_keywords;
pub mod primitives;
pub mod runtime;
