//! Primitive type vocabulary.
//!
//! This registry maps the Fax-lang primitive type names to their C++ spellings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (Fax-lang type names are lowercase).
//! - Compound annotations (`T[]`, `ptr<T>`, `ref<T>`) are not primitives; see [`crate::lang::conventions`].
//!
//! ## Examples
//! ```rust
//! use faxc_core::lang::primitives::{self, PrimitiveTypeId};
//!
//! assert_eq!(primitives::from_str("float"), Some(PrimitiveTypeId::Float));
//! assert_eq!(primitives::as_cpp(PrimitiveTypeId::String), "std::string");
//! ```

/// Stable identifier for primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTypeId {
    Int,
    Float,
    Bool,
    String,
    Void,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTypeInfo {
    pub id: PrimitiveTypeId,
    /// Spelling in Fax-lang type annotations.
    pub canonical: &'static str,
    /// Spelling in generated C++.
    pub cpp: &'static str,
    pub description: &'static str,
}

/// Registry of primitive types.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    info(PrimitiveTypeId::Int, "int", "int", "Builtin signed integer type."),
    info(PrimitiveTypeId::Float, "float", "float", "Builtin floating-point type."),
    info(PrimitiveTypeId::Bool, "bool", "bool", "Builtin boolean type."),
    info(PrimitiveTypeId::String, "string", "std::string", "Builtin owned string type."),
    info(PrimitiveTypeId::Void, "void", "void", "Absence of a value (function returns only)."),
];

/// Resolve a Fax-lang type name to a [`PrimitiveTypeId`].
pub fn from_str(name: &str) -> Option<PrimitiveTypeId> {
    PRIMITIVE_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Return the Fax-lang spelling for a primitive type.
pub fn as_str(id: PrimitiveTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the C++ spelling for a primitive type.
pub fn as_cpp(id: PrimitiveTypeId) -> &'static str {
    info_for(id).cpp
}

/// Translate a Fax-lang primitive name directly to its C++ spelling.
///
/// ## Returns
/// - `Some(spelling)` if `name` is a primitive, `None` otherwise.
pub fn cpp_spelling(name: &str) -> Option<&'static str> {
    from_str(name).map(as_cpp)
}

/// Return the full metadata entry for a primitive type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveTypeId) -> &'static PrimitiveTypeInfo {
    PRIMITIVE_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("primitive type info missing")
}

const fn info(
    id: PrimitiveTypeId,
    canonical: &'static str,
    cpp: &'static str,
    description: &'static str,
) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        id,
        canonical,
        cpp,
        description,
    }
}
