//! Names exported by the external C++ runtime (`fax_runtime.hpp`).
//!
//! Generated code references these symbols; the generator assumes they exist and never defines them.
//!
//! ## Examples
//! ```rust
//! use faxc_core::lang::runtime::{self, RuntimeFnId};
//!
//! assert_eq!(runtime::helper_from_str("println"), Some(RuntimeFnId::Println));
//! assert_eq!(runtime::qualified_helper(RuntimeFnId::Println), "fax_std::println");
//! ```

/// Namespace of the runtime library.
pub const RUNTIME_NAMESPACE: &str = "fax_std";

/// Header declaring the runtime library.
pub const RUNTIME_HEADER: &str = "fax_runtime.hpp";

/// Dynamic array container type (`fax_std::Array<T>`).
pub const ARRAY_TYPE: &str = "fax_std::Array";

/// Owning smart-pointer container type (`fax_std::Ptr<T>`).
pub const PTR_TYPE: &str = "fax_std::Ptr";

/// Floating-point remainder function used for the `%=` operator.
pub const FMOD_FN: &str = "std::fmod";

/// Standard headers every translation unit includes after the runtime header.
pub const STD_HEADERS: &[&str] = &["<cmath>"];

/// File extension appended to imported module paths.
pub const IMPORT_EXTENSION: &str = ".hpp";

/// Stable identifier for runtime helper functions callable from Fax-lang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeFnId {
    Println,
}

/// Metadata for a runtime helper function.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeFnInfo {
    pub id: RuntimeFnId,
    /// Spelling at Fax-lang call sites.
    pub canonical: &'static str,
    /// Fully qualified C++ spelling.
    pub qualified: &'static str,
    pub description: &'static str,
}

/// Registry of runtime helpers.
pub const RUNTIME_HELPERS: &[RuntimeFnInfo] = &[RuntimeFnInfo {
    id: RuntimeFnId::Println,
    canonical: "println",
    qualified: "fax_std::println",
    description: "Print space-separated values followed by a newline to stdout.",
}];

/// Resolve a call-site name to a runtime helper.
pub fn helper_from_str(name: &str) -> Option<RuntimeFnId> {
    RUNTIME_HELPERS.iter().find(|h| h.canonical == name).map(|h| h.id)
}

/// Return the qualified C++ name of a runtime helper.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn qualified_helper(id: RuntimeFnId) -> &'static str {
    RUNTIME_HELPERS
        .iter()
        .find(|h| h.id == id)
        .map(|h| h.qualified)
        .expect("runtime helper info missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_live_in_runtime_namespace() {
        for h in RUNTIME_HELPERS {
            assert!(h.qualified.starts_with(RUNTIME_NAMESPACE));
            assert!(h.qualified.ends_with(h.canonical));
        }
    }

    #[test]
    fn test_container_types_are_qualified() {
        assert!(ARRAY_TYPE.starts_with("fax_std::"));
        assert!(PTR_TYPE.starts_with("fax_std::"));
    }

    #[test]
    fn test_unknown_helper() {
        assert_eq!(helper_from_str("print"), None);
    }
}
