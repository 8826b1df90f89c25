//! Shared translation conventions (well-known identifiers and annotation spellings).

/// Entry point function name.
pub const ENTRYPOINT_NAME: &str = "main";

/// Receiver identifier inside methods.
pub const SELF_NAME: &str = "self";

/// C++ expression a bare `self` reference renders as.
pub const SELF_CPP: &str = "(*this)";

/// Default namespace wrapping generated declarations.
pub const DEFAULT_APP_NAMESPACE: &str = "fax_app";

/// Type emitted for an absent annotation.
pub const INFERRED_TYPE: &str = "auto";

/// Return type assumed when a function omits one.
pub const DEFAULT_RETURN_TYPE: &str = "void";

/// Trailing marker of an array annotation (`int[]`).
pub const ARRAY_SUFFIX: &str = "[]";

/// Opening spelling of an owning-pointer annotation (`ptr<T>`).
pub const PTR_PREFIX: &str = "ptr<";

/// Opening spelling of a reference annotation (`ref<T>`).
pub const REF_PREFIX: &str = "ref<";

/// Closing spelling shared by `ptr<...>` and `ref<...>`.
pub const WRAPPER_SUFFIX: &str = ">";

/// The remainder operator spelled as a compound assignment in Fax-lang.
pub const FMOD_OPERATOR: &str = "%=";

/// Address-of operator (always parenthesizes its operand).
pub const ADDRESS_OF_OPERATOR: &str = "&";

/// Prefix the entry point uses when reporting an uncaught failure.
pub const FATAL_PREFIX: &str = "[FATAL]";
