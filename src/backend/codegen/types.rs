//! Type annotation translation.
//!
//! Annotations are translated textually; nothing here checks that a type exists.

use faxc_core::lang::conventions::{ARRAY_SUFFIX, INFERRED_TYPE, PTR_PREFIX, REF_PREFIX, WRAPPER_SUFFIX};
use faxc_core::lang::{primitives, runtime};

use super::Generator;
use super::symbols::{GlobalRegistry, mangle};

/// Map a Fax-lang type annotation to a C++ type expression.
///
/// Forms are checked in order: `T[]`, `ptr<T>`, `ref<T>`, a record declared by the program, a primitive, and
/// finally any other name, which is assumed to be provided by the runtime. Each recursive call strips one wrapper.
pub fn map_type(annotation: &str, registry: &GlobalRegistry, namespace: &str) -> String {
    let ty = annotation.trim();
    if ty.is_empty() {
        return INFERRED_TYPE.to_string();
    }

    if let Some(elem) = ty.strip_suffix(ARRAY_SUFFIX) {
        return format!("{}<{}>", runtime::ARRAY_TYPE, map_type(elem, registry, namespace));
    }
    if let Some(inner) = unwrap(ty, PTR_PREFIX) {
        return format!("{}<{}>", runtime::PTR_TYPE, map_type(inner, registry, namespace));
    }
    if let Some(inner) = unwrap(ty, REF_PREFIX) {
        return format!("{}&", map_type(inner, registry, namespace));
    }

    let mangled = mangle(ty);
    if registry.is_record(&mangled) {
        return format!("{namespace}::{mangled}");
    }
    match primitives::cpp_spelling(ty) {
        Some(cpp) => cpp.to_string(),
        None => mangled,
    }
}

fn unwrap<'a>(ty: &'a str, prefix: &str) -> Option<&'a str> {
    ty.strip_prefix(prefix)?.strip_suffix(WRAPPER_SUFFIX)
}

impl Generator<'_> {
    /// Map an optional annotation; absence means "infer".
    pub(crate) fn map_type(&self, annotation: Option<&str>) -> String {
        match annotation {
            Some(ty) => map_type(ty, &self.registry, &self.config.namespace),
            None => INFERRED_TYPE.to_string(),
        }
    }
}
