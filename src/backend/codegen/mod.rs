//! Fax-lang AST → C++ code generation
//!
//! [`CppCodegen`] is the public entry point. Each call builds a fresh [`Generator`] pass context that owns the output
//! buffer, the scope stack and the global registry, so a `CppCodegen` can be reused and shared freely.
//!
//! ## Module Organization
//!
//! - `errors` - [`CodegenError`] and the facade-level [`GenerationError`]
//! - `symbols` - mangling, global registry, scope tracking
//! - `types` - type annotation translation
//! - `expressions` - expression rendering
//! - `statements` - statements, functions and structs
//! - `program` - translation unit assembly and the synthesized entry point

mod errors;
mod expressions;
mod program;
mod statements;
pub mod symbols;
pub mod types;

pub use errors::{CodegenError, GenerationError};

use faxc_syntax::ast::Program;
use faxc_syntax::decode;

use super::cpp_emitter::CppEmitter;
use crate::config::CodegenConfig;
use symbols::{GlobalRegistry, ScopeTracker};

/// Fax-lang → C++ code generator
///
/// ## Examples
///
/// ```rust
/// use faxc::backend::CppCodegen;
///
/// let codegen = CppCodegen::new();
/// let cpp = codegen.generate_from_json(r#"{"type": "Program", "body": []}"#).unwrap();
/// assert!(cpp.contains("namespace fax_app {"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CppCodegen {
    config: CodegenConfig,
}

impl CppCodegen {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom configuration
    pub fn with_config(config: CodegenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Generate a C++ translation unit from a decoded program.
    ///
    /// ## Errors
    /// - [`GenerationError::Codegen`] if the program contains a construct that cannot be rendered.
    #[tracing::instrument(skip_all, fields(top_level = program.body.len(), namespace = %self.config.namespace))]
    pub fn try_generate(&self, program: &Program) -> Result<String, GenerationError> {
        let registry = GlobalRegistry::from_top_level(&program.body);
        let output = Generator::new(&self.config, registry).generate_program(program)?;
        tracing::debug!(bytes = output.len(), "generated translation unit");
        Ok(output)
    }

    /// Decode a JSON AST document and generate C++ from it.
    ///
    /// ## Errors
    /// - [`GenerationError::Syntax`] if the document cannot be decoded.
    /// - [`GenerationError::Codegen`] as for [`CppCodegen::try_generate`].
    pub fn generate_from_json(&self, source: &str) -> Result<String, GenerationError> {
        let program = decode::decode_program(source)?;
        self.try_generate(&program)
    }
}

/// Which part of the translation unit is currently being written.
///
/// Global references are qualified with the program namespace inside function bodies and in the synthesized entry
/// point, and left bare at namespace scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    Namespace,
    Function,
    EntryPoint,
}

impl Region {
    fn qualifies_globals(self) -> bool {
        !matches!(self, Region::Namespace)
    }
}

/// State of one generation pass.
pub(crate) struct Generator<'a> {
    config: &'a CodegenConfig,
    emitter: CppEmitter,
    scopes: ScopeTracker,
    registry: GlobalRegistry,
    region: Region,
}

impl<'a> Generator<'a> {
    fn new(config: &'a CodegenConfig, registry: GlobalRegistry) -> Self {
        Self {
            config,
            emitter: CppEmitter::new(config.indent_width),
            scopes: ScopeTracker::new(),
            registry,
            region: Region::Namespace,
        }
    }

    /// Run `f` one indentation level deeper; the level is restored even when `f` fails.
    fn indented<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, CodegenError>) -> Result<T, CodegenError> {
        self.emitter.indent();
        let result = f(self);
        self.emitter.dedent();
        result
    }

    /// Run `f` inside a fresh local scope.
    fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, CodegenError>) -> Result<T, CodegenError> {
        self.scopes.enter_scope();
        let result = f(self);
        let exited = self.scopes.exit_scope();
        let value = result?;
        exited?;
        Ok(value)
    }

    /// Run `f` while emitting into `region`.
    fn in_region<T>(&mut self, region: Region, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = std::mem::replace(&mut self.region, region);
        let result = f(self);
        self.region = previous;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_unwind_on_error() {
        let config = CodegenConfig::default();
        let mut g = Generator::new(&config, GlobalRegistry::new());
        let result: Result<(), CodegenError> = g.in_region(Region::Function, |g| {
            g.indented(|g| g.scoped(|_| Err(CodegenError::ScopeUnderflow)))
        });
        assert!(result.is_err());
        assert_eq!(g.emitter.depth(), 0);
        assert_eq!(g.scopes.depth(), 0);
        assert_eq!(g.region, Region::Namespace);
    }

    #[test]
    fn test_region_qualification() {
        assert!(!Region::Namespace.qualifies_globals());
        assert!(Region::Function.qualifies_globals());
        assert!(Region::EntryPoint.qualifies_globals());
    }
}
