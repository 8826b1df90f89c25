//! Identifier safety and name resolution.
//!
//! - [`mangle`] keeps generated identifiers clear of C++ reserved words.
//! - [`GlobalRegistry`] records the program's top-level symbols, built once before any output is written.
//! - [`ScopeTracker`] is the stack of local scopes active at the current point of the walk.

use std::collections::{HashMap, HashSet};

use faxc_core::lang::cpp_keywords;
use faxc_syntax::ast::{Node, NodeKind};

use super::errors::CodegenError;

/// Map a source identifier to a safe C++ identifier.
///
/// Reserved words get [`cpp_keywords::ESCAPE_SUFFIX`] appended; everything else is returned unchanged. Escaping is
/// single-pass: a source name that already ends in `_` and equals an escaped keyword (e.g. `class_`) is not
/// distinguished from the escaped form.
pub fn mangle(name: &str) -> String {
    if cpp_keywords::is_keyword(name) {
        format!("{name}{}", cpp_keywords::ESCAPE_SUFFIX)
    } else {
        name.to_string()
    }
}

/// What a top-level name denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Variable,
    Record,
}

/// Top-level symbols of one program, keyed by mangled name.
#[derive(Debug, Default, Clone)]
pub struct GlobalRegistry {
    symbols: HashMap<String, SymbolKind>,
}

impl GlobalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect functions, global variables and record types from the program's top level.
    pub fn from_top_level(body: &[Node]) -> Self {
        let mut registry = Self::new();
        for node in body {
            match &node.kind {
                NodeKind::FunctionDeclaration(f) => registry.register(&f.name, SymbolKind::Function),
                NodeKind::VariableDeclaration(v) => registry.register(&v.identifier, SymbolKind::Variable),
                NodeKind::StructDeclaration(s) => registry.register(&s.name, SymbolKind::Record),
                _ => {}
            }
        }
        tracing::debug!(symbols = registry.len(), "collected global symbols");
        registry
    }

    /// Register a name; the first registration of a name wins.
    pub fn register(&mut self, name: &str, kind: SymbolKind) {
        self.symbols.entry(mangle(name)).or_insert(kind);
    }

    /// Look up an already-mangled name.
    pub fn kind_of(&self, mangled: &str) -> Option<SymbolKind> {
        self.symbols.get(mangled).copied()
    }

    pub fn contains(&self, mangled: &str) -> bool {
        self.symbols.contains_key(mangled)
    }

    pub fn is_record(&self, mangled: &str) -> bool {
        self.kind_of(mangled) == Some(SymbolKind::Record)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// How an identifier reference resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Declared in an active local scope.
    Local,
    /// A top-level program symbol.
    Global,
    /// Neither; assumed to come from the runtime or the C++ standard library.
    Unqualified,
}

/// Stack of lexical scopes holding mangled local names.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    scopes: Vec<HashSet<String>>,
}

impl ScopeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new variable scope (function body, block, loop)
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashSet::new());
    }

    /// Exit the innermost scope
    pub fn exit_scope(&mut self) -> Result<(), CodegenError> {
        self.scopes.pop().map(|_| ()).ok_or(CodegenError::ScopeUnderflow)
    }

    /// Declare a name in the innermost scope. Outside any scope this does nothing: top-level names live in the
    /// [`GlobalRegistry`].
    pub fn declare_local(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(mangle(name));
        }
    }

    /// Resolve a source identifier, innermost scope first, then the registry.
    pub fn resolve(&self, name: &str, registry: &GlobalRegistry) -> Resolution {
        let mangled = mangle(name);
        if self.scopes.iter().rev().any(|scope| scope.contains(&mangled)) {
            Resolution::Local
        } else if registry.contains(&mangled) {
            Resolution::Global
        } else {
            Resolution::Unqualified
        }
    }

    /// Number of active scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
