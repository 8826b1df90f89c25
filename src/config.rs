//! Code generation configuration
//!
//! Output shape knobs shared by the library API and the CLI flags.

use faxc_core::lang::conventions::DEFAULT_APP_NAMESPACE;

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Namespace that wraps every user declaration
    pub namespace: String,
    /// Whether to emit the leading file banner comment
    pub emit_banner: bool,
    /// Whether to emit a `/** @brief name */` line above each function
    pub emit_doc_comments: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            namespace: DEFAULT_APP_NAMESPACE.to_string(),
            emit_banner: true,
            emit_doc_comments: true,
        }
    }
}

impl CodegenConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the program namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Toggle the banner comment
    pub fn with_banner(mut self, emit: bool) -> Self {
        self.emit_banner = emit;
        self
    }

    /// Toggle function doc comments
    pub fn with_doc_comments(mut self, emit: bool) -> Self {
        self.emit_doc_comments = emit;
        self
    }
}
