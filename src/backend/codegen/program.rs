//! Translation unit assembly
//!
//! Layout of the generated file:
//!
//! ```text
//! banner comment
//! runtime / std includes, one #include per imported module
//! namespace <ns> { functions, structs, globals in source order }
//! int main(argc, argv) { try { free statements; <ns>::main(); } catch ... }
//! ```

use std::collections::HashSet;

use faxc_core::lang::conventions::{ENTRYPOINT_NAME, FATAL_PREFIX};
use faxc_core::lang::runtime;
use faxc_syntax::ast::{Node, NodeKind, Program};

use super::errors::CodegenError;
use super::symbols::{SymbolKind, mangle};
use super::{Generator, Region};

const BANNER: &[&str] = &[
    "/**",
    " * @file output.cpp",
    " * @brief Generated by Fax-lang Polyglot Compiler",
    " */",
];

impl Generator<'_> {
    /// Generate the whole translation unit, consuming the pass context.
    pub(crate) fn generate_program(mut self, program: &Program) -> Result<String, CodegenError> {
        let imports = collect_imports(&program.body);
        tracing::debug!(imports = imports.len(), "collected imports");

        self.gen_prologue(&imports);
        self.gen_namespace(&program.body)?;
        self.gen_entry_point(&program.body)?;

        debug_assert_eq!(self.scopes.depth(), 0);
        debug_assert_eq!(self.emitter.depth(), 0);
        Ok(self.emitter.finish())
    }

    fn gen_prologue(&mut self, imports: &[&str]) {
        if self.config.emit_banner {
            for line in BANNER {
                self.emitter.line(line);
            }
            self.emitter.blank_line();
        }
        self.emitter.linef(format_args!("#include \"{}\"", runtime::RUNTIME_HEADER));
        for header in runtime::STD_HEADERS {
            self.emitter.linef(format_args!("#include {header}"));
        }
        for path in imports {
            self.emitter
                .linef(format_args!("#include \"{path}{}\"", runtime::IMPORT_EXTENSION));
        }
        self.emitter.blank_line();
    }

    fn gen_namespace(&mut self, body: &[Node]) -> Result<(), CodegenError> {
        let namespace = self.config.namespace.clone();
        self.emitter.linef(format_args!("namespace {namespace} {{"));
        self.in_region(Region::Namespace, |g| {
            g.indented(|g| {
                for node in body {
                    match &node.kind {
                        NodeKind::FunctionDeclaration(func) => g.gen_function(func)?,
                        NodeKind::StructDeclaration(decl) => g.gen_struct(decl)?,
                        NodeKind::VariableDeclaration(decl) => g.gen_global_variable(decl)?,
                        _ => {}
                    }
                }
                Ok(())
            })
        })?;
        self.emitter.blank_line();
        self.emitter.linef(format_args!("}} // namespace {namespace}"));
        self.emitter.blank_line();
        Ok(())
    }

    fn gen_entry_point(&mut self, body: &[Node]) -> Result<(), CodegenError> {
        let has_user_main = self.registry.kind_of(&mangle(ENTRYPOINT_NAME)) == Some(SymbolKind::Function);

        self.emitter.line("int main(int argc, char* argv[]) {");
        self.indented(|g| {
            g.emitter.line("try {");
            g.in_region(Region::EntryPoint, |g| {
                g.indented(|g| {
                    for node in body {
                        if is_declaration(node) || (has_user_main && is_entrypoint_call(node)) {
                            continue;
                        }
                        g.gen_statement(node)?;
                    }
                    if has_user_main {
                        g.emitter
                            .linef(format_args!("{}::{}();", g.config.namespace, mangle(ENTRYPOINT_NAME)));
                    }
                    g.emitter.line("return 0;");
                    Ok(())
                })
            })?;
            g.emitter.line("} catch (const std::exception& e) {");
            g.indented(|g| {
                g.emitter.linef(format_args!(
                    "std::cerr << \"{FATAL_PREFIX}: \" << e.what() << std::endl;"
                ));
                g.emitter.line("return 1;");
                Ok(())
            })?;
            g.emitter.line("}");
            Ok(())
        })?;
        self.emitter.line("}");
        Ok(())
    }
}

/// Top-level import paths, de-duplicated in first-seen order.
fn collect_imports(body: &[Node]) -> Vec<&str> {
    let mut seen = HashSet::new();
    body.iter()
        .filter_map(|node| match &node.kind {
            NodeKind::ImportStatement { path } => Some(path.as_str()),
            _ => None,
        })
        .filter(|path| seen.insert(*path))
        .collect()
}

/// Top-level nodes that are emitted outside the entry point.
fn is_declaration(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::FunctionDeclaration(_)
            | NodeKind::StructDeclaration(_)
            | NodeKind::VariableDeclaration(_)
            | NodeKind::ImportStatement { .. }
    )
}

/// `main()` written as a top-level statement.
fn is_entrypoint_call(node: &Node) -> bool {
    let call = match &node.kind {
        NodeKind::ExpressionStatement { expression } => &expression.kind,
        other => other,
    };
    match call {
        NodeKind::CallExpression { callee, .. } => {
            matches!(&callee.kind, NodeKind::Identifier { name } if name == ENTRYPOINT_NAME)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faxc_syntax::ast::Loc;

    fn import(path: &str) -> Node {
        Node::new(NodeKind::ImportStatement { path: path.into() }, Loc::default())
    }

    #[test]
    fn test_imports_deduplicated_in_order() {
        let body = vec![import("io"), import("math"), import("io"), import("net")];
        assert_eq!(collect_imports(&body), vec!["io", "math", "net"]);
    }

    #[test]
    fn test_entrypoint_call_detection() {
        let call = Node::new(
            NodeKind::CallExpression {
                callee: Box::new(Node::new(NodeKind::Identifier { name: "main".into() }, Loc::default())),
                arguments: vec![],
            },
            Loc::default(),
        );
        assert!(is_entrypoint_call(&call));
        let stmt = Node::new(
            NodeKind::ExpressionStatement {
                expression: Box::new(call),
            },
            Loc::default(),
        );
        assert!(is_entrypoint_call(&stmt));
        assert!(!is_entrypoint_call(&import("main")));
    }
}
