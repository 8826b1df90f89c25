//! Statement emission
//!
//! Statements write whole lines to the emitter. Bodies of `if`/`while`/`for` and functions always get braces and
//! their own scope, even when the document gives a single statement instead of a block.

use faxc_core::lang::conventions::{DEFAULT_RETURN_TYPE, SELF_NAME};
use faxc_syntax::ast::{FunctionDecl, Node, NodeKind, StructDecl, VariableDecl};

use super::errors::CodegenError;
use super::symbols::mangle;
use super::{Generator, Region};

impl Generator<'_> {
    /// Emit a statement nested inside a function, block or the entry point.
    pub(crate) fn gen_statement(&mut self, node: &Node) -> Result<(), CodegenError> {
        match &node.kind {
            NodeKind::VariableDeclaration(decl) => {
                let text = self.variable_decl_text(decl)?;
                self.emitter.linef(format_args!("{text};"));
            }
            NodeKind::BlockStatement { .. } => {
                self.emitter.line("{");
                self.gen_body(node)?;
                self.emitter.line("}");
            }
            NodeKind::ExpressionStatement { expression } => {
                let expr = self.gen_expr(expression, true)?;
                self.emitter.linef(format_args!("{expr};"));
            }
            NodeKind::IfStatement {
                test,
                consequent,
                alternate,
            } => self.gen_if(test, consequent, alternate.as_deref())?,
            NodeKind::WhileStatement { test, body } => {
                let test = self.gen_expr(test, true)?;
                self.emitter.linef(format_args!("while ({test}) {{"));
                self.gen_body(body)?;
                self.emitter.line("}");
            }
            NodeKind::ForStatement {
                init,
                test,
                update,
                body,
            } => self.gen_for(init.as_deref(), test.as_deref(), update.as_deref(), body)?,
            NodeKind::BreakStatement => self.emitter.line("break;"),
            NodeKind::ContinueStatement => self.emitter.line("continue;"),
            NodeKind::ReturnStatement { argument } => match argument {
                Some(arg) => {
                    let value = self.gen_expr(arg, true)?;
                    self.emitter.linef(format_args!("return {value};"));
                }
                None => self.emitter.line("return;"),
            },
            NodeKind::FunctionDeclaration(_) | NodeKind::StructDeclaration(_) => {
                return Err(CodegenError::unsupported(
                    node.kind_name(),
                    "nested inside a block",
                    &node.loc,
                ));
            }
            NodeKind::ImportStatement { .. } => {
                return Err(CodegenError::unsupported(
                    node.kind_name(),
                    "outside the top level",
                    &node.loc,
                ));
            }
            NodeKind::Program { .. } => {
                return Err(CodegenError::unsupported(node.kind_name(), "below the root", &node.loc));
            }
            // Bare expressions in statement position
            _ => {
                let expr = self.gen_expr(node, true)?;
                self.emitter.linef(format_args!("{expr};"));
            }
        }
        Ok(())
    }

    /// Emit the statements of a body one level deeper in a fresh scope, without the surrounding braces.
    fn gen_body(&mut self, body: &Node) -> Result<(), CodegenError> {
        self.indented(|g| {
            g.scoped(|g| match &body.kind {
                NodeKind::BlockStatement { body } => body.iter().try_for_each(|stmt| g.gen_statement(stmt)),
                _ => g.gen_statement(body),
            })
        })
    }

    fn gen_if(&mut self, test: &Node, consequent: &Node, alternate: Option<&Node>) -> Result<(), CodegenError> {
        let test = self.gen_expr(test, true)?;
        self.emitter.linef(format_args!("if ({test}) {{"));
        self.gen_body(consequent)?;

        let mut alternate = alternate;
        while let Some(alt) = alternate {
            match &alt.kind {
                NodeKind::IfStatement {
                    test,
                    consequent,
                    alternate: next,
                } => {
                    let test = self.gen_expr(test, true)?;
                    self.emitter.linef(format_args!("}} else if ({test}) {{"));
                    self.gen_body(consequent)?;
                    alternate = next.as_deref();
                }
                _ => {
                    self.emitter.line("} else {");
                    self.gen_body(alt)?;
                    alternate = None;
                }
            }
        }
        self.emitter.line("}");
        Ok(())
    }

    fn gen_for(
        &mut self,
        init: Option<&Node>,
        test: Option<&Node>,
        update: Option<&Node>,
        body: &Node,
    ) -> Result<(), CodegenError> {
        // The loop variable belongs to the loop, not the enclosing block.
        self.scoped(|g| {
            let init = match init {
                Some(node) => g.for_init_text(node)?,
                None => String::new(),
            };
            let test = match test {
                Some(node) => g.gen_expr(node, true)?,
                None => String::new(),
            };
            let update = match update {
                Some(node) => g.gen_expr(node, true)?,
                None => String::new(),
            };
            g.emitter.linef(format_args!("for ({init}; {test}; {update}) {{"));
            g.gen_body(body)?;
            g.emitter.line("}");
            Ok(())
        })
    }

    fn for_init_text(&mut self, init: &Node) -> Result<String, CodegenError> {
        match &init.kind {
            NodeKind::VariableDeclaration(decl) => self.variable_decl_text(decl),
            NodeKind::ExpressionStatement { expression } => self.gen_expr(expression, true),
            kind if kind.is_expression() => self.gen_expr(init, true),
            _ => Err(CodegenError::unsupported(
                init.kind_name(),
                "as a for-loop initializer",
                &init.loc,
            )),
        }
    }

    /// Declaration text without the terminating `;`. The name is declared before the initializer renders.
    fn variable_decl_text(&mut self, decl: &VariableDecl) -> Result<String, CodegenError> {
        self.scopes.declare_local(&decl.identifier);
        let qualifier = if decl.is_constant { "const " } else { "" };
        let ty = self.map_type(decl.data_type.as_deref());
        let name = mangle(&decl.identifier);
        match &decl.initializer {
            Some(init) => {
                let value = self.gen_expr(init, true)?;
                Ok(format!("{qualifier}{ty} {name} = {value}"))
            }
            None => Ok(format!("{qualifier}{ty} {name}")),
        }
    }

    /// Emit a variable declaration at namespace scope.
    pub(crate) fn gen_global_variable(&mut self, decl: &VariableDecl) -> Result<(), CodegenError> {
        let text = self.variable_decl_text(decl)?;
        self.emitter.linef(format_args!("{text};"));
        Ok(())
    }

    /// Emit a function (or struct method) preceded by a blank line.
    pub(crate) fn gen_function(&mut self, func: &FunctionDecl) -> Result<(), CodegenError> {
        let name = mangle(&func.name);
        self.emitter.blank_line();
        if self.config.emit_doc_comments {
            self.emitter.doc_comment(&name);
        }

        self.in_region(Region::Function, |g| {
            g.scoped(|g| {
                for param in &func.params {
                    g.scopes.declare_local(&param.name);
                }
                let params = func
                    .params
                    .iter()
                    .filter(|p| p.ty != SELF_NAME && p.name != SELF_NAME)
                    .map(|p| format!("{} {}", g.map_type(Some(p.ty.as_str())), mangle(&p.name)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let ret = g.map_type(Some(func.return_type.as_deref().unwrap_or(DEFAULT_RETURN_TYPE)));
                g.emitter.linef(format_args!("{ret} {name}({params}) {{"));
                g.gen_body(&func.body)?;
                g.emitter.line("}");
                Ok(())
            })
        })
    }

    /// Emit a struct with its fields and methods, preceded by a blank line.
    pub(crate) fn gen_struct(&mut self, decl: &StructDecl) -> Result<(), CodegenError> {
        self.emitter.blank_line();
        self.emitter.linef(format_args!("struct {} {{", mangle(&decl.name)));
        self.indented(|g| {
            for field in &decl.fields {
                let ty = g.map_type(Some(field.ty.as_str()));
                g.emitter.linef(format_args!("{ty} {};", mangle(&field.name)));
            }
            for method in &decl.methods {
                match &method.kind {
                    NodeKind::FunctionDeclaration(func) => g.gen_function(func)?,
                    _ => {
                        return Err(CodegenError::unsupported(
                            method.kind_name(),
                            "as a struct method",
                            &method.loc,
                        ));
                    }
                }
            }
            Ok(())
        })?;
        self.emitter.line("};");
        Ok(())
    }
}
