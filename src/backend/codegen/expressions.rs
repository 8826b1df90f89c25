//! Expression rendering
//!
//! Every renderer takes a `suppress_parens` flag from its caller: `true` when the surrounding syntax already fixes
//! precedence (statements, call arguments, initializers), `false` for binary operands. Binary expressions are the
//! only kind that wraps itself in parentheses.

use faxc_core::lang::conventions::{ADDRESS_OF_OPERATOR, FMOD_OPERATOR, SELF_CPP, SELF_NAME};
use faxc_core::lang::runtime;
use faxc_syntax::ast::{LiteralValue, Node, NodeKind};

use super::Generator;
use super::errors::CodegenError;
use super::symbols::{Resolution, mangle};

impl Generator<'_> {
    /// Render an expression node.
    pub(crate) fn gen_expr(&self, node: &Node, suppress_parens: bool) -> Result<String, CodegenError> {
        match &node.kind {
            NodeKind::AssignmentExpression { left, right } => {
                Ok(format!("{} = {}", self.gen_expr(left, true)?, self.gen_expr(right, true)?))
            }
            NodeKind::BinaryExpression { operator, left, right } => {
                if operator == FMOD_OPERATOR {
                    return Ok(format!(
                        "{}({}, {})",
                        runtime::FMOD_FN,
                        self.gen_expr(left, true)?,
                        self.gen_expr(right, true)?
                    ));
                }
                let text = format!("{} {operator} {}", self.gen_expr(left, false)?, self.gen_expr(right, false)?);
                Ok(if suppress_parens { text } else { format!("({text})") })
            }
            NodeKind::UnaryExpression { operator, argument } => {
                let arg = self.gen_expr(argument, true)?;
                Ok(render_unary(operator, &arg))
            }
            NodeKind::CallExpression { callee, arguments } => {
                let callee = self.gen_callee(callee)?;
                let args = arguments
                    .iter()
                    .map(|a| self.gen_expr(a, true))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("{callee}({})", args.join(", ")))
            }
            NodeKind::MemberExpression { object, property } => {
                if matches!(
                    object.kind,
                    NodeKind::Literal(_) | NodeKind::ArrayLiteral { .. } | NodeKind::AssignmentExpression { .. }
                ) {
                    return Err(CodegenError::unsupported(object.kind_name(), "has no members", &object.loc));
                }
                Ok(format!("{}.{}", self.gen_object(object)?, mangle(property)))
            }
            NodeKind::IndexExpression { object, index } => {
                let indexable = match &object.kind {
                    NodeKind::Literal(value) => matches!(value, LiteralValue::String(_)),
                    NodeKind::ArrayLiteral { .. } | NodeKind::AssignmentExpression { .. } => false,
                    _ => true,
                };
                if !indexable {
                    return Err(CodegenError::unsupported(object.kind_name(), "cannot be indexed", &object.loc));
                }
                Ok(format!("{}[{}]", self.gen_object(object)?, self.gen_expr(index, true)?))
            }
            NodeKind::SliceExpression { object, start, end } => {
                if matches!(
                    object.kind,
                    NodeKind::Literal(_) | NodeKind::ArrayLiteral { .. } | NodeKind::AssignmentExpression { .. }
                ) {
                    return Err(CodegenError::unsupported(object.kind_name(), "cannot be sliced", &object.loc));
                }
                let obj = self.gen_object(object)?;
                let from = match start {
                    Some(s) => format!("{obj}.begin() + {}", self.gen_expr(s, true)?),
                    None => format!("{obj}.begin()"),
                };
                let to = match end {
                    Some(e) => format!("{obj}.begin() + {}", self.gen_expr(e, true)?),
                    None => format!("{obj}.end()"),
                };
                Ok(format!(
                    "{}<std::decay_t<decltype({obj})>::value_type>({from}, {to})",
                    runtime::ARRAY_TYPE
                ))
            }
            NodeKind::Literal(value) => Ok(render_literal(value)),
            NodeKind::Identifier { name } => Ok(self.gen_identifier(name)),
            NodeKind::ArrayLiteral { elements } => {
                let elems = elements
                    .iter()
                    .map(|e| self.gen_expr(e, true))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("{{{}}}", elems.join(", ")))
            }
            NodeKind::Program { .. }
            | NodeKind::FunctionDeclaration(_)
            | NodeKind::VariableDeclaration(_)
            | NodeKind::StructDeclaration(_)
            | NodeKind::ImportStatement { .. }
            | NodeKind::BlockStatement { .. }
            | NodeKind::ExpressionStatement { .. }
            | NodeKind::IfStatement { .. }
            | NodeKind::WhileStatement { .. }
            | NodeKind::ForStatement { .. }
            | NodeKind::BreakStatement
            | NodeKind::ContinueStatement
            | NodeKind::ReturnStatement { .. } => {
                Err(CodegenError::unsupported(node.kind_name(), "used as an expression", &node.loc))
            }
        }
    }

    /// Identifiers resolve through the scope stack; globals are qualified outside namespace scope.
    fn gen_identifier(&self, name: &str) -> String {
        if name == SELF_NAME {
            return SELF_CPP.to_string();
        }
        let mangled = mangle(name);
        match self.scopes.resolve(name, &self.registry) {
            Resolution::Global if self.region.qualifies_globals() => {
                format!("{}::{mangled}", self.config.namespace)
            }
            _ => mangled,
        }
    }

    /// Callees that are not names go through `gen_object` so the call binds to the whole expression.
    fn gen_callee(&self, callee: &Node) -> Result<String, CodegenError> {
        match &callee.kind {
            NodeKind::Identifier { name } => match runtime::helper_from_str(name) {
                Some(id) => Ok(runtime::qualified_helper(id).to_string()),
                None => Ok(self.gen_identifier(name)),
            },
            NodeKind::AssignmentExpression { .. } | NodeKind::Literal(_) | NodeKind::ArrayLiteral { .. } => {
                Err(CodegenError::unsupported(callee.kind_name(), "cannot be called", &callee.loc))
            }
            _ => self.gen_object(callee),
        }
    }

    /// Object of a member/index/slice; arithmetic objects need explicit parentheses because postfix syntax binds
    /// tighter.
    fn gen_object(&self, object: &Node) -> Result<String, CodegenError> {
        let text = self.gen_expr(object, true)?;
        Ok(match object.kind {
            NodeKind::BinaryExpression { .. } | NodeKind::UnaryExpression { .. } => format!("({text})"),
            _ => text,
        })
    }
}

fn render_unary(operator: &str, arg: &str) -> String {
    if operator == ADDRESS_OF_OPERATOR {
        return format!("&({arg})");
    }
    // `-` followed by `-x` would lex as `--`.
    let merges = match (operator.chars().last(), arg.chars().next()) {
        (Some(a), Some(b)) => a == b && (a == '-' || a == '+'),
        _ => false,
    };
    if merges { format!("{operator}({arg})") } else { format!("{operator}{arg}") }
}

fn render_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for c in s.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\t' => out.push_str("\\t"),
                    '\r' => out.push_str("\\r"),
                    other => out.push(other),
                }
            }
            out.push('"');
            out
        }
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Number(n) => n.to_string(),
        LiteralValue::Null => "nullptr".to_string(),
    }
}
