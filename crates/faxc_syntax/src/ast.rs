//! Abstract Syntax Tree definitions for Fax-lang
//!
//! One variant per node kind of the upstream parser's JSON format. Kind-specific payloads live on the variants;
//! location data lives on the wrapping [`Node`].

use std::fmt;

/// Source position recorded by the upstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Where a node sits: its path from the document root plus its source position, if known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Loc {
    /// Dotted path from the root, e.g. `body[2].body.body[0]`. Empty for the root.
    pub path: String,
    pub position: Option<Position>,
}

impl Loc {
    pub fn new(path: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            path: path.into(),
            position,
        }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>")?;
        } else {
            write!(f, "{}", self.path)?;
        }
        if let Some(pos) = self.position {
            write!(f, " (line {}, column {})", pos.line, pos.column)?;
        }
        Ok(())
    }
}

/// A decoded program: the body of the root `Program` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Node>,
}

/// An AST node with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub loc: Loc,
}

impl Node {
    pub fn new(kind: NodeKind, loc: Loc) -> Self {
        Self { kind, loc }
    }

    /// The node-kind tag as spelled in the JSON document.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Every node kind the generator understands.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Program {
        body: Vec<Node>,
    },
    FunctionDeclaration(FunctionDecl),
    VariableDeclaration(VariableDecl),
    StructDeclaration(StructDecl),
    ImportStatement {
        path: String,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    ExpressionStatement {
        expression: Box<Node>,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },
    ForStatement {
        init: Option<Box<Node>>,
        test: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    BreakStatement,
    ContinueStatement,
    ReturnStatement {
        argument: Option<Box<Node>>,
    },
    AssignmentExpression {
        left: Box<Node>,
        right: Box<Node>,
    },
    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryExpression {
        operator: String,
        argument: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        property: String,
    },
    IndexExpression {
        object: Box<Node>,
        index: Box<Node>,
    },
    SliceExpression {
        object: Box<Node>,
        start: Option<Box<Node>>,
        end: Option<Box<Node>>,
    },
    Literal(LiteralValue),
    Identifier {
        name: String,
    },
    ArrayLiteral {
        elements: Vec<Node>,
    },
}

impl NodeKind {
    /// The `"type"` tag of this kind in the JSON format.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "Program",
            NodeKind::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeKind::VariableDeclaration(_) => "VariableDeclaration",
            NodeKind::StructDeclaration(_) => "StructDeclaration",
            NodeKind::ImportStatement { .. } => "ImportStatement",
            NodeKind::BlockStatement { .. } => "BlockStatement",
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::IfStatement { .. } => "IfStatement",
            NodeKind::WhileStatement { .. } => "WhileStatement",
            NodeKind::ForStatement { .. } => "ForStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::ReturnStatement { .. } => "ReturnStatement",
            NodeKind::AssignmentExpression { .. } => "AssignmentExpression",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::UnaryExpression { .. } => "UnaryExpression",
            NodeKind::CallExpression { .. } => "CallExpression",
            NodeKind::MemberExpression { .. } => "MemberExpression",
            NodeKind::IndexExpression { .. } => "IndexExpression",
            NodeKind::SliceExpression { .. } => "SliceExpression",
            NodeKind::Literal(_) => "Literal",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::ArrayLiteral { .. } => "ArrayLiteral",
        }
    }

    /// Whether this kind may appear where a value is expected.
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::AssignmentExpression { .. }
                | NodeKind::BinaryExpression { .. }
                | NodeKind::UnaryExpression { .. }
                | NodeKind::CallExpression { .. }
                | NodeKind::MemberExpression { .. }
                | NodeKind::IndexExpression { .. }
                | NodeKind::SliceExpression { .. }
                | NodeKind::Literal(_)
                | NodeKind::Identifier { .. }
                | NodeKind::ArrayLiteral { .. }
        )
    }
}

/// `FunctionDeclaration` payload (also used for struct methods).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    /// `None` when the document omits the return type.
    pub return_type: Option<String>,
    pub body: Box<Node>,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

/// `VariableDeclaration` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub identifier: String,
    /// `None` means "infer".
    pub data_type: Option<String>,
    pub is_constant: bool,
    pub initializer: Option<Box<Node>>,
}

/// `StructDeclaration` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<Field>,
    pub methods: Vec<Node>,
}

/// A struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

/// Literal values as they appear in the JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Bool(bool),
    /// Kept as the JSON number so its textual form survives.
    Number(serde_json::Number),
    Null,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loc_display_root() {
        assert_eq!(Loc::default().to_string(), "<root>");
    }

    #[test]
    fn test_loc_display_with_position() {
        let loc = Loc::new("body[1].body", Some(Position { line: 3, column: 5 }));
        assert_eq!(loc.to_string(), "body[1].body (line 3, column 5)");
    }

    #[test]
    fn test_kind_names_match_wire_tags() {
        assert_eq!(NodeKind::BreakStatement.name(), "BreakStatement");
        let ident = NodeKind::Identifier { name: "x".into() };
        assert_eq!(ident.name(), "Identifier");
        assert!(ident.is_expression());
        assert!(!NodeKind::ContinueStatement.is_expression());
    }
}
