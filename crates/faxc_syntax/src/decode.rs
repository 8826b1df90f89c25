//! Decode the upstream parser's JSON AST into [`crate::ast`] types.
//!
//! Decoding is strict: a missing required field, a field of the wrong shape, a root that is not a `Program`, or an
//! unknown `"type"` tag aborts with a [`SyntaxError`] naming the tree path of the offending node. Code generation
//! therefore never sees a partially understood tree.
//!
//! ## Notes
//!
//! - Several fields have two accepted spellings because the upstream tools emitted both camelCase and snake_case
//!   (`returnType`/`return_type`, `dataType`/`data_type`, `isConstant`/`is_constant`, `type`/`param_type`,
//!   `type`/`field_type`). The first present spelling wins.
//! - JSON `null` in an optional field is treated the same as an absent field.

use serde_json::{Map, Value};

use crate::ast::{
    Field, FunctionDecl, LiteralValue, Loc, Node, NodeKind, Param, Position, Program, StructDecl, VariableDecl,
};
use crate::errors::SyntaxError;

/// Parse and decode a JSON AST document.
///
/// ## Errors
/// - [`SyntaxError::Json`] if `source` is not valid JSON.
/// - [`SyntaxError::Malformed`] / [`SyntaxError::UnrecognizedNode`] from [`decode_value`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn decode_program(source: &str) -> Result<Program, SyntaxError> {
    let value: Value = serde_json::from_str(source)?;
    decode_value(&value)
}

/// Decode an already-parsed JSON value whose root must be a `Program` node.
pub fn decode_value(value: &Value) -> Result<Program, SyntaxError> {
    let root = decode_node(value, "")?;
    match root.kind {
        NodeKind::Program { body } => {
            tracing::debug!(top_level = body.len(), "decoded program");
            Ok(Program { body })
        }
        other => Err(SyntaxError::malformed(
            "",
            format!("root node must be a `Program`, found `{}`", other.name()),
        )),
    }
}

/// Decode one node (and, recursively, its children) found at `path`.
pub fn decode_node(value: &Value, path: &str) -> Result<Node, SyntaxError> {
    let obj = value
        .as_object()
        .ok_or_else(|| SyntaxError::malformed(path, format!("expected a node object, found {}", shape(value))))?;
    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SyntaxError::malformed(path, "node is missing its string `type` tag"))?;

    let fields = Fields { obj, path };
    let loc = Loc::new(path, fields.position()?);

    let kind = match tag {
        "Program" => NodeKind::Program {
            body: fields.nodes("body")?,
        },
        "FunctionDeclaration" => NodeKind::FunctionDeclaration(FunctionDecl {
            name: fields.string("name")?,
            params: fields.params()?,
            return_type: fields.opt_string(&["returnType", "return_type"])?,
            body: fields.boxed("body")?,
        }),
        "VariableDeclaration" => NodeKind::VariableDeclaration(VariableDecl {
            identifier: fields.string("identifier")?,
            data_type: fields.opt_string(&["dataType", "data_type"])?,
            is_constant: fields.opt_bool(&["isConstant", "is_constant"])?.unwrap_or(false),
            initializer: fields.opt_boxed("initializer")?,
        }),
        "StructDeclaration" => NodeKind::StructDeclaration(StructDecl {
            name: fields.string("name")?,
            fields: fields.struct_fields()?,
            methods: fields.opt_nodes("methods")?,
        }),
        "ImportStatement" => NodeKind::ImportStatement {
            path: fields.string("path")?,
        },
        "BlockStatement" => NodeKind::BlockStatement {
            body: fields.nodes("body")?,
        },
        "ExpressionStatement" => NodeKind::ExpressionStatement {
            expression: fields.boxed("expression")?,
        },
        "IfStatement" => NodeKind::IfStatement {
            test: fields.boxed("test")?,
            consequent: fields.boxed("consequent")?,
            alternate: fields.opt_boxed("alternate")?,
        },
        "WhileStatement" => NodeKind::WhileStatement {
            test: fields.boxed("test")?,
            body: fields.boxed("body")?,
        },
        "ForStatement" => NodeKind::ForStatement {
            init: fields.opt_boxed("init")?,
            test: fields.opt_boxed("test")?,
            update: fields.opt_boxed("update")?,
            body: fields.boxed("body")?,
        },
        "BreakStatement" => NodeKind::BreakStatement,
        "ContinueStatement" => NodeKind::ContinueStatement,
        "ReturnStatement" => NodeKind::ReturnStatement {
            argument: fields.opt_boxed("argument")?,
        },
        "AssignmentExpression" => NodeKind::AssignmentExpression {
            left: fields.boxed("left")?,
            right: fields.boxed("right")?,
        },
        "BinaryExpression" => NodeKind::BinaryExpression {
            operator: fields.string("operator")?,
            left: fields.boxed("left")?,
            right: fields.boxed("right")?,
        },
        "UnaryExpression" => NodeKind::UnaryExpression {
            operator: fields.string("operator")?,
            argument: fields.boxed("argument")?,
        },
        "CallExpression" => NodeKind::CallExpression {
            callee: fields.boxed("callee")?,
            arguments: fields.nodes("arguments")?,
        },
        "MemberExpression" => NodeKind::MemberExpression {
            object: fields.boxed("object")?,
            property: fields.string("property")?,
        },
        "IndexExpression" => NodeKind::IndexExpression {
            object: fields.boxed("object")?,
            index: fields.boxed("index")?,
        },
        "SliceExpression" => NodeKind::SliceExpression {
            object: fields.boxed("object")?,
            start: fields.opt_boxed("start")?,
            end: fields.opt_boxed("end")?,
        },
        "Literal" => NodeKind::Literal(fields.literal()?),
        "Identifier" => NodeKind::Identifier {
            name: fields.string("name")?,
        },
        "ArrayLiteral" => NodeKind::ArrayLiteral {
            elements: fields.nodes("elements")?,
        },
        other => {
            return Err(SyntaxError::UnrecognizedNode {
                kind: other.to_string(),
                loc,
            });
        }
    };

    Ok(Node::new(kind, loc))
}

/// Typed accessors over one node object, all reporting errors against the node's path.
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> Fields<'a> {
    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Look up a field, treating `null` as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value, SyntaxError> {
        self.get(key)
            .ok_or_else(|| SyntaxError::malformed(self.path, format!("missing required field `{key}`")))
    }

    fn string(&self, key: &str) -> Result<String, SyntaxError> {
        let value = self.required(key)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.wrong_shape(key, "a string", value))
    }

    fn opt_string(&self, keys: &[&str]) -> Result<Option<String>, SyntaxError> {
        for &key in keys {
            if let Some(value) = self.get(key) {
                return value
                    .as_str()
                    .map(|s| Some(s.to_string()))
                    .ok_or_else(|| self.wrong_shape(key, "a string", value));
            }
        }
        Ok(None)
    }

    fn opt_bool(&self, keys: &[&str]) -> Result<Option<bool>, SyntaxError> {
        for &key in keys {
            if let Some(value) = self.get(key) {
                return value
                    .as_bool()
                    .map(Some)
                    .ok_or_else(|| self.wrong_shape(key, "a boolean", value));
            }
        }
        Ok(None)
    }

    fn boxed(&self, key: &str) -> Result<Box<Node>, SyntaxError> {
        let value = self.required(key)?;
        decode_node(value, &self.child_path(key)).map(Box::new)
    }

    fn opt_boxed(&self, key: &str) -> Result<Option<Box<Node>>, SyntaxError> {
        match self.get(key) {
            Some(value) => decode_node(value, &self.child_path(key)).map(|n| Some(Box::new(n))),
            None => Ok(None),
        }
    }

    fn array(&self, key: &str) -> Result<&'a Vec<Value>, SyntaxError> {
        let value = self.required(key)?;
        value.as_array().ok_or_else(|| self.wrong_shape(key, "an array", value))
    }

    fn nodes(&self, key: &str) -> Result<Vec<Node>, SyntaxError> {
        let items = self.array(key)?;
        let base = self.child_path(key);
        items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_node(item, &format!("{base}[{i}]")))
            .collect()
    }

    fn opt_nodes(&self, key: &str) -> Result<Vec<Node>, SyntaxError> {
        if self.get(key).is_some() { self.nodes(key) } else { Ok(Vec::new()) }
    }

    /// Decode a list of `{name, type}` records (parameters or struct fields).
    fn typed_names(&self, key: &str, type_keys: &[&str]) -> Result<Vec<(String, String)>, SyntaxError> {
        let items = self.array(key)?;
        let base = self.child_path(key);
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = format!("{base}[{i}]");
            let obj = item.as_object().ok_or_else(|| {
                SyntaxError::malformed(&item_path, format!("expected an object, found {}", shape(item)))
            })?;
            let entry = Fields { obj, path: &item_path };
            let name = entry.string("name")?;
            let ty = entry.opt_string(type_keys)?.ok_or_else(|| {
                SyntaxError::malformed(&item_path, format!("missing required field `{}`", type_keys[0]))
            })?;
            out.push((name, ty));
        }
        Ok(out)
    }

    fn params(&self) -> Result<Vec<Param>, SyntaxError> {
        Ok(self
            .typed_names("params", &["type", "param_type"])?
            .into_iter()
            .map(|(name, ty)| Param { name, ty })
            .collect())
    }

    fn struct_fields(&self) -> Result<Vec<Field>, SyntaxError> {
        Ok(self
            .typed_names("fields", &["type", "field_type"])?
            .into_iter()
            .map(|(name, ty)| Field { name, ty })
            .collect())
    }

    fn literal(&self) -> Result<LiteralValue, SyntaxError> {
        // `value: null` is a legitimate literal, so look at the raw map here.
        let value = self
            .obj
            .get("value")
            .ok_or_else(|| SyntaxError::malformed(self.path, "missing required field `value`"))?;
        match value {
            Value::String(s) => Ok(LiteralValue::String(s.clone())),
            Value::Bool(b) => Ok(LiteralValue::Bool(*b)),
            Value::Number(n) => Ok(LiteralValue::Number(n.clone())),
            Value::Null => Ok(LiteralValue::Null),
            other => Err(self.wrong_shape("value", "a string, boolean, number or null", other)),
        }
    }

    fn position(&self) -> Result<Option<Position>, SyntaxError> {
        let Some(value) = self.get("position") else {
            return Ok(None);
        };
        let pos_path = self.child_path("position");
        let obj = value
            .as_object()
            .ok_or_else(|| self.wrong_shape("position", "an object", value))?;
        let coord = |key: &str| -> Result<usize, SyntaxError> {
            obj.get(key)
                .and_then(Value::as_u64)
                .map(|n| n as usize)
                .ok_or_else(|| SyntaxError::malformed(&pos_path, format!("`{key}` must be a non-negative integer")))
        };
        Ok(Some(Position {
            line: coord("line")?,
            column: coord("column")?,
        }))
    }

    fn wrong_shape(&self, key: &str, expected: &str, found: &Value) -> SyntaxError {
        SyntaxError::malformed(
            self.path,
            format!("field `{key}` must be {expected}, found {}", shape(found)),
        )
    }
}

/// Human-readable JSON value shape for error messages.
fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<Program, SyntaxError> {
        decode_value(&value)
    }

    #[test]
    fn test_empty_program() {
        let program = decode(json!({"type": "Program", "body": []})).unwrap();
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_function_with_aliases() {
        let program = decode(json!({
            "type": "Program",
            "body": [{
                "type": "FunctionDeclaration",
                "name": "add",
                "params": [{"name": "a", "type": "int"}, {"name": "b", "param_type": "int"}],
                "return_type": "int",
                "body": {"type": "BlockStatement", "body": []}
            }]
        }))
        .unwrap();
        let NodeKind::FunctionDeclaration(f) = &program.body[0].kind else {
            panic!("expected a function");
        };
        assert_eq!(f.name, "add");
        assert_eq!(f.params[1].ty, "int");
        assert_eq!(f.return_type.as_deref(), Some("int"));
        assert_eq!(f.body.loc.path, "body[0].body");
    }

    #[test]
    fn test_variable_defaults() {
        let program = decode(json!({
            "type": "Program",
            "body": [{"type": "VariableDeclaration", "identifier": "x", "dataType": null}]
        }))
        .unwrap();
        let NodeKind::VariableDeclaration(v) = &program.body[0].kind else {
            panic!("expected a variable");
        };
        assert_eq!(v.data_type, None);
        assert!(!v.is_constant);
        assert!(v.initializer.is_none());
    }

    #[test]
    fn test_literal_shapes() {
        let program = decode(json!({
            "type": "Program",
            "body": [
                {"type": "Literal", "value": "hi"},
                {"type": "Literal", "value": true},
                {"type": "Literal", "value": 2.5},
                {"type": "Literal", "value": null}
            ]
        }))
        .unwrap();
        let kinds: Vec<_> = program.body.iter().map(|n| n.kind.clone()).collect();
        assert_eq!(kinds[0], NodeKind::Literal(LiteralValue::String("hi".into())));
        assert_eq!(kinds[1], NodeKind::Literal(LiteralValue::Bool(true)));
        assert!(matches!(&kinds[2], NodeKind::Literal(LiteralValue::Number(n)) if n.to_string() == "2.5"));
        assert_eq!(kinds[3], NodeKind::Literal(LiteralValue::Null));
    }

    #[test]
    fn test_position_is_recorded() {
        let program = decode(json!({
            "type": "Program",
            "body": [{"type": "BreakStatement", "position": {"line": 4, "column": 9}}]
        }))
        .unwrap();
        assert_eq!(program.body[0].loc.position, Some(Position { line: 4, column: 9 }));
    }

    #[test]
    fn test_wrong_root_kind() {
        let err = decode(json!({"type": "BlockStatement", "body": []})).unwrap_err();
        assert!(matches!(err, SyntaxError::Malformed { ref path, .. } if path.is_empty()));
        assert!(err.to_string().contains("found `BlockStatement`"));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = decode(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("expected a node object, found an array"));
    }

    #[test]
    fn test_missing_field_reports_path() {
        let err = decode(json!({
            "type": "Program",
            "body": [{"type": "WhileStatement", "test": {"type": "Identifier", "name": "x"}}]
        }))
        .unwrap_err();
        match err {
            SyntaxError::Malformed { path, message } => {
                assert_eq!(path, "body[0]");
                assert!(message.contains("`body`"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_field_shape() {
        let err = decode(json!({
            "type": "Program",
            "body": [{"type": "Identifier", "name": 7}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("field `name` must be a string, found a number"));
    }

    #[test]
    fn test_missing_param_type() {
        let err = decode(json!({
            "type": "Program",
            "body": [{
                "type": "FunctionDeclaration",
                "name": "f",
                "params": [{"name": "a"}],
                "body": {"type": "BlockStatement", "body": []}
            }]
        }))
        .unwrap_err();
        assert!(matches!(err, SyntaxError::Malformed { ref path, .. } if path == "body[0].params[0]"));
    }

    #[test]
    fn test_unrecognized_nested_kind() {
        let err = decode(json!({
            "type": "Program",
            "body": [{
                "type": "WhileStatement",
                "test": {"type": "Identifier", "name": "x"},
                "body": {"type": "BlockStatement", "body": [
                    {"type": "YieldStatement", "position": {"line": 2, "column": 4}}
                ]}
            }]
        }))
        .unwrap_err();
        match err {
            SyntaxError::UnrecognizedNode { kind, loc } => {
                assert_eq!(kind, "YieldStatement");
                assert_eq!(loc.path, "body[0].body.body[0]");
                assert_eq!(loc.position, Some(Position { line: 2, column: 4 }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = decode_program("{ not json").unwrap_err();
        assert!(matches!(err, SyntaxError::Json(_)));
    }
}
