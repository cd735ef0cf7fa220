//! The runtime value representation produced by coercion and execution.
//!
//! Distinct from [`crate::ast::Value`]: the AST value is a literal as written
//! in a document and may still contain variable references, while this type
//! is fully resolved data ready to be serialized in a response.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::ast;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
    /// Marks an object field whose value was never set, distinct from an
    /// explicit `null`. Never appears in a serialized response: completion
    /// always turns a field either into a real value or `Null`.
    Undefined,
}

impl Value {
    pub fn object(fields: IndexMap<String, Value>) -> Value {
        Value::Object(fields)
    }

    pub fn list(values: Vec<Value>) -> Value {
        Value::List(values)
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Object(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&ast::Value<'_>> for Value {
    /// Convert an AST literal into a runtime value, assuming any `Variable`
    /// nodes have already been substituted by the caller (see
    /// [`crate::coercion`]).
    fn from(v: &ast::Value<'_>) -> Value {
        match v {
            ast::Value::Null(_) => Value::Null,
            ast::Value::Int(n, _) => Value::Int(*n),
            ast::Value::Float(n, _) => Value::Float(*n),
            ast::Value::String(s, _) => Value::String(s.clone()),
            ast::Value::Boolean(b, _) => Value::Boolean(*b),
            ast::Value::Enum(e, _) => Value::Enum((*e).to_string()),
            ast::Value::Variable(name, _) => Value::String(format!("${}", name)),
            ast::Value::List(items, _) => Value::List(items.iter().map(Value::from).collect()),
            ast::Value::Object(fields, _) => {
                let mut map = IndexMap::new();
                for f in fields {
                    map.insert(f.name.value.to_string(), Value::from(&f.value));
                }
                Value::Object(map)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Undefined => serializer.serialize_none(),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Enum(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    if matches!(v, Value::Undefined) {
                        continue;
                    }
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_is_dropped_from_object_serialization() {
        let mut fields = IndexMap::new();
        fields.insert("a".to_string(), Value::Int(1));
        fields.insert("b".to_string(), Value::Undefined);
        let json = serde_json::to_string(&Value::Object(fields)).unwrap();
        assert_eq!(json, r#"{"a":1}"#);
    }

    #[test]
    fn converts_ast_object_literal() {
        let src = ast::Value::Object(
            vec![ast::ObjectField {
                name: ast::Name { value: "x", loc: ast::Loc::new(0, 0) },
                value: ast::Value::Int(1, ast::Loc::new(0, 0)),
                loc: ast::Loc::new(0, 0),
            }],
            ast::Loc::new(0, 0),
        );
        let mut value = Value::from(&src);
        assert_eq!(value.as_object_mut().is_none(), false);
    }
}
