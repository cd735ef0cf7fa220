//! The five built-in scalar types (`Int`, `Float`, `String`, `Boolean`,
//! `ID`), pre-registered by every [`crate::schema::builder::SchemaBuilder`].
//!
//! A hand-rolled `graphql_scalar!`-style macro doesn't fit a runtime schema:
//! there's no Rust type to attach the trait impl to, only a name and two
//! closures (literal coercion, input coercion). `coerce_value`/
//! `coerce_literal` in [`crate::coercion`] call through these closures the
//! same way they'd call through a user-registered scalar.

use std::sync::Arc;

use crate::ast;
use crate::schema::meta::ScalarMeta;
use crate::value::Value;

pub fn builtin_scalars() -> Vec<ScalarMeta> {
    vec![int_scalar(), float_scalar(), string_scalar(), boolean_scalar(), id_scalar()]
}

fn int_scalar() -> ScalarMeta {
    ScalarMeta {
        name: "Int".to_owned(),
        description: Some("The `Int` scalar type represents a signed 32-bit numeric value.".to_owned()),
        coerce_literal: Arc::new(|v: &ast::Value| match v {
            ast::Value::Int(n, _) => Some(Value::Int(*n)),
            _ => None,
        }),
        coerce_input: Arc::new(|v: &Value| matches!(v, Value::Int(_))),
    }
}

fn float_scalar() -> ScalarMeta {
    ScalarMeta {
        name: "Float".to_owned(),
        description: Some("The `Float` scalar type represents signed double-precision values.".to_owned()),
        coerce_literal: Arc::new(|v: &ast::Value| match v {
            ast::Value::Float(n, _) => Some(Value::Float(*n)),
            ast::Value::Int(n, _) => Some(Value::Float(*n as f64)),
            _ => None,
        }),
        coerce_input: Arc::new(|v: &Value| matches!(v, Value::Float(_) | Value::Int(_))),
    }
}

fn string_scalar() -> ScalarMeta {
    ScalarMeta {
        name: "String".to_owned(),
        description: Some("The `String` scalar type represents textual data.".to_owned()),
        coerce_literal: Arc::new(|v: &ast::Value| match v {
            ast::Value::String(s, _) => Some(Value::String(s.clone())),
            _ => None,
        }),
        coerce_input: Arc::new(|v: &Value| matches!(v, Value::String(_))),
    }
}

fn boolean_scalar() -> ScalarMeta {
    ScalarMeta {
        name: "Boolean".to_owned(),
        description: Some("The `Boolean` scalar type represents `true` or `false`.".to_owned()),
        coerce_literal: Arc::new(|v: &ast::Value| match v {
            ast::Value::Boolean(b, _) => Some(Value::Boolean(*b)),
            _ => None,
        }),
        coerce_input: Arc::new(|v: &Value| matches!(v, Value::Boolean(_))),
    }
}

fn id_scalar() -> ScalarMeta {
    ScalarMeta {
        name: "ID".to_owned(),
        description: Some("The `ID` scalar type represents a unique identifier.".to_owned()),
        coerce_literal: Arc::new(|v: &ast::Value| match v {
            ast::Value::String(s, _) => Some(Value::String(s.clone())),
            ast::Value::Int(n, _) => Some(Value::String(n.to_string())),
            _ => None,
        }),
        coerce_input: Arc::new(|v: &Value| matches!(v, Value::String(_) | Value::Int(_))),
    }
}
