//! Turning AST-level literals and raw JSON variables into runtime [`Value`]s
//! against an expected schema type.

use indexmap::IndexMap;

use crate::ast;
use crate::error::FormattedError;
use crate::schema::meta::{Argument, MetaType};
use crate::schema::model::SchemaType;
use crate::schema::type_ref::TypeRef;
use crate::value::Value;

/// Coerce a literal value written directly in a query document (an argument
/// value or a variable default) against its expected type.
///
/// `variables` supplies already-coerced values for any `$var` references
/// found inside the literal (e.g. nested inside a list or input object);
/// coercing a *variable definition's default value* must reject `$var`
/// references outright, which callers enforce by passing an empty map and
/// checking `ast::Value::is_variable` first — see `get_variable_values`.
pub fn coerce_literal<CtxT>(
    value: &ast::Value,
    expected: &TypeRef,
    schema: &SchemaType<CtxT>,
    variables: &IndexMap<String, Value>,
) -> Option<Value> {
    if let ast::Value::Variable(name, _) = value {
        return variables.get(*name).cloned();
    }

    match expected {
        TypeRef::NonNullNamed(_) | TypeRef::NonNullList(_) => {
            if matches!(value, ast::Value::Null(_)) {
                None
            } else {
                coerce_literal(value, &strip_non_null(expected), schema, variables)
            }
        }
        TypeRef::List(inner) => match value {
            ast::Value::Null(_) => Some(Value::Null),
            ast::Value::List(items, _) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(coerce_literal(item, inner, schema, variables)?);
                }
                Some(Value::List(out))
            }
            other => coerce_literal(other, inner, schema, variables).map(|v| Value::List(vec![v])),
        },
        TypeRef::Named(name) => {
            if matches!(value, ast::Value::Null(_)) {
                return Some(Value::Null);
            }
            match schema.concrete_type_by_name(name)? {
                MetaType::Scalar(s) => (s.coerce_literal)(value),
                MetaType::Enum(e) => match value {
                    ast::Value::Enum(v, _) if e.values.iter().any(|ev| ev.name == *v) => {
                        Some(Value::Enum((*v).to_string()))
                    }
                    _ => None,
                },
                MetaType::InputObject(obj) => match value {
                    ast::Value::Object(fields, _) => {
                        let mut out = IndexMap::new();
                        for input_field in &obj.input_fields {
                            let provided = fields.iter().find(|f| f.name.value == input_field.name);
                            let coerced = match provided {
                                Some(f) => coerce_literal(&f.value, &input_field.arg_type, schema, variables)?,
                                None => input_field.default_value.clone().unwrap_or(Value::Undefined),
                            };
                            if input_field.arg_type.is_non_null() && matches!(coerced, Value::Null | Value::Undefined)
                            {
                                return None;
                            }
                            out.insert(input_field.name.clone(), coerced);
                        }
                        Some(Value::Object(out))
                    }
                    _ => None,
                },
                _ => None,
            }
        }
    }
}

/// Coerce an already-decoded runtime value (e.g. a variable supplied as raw
/// JSON) against its expected type.
pub fn coerce_value<CtxT>(value: &Value, expected: &TypeRef, schema: &SchemaType<CtxT>) -> Option<Value> {
    match expected {
        TypeRef::NonNullNamed(_) | TypeRef::NonNullList(_) => {
            if matches!(value, Value::Null) {
                None
            } else {
                coerce_value(value, &strip_non_null(expected), schema)
            }
        }
        TypeRef::List(inner) => match value {
            Value::Null => Some(Value::Null),
            Value::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(coerce_value(item, inner, schema)?);
                }
                Some(Value::List(out))
            }
            other => coerce_value(other, inner, schema).map(|v| Value::List(vec![v])),
        },
        TypeRef::Named(name) => {
            if matches!(value, Value::Null) {
                return Some(Value::Null);
            }
            match schema.concrete_type_by_name(name)? {
                MetaType::Scalar(s) => {
                    if (s.coerce_input)(value) {
                        Some(value.clone())
                    } else if s.name == "Float" {
                        value.as_int().map(|n| Value::Float(n as f64))
                    } else {
                        None
                    }
                }
                MetaType::Enum(e) => match value {
                    Value::Enum(v) | Value::String(v) if e.values.iter().any(|ev| &ev.name == v) => {
                        Some(Value::Enum(v.clone()))
                    }
                    _ => None,
                },
                MetaType::InputObject(obj) => match value {
                    Value::Object(fields) => {
                        let mut out = IndexMap::new();
                        for input_field in &obj.input_fields {
                            let coerced = match fields.get(&input_field.name) {
                                Some(v) => coerce_value(v, &input_field.arg_type, schema)?,
                                None => input_field.default_value.clone().unwrap_or(Value::Undefined),
                            };
                            if input_field.arg_type.is_non_null() && matches!(coerced, Value::Null | Value::Undefined)
                            {
                                return None;
                            }
                            out.insert(input_field.name.clone(), coerced);
                        }
                        Some(Value::Object(out))
                    }
                    _ => None,
                },
                _ => None,
            }
        }
    }
}

fn strip_non_null(t: &TypeRef) -> TypeRef {
    match t {
        TypeRef::NonNullNamed(n) => TypeRef::Named(n.clone()),
        TypeRef::NonNullList(inner) => TypeRef::List(inner.clone()),
        other => other.clone(),
    }
}

/// Resolve the final set of variable values for a request: decode each
/// variable definition's provided raw JSON (or fall back to its default, or
/// `Undefined` if neither was given) and coerce it against its declared
/// type. Non-null variables with no value produce a [`FormattedError`].
pub fn get_variable_values<CtxT>(
    schema: &SchemaType<CtxT>,
    definitions: &[ast::VariableDefinition],
    raw: &serde_json::Map<String, serde_json::Value>,
) -> Result<IndexMap<String, Value>, Vec<FormattedError>> {
    let mut out = IndexMap::new();
    let mut errors = Vec::new();

    for def in definitions {
        let expected = TypeRef::from(&def.var_type);
        let raw_value = raw.get(def.name.value);

        let coerced = match raw_value {
            Some(json) => match coerce_value(&json_to_value(json), &expected, schema) {
                Some(v) => v,
                None => {
                    errors.push(FormattedError::new(format!(
                        "Variable \"${}\" got invalid value",
                        def.name.value
                    )));
                    continue;
                }
            },
            None => match &def.default_value {
                Some(default) => match coerce_literal(default, &expected, schema, &out) {
                    Some(v) => v,
                    None => Value::Undefined,
                },
                None => Value::Undefined,
            },
        };

        if expected.is_non_null() && matches!(coerced, Value::Null | Value::Undefined) {
            errors.push(FormattedError::new(format!(
                "Variable \"${}\" of required type \"{}\" was not provided.",
                def.name.value, expected
            )));
            continue;
        }

        out.insert(def.name.value.to_string(), coerced);
    }

    if errors.is_empty() {
        Ok(out)
    } else {
        Err(errors)
    }
}

fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::List(items.iter().map(json_to_value).collect()),
        serde_json::Value::Object(fields) => {
            let mut out = IndexMap::new();
            for (k, v) in fields {
                out.insert(k.clone(), json_to_value(v));
            }
            Value::Object(out)
        }
    }
}

/// Resolve a field (or directive) invocation's argument values: each
/// declared argument is looked up in the AST, its literal coerced against
/// its declared type (substituting variables along the way), and defaulted
/// if absent.
pub fn get_argument_values<CtxT>(
    schema: &SchemaType<CtxT>,
    arg_defs: &[Argument],
    ast_args: &[ast::Argument],
    variables: &IndexMap<String, Value>,
) -> IndexMap<String, Value> {
    let mut out = IndexMap::new();
    for def in arg_defs {
        let provided = ast_args.iter().find(|a| a.name.value == def.name);
        let coerced = match provided {
            Some(a) => coerce_literal(&a.value, &def.arg_type, schema, variables).unwrap_or(Value::Undefined),
            None => def.default_value.clone().unwrap_or(Value::Undefined),
        };
        out.insert(def.name.clone(), coerced);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::builder::SchemaBuilder;

    fn empty_schema() -> SchemaType<()> {
        SchemaBuilder::<()>::new()
            .object(crate::schema::meta::ObjectMeta {
                name: "Query".to_owned(),
                description: None,
                fields: vec![],
                interface_names: vec![],
            })
            .finalize("Query", None)
    }

    #[test]
    fn coerces_int_literal() {
        let schema = empty_schema();
        let lit = ast::Value::Int(42, ast::Loc::new(0, 0));
        let vars = IndexMap::new();
        let coerced = coerce_literal(&lit, &TypeRef::non_null_named("Int"), &schema, &vars);
        assert_eq!(coerced, Some(Value::Int(42)));
    }

    #[test]
    fn rejects_null_for_non_null() {
        let schema = empty_schema();
        let lit = ast::Value::Null(ast::Loc::new(0, 0));
        let vars = IndexMap::new();
        assert_eq!(coerce_literal(&lit, &TypeRef::non_null_named("Int"), &schema, &vars), None);
    }

    #[test]
    fn wraps_single_value_into_list() {
        let schema = empty_schema();
        let lit = ast::Value::Int(1, ast::Loc::new(0, 0));
        let vars = IndexMap::new();
        let coerced = coerce_literal(&lit, &TypeRef::list(TypeRef::named("Int")), &schema, &vars);
        assert_eq!(coerced, Some(Value::List(vec![Value::Int(1)])));
    }
}
