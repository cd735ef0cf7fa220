//! Dynamic equivalent of a macro-generated `__Schema`/`__Type` introspection
//! object graph.
//!
//! A macro-based schema builds these as ordinary `GraphQLType`
//! implementations via `graphql_object!`/`graphql_enum!`, resolved through
//! the same executor machinery as user types. A runtime schema has no Rust
//! type to hang those impls on, so this module builds the introspection
//! response directly as [`Value`] trees instead of registering
//! `__Schema`/`__Type` as schema types with their own resolvers.
//!
//! Simplification recorded in DESIGN.md: the response always contains every
//! standard introspection field, regardless of the client's requested
//! sub-selection — the executor special-cases `__schema`/`__type` and
//! splices the whole tree in rather than re-entering `collect_fields`
//! against a synthetic meta-schema.

use indexmap::IndexMap;

use crate::schema::meta::{Argument, EnumValue, Field, MetaType};
use crate::schema::model::{DirectiveLocation, DirectiveType, SchemaType};
use crate::schema::type_ref::TypeRef;
use crate::value::Value;

fn obj(fields: Vec<(&str, Value)>) -> Value {
    let mut map = IndexMap::new();
    for (k, v) in fields {
        map.insert(k.to_string(), v);
    }
    Value::Object(map)
}

pub fn schema_value<CtxT>(schema: &SchemaType<CtxT>) -> Value {
    obj(vec![
        ("types", Value::List(schema.concrete_type_list().into_iter().map(|t| type_value(schema, t)).collect())),
        ("queryType", type_value(schema, schema.concrete_query_type())),
        ("mutationType", schema.concrete_mutation_type().map(|t| type_value(schema, t)).unwrap_or(Value::Null)),
        ("directives", Value::List(schema.directive_list().into_iter().map(|d| directive_value(schema, d)).collect())),
    ])
}

fn type_kind_name<CtxT>(meta: &MetaType<CtxT>) -> &'static str {
    match meta {
        MetaType::Scalar(_) => "SCALAR",
        MetaType::Object(_) => "OBJECT",
        MetaType::Interface(_) => "INTERFACE",
        MetaType::Union(_) => "UNION",
        MetaType::Enum(_) => "ENUM",
        MetaType::InputObject(_) => "INPUT_OBJECT",
        MetaType::List(_) => "LIST",
        MetaType::Nullable(_) | MetaType::Placeholder(_) => {
            unreachable!("list/nullable/placeholder meta types never appear in a finalized schema's type map")
        }
    }
}

/// Build the `__Type` representation of a *named* schema type (one that
/// lives in the schema's type map, as opposed to a `List`/`NonNull`
/// wrapper — see [`type_ref_value`] for those).
pub fn type_value<CtxT>(schema: &SchemaType<CtxT>, meta: &MetaType<CtxT>) -> Value {
    let fields = match meta {
        MetaType::Object(o) => Some(Value::List(o.fields.iter().map(|f| field_value(schema, f)).collect())),
        MetaType::Interface(i) => Some(Value::List(i.fields.iter().map(|f| field_value(schema, f)).collect())),
        _ => None,
    };

    let interfaces = match meta {
        MetaType::Object(o) => Some(Value::List(
            o.interface_names.iter().filter_map(|n| schema.concrete_type_by_name(n)).map(|t| type_value(schema, t)).collect(),
        )),
        _ => None,
    };

    let possible_types = match meta {
        MetaType::Interface(_) | MetaType::Union(_) => {
            Some(Value::List(schema.possible_types(meta).into_iter().map(|t| type_value(schema, t)).collect()))
        }
        _ => None,
    };

    let enum_values = match meta {
        MetaType::Enum(e) => Some(Value::List(e.values.iter().map(enum_value_value).collect())),
        _ => None,
    };

    let input_fields = match meta {
        MetaType::InputObject(o) => Some(Value::List(o.input_fields.iter().map(|a| input_value_value(schema, a)).collect())),
        _ => None,
    };

    obj(vec![
        ("kind", Value::Enum(type_kind_name(meta).to_string())),
        ("name", meta.name().map(Value::string).unwrap_or(Value::Null)),
        ("description", meta.description().map(Value::string).unwrap_or(Value::Null)),
        ("fields", fields.unwrap_or(Value::Null)),
        ("interfaces", interfaces.unwrap_or(Value::Null)),
        ("possibleTypes", possible_types.unwrap_or(Value::Null)),
        ("enumValues", enum_values.unwrap_or(Value::Null)),
        ("inputFields", input_fields.unwrap_or(Value::Null)),
        ("ofType", Value::Null),
    ])
}

/// Build the `__Type` representation of a (possibly wrapped) [`TypeRef`],
/// recursing through `NonNull`/`List` via `ofType` the way the GraphQL
/// introspection schema represents type wrappers.
pub fn type_ref_value<CtxT>(schema: &SchemaType<CtxT>, type_ref: &TypeRef) -> Value {
    match type_ref {
        TypeRef::Named(name) => schema.concrete_type_by_name(name).map(|m| type_value(schema, m)).unwrap_or(Value::Null),
        TypeRef::NonNullNamed(name) => {
            obj(vec![("kind", Value::Enum("NON_NULL".to_string())), ("ofType", type_ref_value(schema, &TypeRef::Named(name.clone())))])
        }
        TypeRef::List(inner) => obj(vec![("kind", Value::Enum("LIST".to_string())), ("ofType", type_ref_value(schema, inner))]),
        TypeRef::NonNullList(inner) => {
            obj(vec![("kind", Value::Enum("NON_NULL".to_string())), ("ofType", type_ref_value(schema, &TypeRef::List(inner.clone())))])
        }
    }
}

fn field_value<CtxT>(schema: &SchemaType<CtxT>, field: &Field<CtxT>) -> Value {
    obj(vec![
        ("name", Value::string(field.name.clone())),
        ("description", field.description.clone().map(Value::string).unwrap_or(Value::Null)),
        ("args", Value::List(field.arguments.iter().map(|a| input_value_value(schema, a)).collect())),
        ("type", type_ref_value(schema, &field.field_type)),
        ("isDeprecated", Value::Boolean(field.deprecation_reason.is_some())),
        ("deprecationReason", field.deprecation_reason.clone().map(Value::string).unwrap_or(Value::Null)),
    ])
}

fn input_value_value<CtxT>(schema: &SchemaType<CtxT>, arg: &Argument) -> Value {
    obj(vec![
        ("name", Value::string(arg.name.clone())),
        ("description", arg.description.clone().map(Value::string).unwrap_or(Value::Null)),
        ("type", type_ref_value(schema, &arg.arg_type)),
        (
            "defaultValue",
            arg.default_value
                .as_ref()
                .and_then(|v| serde_json::to_string(v).ok())
                .map(Value::String)
                .unwrap_or(Value::Null),
        ),
    ])
}

fn enum_value_value(value: &EnumValue) -> Value {
    obj(vec![
        ("name", Value::string(value.name.clone())),
        ("description", value.description.clone().map(Value::string).unwrap_or(Value::Null)),
        ("isDeprecated", Value::Boolean(value.deprecation_reason.is_some())),
        ("deprecationReason", value.deprecation_reason.clone().map(Value::string).unwrap_or(Value::Null)),
    ])
}

fn directive_value<CtxT>(schema: &SchemaType<CtxT>, directive: &DirectiveType) -> Value {
    obj(vec![
        ("name", Value::string(directive.name.clone())),
        ("description", directive.description.clone().map(Value::string).unwrap_or(Value::Null)),
        ("locations", Value::List(directive.locations.iter().map(location_value).collect())),
        ("args", Value::List(directive.arguments.iter().map(|a| input_value_value(schema, a)).collect())),
    ])
}

fn location_value(location: &DirectiveLocation) -> Value {
    Value::Enum(
        match location {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
        }
        .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::builder::SchemaBuilder;
    use crate::schema::meta::ObjectMeta;

    #[test]
    fn schema_value_lists_builtin_scalars() {
        let schema: SchemaType<()> = SchemaBuilder::new()
            .object(ObjectMeta { name: "Query".to_owned(), description: None, fields: vec![], interface_names: vec![] })
            .finalize("Query", None);

        let value = schema_value(&schema);
        let types = match &value {
            Value::Object(fields) => match fields.get("types") {
                Some(Value::List(items)) => items,
                _ => panic!("expected types list"),
            },
            _ => panic!("expected object"),
        };
        assert!(types.len() >= 6);
    }
}
