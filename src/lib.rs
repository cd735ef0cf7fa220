/*!

# graphql_core

A GraphQL query engine: a lexer and parser that turn query text into an AST,
a visitor-driven validator, literal/variable coercion, and a synchronous and
asynchronous executor, all built over one dynamic, run-time type-system
representation (see [`schema::model::SchemaType`]).

This crate deliberately has no opinion on how a schema is transported
(HTTP, a message queue, in-process), how it's persisted, or how it's
described on the wire (no SDL parser) — it only turns `(schema, query text,
variables)` into `(data, errors)`.

## Building a schema

Schemas are built at run time with [`schema::builder::SchemaBuilder`], not
derived from a Rust type via a macro — this engine's type system is a value,
not a compile-time trait hierarchy:

```
use graphql_core::schema::builder::SchemaBuilder;
use graphql_core::schema::meta::{Field, FnResolver, ObjectMeta};
use graphql_core::schema::type_ref::TypeRef;
use graphql_core::value::Value;

let query_type = ObjectMeta {
    name: "Query".to_owned(),
    description: None,
    fields: vec![
        Field::dangling("hello", TypeRef::non_null_named("String"))
            .resolver(FnResolver(|_, _, _| Ok(Value::String("world".to_owned())))),
    ],
    interface_names: vec![],
};
let schema = SchemaBuilder::<()>::new().object(query_type).finalize("Query", None);
```

## Running a query

```
use graphql_core::config::ExecutionConfig;
use graphql_core::schema::builder::SchemaBuilder;
use graphql_core::schema::meta::{Field, FnResolver, ObjectMeta};
use graphql_core::schema::type_ref::TypeRef;
use graphql_core::source::Source;
use graphql_core::value::Value;
use indexmap::IndexMap;

let query_type = ObjectMeta {
    name: "Query".to_owned(),
    description: None,
    fields: vec![
        Field::dangling("hello", TypeRef::non_null_named("String"))
            .resolver(FnResolver(|_, _, _| Ok(Value::String("world".to_owned())))),
    ],
    interface_names: vec![],
};
let schema = SchemaBuilder::<()>::new().object(query_type).finalize("Query", None);

let source = Source::new("{ hello }");
let document = graphql_core::parser::parse_document(&source).unwrap();
let variables = IndexMap::new();
let config = ExecutionConfig::default();

let (data, errors) =
    graphql_core::execute(&schema, &document, &source, None, &variables, &(), &config).unwrap();
assert!(errors.is_empty());
assert_eq!(data, Value::Object(vec![("hello".to_owned(), Value::String("world".to_owned()))].into_iter().collect()));
```

`execute` takes an already-parsed document rather than parsing query text
itself: a document's AST borrows from the [`Source`] it was parsed from, and
threading that borrow back out through a convenience function that owned the
`Source` locally would need the document to outlive the function call that
created it. Parse once with [`parser::parse_document`], keep the `Source`
and `Document` alongside the schema for the scope of the call, then run
[`execute`]. Before a query runs it's checked against
[`validation::visit_all_rules`]; any reported [`validation::RuleError`]s
abort execution without ever invoking a resolver.
*/

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

pub mod ast;
pub mod coercion;
pub mod config;
pub mod error;
mod lexer;
pub mod log_support;
pub mod parser;
pub mod printer;
pub mod schema;
pub mod source;
pub mod type_info;
pub mod types;
pub mod value;
pub mod validation;

pub mod executor;

use indexmap::IndexMap;

use error::GraphQLError;
use schema::model::SchemaType;
use source::Source;
use validation::ValidatorContext;
use value::Value;

pub use error::FormattedError;
pub use executor::{execute as execute_sync, execute_async, ExecutionContext, ExecutionError, ResolveInfo};
pub use value::Value as GraphQLValue;

/// Validate and execute an already-parsed `document` against `schema`.
///
/// This is the synchronous entry point: it drives the asynchronous executor
/// to completion on the calling thread. See [`executor::execute_async`] for
/// running under an existing async runtime instead.
///
/// `source` is consulted both to turn reported validation errors' byte
/// offsets into line/column pairs and, threaded through to the executor, to
/// locate field-level execution errors; pass the same [`Source`] `document`
/// was parsed from. Returns `Err` if validation fails, if `operation_name`
/// names an operation the document doesn't contain, or if the document is
/// ambiguous about which operation to run. Runtime field errors are not
/// fatal: they're collected alongside `data` in the `Ok` result, per the
/// GraphQL response format.
pub fn execute<'a, CtxT: Sync>(
    schema: &'a SchemaType<CtxT>,
    document: &'a ast::Document<'a>,
    source: &'a Source<'a>,
    operation_name: Option<&str>,
    variables: &'a IndexMap<String, Value>,
    context: &'a CtxT,
    config: &'a config::ExecutionConfig,
) -> Result<(Value, Vec<ExecutionError>), GraphQLError<'a>> {
    let mut ctx = ValidatorContext::new(schema);
    validation::visit_all_rules(&mut ctx, document);

    let errors = ctx.into_errors();
    if !errors.is_empty() {
        for err in &errors {
            log_support::warn_validation_error("validation", err.message());
        }
        return Err(GraphQLError::ValidationError(errors.iter().map(|e| e.to_formatted(source)).collect()));
    }

    executor::execute(schema, document, source, operation_name, variables, context, config)
}
