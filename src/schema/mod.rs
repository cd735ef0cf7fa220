//! The runtime schema: type metadata, the finalized schema map, name-based
//! type references, built-in scalars, and the builder that assembles them.
//!
//! Unlike a compile-time schema derived from `GraphQLType` impls, every type
//! here is a plain value constructed through [`builder::SchemaBuilder`] and
//! looked up by name at validation/execution time.

pub mod builder;
pub mod introspection;
pub mod meta;
pub mod model;
pub mod scalars;
pub mod type_ref;
