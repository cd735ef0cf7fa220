//! Fluent builder for assembling a [`SchemaType`] at run time.
//!
//! This replaces the trait-and-macro driven `Registry` of a statically typed
//! schema: there is no `GraphQLType` trait to implement, no derive macro,
//! and no compile-time dispatch. A schema is just data, assembled once and
//! handed to the executor.

use std::collections::HashMap;

use crate::schema::meta::{EnumMeta, InputObjectMeta, InterfaceMeta, MetaType, ObjectMeta, ScalarMeta, UnionMeta};
use crate::schema::model::{DirectiveType, SchemaType};
use crate::schema::scalars;

pub struct SchemaBuilder<CtxT> {
    types: HashMap<String, MetaType<CtxT>>,
    directives: HashMap<String, DirectiveType>,
}

impl<CtxT> Default for SchemaBuilder<CtxT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<CtxT> SchemaBuilder<CtxT> {
    /// A builder pre-seeded with the five built-in scalars (`Int`, `Float`,
    /// `String`, `Boolean`, `ID`).
    pub fn new() -> SchemaBuilder<CtxT> {
        let mut builder = SchemaBuilder { types: HashMap::new(), directives: HashMap::new() };
        for meta in scalars::builtin_scalars() {
            builder = builder.scalar(meta);
        }
        builder
    }

    pub fn scalar(mut self, meta: ScalarMeta) -> Self {
        self.types.insert(meta.name.clone(), MetaType::Scalar(meta));
        self
    }

    pub fn object(mut self, meta: ObjectMeta<CtxT>) -> Self {
        self.types.insert(meta.name.clone(), MetaType::Object(meta));
        self
    }

    pub fn interface(mut self, meta: InterfaceMeta<CtxT>) -> Self {
        self.types.insert(meta.name.clone(), MetaType::Interface(meta));
        self
    }

    pub fn union(mut self, meta: UnionMeta<CtxT>) -> Self {
        self.types.insert(meta.name.clone(), MetaType::Union(meta));
        self
    }

    pub fn enum_type(mut self, meta: EnumMeta) -> Self {
        self.types.insert(meta.name.clone(), MetaType::Enum(meta));
        self
    }

    pub fn input_object(mut self, meta: InputObjectMeta) -> Self {
        self.types.insert(meta.name.clone(), MetaType::InputObject(meta));
        self
    }

    pub fn directive(mut self, directive: DirectiveType) -> Self {
        self.directives.insert(directive.name.clone(), directive);
        self
    }

    /// Resolve named type references and run invariant checks.
    ///
    /// # Panics
    /// See [`SchemaType::finalize`]: a dangling type name, a root query type
    /// that is not an object, or a leftover placeholder all panic here
    /// rather than surfacing as a request-time [`crate::error::GraphQLError`].
    pub fn finalize(self, query_type: &str, mutation_type: Option<&str>) -> SchemaType<CtxT> {
        SchemaType::finalize(self.types, query_type.to_owned(), mutation_type.map(String::from), self.directives)
    }
}
