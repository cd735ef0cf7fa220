//! The schema itself: a finalized map of named types plus the two (or three)
//! root operation types and the directive set.

use std::collections::HashMap;
use std::fmt;

use crate::schema::meta::{Argument, InterfaceMeta, MetaType, ObjectMeta, UnionMeta};
use crate::schema::type_ref::TypeRef;

/// A finalized, immutable schema: the result of
/// [`crate::schema::builder::SchemaBuilder::finalize`].
///
/// Construction is a one-shot reduction over the builder's type map; there
/// is no lazy-with-lock insertion once a `SchemaType` exists; every type
/// name referenced anywhere in the schema is guaranteed to resolve.
pub struct SchemaType<CtxT> {
    types: HashMap<String, MetaType<CtxT>>,
    query_type_name: String,
    mutation_type_name: Option<String>,
    directives: HashMap<String, DirectiveType>,
}

pub enum TypeType<'a, CtxT> {
    Concrete(&'a MetaType<CtxT>),
    NonNull(Box<TypeType<'a, CtxT>>),
    List(Box<TypeType<'a, CtxT>>),
}

impl<'a, CtxT> Clone for TypeType<'a, CtxT> {
    fn clone(&self) -> Self {
        match self {
            TypeType::Concrete(t) => TypeType::Concrete(t),
            TypeType::NonNull(t) => TypeType::NonNull(t.clone()),
            TypeType::List(t) => TypeType::List(t.clone()),
        }
    }
}

pub struct DirectiveType {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    pub arguments: Vec<Argument>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
}

impl<CtxT> SchemaType<CtxT> {
    /// Assemble a `SchemaType` from a raw type map. Panics if the root query
    /// type is missing, if the query type isn't an object, or if any
    /// placeholder type was never replaced — each of these indicates a bug
    /// in how the schema was built, not in a request.
    pub(crate) fn finalize(
        mut types: HashMap<String, MetaType<CtxT>>,
        query_type_name: String,
        mutation_type_name: Option<String>,
        mut directives: HashMap<String, DirectiveType>,
    ) -> SchemaType<CtxT> {
        if !directives.contains_key("skip") {
            directives.insert("skip".to_owned(), DirectiveType::new_skip());
        }
        if !directives.contains_key("include") {
            directives.insert("include".to_owned(), DirectiveType::new_include());
        }

        if !types.contains_key(&query_type_name) {
            panic!("Root query type {:?} not found in schema", query_type_name);
        }
        if let Some(ref name) = mutation_type_name {
            if !types.contains_key(name) {
                panic!("Root mutation type {:?} not found in schema", name);
            }
        }

        for (name, meta_type) in types.iter_mut() {
            if let MetaType::Placeholder(ref p) = meta_type {
                panic!("Type {:?} is still a placeholder (referenced as {:?} but never built)", name, p.of_type);
            }
        }

        SchemaType { types, query_type_name, mutation_type_name, directives }
    }

    pub fn type_by_name(&self, name: &str) -> Option<TypeType<CtxT>> {
        self.types.get(name).map(TypeType::Concrete)
    }

    pub fn concrete_type_by_name(&self, name: &str) -> Option<&MetaType<CtxT>> {
        self.types.get(name)
    }

    pub fn query_type(&self) -> TypeType<CtxT> {
        TypeType::Concrete(self.types.get(&self.query_type_name).expect("Query type does not exist in schema"))
    }

    pub fn concrete_query_type(&self) -> &MetaType<CtxT> {
        self.types.get(&self.query_type_name).expect("Query type does not exist in schema")
    }

    pub fn mutation_type(&self) -> Option<TypeType<CtxT>> {
        self.mutation_type_name.as_ref().map(|name| {
            self.type_by_name(name).expect("Mutation type does not exist in schema")
        })
    }

    pub fn concrete_mutation_type(&self) -> Option<&MetaType<CtxT>> {
        self.mutation_type_name.as_ref().map(|name| {
            self.concrete_type_by_name(name).expect("Mutation type does not exist in schema")
        })
    }

    pub fn type_list(&self) -> Vec<TypeType<CtxT>> {
        self.types.values().map(TypeType::Concrete).collect()
    }

    pub fn concrete_type_list(&self) -> Vec<&MetaType<CtxT>> {
        self.types.values().collect()
    }

    /// Resolve a name-based [`TypeRef`] against the finalized type map.
    ///
    /// # Panics
    /// Panics if the named type does not exist: validated queries can only
    /// reference types that exist, so reaching this during execution of an
    /// already-validated query indicates a validator/executor mismatch.
    pub fn make_type(&self, t: &TypeRef) -> TypeType<CtxT> {
        match t {
            TypeRef::NonNullNamed(n) => {
                TypeType::NonNull(Box::new(self.type_by_name(n).expect("Type not found in schema")))
            }
            TypeRef::NonNullList(inner) => TypeType::NonNull(Box::new(TypeType::List(Box::new(self.make_type(inner))))),
            TypeRef::Named(n) => self.type_by_name(n).expect("Type not found in schema"),
            TypeRef::List(inner) => TypeType::List(Box::new(self.make_type(inner))),
        }
    }

    pub fn directive_list(&self) -> Vec<&DirectiveType> {
        self.directives.values().collect()
    }

    pub fn directive_by_name(&self, name: &str) -> Option<&DirectiveType> {
        self.directives.get(name)
    }

    pub fn type_overlap(&self, t1: &MetaType<CtxT>, t2: &MetaType<CtxT>) -> bool {
        if std::ptr::eq(t1, t2) {
            return true;
        }

        match (t1.is_abstract(), t2.is_abstract()) {
            (true, true) => self.possible_types(t1).iter().any(|t| self.is_possible_type(t2, t)),
            (true, false) => self.is_possible_type(t1, t2),
            (false, true) => self.is_possible_type(t2, t1),
            (false, false) => false,
        }
    }

    pub fn possible_types(&self, t: &MetaType<CtxT>) -> Vec<&MetaType<CtxT>> {
        match t {
            MetaType::Union(UnionMeta { of_type_names, .. }) => {
                of_type_names.iter().flat_map(|t| self.concrete_type_by_name(t)).collect()
            }
            MetaType::Interface(InterfaceMeta { name, .. }) => self
                .concrete_type_list()
                .into_iter()
                .filter(|t| match t {
                    MetaType::Object(ObjectMeta { interface_names, .. }) => {
                        interface_names.iter().any(|iname| iname == name)
                    }
                    _ => false,
                })
                .collect(),
            _ => panic!("Can't retrieve possible types from non-abstract meta type"),
        }
    }

    pub fn is_possible_type(&self, abstract_type: &MetaType<CtxT>, possible_type: &MetaType<CtxT>) -> bool {
        self.possible_types(abstract_type).into_iter().any(|t| std::ptr::eq(t, possible_type))
    }

    pub fn is_subtype(&self, sub_type: &TypeRef, super_type: &TypeRef) -> bool {
        if super_type == sub_type {
            return true;
        }

        match (super_type, sub_type) {
            (TypeRef::NonNullNamed(sup), TypeRef::NonNullNamed(sub))
            | (TypeRef::Named(sup), TypeRef::Named(sub))
            | (TypeRef::Named(sup), TypeRef::NonNullNamed(sub)) => self.is_named_subtype(sub, sup),
            (TypeRef::NonNullList(sup), TypeRef::NonNullList(sub))
            | (TypeRef::List(sup), TypeRef::List(sub))
            | (TypeRef::List(sup), TypeRef::NonNullList(sub)) => self.is_subtype(sub, sup),
            _ => false,
        }
    }

    pub fn is_named_subtype(&self, sub_type_name: &str, super_type_name: &str) -> bool {
        if sub_type_name == super_type_name {
            true
        } else if let (Some(sub_type), Some(super_type)) =
            (self.concrete_type_by_name(sub_type_name), self.concrete_type_by_name(super_type_name))
        {
            super_type.is_abstract() && self.is_possible_type(super_type, sub_type)
        } else {
            false
        }
    }
}

impl<'a, CtxT> TypeType<'a, CtxT> {
    pub fn to_concrete(&self) -> Option<&'a MetaType<CtxT>> {
        match self {
            TypeType::Concrete(t) => Some(t),
            _ => None,
        }
    }
}

impl DirectiveType {
    pub fn new(name: &str, locations: &[DirectiveLocation], arguments: &[Argument]) -> DirectiveType {
        DirectiveType {
            name: name.to_owned(),
            description: None,
            locations: locations.to_vec(),
            arguments: arguments.to_vec(),
        }
    }

    fn new_skip() -> DirectiveType {
        Self::new(
            "skip",
            &[DirectiveLocation::Field, DirectiveLocation::FragmentSpread, DirectiveLocation::InlineFragment],
            &[Argument::new("if", TypeRef::non_null_named("Boolean"))],
        )
    }

    fn new_include() -> DirectiveType {
        Self::new(
            "include",
            &[DirectiveLocation::Field, DirectiveLocation::FragmentSpread, DirectiveLocation::InlineFragment],
            &[Argument::new("if", TypeRef::non_null_named("Boolean"))],
        )
    }

    pub fn description(mut self, description: &str) -> DirectiveType {
        self.description = Some(description.to_owned());
        self
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DirectiveLocation::Query => "query",
            DirectiveLocation::Mutation => "mutation",
            DirectiveLocation::Field => "field",
            DirectiveLocation::FragmentDefinition => "fragment definition",
            DirectiveLocation::FragmentSpread => "fragment spread",
            DirectiveLocation::InlineFragment => "inline fragment",
        })
    }
}

impl<'a, CtxT> fmt::Display for TypeType<'a, CtxT> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeType::Concrete(t) => f.write_str(t.name().unwrap()),
            TypeType::List(i) => write!(f, "[{}]", i),
            TypeType::NonNull(i) => write!(f, "{}!", i),
        }
    }
}
