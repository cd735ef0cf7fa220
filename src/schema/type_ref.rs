//! Name-based type references used throughout schema metadata.
//!
//! A [`TypeRef`] names a type without owning it: the schema's type map is a
//! flat `HashMap<String, MetaType<CtxT>>`, and object/interface/union graphs
//! that would otherwise be cyclic are expressed purely by name. Resolving a
//! `TypeRef` against the map (`SchemaType::make_type`) happens lazily at
//! validation/execution time, or eagerly, once, at `SchemaType::finalize` to
//! catch dangling names before a single query runs.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNullNamed(String),
    NonNullList(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> TypeRef {
        TypeRef::Named(name.into())
    }

    pub fn non_null_named(name: impl Into<String>) -> TypeRef {
        TypeRef::NonNullNamed(name.into())
    }

    pub fn list(of: TypeRef) -> TypeRef {
        TypeRef::List(Box::new(of))
    }

    pub fn non_null_list(of: TypeRef) -> TypeRef {
        TypeRef::NonNullList(Box::new(of))
    }

    pub fn non_null(self) -> TypeRef {
        match self {
            TypeRef::Named(n) => TypeRef::NonNullNamed(n),
            TypeRef::List(inner) => TypeRef::NonNullList(inner),
            already => already,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNullNamed(_) | TypeRef::NonNullList(_))
    }

    pub fn innermost_name(&self) -> &str {
        match self {
            TypeRef::Named(n) | TypeRef::NonNullNamed(n) => n,
            TypeRef::List(inner) | TypeRef::NonNullList(inner) => inner.innermost_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeRef::Named(n) => write!(f, "{}", n),
            TypeRef::NonNullNamed(n) => write!(f, "{}!", n),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNullList(inner) => write!(f, "[{}]!", inner),
        }
    }
}

impl<'a> From<&crate::ast::Type<'a>> for TypeRef {
    fn from(t: &crate::ast::Type<'a>) -> TypeRef {
        match t {
            crate::ast::Type::Named(n) => TypeRef::Named(n.value.to_string()),
            crate::ast::Type::NonNullNamed(n, _) => TypeRef::NonNullNamed(n.value.to_string()),
            crate::ast::Type::List(inner, _) => TypeRef::List(Box::new(TypeRef::from(&**inner))),
            crate::ast::Type::NonNullList(inner, _) => TypeRef::NonNullList(Box::new(TypeRef::from(&**inner))),
        }
    }
}
