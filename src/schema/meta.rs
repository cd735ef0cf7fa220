//! Runtime metadata describing a GraphQL schema's types, fields and
//! arguments.
//!
//! Unlike a trait-derived schema, nothing here is produced by a macro or a
//! static `impl`: every [`MetaType`] is a plain value assembled by
//! [`crate::schema::builder`] at run time, and fields optionally carry a
//! boxed [`FieldResolver`] rather than dispatching through a trait method.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::schema::type_ref::TypeRef;
use crate::error::FieldError;
use crate::executor::ResolveInfo;
use crate::types::base::TypeKind;
use crate::value::Value;

pub type FieldResult<T> = Result<T, FieldError>;

/// Resolves the value of one field against a context of type `CtxT`.
///
/// `parent` is the already-completed value of the enclosing object (`Null`
/// at the query/mutation root); most resolvers ignore it and read from
/// `ctx` instead, but the default, un-attached resolver (see
/// `crate::executor::default_resolve`) uses it to do plain property lookup,
/// the same fallback a dynamically typed GraphQL implementation performs
/// when a field has no explicit resolve function.
///
/// The `async-trait` expansion returns a boxed future borrowing from
/// `self`, `parent`, `ctx`, `args` and `info` rather than a `'static` one: a
/// resolver never needs to outlive the request it's serving.
#[async_trait]
pub trait FieldResolver<CtxT>: Send + Sync {
    async fn resolve(
        &self,
        parent: &Value,
        ctx: &CtxT,
        args: &Arguments<'_>,
        info: &ResolveInfo<'_, '_, CtxT>,
    ) -> FieldResult<Value>;
}

/// Adapts a plain synchronous closure into a [`FieldResolver`]. Most
/// resolvers ignore `parent` and `info`, reading from `ctx` and `args`.
pub struct FnResolver<F>(pub F);

#[async_trait]
impl<CtxT, F> FieldResolver<CtxT> for FnResolver<F>
where
    CtxT: Sync,
    F: Fn(&Value, &CtxT, &Arguments<'_>) -> FieldResult<Value> + Send + Sync,
{
    async fn resolve(
        &self,
        parent: &Value,
        ctx: &CtxT,
        args: &Arguments<'_>,
        _info: &ResolveInfo<'_, '_, CtxT>,
    ) -> FieldResult<Value> {
        (self.0)(parent, ctx, args)
    }
}

/// Field arguments as resolved and coerced for a single field invocation.
pub struct Arguments<'a> {
    values: indexmap::IndexMap<String, Value>,
    _marker: std::marker::PhantomData<&'a ()>,
}

impl<'a> Arguments<'a> {
    pub fn new(values: indexmap::IndexMap<String, Value>) -> Arguments<'a> {
        Arguments { values, _marker: std::marker::PhantomData }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !matches!(v, Value::Undefined))
    }
}

pub struct ScalarMeta {
    pub name: String,
    pub description: Option<String>,
    pub coerce_literal: Arc<dyn for<'a> Fn(&'a crate::ast::Value<'a>) -> Option<Value> + Send + Sync>,
    pub coerce_input: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl fmt::Debug for ScalarMeta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ScalarMeta").field("name", &self.name).finish()
    }
}

#[derive(Debug, Clone)]
pub struct ListMeta {
    pub of_type: TypeRef,
}

#[derive(Debug, Clone)]
pub struct NullableMeta {
    pub of_type: TypeRef,
}

pub struct ObjectMeta<CtxT> {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field<CtxT>>,
    pub interface_names: Vec<String>,
}

pub struct EnumMeta {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

pub struct InterfaceMeta<CtxT> {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field<CtxT>>,
    pub resolve_type: Option<Arc<dyn Fn(&Value) -> String + Send + Sync>>,
}

pub struct UnionMeta<CtxT> {
    pub name: String,
    pub description: Option<String>,
    pub of_type_names: Vec<String>,
    pub resolve_type: Option<Arc<dyn Fn(&Value) -> String + Send + Sync>>,
    _marker: std::marker::PhantomData<CtxT>,
}

pub struct InputObjectMeta {
    pub name: String,
    pub description: Option<String>,
    pub input_fields: Vec<Argument>,
}

/// Inserted while a type's fields are still being assembled, so that
/// self-referential and mutually cyclic type graphs can be built without an
/// owning tree.
#[derive(Debug, Clone)]
pub struct PlaceholderMeta {
    pub of_type: TypeRef,
}

pub enum MetaType<CtxT> {
    Scalar(ScalarMeta),
    List(ListMeta),
    Nullable(NullableMeta),
    Object(ObjectMeta<CtxT>),
    Enum(EnumMeta),
    Interface(InterfaceMeta<CtxT>),
    Union(UnionMeta<CtxT>),
    InputObject(InputObjectMeta),
    Placeholder(PlaceholderMeta),
}

#[derive(Clone)]
pub struct Field<CtxT> {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<Argument>,
    pub field_type: TypeRef,
    pub deprecation_reason: Option<String>,
    pub resolver: Option<Arc<dyn FieldResolver<CtxT>>>,
}

#[derive(Debug, Clone)]
pub struct Argument {
    pub name: String,
    pub description: Option<String>,
    pub arg_type: TypeRef,
    pub default_value: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl<CtxT> MetaType<CtxT> {
    pub fn name(&self) -> Option<&str> {
        match self {
            MetaType::Scalar(ScalarMeta { name, .. })
            | MetaType::Object(ObjectMeta { name, .. })
            | MetaType::Enum(EnumMeta { name, .. })
            | MetaType::Interface(InterfaceMeta { name, .. })
            | MetaType::Union(UnionMeta { name, .. })
            | MetaType::InputObject(InputObjectMeta { name, .. }) => Some(name),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            MetaType::Scalar(ScalarMeta { description, .. })
            | MetaType::Object(ObjectMeta { description, .. })
            | MetaType::Enum(EnumMeta { description, .. })
            | MetaType::Interface(InterfaceMeta { description, .. })
            | MetaType::Union(UnionMeta { description, .. })
            | MetaType::InputObject(InputObjectMeta { description, .. }) => description.as_deref(),
            _ => None,
        }
    }

    /// # Panics
    /// Panics for placeholder or nullable meta types: those never reach a
    /// finalized schema.
    pub fn type_kind(&self) -> TypeKind {
        match self {
            MetaType::Scalar(_) => TypeKind::Scalar,
            MetaType::List(_) => TypeKind::List,
            MetaType::Nullable(_) => panic!("Can't take type_kind of nullable meta type"),
            MetaType::Object(_) => TypeKind::Object,
            MetaType::Enum(_) => TypeKind::Enum,
            MetaType::Interface(_) => TypeKind::Interface,
            MetaType::Union(_) => TypeKind::Union,
            MetaType::InputObject(_) => TypeKind::InputObject,
            MetaType::Placeholder(_) => panic!("Can't take type_kind of placeholder meta type"),
        }
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field<CtxT>> {
        match self {
            MetaType::Object(ObjectMeta { fields, .. }) | MetaType::Interface(InterfaceMeta { fields, .. }) => {
                fields.iter().find(|f| f.name == name)
            }
            _ => None,
        }
    }

    pub fn input_field_by_name(&self, name: &str) -> Option<&Argument> {
        match self {
            MetaType::InputObject(InputObjectMeta { input_fields, .. }) => {
                input_fields.iter().find(|f| f.name == name)
            }
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, MetaType::Object(_) | MetaType::Interface(_) | MetaType::Union(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MetaType::Enum(_) | MetaType::Scalar(_))
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, MetaType::Interface(_) | MetaType::Union(_))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, MetaType::Scalar(_) | MetaType::Enum(_) | MetaType::InputObject(_))
    }
}

impl Field<()> {
    /// Construct a field descriptor with no resolver attached yet. `CtxT` is
    /// fixed up by the builder once the owning object's context type is
    /// known; see `schema::builder::FieldBuilder`.
    pub fn dangling(name: &str, field_type: TypeRef) -> Field<()> {
        Field {
            name: name.to_owned(),
            description: None,
            arguments: Vec::new(),
            field_type,
            deprecation_reason: None,
            resolver: None,
        }
    }
}

impl<CtxT> Field<CtxT> {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn resolver(mut self, resolver: impl FieldResolver<CtxT> + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }
}

impl<CtxT> UnionMeta<CtxT> {
    pub fn new(name: &str, of_type_names: Vec<String>) -> UnionMeta<CtxT> {
        UnionMeta {
            name: name.to_owned(),
            description: None,
            of_type_names,
            resolve_type: None,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn resolve_type(mut self, resolve_type: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }
}

impl<CtxT> InterfaceMeta<CtxT> {
    pub fn resolve_type(mut self, resolve_type: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }
}

impl Argument {
    pub fn new(name: &str, arg_type: TypeRef) -> Argument {
        Argument { name: name.to_owned(), description: None, arg_type, default_value: None }
    }

    pub fn description(mut self, description: impl Into<String>) -> Argument {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, default_value: Value) -> Argument {
        self.default_value = Some(default_value);
        self
    }
}

impl EnumValue {
    pub fn new(name: &str) -> EnumValue {
        EnumValue { name: name.to_owned(), description: None, deprecation_reason: None }
    }

    pub fn description(mut self, description: impl Into<String>) -> EnumValue {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> EnumValue {
        self.deprecation_reason = Some(reason.into());
        self
    }
}
