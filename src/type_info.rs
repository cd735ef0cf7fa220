//! Schema-aware traversal state kept alongside a generic AST walk.
//!
//! The validator needs to know, at any point during traversal, "what GraphQL
//! type is the current node in?" — but the AST itself carries no type
//! information. `TypeInfo` tracks that by pushing and popping onto a set of
//! stacks as the visitor enters and leaves nodes, the same inverse-mapping
//! the GraphQL spec describes for validation-time type introspection.

use crate::ast;
use crate::schema::meta::Argument;
use crate::schema::model::{DirectiveType, SchemaType, TypeType};
use crate::schema::type_ref::TypeRef;

pub struct TypeInfo<'sch, CtxT> {
    schema: &'sch SchemaType<CtxT>,
    type_stack: Vec<Option<TypeType<'sch, CtxT>>>,
    parent_type_stack: Vec<Option<TypeType<'sch, CtxT>>>,
    input_type_stack: Vec<Option<TypeRef>>,
    field_def_stack: Vec<Option<&'sch crate::schema::meta::Field<CtxT>>>,
    current_directive: Option<&'sch DirectiveType>,
    argument: Option<&'sch Argument>,
}

impl<'sch, CtxT> TypeInfo<'sch, CtxT> {
    pub fn new(schema: &'sch SchemaType<CtxT>) -> Self {
        TypeInfo {
            schema,
            type_stack: Vec::new(),
            parent_type_stack: Vec::new(),
            input_type_stack: Vec::new(),
            field_def_stack: Vec::new(),
            current_directive: None,
            argument: None,
        }
    }

    pub fn schema(&self) -> &'sch SchemaType<CtxT> {
        self.schema
    }

    pub fn current_type(&self) -> Option<&TypeType<'sch, CtxT>> {
        self.type_stack.last().and_then(|t| t.as_ref())
    }

    pub fn parent_type(&self) -> Option<&TypeType<'sch, CtxT>> {
        self.parent_type_stack.last().and_then(|t| t.as_ref())
    }

    pub fn input_type(&self) -> Option<&TypeRef> {
        self.input_type_stack.last().and_then(|t| t.as_ref())
    }

    pub fn field_def(&self) -> Option<&'sch crate::schema::meta::Field<CtxT>> {
        self.field_def_stack.last().copied().flatten()
    }

    pub fn current_directive(&self) -> Option<&'sch DirectiveType> {
        self.current_directive
    }

    pub fn argument(&self) -> Option<&'sch Argument> {
        self.argument
    }

    pub fn enter_selection_set(&mut self) {}

    pub fn leave_selection_set(&mut self) {}

    pub fn enter_field(&mut self, field: &ast::Field) {
        self.parent_type_stack.push(self.type_stack.last().cloned().flatten());

        let field_def = self
            .parent_type()
            .and_then(|t| t.to_concrete())
            .and_then(|t| t.field_by_name(field.name.value));

        self.field_def_stack.push(field_def);
        self.type_stack.push(field_def.map(|f| self.schema.make_type(&f.field_type)));
    }

    pub fn leave_field(&mut self) {
        self.type_stack.pop();
        self.field_def_stack.pop();
        self.parent_type_stack.pop();
    }

    pub fn enter_directive(&mut self, directive: &ast::Directive) {
        self.current_directive = self.schema.directive_by_name(directive.name.value);
    }

    pub fn leave_directive(&mut self) {
        self.current_directive = None;
    }

    pub fn enter_argument(&mut self, name: &str) {
        let def = self
            .field_def()
            .and_then(|f| f.arguments.iter().find(|a| a.name == name))
            .or_else(|| self.current_directive().and_then(|d| d.arguments.iter().find(|a| a.name == name)));

        self.input_type_stack.push(def.map(|a| a.arg_type.clone()));
        self.argument = def;
    }

    pub fn leave_argument(&mut self) {
        self.input_type_stack.pop();
        self.argument = None;
    }

    pub fn enter_list_value(&mut self) {
        let inner = self.input_type().and_then(|t| match t {
            TypeRef::List(inner) | TypeRef::NonNullList(inner) => Some((**inner).clone()),
            _ => None,
        });
        self.input_type_stack.push(inner);
    }

    pub fn leave_list_value(&mut self) {
        self.input_type_stack.pop();
    }

    pub fn enter_object_field(&mut self, name: &str) {
        let inner = self.input_type().and_then(|t| {
            self.schema.concrete_type_by_name(t.innermost_name()).and_then(|meta| meta.input_field_by_name(name))
        });
        self.input_type_stack.push(inner.map(|a| a.arg_type.clone()));
    }

    pub fn leave_object_field(&mut self) {
        self.input_type_stack.pop();
    }

    pub fn enter_fragment_definition(&mut self, def: &ast::FragmentDefinition) {
        let t = self.schema.type_by_name(def.type_condition.value);
        self.type_stack.push(t);
        self.parent_type_stack.push(None);
    }

    pub fn enter_inline_fragment(&mut self, frag: &ast::InlineFragment) {
        let t = match &frag.type_condition {
            Some(name) => self.schema.type_by_name(name.value),
            None => self.type_stack.last().cloned().flatten(),
        };
        self.type_stack.push(t);
    }

    pub fn leave_inline_fragment(&mut self) {
        self.type_stack.pop();
    }

    pub fn leave_fragment_definition(&mut self) {
        self.type_stack.pop();
        self.parent_type_stack.pop();
    }

    pub fn enter_operation_definition(&mut self, op: &ast::OperationDefinition) {
        let t = match op.operation_type {
            ast::OperationType::Query => Some(self.schema.query_type()),
            ast::OperationType::Mutation => self.schema.mutation_type(),
        };
        self.type_stack.push(t);
        self.parent_type_stack.push(None);
    }

    pub fn leave_operation_definition(&mut self) {
        self.type_stack.pop();
        self.parent_type_stack.pop();
    }
}
