//! The visitor interface every validation rule implements.
//!
//! Every hook has a no-op default, so a rule only overrides the handful of
//! node kinds it actually cares about. [`crate::validation::visitor::visit`]
//! drives a single traversal calling these in document order, paired with
//! [`crate::type_info::TypeInfo`] enter/leave calls so `ctx.type_info`
//! always reflects the node currently being visited.

use crate::ast;
use crate::validation::context::ValidatorContext;

#[allow(unused_variables)]
pub trait Visitor<'a, CtxT> {
    fn enter_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, document: &'a ast::Document<'a>) {}
    fn leave_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, document: &'a ast::Document<'a>) {}

    fn enter_operation_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {}
    fn leave_operation_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {}

    fn enter_fragment_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {}
    fn leave_fragment_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {}

    fn enter_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {}
    fn leave_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {}

    fn enter_selection_set(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, set: &'a ast::SelectionSet<'a>) {}
    fn leave_selection_set(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, set: &'a ast::SelectionSet<'a>) {}

    fn enter_field(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {}
    fn leave_field(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {}

    fn enter_fragment_spread(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, spread: &'a ast::FragmentSpread<'a>) {}
    fn leave_fragment_spread(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, spread: &'a ast::FragmentSpread<'a>) {}

    fn enter_inline_fragment(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, frag: &'a ast::InlineFragment<'a>) {}
    fn leave_inline_fragment(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, frag: &'a ast::InlineFragment<'a>) {}

    fn enter_directive(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, directive: &'a ast::Directive<'a>) {}
    fn leave_directive(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, directive: &'a ast::Directive<'a>) {}

    fn enter_argument(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {}
    fn leave_argument(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {}

    fn enter_value(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, value: &'a ast::Value<'a>) {}
    fn leave_value(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, value: &'a ast::Value<'a>) {}
}
