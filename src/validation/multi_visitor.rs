//! Runs every validation rule over the document in a single traversal
//! instead of one pass per rule.

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

pub struct MultiVisitor<'a, CtxT> {
    visitors: Vec<Box<dyn Visitor<'a, CtxT> + 'a>>,
}

impl<'a, CtxT> MultiVisitor<'a, CtxT> {
    pub fn new(visitors: Vec<Box<dyn Visitor<'a, CtxT> + 'a>>) -> MultiVisitor<'a, CtxT> {
        MultiVisitor { visitors }
    }

    fn visit_all<F: FnMut(&mut Box<dyn Visitor<'a, CtxT> + 'a>)>(&mut self, mut f: F) {
        for v in &mut self.visitors {
            f(v);
        }
    }
}

impl<'a, CtxT> Visitor<'a, CtxT> for MultiVisitor<'a, CtxT> {
    fn enter_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, document: &'a ast::Document<'a>) {
        self.visit_all(|v| v.enter_document(ctx, document));
    }
    fn leave_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, document: &'a ast::Document<'a>) {
        self.visit_all(|v| v.leave_document(ctx, document));
    }

    fn enter_operation_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        self.visit_all(|v| v.enter_operation_definition(ctx, op));
    }
    fn leave_operation_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        self.visit_all(|v| v.leave_operation_definition(ctx, op));
    }

    fn enter_fragment_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        self.visit_all(|v| v.enter_fragment_definition(ctx, def));
    }
    fn leave_fragment_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        self.visit_all(|v| v.leave_fragment_definition(ctx, def));
    }

    fn enter_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {
        self.visit_all(|v| v.enter_variable_definition(ctx, def));
    }
    fn leave_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {
        self.visit_all(|v| v.leave_variable_definition(ctx, def));
    }

    fn enter_selection_set(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, set: &'a ast::SelectionSet<'a>) {
        self.visit_all(|v| v.enter_selection_set(ctx, set));
    }
    fn leave_selection_set(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, set: &'a ast::SelectionSet<'a>) {
        self.visit_all(|v| v.leave_selection_set(ctx, set));
    }

    fn enter_field(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {
        self.visit_all(|v| v.enter_field(ctx, field));
    }
    fn leave_field(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {
        self.visit_all(|v| v.leave_field(ctx, field));
    }

    fn enter_fragment_spread(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, spread: &'a ast::FragmentSpread<'a>) {
        self.visit_all(|v| v.enter_fragment_spread(ctx, spread));
    }
    fn leave_fragment_spread(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, spread: &'a ast::FragmentSpread<'a>) {
        self.visit_all(|v| v.leave_fragment_spread(ctx, spread));
    }

    fn enter_inline_fragment(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, frag: &'a ast::InlineFragment<'a>) {
        self.visit_all(|v| v.enter_inline_fragment(ctx, frag));
    }
    fn leave_inline_fragment(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, frag: &'a ast::InlineFragment<'a>) {
        self.visit_all(|v| v.leave_inline_fragment(ctx, frag));
    }

    fn enter_directive(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, directive: &'a ast::Directive<'a>) {
        self.visit_all(|v| v.enter_directive(ctx, directive));
    }
    fn leave_directive(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, directive: &'a ast::Directive<'a>) {
        self.visit_all(|v| v.leave_directive(ctx, directive));
    }

    fn enter_argument(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {
        self.visit_all(|v| v.enter_argument(ctx, argument));
    }
    fn leave_argument(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {
        self.visit_all(|v| v.leave_argument(ctx, argument));
    }

    fn enter_value(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, value: &'a ast::Value<'a>) {
        self.visit_all(|v| v.enter_value(ctx, value));
    }
    fn leave_value(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, value: &'a ast::Value<'a>) {
        self.visit_all(|v| v.leave_value(ctx, value));
    }
}
