use crate::ast;
use crate::schema::model::DirectiveLocation;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct KnownDirectives {
    location_stack: Vec<DirectiveLocation>,
}

pub fn factory() -> KnownDirectives {
    KnownDirectives::default()
}

impl<'a, CtxT> Visitor<'a, CtxT> for KnownDirectives {
    fn enter_operation_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        self.location_stack.push(match op.operation_type {
            ast::OperationType::Query => DirectiveLocation::Query,
            ast::OperationType::Mutation => DirectiveLocation::Mutation,
        });
    }
    fn leave_operation_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _op: &'a ast::OperationDefinition<'a>) {
        self.location_stack.pop();
    }

    fn enter_field(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _field: &'a ast::Field<'a>) {
        self.location_stack.push(DirectiveLocation::Field);
    }
    fn leave_field(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _field: &'a ast::Field<'a>) {
        self.location_stack.pop();
    }

    fn enter_fragment_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _def: &'a ast::FragmentDefinition<'a>) {
        self.location_stack.push(DirectiveLocation::FragmentDefinition);
    }
    fn leave_fragment_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _def: &'a ast::FragmentDefinition<'a>) {
        self.location_stack.pop();
    }

    fn enter_fragment_spread(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _spread: &'a ast::FragmentSpread<'a>) {
        self.location_stack.push(DirectiveLocation::FragmentSpread);
    }
    fn leave_fragment_spread(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _spread: &'a ast::FragmentSpread<'a>) {
        self.location_stack.pop();
    }

    fn enter_inline_fragment(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _frag: &'a ast::InlineFragment<'a>) {
        self.location_stack.push(DirectiveLocation::InlineFragment);
    }
    fn leave_inline_fragment(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _frag: &'a ast::InlineFragment<'a>) {
        self.location_stack.pop();
    }

    fn enter_directive(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, directive: &'a ast::Directive<'a>) {
        match ctx.schema().directive_by_name(directive.name.value) {
            None => ctx.report_error(format!("Unknown directive \"{}\".", directive.name.value), &[directive.loc]),
            Some(def) => {
                if let Some(loc) = self.location_stack.last() {
                    if !def.locations.contains(loc) {
                        ctx.report_error(
                            format!("Directive \"{}\" may not be used on {}.", directive.name.value, loc),
                            &[directive.loc],
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn known_location() {
        expect_passes_rule(factory, "{ dog { name @include(if: true) } }");
    }

    #[test]
    fn unknown_directive() {
        let errs = validate(test_schema(), "{ dog { name @unknown } }", factory);
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn misplaced_directive() {
        let errs = validate(test_schema(), "query @include(if: true) { dog { name } }", factory);
        assert_eq!(errs.len(), 1);
    }
}
