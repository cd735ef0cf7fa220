use std::collections::hash_map::{Entry, HashMap};

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct UniqueArgumentNames<'a> {
    names: Vec<HashMap<&'a str, ast::Loc>>,
}

pub fn factory<'a>() -> UniqueArgumentNames<'a> {
    UniqueArgumentNames::default()
}

impl<'a> UniqueArgumentNames<'a> {
    fn check<CtxT>(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {
        let Some(scope) = self.names.last_mut() else { return };
        match scope.entry(argument.name.value) {
            Entry::Occupied(e) => {
                ctx.report_error(
                    format!("There can only be one argument named \"{}\".", argument.name.value),
                    &[*e.get(), argument.name.loc],
                );
            }
            Entry::Vacant(e) => {
                e.insert(argument.name.loc);
            }
        }
    }
}

impl<'a, CtxT> Visitor<'a, CtxT> for UniqueArgumentNames<'a> {
    fn enter_field(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _field: &'a ast::Field<'a>) {
        self.names.push(HashMap::new());
    }
    fn leave_field(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _field: &'a ast::Field<'a>) {
        self.names.pop();
    }

    fn enter_directive(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _directive: &'a ast::Directive<'a>) {
        self.names.push(HashMap::new());
    }
    fn leave_directive(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, _directive: &'a ast::Directive<'a>) {
        self.names.pop();
    }

    fn enter_argument(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {
        self.check(ctx, argument);
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn no_duplicates() {
        expect_passes_rule(factory, "{ complicatedArgs { multipleReqs(req1: 1, req2: 2) } }");
    }

    #[test]
    fn duplicate_arguments() {
        let errs = validate(test_schema(), "{ complicatedArgs { multipleReqs(req1: 1, req1: 2) } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("req1"));
    }
}
