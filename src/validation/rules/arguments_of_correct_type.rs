use indexmap::IndexMap;

use crate::ast;
use crate::coercion::coerce_literal;
use crate::validation::context::ValidatorContext;
use crate::validation::rules::selection_utils::contains_variable;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct ArgumentsOfCorrectType;

pub fn factory() -> ArgumentsOfCorrectType {
    ArgumentsOfCorrectType
}

impl<'a, CtxT> Visitor<'a, CtxT> for ArgumentsOfCorrectType {
    fn enter_argument(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {
        let Some(expected) = ctx.type_info.argument().map(|a| a.arg_type.clone()) else { return };

        // Variable usages are checked at the variable-type level instead;
        // coercing a placeholder here would always fail.
        if contains_variable(&argument.value) {
            return;
        }

        let empty = IndexMap::new();
        if coerce_literal(&argument.value, &expected, ctx.schema(), &empty).is_none() {
            ctx.report_error(
                format!("Argument \"{}\" has invalid value {:?}.", argument.name.value, argument.value),
                &[argument.value.loc()],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn good_int_value() {
        expect_passes_rule(factory, "{ complicatedArgs { intArgField(intArg: 2) } }");
    }

    #[test]
    fn bad_int_value() {
        let errs = validate(test_schema(), r#"{ complicatedArgs { intArgField(intArg: "two") } }"#, factory);
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn variable_usage_is_not_checked_here() {
        expect_passes_rule(factory, "query A($a: Int) { complicatedArgs { intArgField(intArg: $a) } }");
    }
}
