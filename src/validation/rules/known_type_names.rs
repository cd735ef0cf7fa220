use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct KnownTypeNames;

pub fn factory() -> KnownTypeNames {
    KnownTypeNames
}

impl<'a, CtxT> Visitor<'a, CtxT> for KnownTypeNames {
    fn enter_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {
        let name = def.var_type.innermost_name();
        if ctx.schema().concrete_type_by_name(name).is_none() {
            ctx.report_error(format!("Unknown type \"{}\".", name), &[def.var_type.loc()]);
        }
    }

    fn enter_fragment_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        if ctx.schema().concrete_type_by_name(def.type_condition.value).is_none() {
            ctx.report_error(format!("Unknown type \"{}\".", def.type_condition.value), &[def.type_condition.loc]);
        }
    }

    fn enter_inline_fragment(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, frag: &'a ast::InlineFragment<'a>) {
        if let Some(tc) = &frag.type_condition {
            if ctx.schema().concrete_type_by_name(tc.value).is_none() {
                ctx.report_error(format!("Unknown type \"{}\".", tc.value), &[tc.loc]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn known_type_names_are_valid() {
        expect_passes_rule(factory, "query A($a: Int) { dog { ... on Dog { name } } }");
    }

    #[test]
    fn unknown_variable_type() {
        let errs = validate(test_schema(), "query A($a: JumbledUpLetters) { dog { name } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("JumbledUpLetters"));
    }

    #[test]
    fn unknown_fragment_type_condition() {
        let errs = validate(test_schema(), "{ dog { ...fragA } } fragment fragA on NotInSchema { name }", factory);
        assert_eq!(errs.len(), 1);
    }
}
