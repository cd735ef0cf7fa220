use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct FragmentsOnCompositeTypes;

pub fn factory() -> FragmentsOnCompositeTypes {
    FragmentsOnCompositeTypes
}

impl<'a, CtxT> Visitor<'a, CtxT> for FragmentsOnCompositeTypes {
    fn enter_fragment_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        if let Some(t) = ctx.schema().concrete_type_by_name(def.type_condition.value) {
            if !t.is_composite() {
                ctx.report_error(
                    format!("Fragment \"{}\" cannot condition on non composite type \"{}\".", def.name.value, def.type_condition.value),
                    &[def.type_condition.loc],
                );
            }
        }
    }

    fn enter_inline_fragment(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, frag: &'a ast::InlineFragment<'a>) {
        if let Some(tc) = &frag.type_condition {
            if let Some(t) = ctx.schema().concrete_type_by_name(tc.value) {
                if !t.is_composite() {
                    ctx.report_error(format!("Fragment cannot condition on non composite type \"{}\".", tc.value), &[tc.loc]);
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
    fn fragment_on_object_type() {
        expect_passes_rule(factory, "{ dog { ...fragA } } fragment fragA on Dog { name }");
    }

    #[test]
    fn fragment_on_scalar_type() {
        let errs = validate(test_schema(), "{ dog { ...fragA } } fragment fragA on Boolean { name }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("Boolean"));
    }
}
