use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct ProvidedNonNullArguments;

pub fn factory() -> ProvidedNonNullArguments {
    ProvidedNonNullArguments
}

impl<'a, CtxT> Visitor<'a, CtxT> for ProvidedNonNullArguments {
    fn enter_field(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {
        let Some(field_def) = ctx.type_info.field_def() else { return };
        for arg_def in &field_def.arguments {
            if arg_def.arg_type.is_non_null()
                && arg_def.default_value.is_none()
                && !field.arguments.iter().any(|a| a.name.value == arg_def.name)
            {
                ctx.report_error(
                    format!(
                        "Field \"{}\" argument \"{}\" of type \"{}\" is required but not provided.",
                        field.response_key(),
                        arg_def.name,
                        arg_def.arg_type
                    ),
                    &[field.loc],
                );
            }
        }
    }

    fn enter_directive(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, directive: &'a ast::Directive<'a>) {
        let Some(def) = ctx.schema().directive_by_name(directive.name.value) else { return };
        for arg_def in &def.arguments {
            if arg_def.arg_type.is_non_null()
                && arg_def.default_value.is_none()
                && !directive.arguments.iter().any(|a| a.name.value == arg_def.name)
            {
                ctx.report_error(
                    format!(
                        "Directive \"@{}\" argument \"{}\" of type \"{}\" is required but not provided.",
                        directive.name.value, arg_def.name, arg_def.arg_type
                    ),
                    &[directive.loc],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn all_required_args_provided() {
        expect_passes_rule(factory, "{ complicatedArgs { nonNullIntArgField(nonNullIntArg: 1) } }");
    }

    #[test]
    fn missing_required_arg() {
        let errs = validate(test_schema(), "{ complicatedArgs { nonNullIntArgField } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("nonNullIntArg"));
    }
}
