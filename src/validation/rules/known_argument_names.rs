use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct KnownArgumentNames;

pub fn factory() -> KnownArgumentNames {
    KnownArgumentNames
}

impl<'a, CtxT> Visitor<'a, CtxT> for KnownArgumentNames {
    fn enter_argument(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, argument: &'a ast::Argument<'a>) {
        if ctx.type_info.argument().is_some() {
            return;
        }

        if let Some(directive) = ctx.type_info.current_directive() {
            ctx.report_error(
                format!("Unknown argument \"{}\" on directive \"@{}\".", argument.name.value, directive.name),
                &[argument.loc],
            );
        } else if let Some(field_def) = ctx.type_info.field_def() {
            ctx.report_error(
                format!("Unknown argument \"{}\" on field \"{}\".", argument.name.value, field_def.name),
                &[argument.loc],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn known_arg_on_field() {
        expect_passes_rule(factory, "{ dog { doesKnowCommand(dogCommand: SIT) } }");
    }

    #[test]
    fn unknown_arg_on_field() {
        let errs = validate(test_schema(), "{ dog { doesKnowCommand(unknown: true) } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("unknown"));
    }
}
