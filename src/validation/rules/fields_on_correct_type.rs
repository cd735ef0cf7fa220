use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct FieldsOnCorrectType;

pub fn factory() -> FieldsOnCorrectType {
    FieldsOnCorrectType
}

impl<'a, CtxT> Visitor<'a, CtxT> for FieldsOnCorrectType {
    fn enter_field(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {
        if field.name.value == "__typename" || field.name.value == "__schema" || field.name.value == "__type" {
            return;
        }

        let Some(parent) = ctx.type_info.parent_type() else { return };
        let Some(parent_concrete) = parent.to_concrete() else { return };

        if parent_concrete.is_composite() && ctx.type_info.field_def().is_none() {
            ctx.report_error(
                format!("Cannot query field \"{}\" on type \"{}\".", field.name.value, parent_concrete.name().unwrap_or("")),
                &[field.loc],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn field_exists_on_type() {
        expect_passes_rule(factory, "{ dog { name barkVolume } }");
    }

    #[test]
    fn field_not_defined_on_type() {
        let errs = validate(test_schema(), "{ dog { meowVolume } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("meowVolume"));
    }

    #[test]
    fn field_not_defined_on_union() {
        let errs = validate(test_schema(), "{ catOrDog { name } }", factory);
        assert_eq!(errs.len(), 1);
    }
}
