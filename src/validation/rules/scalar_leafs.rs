use crate::ast;
use crate::schema::meta::MetaType;
use crate::schema::model::TypeType;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct ScalarLeafs;

pub fn factory() -> ScalarLeafs {
    ScalarLeafs
}

fn concrete_of<CtxT>(t: &TypeType<CtxT>) -> Option<&MetaType<CtxT>> {
    match t {
        TypeType::Concrete(m) => Some(m),
        TypeType::NonNull(inner) | TypeType::List(inner) => concrete_of(inner),
    }
}

impl<'a, CtxT> Visitor<'a, CtxT> for ScalarLeafs {
    fn enter_field(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {
        let Some(field_def) = ctx.type_info.field_def() else { return };
        let field_type = ctx.schema().make_type(&field_def.field_type);
        let is_leaf = concrete_of(&field_type).map(|m| m.is_leaf()).unwrap_or(false);

        match (is_leaf, &field.selection_set) {
            (true, Some(set)) => ctx.report_error(
                format!("Field \"{}\" must not have a selection since type \"{}\" has no subfields.", field.response_key(), field_def.field_type),
                &[set.loc],
            ),
            (false, None) => ctx.report_error(
                format!("Field \"{}\" of type \"{}\" must have a selection of subfields.", field.response_key(), field_def.field_type),
                &[field.loc],
            ),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn valid_scalar_selection() {
        expect_passes_rule(factory, "{ dog { name } }");
    }

    #[test]
    fn scalar_with_subselection() {
        let errs = validate(test_schema(), "{ dog { name { nope } } }", factory);
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn object_without_subselection() {
        let errs = validate(test_schema(), "{ dog }", factory);
        assert_eq!(errs.len(), 1);
    }
}
