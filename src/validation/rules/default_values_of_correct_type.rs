use indexmap::IndexMap;

use crate::ast;
use crate::coercion::coerce_literal;
use crate::schema::type_ref::TypeRef;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct DefaultValuesOfCorrectType;

pub fn factory() -> DefaultValuesOfCorrectType {
    DefaultValuesOfCorrectType
}

impl<'a, CtxT> Visitor<'a, CtxT> for DefaultValuesOfCorrectType {
    fn enter_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {
        let Some(default) = &def.default_value else { return };
        let expected = TypeRef::from(&def.var_type);
        let empty = IndexMap::new();
        if coerce_literal(default, &expected, ctx.schema(), &empty).is_none() {
            ctx.report_error(format!("Variable \"${}\" has invalid default value.", def.name.value), &[default.loc()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn good_default_value() {
        expect_passes_rule(factory, "query A($a: Int = 1) { dog { name } }");
    }

    #[test]
    fn bad_default_value() {
        let errs = validate(test_schema(), r#"query A($a: Int = "one") { dog { name } }"#, factory);
        assert_eq!(errs.len(), 1);
    }
}
