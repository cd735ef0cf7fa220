use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct VariablesAreInputTypes;

pub fn factory() -> VariablesAreInputTypes {
    VariablesAreInputTypes
}

impl<'a, CtxT> Visitor<'a, CtxT> for VariablesAreInputTypes {
    fn enter_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {
        let name = def.var_type.innermost_name();
        if let Some(t) = ctx.schema().concrete_type_by_name(name) {
            if !t.is_input() {
                ctx.report_error(
                    format!("Variable \"${}\" cannot be non-input type \"{}\".", def.name.value, def.var_type),
                    &[def.var_type.loc()],
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
    fn input_types_are_valid() {
        expect_passes_rule(factory, "query A($a: Int, $b: ComplexInput) { dog { name } }");
    }

    #[test]
    fn output_type_as_variable() {
        let errs = validate(test_schema(), "query A($a: Dog) { dog { name } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("$a"));
    }
}
