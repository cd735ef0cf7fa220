use std::collections::hash_map::{Entry, HashMap};

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

pub struct UniqueVariableNames<'a> {
    names: HashMap<&'a str, ast::Loc>,
}

pub fn factory<'a>() -> UniqueVariableNames<'a> {
    UniqueVariableNames { names: HashMap::new() }
}

impl<'a, CtxT> Visitor<'a, CtxT> for UniqueVariableNames<'a> {
    fn enter_operation_definition(&mut self, _: &mut ValidatorContext<'a, CtxT>, _: &'a ast::OperationDefinition<'a>) {
        self.names = HashMap::new();
    }

    fn enter_variable_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::VariableDefinition<'a>) {
        match self.names.entry(def.name.value) {
            Entry::Occupied(e) => {
                ctx.report_error(error_message(def.name.value), &[*e.get(), def.name.loc]);
            }
            Entry::Vacant(e) => {
                e.insert(def.name.loc);
            }
        }
    }
}

fn error_message(var_name: &str) -> String {
    format!("There can only be one variable named {}", var_name)
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn unique_variable_names() {
        expect_passes_rule(
            factory,
            r#"
          query A($x: Int, $y: String) { __typename }
          query B($x: String, $y: Int) { __typename }
        "#,
        );
    }

    #[test]
    fn duplicate_variable_names() {
        let errs = validate(
            test_schema(),
            r#"
          query A($x: Int, $x: Int) { __typename }
        "#,
            factory,
        );
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains('x'));
    }
}
