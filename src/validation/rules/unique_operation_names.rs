use std::collections::hash_map::{Entry, HashMap};

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

pub struct UniqueOperationNames<'a> {
    names: HashMap<&'a str, ast::Loc>,
}

pub fn factory<'a>() -> UniqueOperationNames<'a> {
    UniqueOperationNames { names: HashMap::new() }
}

impl<'a, CtxT> Visitor<'a, CtxT> for UniqueOperationNames<'a> {
    fn enter_operation_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        let Some(name) = &op.name else { return };
        match self.names.entry(name.value) {
            Entry::Occupied(e) => {
                ctx.report_error(format!("There can only be one operation named \"{}\".", name.value), &[*e.get(), name.loc]);
            }
            Entry::Vacant(e) => {
                e.insert(name.loc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn no_operations() {
        expect_passes_rule(factory, "fragment fragA on Dog { name }");
    }

    #[test]
    fn one_anon_operation() {
        expect_passes_rule(factory, "{ dog { name } }");
    }

    #[test]
    fn multiple_operations() {
        expect_passes_rule(factory, "query A { dog { name } } query B { dog { name } }");
    }

    #[test]
    fn duplicate_operation_names() {
        let errs = validate(test_schema(), "query A { dog { name } } query A { dog { name } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("named \"A\""));
    }
}
