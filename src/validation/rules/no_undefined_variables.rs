use std::collections::HashMap;
use std::collections::HashSet;

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::rules::selection_utils::collect_variable_usages;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct NoUndefinedVariables<'a> {
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition<'a>>,
    operations: Vec<&'a ast::OperationDefinition<'a>>,
}

pub fn factory<'a>() -> NoUndefinedVariables<'a> {
    NoUndefinedVariables::default()
}

impl<'a, CtxT> Visitor<'a, CtxT> for NoUndefinedVariables<'a> {
    fn enter_fragment_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        self.fragments.insert(def.name.value, def);
    }

    fn enter_operation_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        self.operations.push(op);
    }

    fn leave_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, _document: &'a ast::Document<'a>) {
        for op in &self.operations {
            let declared: HashSet<&str> = op.variable_definitions.iter().map(|d| d.name.value).collect();

            let mut visited = HashSet::new();
            let mut usages = Vec::new();
            collect_variable_usages(&op.selection_set, &self.fragments, &mut visited, &mut usages);

            for (name, loc) in usages {
                if !declared.contains(name) {
                    let in_op = op.name.as_ref().map(|n| format!(" by operation \"{}\"", n.value)).unwrap_or_default();
                    ctx.report_error(format!("Variable \"${}\" is not defined{}.", name, in_op), &[loc]);
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
    fn all_variables_defined() {
        expect_passes_rule(factory, "query A($a: Int) { complicatedArgs { intArgField(intArg: $a) } }");
    }

    #[test]
    fn undefined_variable() {
        let errs = validate(test_schema(), "query A { complicatedArgs { intArgField(intArg: $a) } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("$a"));
    }

    #[test]
    fn undefined_variable_in_fragment() {
        let errs = validate(
            test_schema(),
            "query A { complicatedArgs { ...fragA } } fragment fragA on ComplicatedArgs { intArgField(intArg: $a) }",
            factory,
        );
        assert_eq!(errs.len(), 1);
    }
}
