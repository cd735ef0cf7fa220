use std::collections::HashMap;
use std::collections::HashSet;

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::rules::selection_utils::collect_variable_usages;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct NoUnusedVariables<'a> {
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition<'a>>,
    operations: Vec<&'a ast::OperationDefinition<'a>>,
}

pub fn factory<'a>() -> NoUnusedVariables<'a> {
    NoUnusedVariables::default()
}

impl<'a, CtxT> Visitor<'a, CtxT> for NoUnusedVariables<'a> {
    fn enter_fragment_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        self.fragments.insert(def.name.value, def);
    }

    fn enter_operation_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        self.operations.push(op);
    }

    fn leave_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, _document: &'a ast::Document<'a>) {
        for op in &self.operations {
            let mut visited = HashSet::new();
            let mut usages = Vec::new();
            collect_variable_usages(&op.selection_set, &self.fragments, &mut visited, &mut usages);
            let used: HashSet<&str> = usages.iter().map(|(name, _)| *name).collect();

            for def in &op.variable_definitions {
                if !used.contains(def.name.value) {
                    let in_op = op.name.as_ref().map(|n| format!(" in operation \"{}\"", n.value)).unwrap_or_default();
                    ctx.report_error(format!("Variable \"${}\" is never used{}.", def.name.value, in_op), &[def.loc]);
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
    fn all_variables_used() {
        expect_passes_rule(factory, "query A($a: Int) { complicatedArgs { intArgField(intArg: $a) } }");
    }

    #[test]
    fn unused_variable() {
        let errs = validate(test_schema(), "query A($a: Int) { dog { name } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("$a"));
    }
}
