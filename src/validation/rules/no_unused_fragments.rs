use std::collections::HashMap;
use std::collections::HashSet;

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::rules::selection_utils::collect_fragment_spreads;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct NoUnusedFragments<'a> {
    operations: Vec<&'a ast::OperationDefinition<'a>>,
    fragments: Vec<&'a ast::FragmentDefinition<'a>>,
}

pub fn factory<'a>() -> NoUnusedFragments<'a> {
    NoUnusedFragments::default()
}

impl<'a, CtxT> Visitor<'a, CtxT> for NoUnusedFragments<'a> {
    fn enter_operation_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        self.operations.push(op);
    }

    fn enter_fragment_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        self.fragments.push(def);
    }

    fn leave_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, _document: &'a ast::Document<'a>) {
        let by_name: HashMap<&'a str, &'a ast::FragmentDefinition<'a>> =
            self.fragments.iter().map(|f| (f.name.value, *f)).collect();

        let mut used = HashSet::new();
        for op in &self.operations {
            collect_fragment_spreads(&op.selection_set, &mut used);
        }

        let mut frontier: Vec<&str> = used.iter().copied().collect();
        while let Some(name) = frontier.pop() {
            if let Some(def) = by_name.get(name) {
                let mut nested = HashSet::new();
                collect_fragment_spreads(&def.selection_set, &mut nested);
                for n in nested {
                    if used.insert(n) {
                        frontier.push(n);
                    }
                }
            }
        }

        for def in &self.fragments {
            if !used.contains(def.name.value) {
                ctx.report_error(format!("Fragment \"{}\" is never used.", def.name.value), &[def.loc]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn all_fragments_used() {
        expect_passes_rule(factory, "{ dog { ...fragA } } fragment fragA on Dog { name }");
    }

    #[test]
    fn unused_fragment() {
        let errs = validate(
            test_schema(),
            "{ dog { name } } fragment fragA on Dog { name }",
            factory,
        );
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("fragA"));
    }
}
