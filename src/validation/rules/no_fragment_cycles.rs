use std::collections::HashMap;
use std::collections::HashSet;

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::rules::selection_utils::collect_fragment_spreads;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct NoFragmentCycles<'a> {
    fragments: Vec<&'a ast::FragmentDefinition<'a>>,
}

pub fn factory<'a>() -> NoFragmentCycles<'a> {
    NoFragmentCycles::default()
}

impl<'a, CtxT> Visitor<'a, CtxT> for NoFragmentCycles<'a> {
    fn enter_fragment_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        self.fragments.push(def);
    }

    fn leave_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, _document: &'a ast::Document<'a>) {
        let by_name: HashMap<&'a str, &'a ast::FragmentDefinition<'a>> =
            self.fragments.iter().map(|f| (f.name.value, *f)).collect();

        let mut reported = HashSet::new();
        for def in &self.fragments {
            let mut visited = HashSet::new();
            detect_cycle(def.name.value, def, &by_name, &mut visited, ctx, &mut reported);
        }
    }
}

fn detect_cycle<'a, CtxT>(
    origin: &'a str,
    def: &'a ast::FragmentDefinition<'a>,
    by_name: &HashMap<&'a str, &'a ast::FragmentDefinition<'a>>,
    visited: &mut HashSet<&'a str>,
    ctx: &mut ValidatorContext<'a, CtxT>,
    reported: &mut HashSet<&'a str>,
) {
    let mut spreads = HashSet::new();
    collect_fragment_spreads(&def.selection_set, &mut spreads);

    for name in spreads {
        if name == origin {
            if reported.insert(origin) {
                ctx.report_error(format!("Cannot spread fragment \"{}\" within itself.", origin), &[def.loc]);
            }
        } else if visited.insert(name) {
            if let Some(next) = by_name.get(name) {
                detect_cycle(origin, next, by_name, visited, ctx, reported);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn no_cycle() {
        expect_passes_rule(
            factory,
            "{ dog { ...fragA } } fragment fragA on Dog { ...fragB } fragment fragB on Dog { name }",
        );
    }

    #[test]
    fn direct_cycle() {
        let errs = validate(test_schema(), "{ dog { ...fragA } } fragment fragA on Dog { ...fragA }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("fragA"));
    }

    #[test]
    fn indirect_cycle() {
        let errs = validate(
            test_schema(),
            "{ dog { ...fragA } } fragment fragA on Dog { ...fragB } fragment fragB on Dog { ...fragA }",
            factory,
        );
        assert_eq!(errs.len(), 2);
    }
}
