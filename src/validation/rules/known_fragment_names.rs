use std::collections::HashSet;

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct KnownFragmentNames<'a> {
    fragment_names: HashSet<&'a str>,
    spreads: Vec<(&'a str, ast::Loc)>,
}

pub fn factory<'a>() -> KnownFragmentNames<'a> {
    KnownFragmentNames::default()
}

impl<'a, CtxT> Visitor<'a, CtxT> for KnownFragmentNames<'a> {
    fn enter_fragment_definition(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        self.fragment_names.insert(def.name.value);
    }

    fn enter_fragment_spread(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, spread: &'a ast::FragmentSpread<'a>) {
        self.spreads.push((spread.name.value, spread.loc));
    }

    fn leave_document(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, _document: &'a ast::Document<'a>) {
        for (name, loc) in &self.spreads {
            if !self.fragment_names.contains(name) {
                ctx.report_error(format!("Unknown fragment \"{}\".", name), &[*loc]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn known_fragment() {
        expect_passes_rule(factory, "{ dog { ...fragA } } fragment fragA on Dog { name }");
    }

    #[test]
    fn unknown_fragment() {
        let errs = validate(test_schema(), "{ dog { ...fragMissing } }", factory);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("fragMissing"));
    }
}
