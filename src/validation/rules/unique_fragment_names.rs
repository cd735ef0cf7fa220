use std::collections::hash_map::{Entry, HashMap};

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

pub struct UniqueFragmentNames<'a> {
    names: HashMap<&'a str, ast::Loc>,
}

pub fn factory<'a>() -> UniqueFragmentNames<'a> {
    UniqueFragmentNames { names: HashMap::new() }
}

impl<'a, CtxT> Visitor<'a, CtxT> for UniqueFragmentNames<'a> {
    fn enter_fragment_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, def: &'a ast::FragmentDefinition<'a>) {
        match self.names.entry(def.name.value) {
            Entry::Occupied(e) => {
                ctx.report_error(
                    format!("There can only be one fragment named \"{}\".", def.name.value),
                    &[*e.get(), def.name.loc],
                );
            }
            Entry::Vacant(e) => {
                e.insert(def.name.loc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn no_fragments() {
        expect_passes_rule(factory, "{ dog { name } }");
    }

    #[test]
    fn one_fragment() {
        expect_passes_rule(factory, "{ dog { ...fragA } } fragment fragA on Dog { name }");
    }

    #[test]
    fn duplicate_fragment_names() {
        let errs = validate(
            test_schema(),
            "{ dog { ...fragA } } fragment fragA on Dog { name } fragment fragA on Dog { nickname }",
            factory,
        );
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("fragA"));
    }
}
