use std::collections::hash_map::{Entry, HashMap};

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct UniqueInputFieldNames;

pub fn factory() -> UniqueInputFieldNames {
    UniqueInputFieldNames
}

impl<'a, CtxT> Visitor<'a, CtxT> for UniqueInputFieldNames {
    fn enter_value(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, value: &'a ast::Value<'a>) {
        let ast::Value::Object(fields, _) = value else { return };

        let mut seen: HashMap<&str, ast::Loc> = HashMap::new();
        for field in fields {
            match seen.entry(field.name.value) {
                Entry::Occupied(e) => {
                    ctx.report_error(
                        format!("There can only be one input field named \"{}\".", field.name.value),
                        &[*e.get(), field.name.loc],
                    );
                }
                Entry::Vacant(e) => {
                    e.insert(field.name.loc);
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
    fn unique_fields() {
        expect_passes_rule(
            factory,
            "{ complicatedArgs { complexArgField(complexArg: {requiredField: true, intField: 4}) } }",
        );
    }

    #[test]
    fn duplicate_fields() {
        let errs = validate(
            test_schema(),
            "{ complicatedArgs { complexArgField(complexArg: {requiredField: true, requiredField: false}) } }",
            factory,
        );
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message().contains("requiredField"));
    }
}
