use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct LoneAnonymousOperation {
    operation_count: usize,
}

pub fn factory() -> LoneAnonymousOperation {
    LoneAnonymousOperation::default()
}

impl<'a, CtxT> Visitor<'a, CtxT> for LoneAnonymousOperation {
    fn enter_document(&mut self, _ctx: &mut ValidatorContext<'a, CtxT>, document: &'a ast::Document<'a>) {
        self.operation_count = document.operations().count();
    }

    fn enter_operation_definition(&mut self, ctx: &mut ValidatorContext<'a, CtxT>, op: &'a ast::OperationDefinition<'a>) {
        if op.name.is_none() && self.operation_count > 1 {
            ctx.report_error("This anonymous operation must be the only defined operation.", &[op.loc]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::test_harness::{expect_passes_rule, test_schema, validate};

    #[test]
    fn single_anon_operation() {
        expect_passes_rule(factory, "{ dog { name } }");
    }

    #[test]
    fn multiple_named_operations() {
        expect_passes_rule(factory, "query A { dog { name } } query B { dog { name } }");
    }

    #[test]
    fn anon_with_other_operations() {
        let errs = validate(test_schema(), "{ dog { name } } query A { dog { name } }", factory);
        assert_eq!(errs.len(), 1);
    }
}
