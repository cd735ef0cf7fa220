//! The single generic AST walk every validation rule rides on, keeping
//! [`crate::type_info::TypeInfo`] in sync as it descends and ascends.

use crate::ast;
use crate::validation::context::ValidatorContext;
use crate::validation::traits::Visitor;

pub fn visit<'a, CtxT, V: Visitor<'a, CtxT>>(visitor: &mut V, ctx: &mut ValidatorContext<'a, CtxT>, document: &'a ast::Document<'a>) {
    visitor.enter_document(ctx, document);
    for definition in &document.definitions {
        match definition {
            ast::Definition::Operation(op) => visit_operation(visitor, ctx, op),
            ast::Definition::Fragment(frag) => visit_fragment_definition(visitor, ctx, frag),
        }
    }
    visitor.leave_document(ctx, document);
}

fn visit_operation<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    op: &'a ast::OperationDefinition<'a>,
) {
    ctx.type_info.enter_operation_definition(op);
    visitor.enter_operation_definition(ctx, op);

    for var_def in &op.variable_definitions {
        visit_variable_definition(visitor, ctx, var_def);
    }
    for directive in &op.directives {
        visit_directive(visitor, ctx, directive);
    }
    visit_selection_set(visitor, ctx, &op.selection_set);

    visitor.leave_operation_definition(ctx, op);
    ctx.type_info.leave_operation_definition();
}

fn visit_fragment_definition<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    def: &'a ast::FragmentDefinition<'a>,
) {
    ctx.type_info.enter_fragment_definition(def);
    visitor.enter_fragment_definition(ctx, def);

    for directive in &def.directives {
        visit_directive(visitor, ctx, directive);
    }
    visit_selection_set(visitor, ctx, &def.selection_set);

    visitor.leave_fragment_definition(ctx, def);
    ctx.type_info.leave_fragment_definition();
}

fn visit_variable_definition<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    def: &'a ast::VariableDefinition<'a>,
) {
    visitor.enter_variable_definition(ctx, def);
    if let Some(default) = &def.default_value {
        visit_value(visitor, ctx, default);
    }
    visitor.leave_variable_definition(ctx, def);
}

fn visit_selection_set<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    set: &'a ast::SelectionSet<'a>,
) {
    ctx.type_info.enter_selection_set();
    visitor.enter_selection_set(ctx, set);

    for selection in &set.items {
        match selection {
            ast::Selection::Field(field) => visit_field(visitor, ctx, field),
            ast::Selection::FragmentSpread(spread) => visit_fragment_spread(visitor, ctx, spread),
            ast::Selection::InlineFragment(frag) => visit_inline_fragment(visitor, ctx, frag),
        }
    }

    visitor.leave_selection_set(ctx, set);
    ctx.type_info.leave_selection_set();
}

fn visit_field<'a, CtxT, V: Visitor<'a, CtxT>>(visitor: &mut V, ctx: &mut ValidatorContext<'a, CtxT>, field: &'a ast::Field<'a>) {
    ctx.type_info.enter_field(field);
    visitor.enter_field(ctx, field);

    for argument in &field.arguments {
        visit_argument(visitor, ctx, argument);
    }
    for directive in &field.directives {
        visit_directive(visitor, ctx, directive);
    }
    if let Some(set) = &field.selection_set {
        visit_selection_set(visitor, ctx, set);
    }

    visitor.leave_field(ctx, field);
    ctx.type_info.leave_field();
}

fn visit_fragment_spread<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    spread: &'a ast::FragmentSpread<'a>,
) {
    visitor.enter_fragment_spread(ctx, spread);
    for directive in &spread.directives {
        visit_directive(visitor, ctx, directive);
    }
    visitor.leave_fragment_spread(ctx, spread);
}

fn visit_inline_fragment<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    frag: &'a ast::InlineFragment<'a>,
) {
    ctx.type_info.enter_inline_fragment(frag);
    visitor.enter_inline_fragment(ctx, frag);

    for directive in &frag.directives {
        visit_directive(visitor, ctx, directive);
    }
    visit_selection_set(visitor, ctx, &frag.selection_set);

    visitor.leave_inline_fragment(ctx, frag);
    ctx.type_info.leave_inline_fragment();
}

fn visit_directive<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    directive: &'a ast::Directive<'a>,
) {
    ctx.type_info.enter_directive(directive);
    visitor.enter_directive(ctx, directive);

    for argument in &directive.arguments {
        visit_argument(visitor, ctx, argument);
    }

    visitor.leave_directive(ctx, directive);
    ctx.type_info.leave_directive();
}

fn visit_argument<'a, CtxT, V: Visitor<'a, CtxT>>(
    visitor: &mut V,
    ctx: &mut ValidatorContext<'a, CtxT>,
    argument: &'a ast::Argument<'a>,
) {
    ctx.type_info.enter_argument(argument.name.value);
    visitor.enter_argument(ctx, argument);

    visit_value(visitor, ctx, &argument.value);

    visitor.leave_argument(ctx, argument);
    ctx.type_info.leave_argument();
}

fn visit_value<'a, CtxT, V: Visitor<'a, CtxT>>(visitor: &mut V, ctx: &mut ValidatorContext<'a, CtxT>, value: &'a ast::Value<'a>) {
    visitor.enter_value(ctx, value);
    match value {
        ast::Value::List(items, _) => {
            ctx.type_info.enter_list_value();
            for item in items {
                visit_value(visitor, ctx, item);
            }
            ctx.type_info.leave_list_value();
        }
        ast::Value::Object(fields, _) => {
            for field in fields {
                ctx.type_info.enter_object_field(field.name.value);
                visit_value(visitor, ctx, &field.value);
                ctx.type_info.leave_object_field();
            }
        }
        _ => {}
    }
    visitor.leave_value(ctx, value);
}
