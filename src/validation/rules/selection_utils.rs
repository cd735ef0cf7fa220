//! Selection-set walking shared by the rules that need to see through
//! fragment spreads: unused-fragment/unused-variable/undefined-variable
//! detection all need "every variable or fragment name reachable from this
//! operation", not just the ones written directly inside it.

use std::collections::HashSet;

use crate::ast;

pub fn collect_fragment_spreads<'a>(set: &ast::SelectionSet<'a>, out: &mut HashSet<&'a str>) {
    for item in &set.items {
        match item {
            ast::Selection::Field(f) => {
                if let Some(ss) = &f.selection_set {
                    collect_fragment_spreads(ss, out);
                }
            }
            ast::Selection::FragmentSpread(s) => {
                out.insert(s.name.value);
            }
            ast::Selection::InlineFragment(f) => collect_fragment_spreads(&f.selection_set, out),
        }
    }
}

pub fn collect_variable_usages<'a>(
    set: &ast::SelectionSet<'a>,
    fragments: &std::collections::HashMap<&'a str, &'a ast::FragmentDefinition<'a>>,
    visited_fragments: &mut HashSet<&'a str>,
    out: &mut Vec<(&'a str, ast::Loc)>,
) {
    for item in &set.items {
        match item {
            ast::Selection::Field(f) => {
                for arg in &f.arguments {
                    collect_variable_usages_value(&arg.value, out);
                }
                for d in &f.directives {
                    for arg in &d.arguments {
                        collect_variable_usages_value(&arg.value, out);
                    }
                }
                if let Some(ss) = &f.selection_set {
                    collect_variable_usages(ss, fragments, visited_fragments, out);
                }
            }
            ast::Selection::FragmentSpread(s) => {
                if visited_fragments.insert(s.name.value) {
                    if let Some(def) = fragments.get(s.name.value) {
                        collect_variable_usages(&def.selection_set, fragments, visited_fragments, out);
                    }
                }
            }
            ast::Selection::InlineFragment(f) => collect_variable_usages(&f.selection_set, fragments, visited_fragments, out),
        }
    }
}

fn collect_variable_usages_value<'a>(value: &ast::Value<'a>, out: &mut Vec<(&'a str, ast::Loc)>) {
    match value {
        ast::Value::Variable(name, loc) => out.push((name, *loc)),
        ast::Value::List(items, _) => {
            for item in items {
                collect_variable_usages_value(item, out);
            }
        }
        ast::Value::Object(fields, _) => {
            for field in fields {
                collect_variable_usages_value(&field.value, out);
            }
        }
        _ => {}
    }
}

pub fn contains_variable(value: &ast::Value) -> bool {
    match value {
        ast::Value::Variable(..) => true,
        ast::Value::List(items, _) => items.iter().any(contains_variable),
        ast::Value::Object(fields, _) => fields.iter().any(|f| contains_variable(&f.value)),
        _ => false,
    }
}
