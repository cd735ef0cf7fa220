//! Deterministic pretty-printer rendering a parsed [`crate::ast::Document`]
//! back into GraphQL query text.
//!
//! Printing is driven by the same recursive node shapes the parser produces
//! (one function per AST node, mirroring `ast::Type`'s and
//! `ast::OperationType`'s own `Display` impls) rather than a generic
//! tree-walking visitor: there's no validation or type information involved,
//! just syntax. Re-parsing the printed output of a parsed document always
//! reproduces an equal AST modulo `Loc` spans.

use std::fmt::Write;

use crate::ast::*;

/// Render a whole document, one top-level definition per blank-line-separated
/// block, in document order.
pub fn print_document(document: &Document) -> String {
    document
        .definitions
        .iter()
        .map(print_definition)
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n"
}

fn print_definition(def: &Definition) -> String {
    match def {
        Definition::Operation(op) => print_operation_definition(op),
        Definition::Fragment(frag) => print_fragment_definition(frag),
    }
}

fn print_operation_definition(op: &OperationDefinition) -> String {
    let mut out = String::new();

    // The shorthand `{ ... }` form is only reproduced for an anonymous query
    // with no variables or directives; anything else always prints the
    // explicit `query`/`mutation` keyword.
    let is_shorthand =
        op.operation_type == OperationType::Query && op.name.is_none() && op.variable_definitions.is_empty() && op.directives.is_empty();

    if !is_shorthand {
        write!(out, "{}", op.operation_type).unwrap();
        if let Some(name) = &op.name {
            write!(out, " {}", name.value).unwrap();
        }
        if !op.variable_definitions.is_empty() {
            let vars = op.variable_definitions.iter().map(print_variable_definition).collect::<Vec<_>>().join(", ");
            write!(out, "({})", vars).unwrap();
        }
        let directives = print_directives(&op.directives);
        if !directives.is_empty() {
            write!(out, " {}", directives).unwrap();
        }
        out.push(' ');
    }

    out.push_str(&print_selection_set(&op.selection_set, 0));
    out
}

fn print_variable_definition(def: &VariableDefinition) -> String {
    let mut out = format!("${}: {}", def.name.value, def.var_type);
    if let Some(default) = &def.default_value {
        write!(out, " = {}", print_value(default)).unwrap();
    }
    out
}

fn print_fragment_definition(frag: &FragmentDefinition) -> String {
    let mut out = format!("fragment {} on {}", frag.name.value, frag.type_condition.value);
    let directives = print_directives(&frag.directives);
    if !directives.is_empty() {
        write!(out, " {}", directives).unwrap();
    }
    out.push(' ');
    out.push_str(&print_selection_set(&frag.selection_set, 0));
    out
}

fn print_selection_set(set: &SelectionSet, depth: usize) -> String {
    if set.items.is_empty() {
        return "{}".to_owned();
    }

    let indent = "  ".repeat(depth + 1);
    let body = set.items.iter().map(|s| format!("{}{}", indent, print_selection(s, depth + 1))).collect::<Vec<_>>().join("\n");

    format!("{{\n{}\n{}}}", body, "  ".repeat(depth))
}

fn print_selection(selection: &Selection, depth: usize) -> String {
    match selection {
        Selection::Field(f) => print_field(f, depth),
        Selection::FragmentSpread(s) => print_fragment_spread(s),
        Selection::InlineFragment(f) => print_inline_fragment(f, depth),
    }
}

fn print_field(field: &Field, depth: usize) -> String {
    let mut out = String::new();
    if let Some(alias) = &field.alias {
        write!(out, "{}: ", alias.value).unwrap();
    }
    out.push_str(field.name.value);

    if !field.arguments.is_empty() {
        let args = field.arguments.iter().map(print_argument).collect::<Vec<_>>().join(", ");
        write!(out, "({})", args).unwrap();
    }

    let directives = print_directives(&field.directives);
    if !directives.is_empty() {
        write!(out, " {}", directives).unwrap();
    }

    if let Some(set) = &field.selection_set {
        write!(out, " {}", print_selection_set(set, depth)).unwrap();
    }

    out
}

fn print_fragment_spread(spread: &FragmentSpread) -> String {
    let mut out = format!("...{}", spread.name.value);
    let directives = print_directives(&spread.directives);
    if !directives.is_empty() {
        write!(out, " {}", directives).unwrap();
    }
    out
}

fn print_inline_fragment(frag: &InlineFragment, depth: usize) -> String {
    let mut out = "...".to_owned();
    if let Some(cond) = &frag.type_condition {
        write!(out, " on {}", cond.value).unwrap();
    }
    let directives = print_directives(&frag.directives);
    if !directives.is_empty() {
        write!(out, " {}", directives).unwrap();
    }
    write!(out, " {}", print_selection_set(&frag.selection_set, depth)).unwrap();
    out
}

fn print_directives(directives: &[Directive]) -> String {
    directives.iter().map(print_directive).collect::<Vec<_>>().join(" ")
}

fn print_directive(directive: &Directive) -> String {
    let mut out = format!("@{}", directive.name.value);
    if !directive.arguments.is_empty() {
        let args = directive.arguments.iter().map(print_argument).collect::<Vec<_>>().join(", ");
        write!(out, "({})", args).unwrap();
    }
    out
}

fn print_argument(arg: &Argument) -> String {
    format!("{}: {}", arg.name.value, print_value(&arg.value))
}

fn print_value(value: &Value) -> String {
    match value {
        Value::Null(_) => "null".to_owned(),
        Value::Int(i, _) => i.to_string(),
        Value::Float(f, _) => f.to_string(),
        Value::String(s, _) => format!("{:?}", s),
        Value::Boolean(b, _) => b.to_string(),
        Value::Enum(e, _) => (*e).to_owned(),
        Value::Variable(v, _) => format!("${}", v),
        Value::List(items, _) => format!("[{}]", items.iter().map(print_value).collect::<Vec<_>>().join(", ")),
        Value::Object(fields, _) => {
            format!("{{{}}}", fields.iter().map(|f| format!("{}: {}", f.name.value, print_value(&f.value))).collect::<Vec<_>>().join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::print_document;
    use crate::parser::parse_document;
    use crate::source::Source;

    fn roundtrip(query: &str) {
        let source = Source::new(query);
        let parsed = parse_document(&source).unwrap_or_else(|e| panic!("parse error on {:?}: {:?}", query, e));
        let printed = print_document(&parsed);

        let reparsed_source = Source::new(&printed);
        let reparsed = parse_document(&reparsed_source)
            .unwrap_or_else(|e| panic!("re-parse error on printed output {:?}: {:?}", printed, e));

        // `Loc` spans differ between the original and re-parsed documents by
        // construction, so compare by re-printing both rather than deriving
        // a loc-blind `PartialEq`: printing the re-parsed document should
        // reproduce exactly the text we fed back in.
        assert_eq!(printed, print_document(&reparsed), "printed:\n{}", printed);
    }

    #[test]
    fn simple_query_roundtrips() {
        roundtrip("{ hello world }");
    }

    #[test]
    fn named_operation_with_variables_roundtrips() {
        roundtrip(
            r#"
            query GetHuman($id: ID!, $withFriends: Boolean = true) {
              human(id: $id) {
                name
                friends @include(if: $withFriends) {
                  name
                }
              }
            }
            "#,
        );
    }

    #[test]
    fn fragments_and_inline_fragments_roundtrip() {
        roundtrip(
            r#"
            query {
              hero {
                ...heroFields
                ... on Droid {
                  primaryFunction
                }
              }
            }

            fragment heroFields on Character {
              name
              appearsIn
            }
            "#,
        );
    }

    #[test]
    fn literal_values_roundtrip() {
        roundtrip(
            r#"{
              complicatedArgs(complexArg: {requiredField: true, intField: 4, stringListField: ["a", "b"]})
            }"#,
        );
    }

    #[test]
    fn anonymous_query_prints_shorthand() {
        let source = Source::new("{ hello }");
        let parsed = parse_document(&source).unwrap();
        assert_eq!(print_document(&parsed), "{\n  hello\n}\n");
    }
}
