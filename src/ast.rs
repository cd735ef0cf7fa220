//! Typed abstract syntax tree produced by the parser.
//!
//! Every node is a plain Rust struct or enum from the closed set mandated by
//! the grammar; there is no dynamic dispatch on node shape (`isinstance`
//! cascades become `match`). Every node carries a [`Loc`] span. Children are
//! owned by their parent — the tree is never a DAG and never cyclic.

use std::fmt;

/// Byte-offset span of a node within its [`crate::source::Source`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
}

impl Loc {
    pub fn new(start: usize, end: usize) -> Loc {
        debug_assert!(start <= end);
        Loc { start, end }
    }

    /// A span covering both `self` and `other`.
    pub fn join(&self, other: &Loc) -> Loc {
        Loc { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}

/// A bare identifier, e.g. a field or argument name.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'a> {
    pub value: &'a str,
    pub loc: Loc,
}

/// A type literal in the syntax tree, e.g. `String`, `[String]`, `String!`.
///
/// Carries no semantic information and might refer to types that do not
/// exist; that is the validator's job. The four-variant shape (rather than a
/// generic `NonNull(Box<Type>)`) makes the invariant "NonNull wraps only
/// non-NonNull types" structurally unrepresentable instead of a runtime
/// check.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'a> {
    Named(Name<'a>),
    List(Box<Type<'a>>, Loc),
    NonNullNamed(Name<'a>, Loc),
    NonNullList(Box<Type<'a>>, Loc),
}

impl<'a> Type<'a> {
    pub fn loc(&self) -> Loc {
        match self {
            Type::Named(n) => n.loc,
            Type::List(_, loc) | Type::NonNullNamed(_, loc) | Type::NonNullList(_, loc) => *loc,
        }
    }

    /// The name of a named type. Lists return `None`.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Type::Named(n) | Type::NonNullNamed(n, _) => Some(n.value),
            _ => None,
        }
    }

    /// The innermost named type, unwrapping any list nesting.
    pub fn innermost_name(&self) -> &'a str {
        match self {
            Type::Named(n) | Type::NonNullNamed(n, _) => n.value,
            Type::List(t, _) | Type::NonNullList(t, _) => t.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNullNamed(..) | Type::NonNullList(..))
    }
}

impl<'a> fmt::Display for Type<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Type::Named(n) => write!(f, "{}", n.value),
            Type::NonNullNamed(n, _) => write!(f, "{}!", n.value),
            Type::List(t, _) => write!(f, "[{}]", t),
            Type::NonNullList(t, _) => write!(f, "[{}]!", t),
        }
    }
}

/// A value literal as written in a query document: arguments, default
/// values, and object/list sub-values. May contain `Variable` references
/// unless parsed in "const" position (default values).
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Null(Loc),
    Int(i64, Loc),
    Float(f64, Loc),
    String(String, Loc),
    Boolean(bool, Loc),
    Enum(&'a str, Loc),
    Variable(&'a str, Loc),
    List(Vec<Value<'a>>, Loc),
    Object(Vec<ObjectField<'a>>, Loc),
}

impl<'a> Value<'a> {
    pub fn loc(&self) -> Loc {
        match self {
            Value::Null(l)
            | Value::Int(_, l)
            | Value::Float(_, l)
            | Value::String(_, l)
            | Value::Boolean(_, l)
            | Value::Enum(_, l)
            | Value::Variable(_, l)
            | Value::List(_, l)
            | Value::Object(_, l) => *l,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Value::Variable(..))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'a> {
    pub name: Name<'a>,
    pub value: Value<'a>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'a> {
    pub name: Name<'a>,
    pub value: Value<'a>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'a> {
    pub name: Name<'a>,
    pub arguments: Vec<Argument<'a>>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'a> {
    pub name: Name<'a>,
    pub var_type: Type<'a>,
    pub default_value: Option<Value<'a>>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field<'a> {
    pub alias: Option<Name<'a>>,
    pub name: Name<'a>,
    pub arguments: Vec<Argument<'a>>,
    pub directives: Vec<Directive<'a>>,
    pub selection_set: Option<SelectionSet<'a>>,
    pub loc: Loc,
}

impl<'a> Field<'a> {
    /// The name this field's result is keyed by in the response object.
    pub fn response_key(&self) -> &'a str {
        self.alias.as_ref().unwrap_or(&self.name).value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'a> {
    pub name: Name<'a>,
    pub directives: Vec<Directive<'a>>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'a> {
    pub type_condition: Option<Name<'a>>,
    pub directives: Vec<Directive<'a>>,
    pub selection_set: SelectionSet<'a>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    pub fn loc(&self) -> Loc {
        match self {
            Selection::Field(f) => f.loc,
            Selection::FragmentSpread(s) => s.loc,
            Selection::InlineFragment(f) => f.loc,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'a> {
    pub items: Vec<Selection<'a>>,
    pub loc: Loc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'a> {
    pub operation_type: OperationType,
    pub name: Option<Name<'a>>,
    pub variable_definitions: Vec<VariableDefinition<'a>>,
    pub directives: Vec<Directive<'a>>,
    pub selection_set: SelectionSet<'a>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'a> {
    pub name: Name<'a>,
    pub type_condition: Name<'a>,
    pub directives: Vec<Directive<'a>>,
    pub selection_set: SelectionSet<'a>,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
}

impl<'a> Definition<'a> {
    pub fn loc(&self) -> Loc {
        match self {
            Definition::Operation(o) => o.loc,
            Definition::Fragment(f) => f.loc,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document<'a> {
    pub definitions: Vec<Definition<'a>>,
    pub loc: Loc,
}

impl<'a> Document<'a> {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'a>> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Operation(o) => Some(o),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'a>> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Fragment(f) => Some(f),
            _ => None,
        })
    }
}
