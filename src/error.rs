//! The structured error model shared by the parser, validator and executor.
//!
//! Every error that can reach a client is eventually rendered as a
//! [`FormattedError`]: a `message` plus optional `locations`. Errors that
//! indicate a bug in how the *schema* was built (not in the request) panic
//! instead — see DESIGN.md.

use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;
use std::fmt;

use crate::source::{Location, Source};

/// One formatted error in a `{data, errors}` response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormattedError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
}

impl FormattedError {
    pub fn new(message: impl Into<String>) -> Self {
        FormattedError { message: message.into(), locations: Vec::new(), path: Vec::new() }
    }

    pub fn at(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// A syntax error raised by the lexer or parser. Fatal: parsing stops.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub position: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        SyntaxError { message: message.into(), position }
    }

    /// Render the `Syntax Error <name> (<line>:<col>) <description>` form
    /// with a caret-annotated source excerpt, per the external interface
    /// contract (spec §6).
    pub fn describe(&self, source: &Source) -> String {
        let loc = source.locate(self.position);
        let mut out = format!(
            "Syntax Error {} ({}:{}) {}\n\n",
            source.name(),
            loc.line,
            loc.column,
            self.message
        );

        let mut push_line = |line_no: usize| {
            if let Some(text) = source.line_text(line_no) {
                out.push_str(&format!("{:>3}: {}\n", line_no, text));
                if line_no == loc.line {
                    let pad = " ".repeat(5 + loc.column.saturating_sub(1));
                    out.push_str(&pad);
                    out.push_str("^\n");
                }
            }
        };

        if loc.line > 1 {
            push_line(loc.line - 1);
        }
        push_line(loc.line);
        push_line(loc.line + 1);

        out
    }

    pub fn to_formatted(&self, source: &Source) -> FormattedError {
        let loc = source.locate(self.position);
        FormattedError::new(self.describe(source)).at(vec![loc])
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A field-level error produced by a resolver or by value completion.
///
/// Distinct from [`SyntaxError`] (fatal, pre-execution) and from schema
/// construction panics (programmer error, never user-facing).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        FieldError { message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FieldError {}

impl From<String> for FieldError {
    fn from(message: String) -> Self {
        FieldError::new(message)
    }
}

impl<'a> From<&'a str> for FieldError {
    fn from(message: &'a str) -> Self {
        FieldError::new(message)
    }
}

/// Top-level error returned by [`crate::execute`] when a request cannot even
/// begin executing.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLError<'a> {
    ParseError(SyntaxError, Source<'a>),
    ValidationError(Vec<FormattedError>),
    NoOperationProvided,
    MultipleOperationsProvided,
    UnknownOperationName,
}

impl<'a> fmt::Display for GraphQLError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphQLError::ParseError(err, source) => write!(f, "{}", err.describe(source)),
            GraphQLError::ValidationError(errs) => {
                for e in errs {
                    writeln!(f, "{}", e.message)?;
                }
                Ok(())
            }
            GraphQLError::NoOperationProvided => {
                write!(f, "Must provide an operation")
            }
            GraphQLError::MultipleOperationsProvided => {
                write!(f, "Must provide operation name if query contains multiple operations")
            }
            GraphQLError::UnknownOperationName => write!(f, "Unknown operation"),
        }
    }
}

impl<'a> std::error::Error for GraphQLError<'a> {}

impl<'a> Serialize for GraphQLError<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GraphQLError::ParseError(err, source) => {
                let formatted = err.to_formatted(source);
                let mut s = serializer.serialize_struct("GraphQLError", 1)?;
                s.serialize_field("errors", &vec![formatted])?;
                s.end()
            }
            GraphQLError::ValidationError(errs) => {
                let mut s = serializer.serialize_struct("GraphQLError", 1)?;
                s.serialize_field("errors", errs)?;
                s.end()
            }
            other => serializer.collect_str(&other.to_string()),
        }
    }
}
