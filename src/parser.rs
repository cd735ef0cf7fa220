//! Recursive-descent parser turning a token stream into a [`crate::ast::Document`].

use crate::ast::*;
use crate::error::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::source::Source;

/// Parse a full query document from source text.
pub fn parse_document<'a>(source: &Source<'a>) -> Result<Document<'a>, SyntaxError> {
    crate::log_support::debug_parse_start(source.len());
    let mut parser = Parser::new(*source)?;
    let document = parser.parse_document()?;
    crate::log_support::debug_parse_end(document.definitions.len());
    Ok(document)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    fn new(source: Source<'a>) -> Result<Parser<'a>, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    fn advance(&mut self) -> Result<Token<'a>, SyntaxError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn peek(&self) -> &TokenKind<'a> {
        &self.current.kind
    }

    fn unexpected<T>(&self) -> Result<T, SyntaxError> {
        Err(SyntaxError::new(format!("Unexpected {}.", self.current.kind), self.current.start))
    }

    fn expect(&mut self, kind: &TokenKind<'a>) -> Result<Token<'a>, SyntaxError> {
        if &self.current.kind == kind {
            self.advance()
        } else {
            Err(SyntaxError::new(
                format!("Expected {}, found {}.", kind, self.current.kind),
                self.current.start,
            ))
        }
    }

    /// Like [`Self::expect`], but for a bare keyword (`on`, `fragment`, ...)
    /// rather than a punctuator or a name that happens to carry semantic
    /// weight: renders as `Expected "on"` rather than `Expected Name "on"`.
    fn expect_keyword(&mut self, keyword: &'static str) -> Result<Token<'a>, SyntaxError> {
        if self.current.kind == TokenKind::Name(keyword) {
            self.advance()
        } else {
            Err(SyntaxError::new(
                format!("Expected \"{}\", found {}.", keyword, self.current.kind),
                self.current.start,
            ))
        }
    }

    /// Consume `kind` if present, returning whether it matched.
    fn skip(&mut self, kind: &TokenKind<'a>) -> Result<bool, SyntaxError> {
        if &self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_name(&mut self) -> Result<Name<'a>, SyntaxError> {
        let start = self.current.start;
        match self.current.kind {
            TokenKind::Name(value) => {
                let end = self.current.end;
                self.advance()?;
                Ok(Name { value, loc: Loc::new(start, end) })
            }
            _ => Err(SyntaxError::new(
                format!("Expected Name, found {}.", self.current.kind),
                start,
            )),
        }
    }

    /// `open item* close`, requiring at least one `item`.
    fn delimited_nonempty_list<T>(
        &mut self,
        open: &TokenKind<'a>,
        mut item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: &TokenKind<'a>,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect(open)?;
        let mut items = vec![item(self)?];
        while self.peek() != close {
            items.push(item(self)?);
        }
        self.expect(close)?;
        Ok(items)
    }

    fn parse_document(&mut self) -> Result<Document<'a>, SyntaxError> {
        let start = self.current.start;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.peek() == &TokenKind::EndOfFile {
                let end = self.current.end;
                return Ok(Document { definitions, loc: Loc::new(start, end) });
            }
        }
    }

    fn parse_definition(&mut self) -> Result<Definition<'a>, SyntaxError> {
        match self.peek() {
            TokenKind::CurlyOpen | TokenKind::Name("query") | TokenKind::Name("mutation") => {
                Ok(Definition::Operation(self.parse_operation_definition()?))
            }
            TokenKind::Name("fragment") => Ok(Definition::Fragment(self.parse_fragment_definition()?)),
            _ => self.unexpected(),
        }
    }

    fn parse_operation_definition(&mut self) -> Result<OperationDefinition<'a>, SyntaxError> {
        let start = self.current.start;

        if self.peek() == &TokenKind::CurlyOpen {
            let selection_set = self.parse_selection_set()?;
            let end = selection_set.loc.end;
            return Ok(OperationDefinition {
                operation_type: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                loc: Loc::new(start, end),
            });
        }

        let operation_type = self.parse_operation_type()?;
        let name = match self.peek() {
            TokenKind::Name(_) => Some(self.expect_name()?),
            _ => None,
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        let end = selection_set.loc.end;

        Ok(OperationDefinition {
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: Loc::new(start, end),
        })
    }

    fn parse_operation_type(&mut self) -> Result<OperationType, SyntaxError> {
        match self.peek() {
            TokenKind::Name("query") => {
                self.advance()?;
                Ok(OperationType::Query)
            }
            TokenKind::Name("mutation") => {
                self.advance()?;
                Ok(OperationType::Mutation)
            }
            _ => self.unexpected(),
        }
    }

    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition<'a>, SyntaxError> {
        let start = self.expect_keyword("fragment")?.start;
        let name = self.expect_name()?;
        if name.value == "on" {
            return Err(SyntaxError::new("Unexpected Name \"on\".".to_string(), name.loc.start));
        }
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        let end = selection_set.loc.end;

        Ok(FragmentDefinition { name, type_condition, directives, selection_set, loc: Loc::new(start, end) })
    }

    fn parse_optional_selection_set(&mut self) -> Result<Option<SelectionSet<'a>>, SyntaxError> {
        if self.peek() == &TokenKind::CurlyOpen {
            Ok(Some(self.parse_selection_set()?))
        } else {
            Ok(None)
        }
    }

    fn parse_selection_set(&mut self) -> Result<SelectionSet<'a>, SyntaxError> {
        let start = self.current.start;
        let items =
            self.delimited_nonempty_list(&TokenKind::CurlyOpen, Self::parse_selection, &TokenKind::CurlyClose)?;
        let end = self.current.end;
        Ok(SelectionSet { items, loc: Loc::new(start, end) })
    }

    fn parse_selection(&mut self) -> Result<Selection<'a>, SyntaxError> {
        match self.peek() {
            TokenKind::Spread => self.parse_fragment(),
            _ => Ok(Selection::Field(self.parse_field()?)),
        }
    }

    fn parse_fragment(&mut self) -> Result<Selection<'a>, SyntaxError> {
        let start = self.expect(&TokenKind::Spread)?.start;

        match self.peek().clone() {
            TokenKind::Name("on") => {
                self.advance()?;
                let type_condition = self.expect_name()?;
                let directives = self.parse_directives()?;
                let selection_set = self.parse_selection_set()?;
                let end = selection_set.loc.end;
                Ok(Selection::InlineFragment(InlineFragment {
                    type_condition: Some(type_condition),
                    directives,
                    selection_set,
                    loc: Loc::new(start, end),
                }))
            }
            TokenKind::CurlyOpen => {
                let selection_set = self.parse_selection_set()?;
                let end = selection_set.loc.end;
                Ok(Selection::InlineFragment(InlineFragment {
                    type_condition: None,
                    directives: Vec::new(),
                    selection_set,
                    loc: Loc::new(start, end),
                }))
            }
            TokenKind::Name(_) => {
                let name = self.expect_name()?;
                let directives = self.parse_directives()?;
                let end = directives.last().map(|d| d.loc.end).unwrap_or(name.loc.end);
                Ok(Selection::FragmentSpread(FragmentSpread { name, directives, loc: Loc::new(start, end) }))
            }
            TokenKind::At => {
                let directives = self.parse_directives()?;
                let selection_set = self.parse_selection_set()?;
                let end = selection_set.loc.end;
                Ok(Selection::InlineFragment(InlineFragment {
                    type_condition: None,
                    directives,
                    selection_set,
                    loc: Loc::new(start, end),
                }))
            }
            _ => self.unexpected(),
        }
    }

    fn parse_field(&mut self) -> Result<Field<'a>, SyntaxError> {
        let mut alias = Some(self.expect_name()?);
        let start = alias.as_ref().unwrap().loc.start;

        let name = if self.skip(&TokenKind::Colon)? { self.expect_name()? } else { alias.take().unwrap() };

        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_optional_selection_set()?;

        let end = selection_set
            .as_ref()
            .map(|s| s.loc.end)
            .or_else(|| directives.last().map(|d| d.loc.end))
            .or_else(|| arguments.last().map(|a| a.loc.end))
            .unwrap_or(name.loc.end);

        Ok(Field { alias, name, arguments, directives, selection_set, loc: Loc::new(start, end) })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument<'a>>, SyntaxError> {
        if self.peek() != &TokenKind::ParenOpen {
            Ok(Vec::new())
        } else {
            self.delimited_nonempty_list(&TokenKind::ParenOpen, Self::parse_argument, &TokenKind::ParenClose)
        }
    }

    fn parse_argument(&mut self) -> Result<Argument<'a>, SyntaxError> {
        let name = self.expect_name()?;
        self.expect(&TokenKind::Colon)?;
        let value = self.parse_value_literal(false)?;
        let end = value.loc().end;
        Ok(Argument { name, value, loc: Loc::new(name.loc.start, end) })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition<'a>>, SyntaxError> {
        if self.peek() != &TokenKind::ParenOpen {
            Ok(Vec::new())
        } else {
            self.delimited_nonempty_list(
                &TokenKind::ParenOpen,
                Self::parse_variable_definition,
                &TokenKind::ParenClose,
            )
        }
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinition<'a>, SyntaxError> {
        let start = self.expect(&TokenKind::Dollar)?.start;
        let name = self.expect_name()?;
        self.expect(&TokenKind::Colon)?;
        let var_type = self.parse_type()?;

        let default_value = if self.skip(&TokenKind::Equals)? { Some(self.parse_value_literal(true)?) } else { None };

        let end = default_value.as_ref().map(|v| v.loc().end).unwrap_or(var_type.loc().end);
        Ok(VariableDefinition { name, var_type, default_value, loc: Loc::new(start, end) })
    }

    fn parse_directives(&mut self) -> Result<Vec<Directive<'a>>, SyntaxError> {
        let mut items = Vec::new();
        while self.peek() == &TokenKind::At {
            items.push(self.parse_directive()?);
        }
        Ok(items)
    }

    fn parse_directive(&mut self) -> Result<Directive<'a>, SyntaxError> {
        let start = self.expect(&TokenKind::At)?.start;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments()?;
        let end = arguments.last().map(|a| a.loc.end).unwrap_or(name.loc.end);
        Ok(Directive { name, arguments, loc: Loc::new(start, end) })
    }

    fn parse_type(&mut self) -> Result<Type<'a>, SyntaxError> {
        let parsed = if self.peek() == &TokenKind::BracketOpen {
            let start = self.advance()?.start;
            let inner = self.parse_type()?;
            let end = self.expect(&TokenKind::BracketClose)?.end;
            Type::List(Box::new(inner), Loc::new(start, end))
        } else {
            Type::Named(self.expect_name()?)
        };

        if self.peek() == &TokenKind::Bang {
            let end = self.advance()?.end;
            let start = parsed.loc().start;
            Ok(match parsed {
                Type::Named(name) => Type::NonNullNamed(name, Loc::new(start, end)),
                Type::List(inner, _) => Type::NonNullList(inner, Loc::new(start, end)),
                already_non_null => already_non_null,
            })
        } else {
            Ok(parsed)
        }
    }

    /// `is_const` forbids `Variable` values, used for default values.
    fn parse_value_literal(&mut self, is_const: bool) -> Result<Value<'a>, SyntaxError> {
        match self.peek().clone() {
            TokenKind::BracketOpen => self.parse_list_value(is_const),
            TokenKind::CurlyOpen => self.parse_object_value(is_const),
            TokenKind::Dollar => {
                if is_const {
                    return self.unexpected();
                }
                let start = self.advance()?.start;
                let name = self.expect_name()?;
                Ok(Value::Variable(name.value, Loc::new(start, name.loc.end)))
            }
            TokenKind::Int(text) => {
                let tok = self.advance()?;
                let n: i64 = text
                    .parse()
                    .map_err(|_| SyntaxError::new("Invalid number literal.".to_string(), tok.start))?;
                Ok(Value::Int(n, Loc::new(tok.start, tok.end)))
            }
            TokenKind::Float(text) => {
                let tok = self.advance()?;
                let n: f64 = text
                    .parse()
                    .map_err(|_| SyntaxError::new("Invalid number literal.".to_string(), tok.start))?;
                Ok(Value::Float(n, Loc::new(tok.start, tok.end)))
            }
            TokenKind::Str(s) => {
                let tok = self.advance()?;
                Ok(Value::String(s, Loc::new(tok.start, tok.end)))
            }
            TokenKind::Name("true") => {
                let tok = self.advance()?;
                Ok(Value::Boolean(true, Loc::new(tok.start, tok.end)))
            }
            TokenKind::Name("false") => {
                let tok = self.advance()?;
                Ok(Value::Boolean(false, Loc::new(tok.start, tok.end)))
            }
            TokenKind::Name("null") => {
                let tok = self.advance()?;
                Ok(Value::Null(Loc::new(tok.start, tok.end)))
            }
            TokenKind::Name(value) => {
                let tok = self.advance()?;
                Ok(Value::Enum(value, Loc::new(tok.start, tok.end)))
            }
            _ => self.unexpected(),
        }
    }

    fn parse_list_value(&mut self, is_const: bool) -> Result<Value<'a>, SyntaxError> {
        let start = self.current.start;
        self.expect(&TokenKind::BracketOpen)?;
        let mut items = Vec::new();
        while self.peek() != &TokenKind::BracketClose {
            items.push(self.parse_value_literal(is_const)?);
        }
        let end = self.expect(&TokenKind::BracketClose)?.end;
        Ok(Value::List(items, Loc::new(start, end)))
    }

    fn parse_object_value(&mut self, is_const: bool) -> Result<Value<'a>, SyntaxError> {
        let start = self.current.start;
        self.expect(&TokenKind::CurlyOpen)?;
        let mut fields = Vec::new();
        while self.peek() != &TokenKind::CurlyClose {
            fields.push(self.parse_object_field(is_const)?);
        }
        let end = self.expect(&TokenKind::CurlyClose)?.end;
        Ok(Value::Object(fields, Loc::new(start, end)))
    }

    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField<'a>, SyntaxError> {
        let name = self.expect_name()?;
        self.expect(&TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        let end = value.loc().end;
        Ok(ObjectField { name, value, loc: Loc::new(name.loc.start, end) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Document {
        let source = Source::new(s);
        parse_document(&source).unwrap()
    }

    #[test]
    fn parses_anonymous_query() {
        let doc = parse("{ hello }");
        assert_eq!(doc.operations().count(), 1);
        let op = doc.operations().next().unwrap();
        assert_eq!(op.operation_type, OperationType::Query);
        assert!(op.name.is_none());
    }

    #[test]
    fn parses_named_query_with_variables() {
        let doc = parse("query Greeting($name: String = \"world\") { hello(name: $name) }");
        let op = doc.operations().next().unwrap();
        assert_eq!(op.name.as_ref().unwrap().value, "Greeting");
        assert_eq!(op.variable_definitions.len(), 1);
        assert!(op.variable_definitions[0].default_value.is_some());
    }

    #[test]
    fn parses_fragment_spread_and_inline_fragment() {
        let doc = parse("{ ...F ... on T { a } } fragment F on T { b }");
        assert_eq!(doc.fragments().count(), 1);
    }

    #[test]
    fn rejects_fragment_named_on() {
        let source = Source::new("fragment on on T { a }");
        let err = parse_document(&source).unwrap_err();
        assert!(err.message.contains("Unexpected"));
    }

    #[test]
    fn error_message_matches_expected_found_shape() {
        let source = Source::new("{ hello(world }");
        let err = parse_document(&source).unwrap_err();
        assert!(err.message.starts_with("Expected"), "got: {}", err.message);
    }

    #[test]
    fn missing_fragment_on_keyword_names_the_bare_keyword() {
        let source = Source::new("{ ...MissingOn }\nfragment MissingOn Type\n");
        let err = parse_document(&source).unwrap_err();
        assert!(
            err.describe(&source).contains("Syntax Error GraphQL (2:20) Expected \"on\", found Name \"Type\""),
            "got: {}",
            err.describe(&source)
        );
    }

    #[test]
    fn parses_list_and_object_values() {
        let doc = parse("{ f(a: [1, 2, 3], b: {x: 1, y: \"z\"}) }");
        let op = doc.operations().next().unwrap();
        let field = match &op.selection_set.items[0] {
            Selection::Field(f) => f,
            _ => panic!(),
        };
        assert_eq!(field.arguments.len(), 2);
    }
}
