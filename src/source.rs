//! Source text wrapping and byte-offset to line/column conversion.

use std::fmt;

/// A chunk of query text together with a name used in error messages.
///
/// `Source` is immutable once constructed. All positions produced by the
/// lexer and parser are byte offsets into `body`, and are converted to
/// 1-based `(line, column)` pairs on demand via [`Source::locate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Source<'a> {
    body: &'a str,
    name: &'a str,
}

/// A 1-based line/column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl<'a> Source<'a> {
    /// Wrap `body` with the default source name `"GraphQL"`, matching the
    /// reference implementation's default used in error messages.
    pub fn new(body: &'a str) -> Source<'a> {
        Source { body, name: "GraphQL" }
    }

    /// Wrap `body` with an explicit source name.
    pub fn with_name(body: &'a str, name: &'a str) -> Source<'a> {
        Source { body, name }
    }

    pub fn body(&self) -> &'a str {
        self.body
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Convert a byte offset into this source into a 1-based line/column.
    ///
    /// Both `\n` and `\r\n` count as a single line break. Offsets past the
    /// end of the body clamp to the position just after the last character.
    pub fn locate(&self, pos: usize) -> Location {
        let pos = pos.min(self.body.len());
        let mut line = 1;
        let mut line_start = 0;
        let bytes = self.body.as_bytes();

        let mut i = 0;
        while i < pos {
            match bytes[i] {
                b'\n' => {
                    line += 1;
                    i += 1;
                    line_start = i;
                }
                b'\r' => {
                    line += 1;
                    i += 1;
                    if i < bytes.len() && bytes[i] == b'\n' {
                        i += 1;
                    }
                    line_start = i;
                }
                _ => i += 1,
            }
        }

        // column is a character count, not a byte count.
        let column = self.body[line_start..pos].chars().count() + 1;
        Location { line, column }
    }

    /// The text of the line containing byte offset `pos`, without its
    /// trailing newline.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        self.body.split(|c| c == '\n').nth(line - 1).map(|l| l.trim_end_matches('\r'))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_first_line() {
        let src = Source::new("hello world");
        assert_eq!(src.locate(0), Location { line: 1, column: 1 });
        assert_eq!(src.locate(6), Location { line: 1, column: 7 });
    }

    #[test]
    fn locates_across_newlines() {
        let src = Source::new("a\nbc\nd");
        assert_eq!(src.locate(0), Location { line: 1, column: 1 });
        assert_eq!(src.locate(2), Location { line: 2, column: 1 });
        assert_eq!(src.locate(5), Location { line: 3, column: 1 });
    }

    #[test]
    fn locates_across_crlf() {
        let src = Source::new("a\r\nb");
        assert_eq!(src.locate(3), Location { line: 2, column: 1 });
    }
}
