#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{cst::node::Node, errors::errors::Error};

pub mod cst;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source unit, tagged with the unit's file label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn offset(&self) -> usize {
        self.0 as usize
    }
}

/// Half-open byte range `[start, end)` of a token or node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset()..self.end.offset()
    }

    pub fn len(&self) -> usize {
        self.end.offset() - self.start.offset()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tokenizes and parses one HSL source unit.
///
/// Lexing is done up front. When it fails, the tokens produced before the
/// failure are still parsed so that a grammar error sitting before the bad
/// character wins, the same as a pull-based lexer would report.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Node, Error> {
    let mut lexer = lexer::lexer::Lexer::new(String::from(source), file);

    match lexer.run() {
        Ok(()) => {
            let file = lexer.file();
            parser::parser::parse(lexer.into_tokens(), file)
        }
        Err(lex_error) => {
            let file = lexer.file();
            let lex_offset = lex_error.get_position().offset();
            let partial = lexer.into_partial_tokens(lex_offset);

            match parser::parser::parse(partial, file) {
                Err(parse_error) if parse_error.get_position().offset() < lex_offset => {
                    Err(parse_error)
                }
                _ => Err(lex_error),
            }
        }
    }
}

/// Finds the line holding `position`.
///
/// Returns the 1-based line number, the line text (including its terminator)
/// and the column of `position` within that line. The end-of-input offset
/// resolves to the last line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        let at_unterminated_end =
            end == source.len() && position == end && !line.ends_with('\n');

        if (start..end).contains(&position) || at_unterminated_end {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // Empty source, or end-of-input just after a trailing newline.
    Some((line_number, String::new(), 0))
}

#[cfg(test)]
mod tests {
    use super::get_line_at_position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let source = "Hypersignal foo";
        let (line_number, line, line_pos) = get_line_at_position(source, source.len()).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hypersignal foo");
        assert_eq!(line_pos, 15);

        let (line_number, line, line_pos) = get_line_at_position("a\n", 2).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        assert!(get_line_at_position("abc", 4).is_none());
    }
}
