use std::fmt;

use crate::lexer::tokens::{Token, TokenKind};

use super::node::{Child, Node};

/// Tokens shown in S-expressions; phrases, quotes, signs and whitespace are
/// anonymous and left out.
fn is_named(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Identifier
            | TokenKind::UnsignedInteger
            | TokenKind::CharLiteral
            | TokenKind::StringContent
            | TokenKind::EscapeSequence
            | TokenKind::LineComment
    )
}

impl Node {
    /// Renders the tree as `(kind field: (child) ...)`.
    pub fn to_sexp(&self) -> String {
        self.to_string()
    }

    fn write_sexp(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind.name())?;

        for (index, child) in self.children.iter().enumerate() {
            let named = match child {
                Child::Token(token) => is_named(token),
                Child::Node(_) => true,
            };
            if !named {
                continue;
            }

            write!(f, " ")?;
            if let Some(field) = self.field_name_for(index) {
                write!(f, "{}: ", field.as_str())?;
            }

            match child {
                Child::Token(token) => write!(f, "({})", token.kind.sexp_name())?,
                Child::Node(node) => node.write_sexp(f)?,
            }
        }

        write!(f, ")")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sexp(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_source;

    #[test]
    fn test_display_matches_sexp() {
        let tree = parse_source("Hypersignal <(-.-)> io\n puts Jamsignal", None).unwrap();

        assert_eq!(
            format!("{}", tree),
            "(source_file (extern_definition (line_comment) name: (identifier)))"
        );
        assert_eq!(tree.to_sexp(), tree.to_string());
    }
}
