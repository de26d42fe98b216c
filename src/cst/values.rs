//! Literal value decoding.
//!
//! The tree keeps literals exactly as written. These helpers turn integer,
//! string and char nodes into values for tools that need them. Bool
//! literals are left alone: the grammar gives them no truth value.

use crate::lexer::tokens::TokenKind;

use super::node::{Node, NodeKind};

/// The value of an `Integer` node, or `None` if it does not fit in `i128`.
pub fn integer_value(node: &Node) -> Option<i128> {
    if node.kind != NodeKind::Integer {
        return None;
    }

    let tokens = node.tokens();
    let negative = tokens.iter().any(|token| token.kind == TokenKind::Minus);
    let digits = tokens
        .iter()
        .find(|token| token.kind == TokenKind::UnsignedInteger)?;

    let magnitude = unsigned_value(&digits.value)?;
    if negative {
        0i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    }
}

fn unsigned_value(text: &str) -> Option<u128> {
    let (radix, body) = match text.get(..2) {
        Some("0x") => (16, &text[2..]),
        Some("0b") => (2, &text[2..]),
        Some("0o") => (8, &text[2..]),
        _ => (10, text),
    };

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() {
        return None;
    }

    u128::from_str_radix(&digits, radix).ok()
}

/// The decoded contents of a `String` node.
///
/// Returns `None` when an escape names something that is not a Unicode
/// scalar value, such as `\u{D800}`.
pub fn string_value(node: &Node) -> Option<String> {
    if node.kind != NodeKind::String {
        return None;
    }

    let mut result = String::new();

    for token in node.tokens() {
        match token.kind {
            TokenKind::StringContent => result.push_str(&token.value),
            TokenKind::EscapeSequence => result.push(decode_escape(&token.value)?),
            _ => (),
        }
    }

    Some(result)
}

fn decode_escape(escape: &str) -> Option<char> {
    let body = escape.strip_prefix('\\')?;
    let mut chars = body.chars();

    match chars.next()? {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        'x' => char::from_u32(u32::from_str_radix(&body[1..], 16).ok()?),
        'u' => {
            let hex = body[1..].trim_start_matches('{').trim_end_matches('}');
            char::from_u32(u32::from_str_radix(hex, 16).ok()?)
        }
        // `\\`, `\"`, `\'` and any other escaped character stand for themselves
        other => Some(other),
    }
}

/// The letter held by a `Char` node.
pub fn char_value(node: &Node) -> Option<char> {
    if node.kind != NodeKind::Char {
        return None;
    }

    let token = node
        .tokens()
        .into_iter()
        .find(|token| token.kind == TokenKind::CharLiteral)?;
    token.value.chars().nth(1)
}

#[cfg(test)]
mod tests {
    use crate::{cst::node::ExpressionRef, parse_source};

    use super::*;

    fn first_literal(source: &str) -> Node {
        let program = format!(
            "A long time ago in a main far, far away... That's one hell of a pilot. x I am your father. {} May the force be with you.",
            source
        );
        let tree = parse_source(&program, None).unwrap();
        let declaration = tree.child_nodes().next().unwrap().child_nodes().next().unwrap().child_nodes().next().unwrap();
        let expression = declaration.child_nodes().next().unwrap();

        match expression.as_expression().unwrap() {
            ExpressionRef::Literal(literal) => literal.child_nodes().next().unwrap().clone(),
            ExpressionRef::Identifier(token) => panic!("expected a literal, found {}", token.value),
        }
    }

    #[test]
    fn test_integer_values() {
        assert_eq!(integer_value(&first_literal("42")), Some(42));
        assert_eq!(integer_value(&first_literal("-7")), Some(-7));
        assert_eq!(integer_value(&first_literal("0x1F_2a")), Some(0x1F2a));
        assert_eq!(integer_value(&first_literal("0b1010")), Some(10));
        assert_eq!(integer_value(&first_literal("0o17")), Some(15));
        assert_eq!(integer_value(&first_literal("1_000_000")), Some(1_000_000));
    }

    #[test]
    fn test_integer_value_limits() {
        assert_eq!(
            integer_value(&first_literal("-170141183460469231731687303715884105728")),
            Some(i128::MIN)
        );
        assert_eq!(
            integer_value(&first_literal("170141183460469231731687303715884105727")),
            Some(i128::MAX)
        );
        assert_eq!(
            integer_value(&first_literal("170141183460469231731687303715884105728")),
            None
        );
        assert_eq!(
            integer_value(&first_literal("-170141183460469231731687303715884105729")),
            None
        );
        assert_eq!(integer_value(&first_literal("-0")), Some(0));
    }

    #[test]
    fn test_integer_without_digits() {
        assert_eq!(unsigned_value("0x_"), None);
        assert_eq!(unsigned_value("0b__"), None);
    }

    #[test]
    fn test_string_values() {
        assert_eq!(string_value(&first_literal(r#""a\nb""#)).as_deref(), Some("a\nb"));
        assert_eq!(string_value(&first_literal(r#""""#)).as_deref(), Some(""));
        assert_eq!(
            string_value(&first_literal(r#""\x41B\u{43}\"\\\q""#)).as_deref(),
            Some("ABC\"\\q")
        );
        assert_eq!(string_value(&first_literal(r#""\u{D800}""#)), None);
    }

    #[test]
    fn test_char_value() {
        assert_eq!(char_value(&first_literal("'q'")), Some('q'));
        assert_eq!(integer_value(&first_literal("'q'")), None);
    }
}
