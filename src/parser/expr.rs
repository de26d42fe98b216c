use crate::{
    cst::node::{Node, NodeBuilder, NodeKind},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

const STRING_PARTS: &[TokenKind] = &[
    TokenKind::StringContent,
    TokenKind::EscapeSequence,
    TokenKind::StringQuote,
];

pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::Expression);
    let kind = parser.current_token_kind();

    if kind == TokenKind::Identifier {
        parser.advance(&mut node);
    } else if parser.get_literal_lookup().contains_key(&kind) {
        parser.child(&mut node, parse_literal)?;
    } else {
        return Err(parser.unexpected(&parser.expression_starts()));
    }

    Ok(node.finish(parser.get_position()))
}

pub fn parse_literal(parser: &mut Parser) -> Result<Node, Error> {
    let handler = match parser.get_literal_lookup().get(&parser.current_token_kind()) {
        Some(handler) => *handler,
        None => {
            let expected: Vec<TokenKind> = parser.get_literal_lookup().keys().copied().collect();
            return Err(parser.unexpected(&expected));
        }
    };

    let mut node = NodeBuilder::new(NodeKind::Literal);
    parser.child(&mut node, handler)?;
    Ok(node.finish(parser.get_position()))
}

pub fn parse_integer(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::Integer);

    if parser.current_token_kind() == TokenKind::Minus {
        parser.advance(&mut node);
        // The sign and the digits are written together.
        parser.expect_immediate(&mut node, TokenKind::UnsignedInteger, &[TokenKind::UnsignedInteger])?;
    } else {
        parser.expect(&mut node, TokenKind::UnsignedInteger)?;
    }

    Ok(node.finish(parser.get_position()))
}

pub fn parse_string(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::String);
    parser.expect(&mut node, TokenKind::StringQuote)?;

    loop {
        match parser.raw_token().kind {
            TokenKind::StringContent | TokenKind::EscapeSequence => {
                parser.advance(&mut node);
            }
            _ => break,
        }
    }

    parser.expect_immediate(&mut node, TokenKind::StringQuote, STRING_PARTS)?;
    Ok(node.finish(parser.get_position()))
}

pub fn parse_char(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::Char);
    parser.expect(&mut node, TokenKind::CharLiteral)?;
    Ok(node.finish(parser.get_position()))
}

/// Bool literals keep only their spelling; no truth value is implied.
pub fn parse_bool(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::Bool);
    parser.expect_one_of(
        &mut node,
        &[TokenKind::BoolPointOfView, TokenKind::BoolImpossible],
    )?;
    Ok(node.finish(parser.get_position()))
}
