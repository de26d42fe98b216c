use crate::{
    cst::node::{FieldName, Node, NodeBuilder, NodeKind},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

const DECL_INTROS: &[TokenKind] = &[
    TokenKind::DeclIntroResistance,
    TokenKind::DeclIntroForce,
    TokenKind::DeclIntroPilot,
];

const DECL_ASSIGNS: &[TokenKind] = &[TokenKind::AssignFather, TokenKind::AssignJudge];

pub fn parse_extern_definition(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::ExternDefinition);
    parser.expect(&mut node, TokenKind::ExternOpen)?;

    let mut expected = vec![TokenKind::Identifier, TokenKind::ExternClose];
    while parser.current_token_kind() != TokenKind::ExternClose {
        let name = parser.expect_error(&mut node, TokenKind::Identifier, &expected)?;
        node.field(FieldName::Name, name);

        if parser.current_token_kind() == TokenKind::Variadic {
            parser.child(&mut node, parse_variadic)?;
            expected = vec![TokenKind::Identifier, TokenKind::ExternClose];
        } else {
            expected = vec![TokenKind::Identifier, TokenKind::Variadic, TokenKind::ExternClose];
        }
    }

    parser.expect(&mut node, TokenKind::ExternClose)?;
    Ok(node.finish(parser.get_position()))
}

pub fn parse_function_definition(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::FunctionDefinition);
    parser.expect(&mut node, TokenKind::FuncOpen)?;

    let name = parser.expect(&mut node, TokenKind::Identifier)?;
    node.field(FieldName::Name, name);

    parser.expect(&mut node, TokenKind::FuncMid)?;

    let mut expected = parser.stmt_starts();
    expected.push(TokenKind::FuncClose);

    if parser.current_token_kind() == TokenKind::Variadic {
        parser.child(&mut node, parse_variadic)?;
    } else {
        expected.push(TokenKind::Variadic);
    }

    while parser.current_token_kind() != TokenKind::FuncClose {
        if !parser.get_stmt_lookup().contains_key(&parser.current_token_kind()) {
            return Err(parser.unexpected(&expected));
        }

        parser.child(&mut node, parse_stmt)?;

        expected = parser.stmt_starts();
        expected.push(TokenKind::FuncClose);
    }

    parser.expect(&mut node, TokenKind::FuncClose)?;
    Ok(node.finish(parser.get_position()))
}

pub fn parse_variadic(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::Variadic);
    parser.expect(&mut node, TokenKind::Variadic)?;

    let count = parser.expect(&mut node, TokenKind::UnsignedInteger)?;
    node.field(FieldName::Variadic, count);

    Ok(node.finish(parser.get_position()))
}

/// Wraps whichever statement the current token opens.
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let handler = match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected(&parser.stmt_starts())),
    };

    let mut node = NodeBuilder::new(NodeKind::Statement);
    parser.child(&mut node, handler)?;
    Ok(node.finish(parser.get_position()))
}

pub fn parse_declaration(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::Declaration);

    parser.expect_one_of(&mut node, DECL_INTROS)?;
    parser.expect(&mut node, TokenKind::Identifier)?;
    parser.expect_one_of(&mut node, DECL_ASSIGNS)?;
    parser.child(&mut node, parse_expr)?;

    Ok(node.finish(parser.get_position()))
}

pub fn parse_function_call(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::FunctionCall);
    parser.expect(&mut node, TokenKind::CallOpen)?;

    let name = parser.expect(&mut node, TokenKind::Identifier)?;
    node.field(FieldName::Name, name);

    while parser.current_token_kind() != TokenKind::CallClose {
        let kind = parser.current_token_kind();
        if kind != TokenKind::Identifier && !parser.get_literal_lookup().contains_key(&kind) {
            let mut expected = parser.expression_starts();
            expected.push(TokenKind::CallClose);
            return Err(parser.unexpected(&expected));
        }

        parser.child(&mut node, parse_expr)?;
    }

    parser.expect(&mut node, TokenKind::CallClose)?;
    Ok(node.finish(parser.get_position()))
}
