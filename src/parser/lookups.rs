use std::collections::HashMap;

use crate::{cst::node::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

pub type DefinitionHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type LiteralHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Definitions
    parser.definition(TokenKind::ExternOpen, parse_extern_definition);
    parser.definition(TokenKind::FuncOpen, parse_function_definition);

    // Statements
    parser.stmt(TokenKind::CallOpen, parse_function_call);
    parser.stmt(TokenKind::DeclIntroResistance, parse_declaration);
    parser.stmt(TokenKind::DeclIntroForce, parse_declaration);
    parser.stmt(TokenKind::DeclIntroPilot, parse_declaration);

    // Literals
    parser.literal(TokenKind::Minus, parse_integer);
    parser.literal(TokenKind::UnsignedInteger, parse_integer);
    parser.literal(TokenKind::StringQuote, parse_string);
    parser.literal(TokenKind::CharLiteral, parse_char);
    parser.literal(TokenKind::BoolPointOfView, parse_bool);
    parser.literal(TokenKind::BoolImpossible, parse_bool);
}

// Lookup tables inside parser struct, so it's easier
pub type DefinitionLookup = HashMap<TokenKind, DefinitionHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type LiteralLookup = HashMap<TokenKind, LiteralHandler>;
