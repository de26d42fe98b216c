//! Parser implementation for building the Concrete Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! Every rule is a recursive-descent function that builds its own node;
//! choices between rules are made on a single token of look-ahead through
//! the lookup tables in [`super::lookups`].
//!
//! Whitespace and comment tokens never take part in matching. Whenever a
//! rule consumes a token or starts a child node, the extras in front of it
//! are moved into the node being built, so the tree keeps every byte of the
//! source.

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, trace};

use crate::{
    cst::node::{Child, Node, NodeBuilder, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::lookups::{
    create_token_lookups, DefinitionHandler, DefinitionLookup, LiteralHandler, LiteralLookup,
    StmtHandler, StmtLookup,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, extras included
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Handlers for the top-level definitions
    definition_lookup: DefinitionLookup,
    /// Handlers for the statements allowed in a function body
    stmt_lookup: StmtLookup,
    /// Handlers for the literal forms
    literal_lookup: LiteralLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A stream that does not end in an EOF token gets one appended right
    /// after its last token.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            let span = Span {
                start: end.clone(),
                end,
            };
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), span));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            definition_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            literal_lookup: HashMap::new(),
        }
    }

    /// Index of the next token that is not an extra.
    fn significant_index(&self) -> usize {
        let mut index = self.pos;
        while index + 1 < self.tokens.len() && self.tokens[index].is_extra() {
            index += 1;
        }
        index
    }

    /// Returns the current token without advancing, skipping extras.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.significant_index()]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token at the cursor, extras included.
    pub fn raw_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Moves pending extras into `node`.
    pub fn flush_extras(&mut self, node: &mut NodeBuilder) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].is_extra() {
            node.push(Child::Token(self.tokens[self.pos].clone()));
            self.pos += 1;
        }
    }

    /// Consumes the current token into `node` and returns its child index.
    pub fn advance(&mut self, node: &mut NodeBuilder) -> usize {
        self.flush_extras(node);
        let token = self.raw_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        node.push(Child::Token(token))
    }

    /// Builds the error for a token none of `expected` matches.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        self.unexpected_token(self.current_token(), expected)
    }

    fn unexpected_token(&self, token: &Token, expected: &[TokenKind]) -> Error {
        let mut expected = expected.to_vec();
        expected.sort();
        expected.dedup();

        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: token.kind,
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    }

    /// Expects a token of the specified kind, reporting `expected` as the
    /// acceptable set when it is missing.
    pub fn expect_error(
        &mut self,
        node: &mut NodeBuilder,
        expected_kind: TokenKind,
        expected: &[TokenKind],
    ) -> Result<usize, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance(node))
    }

    /// Expects a token of the specified kind.
    pub fn expect(&mut self, node: &mut NodeBuilder, expected_kind: TokenKind) -> Result<usize, Error> {
        self.expect_error(node, expected_kind, &[expected_kind])
    }

    /// Expects any of `kinds`.
    pub fn expect_one_of(&mut self, node: &mut NodeBuilder, kinds: &[TokenKind]) -> Result<usize, Error> {
        if !self.current_token().is_one_of_many(kinds) {
            return Err(self.unexpected(kinds));
        }

        Ok(self.advance(node))
    }

    /// Expects `expected_kind` directly at the cursor with no extras in
    /// between, as string bodies require.
    pub fn expect_immediate(
        &mut self,
        node: &mut NodeBuilder,
        expected_kind: TokenKind,
        expected: &[TokenKind],
    ) -> Result<usize, Error> {
        let token = self.raw_token();
        if token.kind != expected_kind {
            return Err(self.unexpected_token(token, expected));
        }

        Ok(self.advance(node))
    }

    /// Parses a child node with `handler` and appends it to `node`.
    ///
    /// Extras in front of the child stay with `node`.
    pub fn child(
        &mut self,
        node: &mut NodeBuilder,
        handler: fn(&mut Parser) -> Result<Node, Error>,
    ) -> Result<usize, Error> {
        self.flush_extras(node);
        let child = handler(self)?;
        Ok(node.push(Child::Node(child)))
    }

    /// Position of the current token, used to place empty nodes.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Returns a reference to the definition lookup table.
    pub fn get_definition_lookup(&self) -> &DefinitionLookup {
        &self.definition_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the literal lookup table.
    pub fn get_literal_lookup(&self) -> &LiteralLookup {
        &self.literal_lookup
    }

    /// Registers a top-level definition handler for its opening token.
    pub fn definition(&mut self, kind: TokenKind, definition_fn: DefinitionHandler) {
        self.definition_lookup.insert(kind, definition_fn);
    }

    /// Registers a statement handler for its opening token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a literal handler for its leading token.
    pub fn literal(&mut self, kind: TokenKind, literal_fn: LiteralHandler) {
        self.literal_lookup.insert(kind, literal_fn);
    }

    /// Token kinds that can start a statement.
    pub fn stmt_starts(&self) -> Vec<TokenKind> {
        self.stmt_lookup.keys().copied().collect()
    }

    /// Token kinds that can start an expression.
    pub fn expression_starts(&self) -> Vec<TokenKind> {
        let mut starts: Vec<TokenKind> = self.literal_lookup.keys().copied().collect();
        starts.push(TokenKind::Identifier);
        starts
    }
}

fn parse_source_file(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = NodeBuilder::new(NodeKind::SourceFile);

    while parser.current_token_kind() != TokenKind::EOF {
        let handler = match parser.get_definition_lookup().get(&parser.current_token_kind()) {
            Some(handler) => *handler,
            None => {
                let mut expected: Vec<TokenKind> =
                    parser.get_definition_lookup().keys().copied().collect();
                expected.push(TokenKind::EOF);
                return Err(parser.unexpected(&expected));
            }
        };

        let index = parser.child(&mut node, handler)?;
        trace!(index, "definition parsed");
    }

    parser.flush_extras(&mut node);
    Ok(node.finish(Position(0, parser.get_file())))
}

/// Parses a stream of tokens into a Concrete Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses definitions until EOF. The
/// first mismatch aborts the parse.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, extras included
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    match parse_source_file(&mut parser) {
        Ok(tree) => {
            debug!(
                file = %parser.file,
                definitions = tree.child_nodes().count(),
                bytes = tree.span.len(),
                "parsed"
            );
            Ok(tree)
        }
        Err(error) => {
            debug!(file = %parser.file, error = %error, "parsing failed");
            Err(error)
        }
    }
}
