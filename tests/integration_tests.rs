//! Integration tests for the whole front end.
//!
//! These tests verify that source text goes through tokenization and parsing
//! into a lossless concrete syntax tree, and that failures surface the
//! leftmost error.

use hsl_syntax::{
    cst::{
        node::{Node, NodeKind},
        values::{char_value, integer_value, string_value},
    },
    errors::errors::{ErrorImpl, ErrorKind},
    get_line_at_position,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_source,
    parser::parser::parse,
};
use std::rc::Rc;

const PROGRAM: &str = r#"<(-.-)> Greets the galaxy, then counts down.
Hypersignal printf Starfield 1 puts Jamsignal

A long time ago in a countdown far, far away... Starfield 1
    The force is strong with this one. from Judge me by my size, do you ? 0x0A
    Execute order printf "%d\n" from Order executed
May the force be with you.

A long time ago in a main far, far away...
    I am a big deal in the resistance. greeting I am your father. "Hello, \u{1F30C}!"
    That's one hell of a pilot. initial I am your father. 'S'
    I am a big deal in the resistance. ready I am your father. From a certain point of view.
    Execute order puts greeting Order executed    <(-.-)> say hello
    Execute order countdown -1_000 0b1010 0o17 initial ready Order executed
May the force be with you.
"#;

fn collect<'a>(node: &'a Node, kind: NodeKind, out: &mut Vec<&'a Node>) {
    if node.kind == kind {
        out.push(node);
    }
    for child in node.child_nodes() {
        collect(child, kind, out);
    }
}

fn nodes_of(tree: &Node, kind: NodeKind) -> Vec<&Node> {
    let mut out = Vec::new();
    collect(tree, kind, &mut out);
    out
}

#[test]
fn test_parse_full_program() {
    let tree = parse_source(PROGRAM, Some("galaxy.hsl".to_string())).unwrap();

    assert_eq!(tree.kind, NodeKind::SourceFile);
    assert_eq!(tree.child_nodes().count(), 3);
    assert_eq!(nodes_of(&tree, NodeKind::FunctionDefinition).len(), 2);
    assert_eq!(nodes_of(&tree, NodeKind::Statement).len(), 7);
    assert_eq!(nodes_of(&tree, NodeKind::Declaration).len(), 4);
    assert_eq!(nodes_of(&tree, NodeKind::FunctionCall).len(), 3);
    assert_eq!(nodes_of(&tree, NodeKind::Variadic).len(), 2);
    assert_eq!(tree.span.start.1.as_str(), "galaxy.hsl");
}

#[test]
fn test_round_trip_is_lossless() {
    let tree = parse_source(PROGRAM, None).unwrap();

    assert_eq!(tree.text(), PROGRAM);
    assert_eq!(tree.span.len(), PROGRAM.len());

    let comments = tree
        .tokens()
        .into_iter()
        .filter(|token| token.kind == TokenKind::LineComment)
        .count();
    assert_eq!(comments, 2);
}

#[test]
fn test_reparse_is_idempotent() {
    let tree = parse_source(PROGRAM, None).unwrap();
    let reparsed = parse_source(&tree.text(), None).unwrap();

    assert_eq!(reparsed, tree);
    assert_eq!(reparsed.to_sexp(), tree.to_sexp());
}

#[test]
fn test_tokenize_then_parse_matches_parse_source() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();
    let tree = parse(tokens, Rc::new("shell".to_string())).unwrap();

    assert_eq!(tree, parse_source(PROGRAM, None).unwrap());
    assert_eq!(tree.span.start.1.as_str(), "shell");
}

#[test]
fn test_literal_values() {
    let tree = parse_source(PROGRAM, None).unwrap();

    let integers: Vec<i128> = nodes_of(&tree, NodeKind::Integer)
        .into_iter()
        .filter_map(integer_value)
        .collect();
    assert_eq!(integers, vec![10, -1000, 10, 15]);

    let strings: Vec<String> = nodes_of(&tree, NodeKind::String)
        .into_iter()
        .filter_map(string_value)
        .collect();
    assert_eq!(strings, vec!["%d\n".to_string(), "Hello, \u{1F30C}!".to_string()]);

    let chars: Vec<char> = nodes_of(&tree, NodeKind::Char)
        .into_iter()
        .filter_map(char_value)
        .collect();
    assert_eq!(chars, vec!['S']);

    assert_eq!(nodes_of(&tree, NodeKind::Bool).len(), 1);
}

#[test]
fn test_parse_error_before_lex_error_wins() {
    let source = "Jamsignal @";
    let error = parse_source(source, None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Parse);
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_lex_error_before_parse_error_wins() {
    let source = "Hypersignal foo @ Jamsignal";
    let error = parse_source(source, None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(error.get_position().0, 16);
    assert!(matches!(
        error.get_error(),
        ErrorImpl::UnrecognisedToken { token, .. } if token == "@"
    ));
}

#[test]
fn test_malformed_escape_is_reported() {
    let source = r#"A long time ago in a main far, far away...
    Execute order puts "bad \xg" Order executed
May the force be with you."#;
    let error = parse_source(source, None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(error.get_error_name(), "MalformedEscape");
    assert_eq!(error.get_position().offset(), source.find("\\xg").unwrap() + 2);
}

#[test]
fn test_malformed_number_is_reported() {
    for number in ["0x", "0b12", "12ab"] {
        let source = format!("Hypersignal f Starfield {} Jamsignal", number);
        let error = parse_source(&source, None).unwrap_err();

        assert_eq!(error.get_error_name(), "MalformedNumber");
        assert_eq!(error.get_position().0, 24);
    }
}

#[test]
fn test_error_line_lookup() {
    let source = "Hypersignal puts Jamsignal\nA long time ago in a main far, far away...\n    Execute order Order executed\nMay the force be with you.\n";
    let error = parse_source(source, None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Parse);
    let (line_number, line, column) =
        get_line_at_position(source, error.get_position().offset()).unwrap();
    assert_eq!(line_number, 3);
    assert_eq!(line, "    Execute order Order executed\n");
    assert_eq!(column, 18);
}
