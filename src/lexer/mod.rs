//! Lexical analysis module for the HSL front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of multi-word keyword phrases, identifiers and literals
//! - String bodies, split into content runs and escape sequences
//! - Whitespace and comments, kept as extras so the tree stays lossless
//! - Token position tracking for error reporting

pub mod lexer;
pub mod scanner;
pub mod tokens;
