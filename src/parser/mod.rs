//! Parser module for building a Concrete Syntax Tree (CST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a lossless tree rooted at `source_file`. It handles:
//!
//! - Extern blocks and function definitions, with optional variadic suffixes
//! - Statements (function calls and declarations)
//! - Expressions (identifier references and literals)
//! - Attaching whitespace and comments to the enclosing node
//! - Reporting the first mismatch with the set of acceptable tokens
//!
//! Every choice is made on one token of look-ahead through lookup tables
//! keyed by token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
