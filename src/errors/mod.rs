//! Error types and error handling for the HSL front end.
//!
//! This module defines the error types produced while turning source text
//! into a concrete syntax tree. It includes:
//!
//! - Error structures with source position information
//! - Lexing variants (unrecognised input, malformed literals and escapes)
//! - The parsing variant carrying the set of acceptable token kinds
//! - Helpful suggestions for callers that render diagnostics

pub mod errors;
