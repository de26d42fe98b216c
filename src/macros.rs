//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer and parser:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored lexer pattern bound to a handler
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The exact source text of the token
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "luke".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer pattern that only matches at the start of the remaining
/// input.
///
/// # Arguments
///
/// * `$regex` - The pattern source, without anchoring
/// * `$kind` - The TokenKind the pattern produces
/// * `$handler` - The handler invoked when the pattern matches
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier, default_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:expr, $kind:expr, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(&format!(r"\A(?:{})", $regex)).unwrap(),
            kind: $kind,
            handler: $handler,
        }
    };
}
