use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Which stage of the front end rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No token rule matched at a position.
    Lex,
    /// The token stream does not match the grammar at a position.
    Parse,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::Parse,
            _ => ErrorKind::Lex,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::MalformedEscape { .. } => "MalformedEscape",
            ErrorImpl::MalformedChar { .. } => "MalformedChar",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, integers are decimal or use a 0x, 0b or 0o prefix followed by digits",
                token
            )),
            ErrorImpl::MalformedEscape { escape } => ErrorTip::Suggestion(format!(
                "Invalid escape: `{}`, use \\xHH, \\uHHHH, \\u{{H..}} or a single character",
                escape
            )),
            ErrorImpl::MalformedChar { token } => ErrorTip::Suggestion(format!(
                "Invalid char literal: `{}`, a char holds exactly one ASCII letter",
                token
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String is missing its closing `\"`"))
            }
            ErrorImpl::UnexpectedToken { expected, .. } => ErrorTip::Suggestion(format!(
                "Expected one of: {}",
                expected
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken {
        token: String,
        attempted: Vec<TokenKind>,
    },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("malformed escape sequence: {escape:?}")]
    MalformedEscape { escape: String },
    #[error("malformed char literal: {token:?}")]
    MalformedChar { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token {found} ({token:?}), expected one of {expected:?}")]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
        token: String,
    },
}
