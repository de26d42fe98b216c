use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Every fixed phrase of the language, paired with the terminal it lexes to.
///
/// No phrase is a prefix of another, so the order only matters for the
/// lexer's pattern table, which tries them in this order.
pub const PHRASES: &[(&str, TokenKind)] = &[
    ("Hypersignal", TokenKind::ExternOpen),
    ("Jamsignal", TokenKind::ExternClose),
    ("A long time ago in a", TokenKind::FuncOpen),
    ("far, far away...", TokenKind::FuncMid),
    ("May the force be with you.", TokenKind::FuncClose),
    ("Starfield", TokenKind::Variadic),
    ("Execute order", TokenKind::CallOpen),
    ("Order executed", TokenKind::CallClose),
    ("I am a big deal in the resistance.", TokenKind::DeclIntroResistance),
    ("The force is strong with this one.", TokenKind::DeclIntroForce),
    ("That's one hell of a pilot.", TokenKind::DeclIntroPilot),
    ("I am your father.", TokenKind::AssignFather),
    ("Judge me by my size, do you ?", TokenKind::AssignJudge),
    ("From a certain point of view.", TokenKind::BoolPointOfView),
    ("That's impossible!", TokenKind::BoolImpossible),
];

lazy_static! {
    pub static ref PHRASE_LOOKUP: HashMap<TokenKind, &'static str> =
        PHRASES.iter().map(|(phrase, kind)| (*kind, *phrase)).collect();
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Extras
    Whitespace,
    LineComment,

    // Definitions
    ExternOpen,  // Hypersignal
    ExternClose, // Jamsignal
    FuncOpen,    // A long time ago in a
    FuncMid,     // far, far away...
    FuncClose,   // May the force be with you.
    Variadic,    // Starfield

    // Statements
    CallOpen,  // Execute order
    CallClose, // Order executed
    DeclIntroResistance,
    DeclIntroForce,
    DeclIntroPilot,
    AssignFather,
    AssignJudge,

    // Literals
    BoolPointOfView,
    BoolImpossible,
    Identifier,
    UnsignedInteger,
    Minus,
    CharLiteral,
    StringQuote,
    StringContent,
    EscapeSequence,
}

impl TokenKind {
    /// Extras may sit between any two grammar tokens and never take part in
    /// rule matching.
    pub fn is_extra(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::LineComment)
    }

    /// The fixed spelling of a phrase terminal, `None` for pattern tokens.
    pub fn phrase(&self) -> Option<&'static str> {
        PHRASE_LOOKUP.get(self).copied()
    }

    /// Name used for this token kind in S-expression output.
    pub fn sexp_name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end",
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "line_comment",
            TokenKind::Identifier => "identifier",
            TokenKind::UnsignedInteger => "unsigned_integer",
            TokenKind::Minus => "-",
            TokenKind::CharLiteral => "char_literal",
            TokenKind::StringQuote => "\"",
            TokenKind::StringContent => "string_content",
            TokenKind::EscapeSequence => "escape_sequence",
            _ => self.phrase().unwrap_or("?"),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.phrase() {
            Some(phrase) => write!(f, "`{}`", phrase),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source slice this token covers.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {:?}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_extra(&self) -> bool {
        self.kind.is_extra()
    }
}
