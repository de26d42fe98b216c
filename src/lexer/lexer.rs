use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PATTERN, MK_TOKEN,
};

use super::{
    scanner::{DefaultStringScanner, StringContentScanner},
    tokens::{Token, TokenKind, PHRASES},
};

pub type RegexHandler = fn(&mut Lexer, &Regex, TokenKind) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    kind: TokenKind,
    handler: RegexHandler,
}

lazy_static! {
    /// Patterns in priority order; the first one matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = {
        let mut patterns = vec![
            MK_PATTERN!(r"\s+", TokenKind::Whitespace, default_handler),
            MK_PATTERN!(r"<\(-\.-\)>[^\r\n]*", TokenKind::LineComment, default_handler),
        ];

        for (phrase, kind) in PHRASES {
            patterns.push(MK_PATTERN!(phrase_regex(phrase), *kind, default_handler));
        }

        patterns.push(MK_PATTERN!(r"[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier, default_handler));
        patterns.push(MK_PATTERN!(
            r"0x[0-9a-fA-F_]+|0b[01_]+|0o[0-7_]+|[0-9][0-9_]*",
            TokenKind::UnsignedInteger,
            number_handler
        ));
        patterns.push(MK_PATTERN!(r"-[0-9]", TokenKind::Minus, minus_handler));
        patterns.push(MK_PATTERN!(r"'", TokenKind::CharLiteral, char_handler));
        patterns.push(MK_PATTERN!("\"", TokenKind::StringQuote, string_handler));
        patterns
    };

    static ref CHAR_REGEX: Regex = Regex::new(r"\A'[a-zA-Z]'").unwrap();
    static ref ESCAPE_REGEX: Regex =
        Regex::new(r"\A\\(?:u\{[0-9a-fA-F]+\}|u[0-9a-fA-F]{4}|x[0-9a-fA-F]{2}|[^xu])").unwrap();
}

/// Phrases ending in a letter must not run into a following identifier
/// character, so `Hypersignals` stays an identifier.
fn phrase_regex(phrase: &str) -> String {
    let escaped = regex::escape(phrase);
    if phrase.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        format!(r"{}\b", escaped)
    } else {
        escaped
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
    scanner: Box<dyn StringContentScanner>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        Lexer::with_scanner(source, file, Box::new(DefaultStringScanner))
    }

    pub fn with_scanner(
        source: String,
        file: Option<String>,
        scanner: Box<dyn StringContentScanner>,
    ) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
            scanner,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    pub fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: self.position(start),
            end: self.position(end),
        }
    }

    /// Emits a token of `len` bytes at the cursor and moves past it.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        let value = String::from(&self.source[self.pos..self.pos + len]);
        let span = self.span(self.pos, self.pos + len);
        self.push(MK_TOKEN!(kind, value, span));
        self.advance_n(len);
    }

    /// Lexes the whole source, leaving the tokens in the lexer.
    ///
    /// On failure the tokens produced so far are kept and can be recovered
    /// with [`Lexer::into_partial_tokens`].
    pub fn run(&mut self) -> Result<(), Error> {
        while !self.at_eof() {
            let pattern = PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()));

            match pattern {
                Some(pattern) => (pattern.handler)(self, &pattern.regex, pattern.kind)?,
                None => {
                    let token = self.remainder().chars().next().map(String::from).unwrap_or_default();
                    let attempted = PATTERNS.iter().map(|pattern| pattern.kind).collect();
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token, attempted },
                        self.position(self.pos),
                    ));
                }
            }
        }

        let span = self.span(self.pos, self.pos);
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), span));
        Ok(())
    }

    /// The token stream of a successful [`Lexer::run`].
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The tokens lexed before a failure, closed by an EOF at `offset`.
    pub fn into_partial_tokens(mut self, offset: usize) -> Vec<Token> {
        let span = self.span(offset, offset);
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), span));
        self.tokens
    }
}

fn default_handler(lexer: &mut Lexer, regex: &Regex, kind: TokenKind) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).map(|m| m.end()).unwrap_or(0);
    lexer.emit(kind, matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex, kind: TokenKind) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).map(|m| m.end()).unwrap_or(0);

    // A bare `0x` would otherwise lex as `0` followed by the identifier `x`.
    // The same rule rejects `0b12` and `12ab` instead of splitting them.
    let rest = &lexer.remainder()[matched..];
    if rest.starts_with(is_identifier_char) {
        let tail = rest.find(|c: char| !is_identifier_char(c)).unwrap_or(rest.len());
        return Err(Error::new(
            ErrorImpl::MalformedNumber {
                token: String::from(&lexer.remainder()[..matched + tail]),
            },
            lexer.position(lexer.pos),
        ));
    }

    lexer.emit(kind, matched);
    Ok(())
}

fn minus_handler(lexer: &mut Lexer, _regex: &Regex, kind: TokenKind) -> Result<(), Error> {
    lexer.emit(kind, 1);
    Ok(())
}

fn char_handler(lexer: &mut Lexer, _regex: &Regex, kind: TokenKind) -> Result<(), Error> {
    if CHAR_REGEX.is_match(lexer.remainder()) {
        lexer.emit(kind, 3);
        return Ok(());
    }

    let token: String = lexer.remainder().chars().take(3).collect();
    let offending = match lexer.remainder()[1..].chars().next() {
        Some(c) if c.is_ascii_alphabetic() => 2,
        _ => 1,
    };

    Err(Error::new(
        ErrorImpl::MalformedChar { token },
        lexer.position(lexer.pos + offending),
    ))
}

/// Offset, relative to the character after the backslash, of the first
/// character that breaks an escape sequence.
fn escape_error_offset(body: &str) -> usize {
    let bytes = body.as_bytes();
    let is_hex = |i: usize| bytes.get(i).is_some_and(|b| b.is_ascii_hexdigit());

    match bytes.first() {
        Some(b'x') => (1..3).find(|&i| !is_hex(i)).unwrap_or(3),
        Some(b'u') if bytes.get(1) == Some(&b'{') => {
            let mut i = 2;
            while is_hex(i) {
                i += 1;
            }
            i
        }
        Some(b'u') => (1..5).find(|&i| !is_hex(i)).unwrap_or(5),
        _ => 0,
    }
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex, kind: TokenKind) -> Result<(), Error> {
    lexer.emit(kind, 1);

    let mut after_escape = false;

    loop {
        let rest = lexer.remainder();

        if rest.is_empty() {
            return Err(Error::new(ErrorImpl::UnterminatedString, lexer.position(lexer.pos)));
        }

        if rest.starts_with('"') {
            lexer.emit(TokenKind::StringQuote, 1);
            return Ok(());
        }

        if rest.starts_with('\\') {
            if rest.len() == 1 {
                return Err(Error::new(ErrorImpl::UnterminatedString, lexer.position(lexer.source.len())));
            }

            let escape_len = match ESCAPE_REGEX.find(rest) {
                Some(m) => m.end(),
                None => {
                    let offset = escape_error_offset(&rest[1..]) + 1;
                    let mut escape = String::from(&rest[..offset.min(rest.len())]);
                    escape.extend(rest[offset.min(rest.len())..].chars().next());
                    return Err(Error::new(
                        ErrorImpl::MalformedEscape { escape },
                        lexer.position(lexer.pos + offset),
                    ));
                }
            };

            // Two escapes in a row are separated by an empty content token.
            if after_escape {
                lexer.emit(TokenKind::StringContent, 0);
            }

            lexer.emit(TokenKind::EscapeSequence, escape_len);
            after_escape = true;
            continue;
        }

        let content_len = match lexer.scanner.scan_content(rest) {
            Some(len) => len,
            None => {
                return Err(Error::new(ErrorImpl::UnterminatedString, lexer.position(lexer.source.len())));
            }
        };

        let valid = content_len > 0
            && content_len <= rest.len()
            && rest.is_char_boundary(content_len)
            && !rest[..content_len].contains(|c: char| c == '"' || c == '\\');

        if !valid {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: rest.chars().next().map(String::from).unwrap_or_default(),
                    attempted: vec![TokenKind::StringContent],
                },
                lexer.position(lexer.pos),
            ));
        }

        lexer.emit(TokenKind::StringContent, content_len);
        after_escape = false;
    }
}

/// Tokenizes a source unit with the default string scanner.
///
/// The returned stream includes whitespace and comment tokens and always
/// ends with an EOF token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with_scanner(source, file, Box::new(DefaultStringScanner))
}

pub fn tokenize_with_scanner(
    source: String,
    file: Option<String>,
    scanner: Box<dyn StringContentScanner>,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::with_scanner(source, file, scanner);

    if let Err(error) = lex.run() {
        debug!(file = %lex.file, error = %error, "tokenizing failed");
        return Err(error);
    }

    debug!(
        file = %lex.file,
        bytes = lex.source.len(),
        tokens = lex.tokens.len(),
        "tokenized"
    );
    Ok(lex.tokens)
}
