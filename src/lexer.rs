use std::fmt;

use tracing::{debug, trace};

use crate::location::{self, SourceLocation, is_line_terminator};
use crate::source::Source;
use crate::token::{Token, TokenKind};

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// A leading `0` followed by another digit.
    UnexpectedDigitAfterZero(char),
    /// A digit was required; `None` means end of input.
    ExpectedDigit(Option<char>),
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedDigitAfterZero(ch) => {
                write!(f, "unexpected digit after 0: \"{ch}\"")
            }
            Self::ExpectedDigit(Some(ch)) if is_line_terminator(*ch) => {
                write!(f, "expected digit but got: \"{}\"", ch.escape_debug())
            }
            Self::ExpectedDigit(Some(ch)) => {
                write!(f, "expected digit but got: \"{ch}\"")
            }
            Self::ExpectedDigit(None) => {
                write!(f, "expected digit but got: EOF")
            }
        }
    }
}

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Line terminator or end of input inside a string literal.
    UnterminatedString,
    /// Unknown `\` escape or malformed `\uXXXX`.
    BadEscapeSequence,
    /// Malformed numeric literal.
    InvalidNumber(NumberError),
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "Unterminated string"),
            Self::BadEscapeSequence => {
                write!(f, "Bad character escape sequence")
            }
            Self::InvalidNumber(reason) => write!(f, "Invalid number, {reason}"),
            Self::UnexpectedCharacter(ch) => {
                write!(f, "Unexpected character \"{ch}\"")
            }
        }
    }
}

/// Error produced during lexing.
///
/// Displays as the full caret diagnostic, so it can be printed
/// without access to the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{rendered}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset of the offending character.
    pub offset: usize,
    pub location: SourceLocation,
    pub rendered: String,
}

impl LexError {
    fn new(source: &Source, kind: LexErrorKind, offset: usize) -> Self {
        let location = location::locate(source, offset);
        let rendered = location::highlight(source, location, &kind.to_string());
        Self {
            kind,
            offset,
            location,
            rendered,
        }
    }

    /// The bare message, without location or context lines.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Tokenize a whole document, ending with the EOF token.
///
/// # Errors
///
/// Returns the first `LexError` encountered; no tokens after it
/// are produced.
pub fn tokenize(source: &Source) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Scanner over one [`Source`].
///
/// Each call to [`Lexer::next_token`] resumes where the previous
/// token ended. Once EOF is reached every further call returns the
/// same EOF token. An error leaves the cursor in place.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a Source,
    body: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(source: &'a Source) -> Self {
        Self {
            source,
            body: source.body(),
            pos: 0,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &'a Source {
        self.source
    }

    /// Byte offset where the next scan starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Scan the next token.
    ///
    /// # Errors
    ///
    /// Returns `LexError` for unterminated strings, bad escapes,
    /// malformed numbers, and characters that start no token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.skip_ignored(self.pos);
        let result = self.read_token(start);

        match &result {
            Ok(token) => {
                trace!(
                    target: "graphql_lexer::lexer",
                    kind = %token.kind,
                    start = token.start,
                    end = token.end,
                    "token"
                );
                self.pos = token.end;
            }
            Err(err) => {
                debug!(
                    target: "graphql_lexer::lexer",
                    line = err.location.line,
                    column = err.location.column,
                    error = %err.kind,
                    "lex error"
                );
            }
        }

        result
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.body.get(pos..)?.chars().next()
    }

    fn error(&self, kind: LexErrorKind, offset: usize) -> LexError {
        LexError::new(self.source, kind, offset)
    }

    /// Skip whitespace, commas, BOMs, and line terminators.
    fn skip_ignored(&self, mut pos: usize) -> usize {
        while let Some(ch) = self.char_at(pos) {
            if !(matches!(ch, ' ' | '\t' | ',' | '\u{FEFF}') || is_line_terminator(ch)) {
                break;
            }
            pos += ch.len_utf8();
        }
        pos
    }

    fn read_token(&self, start: usize) -> Result<Token, LexError> {
        let Some(ch) = self.char_at(start) else {
            let end = self.body.len();
            return Ok(Token::empty(TokenKind::Eof, end, end));
        };

        match ch {
            '#' => Ok(self.read_comment(start)),
            '_' | 'A'..='Z' | 'a'..='z' => Ok(self.read_name(start)),
            '-' | '0'..='9' => self.read_number(start),
            '"' => self.read_string(start),
            '.' => self.read_spread(start),
            _ => TokenKind::punctuator(ch)
                .map(|kind| Token::empty(kind, start, start + 1))
                .ok_or_else(|| self.error(LexErrorKind::UnexpectedCharacter(ch), start)),
        }
    }

    /// `#` up to the next line terminator. The token range starts
    /// after the `#`.
    fn read_comment(&self, hash: usize) -> Token {
        let start = hash + 1;
        let end = self.body[start..]
            .find(is_line_terminator)
            .map_or(self.body.len(), |i| start + i);
        let text = &self.body[start..end];

        Token {
            kind: TokenKind::Comment,
            start,
            end,
            value: text.strip_prefix(' ').unwrap_or(text).to_string(),
        }
    }

    fn read_name(&self, start: usize) -> Token {
        let len = self.body[start..]
            .find(|c: char| c != '_' && !c.is_ascii_alphanumeric())
            .unwrap_or(self.body.len() - start);
        let end = start + len;

        Token {
            kind: TokenKind::Name,
            start,
            end,
            value: self.body[start..end].to_string(),
        }
    }

    /// Exactly three dots; any other run fails at the first one.
    fn read_spread(&self, start: usize) -> Result<Token, LexError> {
        if self.body[start..].starts_with("...") && self.char_at(start + 3) != Some('.') {
            Ok(Token::empty(TokenKind::Spread, start, start + 3))
        } else {
            Err(self.error(LexErrorKind::UnexpectedCharacter('.'), start))
        }
    }

    /// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`
    fn read_number(&self, start: usize) -> Result<Token, LexError> {
        let mut pos = start;
        let mut is_float = false;

        if self.char_at(pos) == Some('-') {
            pos += 1;
        }

        if self.char_at(pos) == Some('0') {
            pos += 1;
            if let Some(digit) = self.char_at(pos).filter(char::is_ascii_digit) {
                return Err(self.error(
                    LexErrorKind::InvalidNumber(NumberError::UnexpectedDigitAfterZero(digit)),
                    pos,
                ));
            }
        } else {
            pos = self.read_digits(pos)?;
        }

        if self.char_at(pos) == Some('.') {
            is_float = true;
            pos = self.read_digits(pos + 1)?;
        }

        if matches!(self.char_at(pos), Some('e' | 'E')) {
            is_float = true;
            pos += 1;
            if matches!(self.char_at(pos), Some('+' | '-')) {
                pos += 1;
            }
            pos = self.read_digits(pos)?;
        }

        Ok(Token {
            kind: if is_float {
                TokenKind::Float
            } else {
                TokenKind::Int
            },
            start,
            end: pos,
            value: self.body[start..pos].to_string(),
        })
    }

    /// One or more ASCII digits starting at `pos`; returns the offset
    /// after the last one.
    fn read_digits(&self, pos: usize) -> Result<usize, LexError> {
        match self.char_at(pos) {
            Some(ch) if ch.is_ascii_digit() => {
                let count = self.body[pos..]
                    .bytes()
                    .take_while(u8::is_ascii_digit)
                    .count();
                Ok(pos + count)
            }
            found => Err(self.error(
                LexErrorKind::InvalidNumber(NumberError::ExpectedDigit(found)),
                pos,
            )),
        }
    }

    fn read_string(&self, start: usize) -> Result<Token, LexError> {
        let mut pos = start + 1; // skip opening quote
        let mut value = String::new();

        loop {
            let Some(ch) = self.char_at(pos) else {
                return Err(self.error(LexErrorKind::UnterminatedString, pos));
            };
            match ch {
                '"' => break,
                '\\' => pos = self.read_escape(pos, &mut value)?,
                ch if is_line_terminator(ch) => {
                    return Err(self.error(LexErrorKind::UnterminatedString, pos));
                }
                ch => {
                    value.push(ch);
                    pos += ch.len_utf8();
                }
            }
        }

        Ok(Token {
            kind: TokenKind::String,
            start,
            end: pos + 1,
            value,
        })
    }

    /// Decode the escape whose backslash is at `pos` into `out` and
    /// return the offset after it. Failures point at the character
    /// following the backslash.
    fn read_escape(&self, pos: usize, out: &mut String) -> Result<usize, LexError> {
        let bad = || self.error(LexErrorKind::BadEscapeSequence, pos + 1);

        let decoded = match self.char_at(pos + 1) {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            // kept verbatim
            Some('/') => {
                out.push_str("\\/");
                return Ok(pos + 2);
            }
            Some('u') => {
                let ch = self
                    .body
                    .get(pos + 2..pos + 6)
                    .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    // lone surrogates decode to U+FFFD
                    .map(|code| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
                    .ok_or_else(bad)?;
                out.push(ch);
                return Ok(pos + 6);
            }
            _ => return Err(bad()),
        };

        out.push(decoded);
        Ok(pos + 2)
    }
}
