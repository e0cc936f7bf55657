use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `}`
    BraceR,
    /// `|`
    Pipe,
    /// Identifier matching `[_A-Za-z][_0-9A-Za-z]*`.
    Name,
    /// Integer literal.
    Int,
    /// Literal with a fractional or exponent part.
    Float,
    /// Double-quoted string; the token value is decoded.
    String,
    /// `# ...` up to the end of the line.
    Comment,
}

impl TokenKind {
    /// Human-readable name used in parser messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Bang => "!",
            Self::Dollar => "$",
            Self::ParenL => "(",
            Self::ParenR => ")",
            Self::Spread => "...",
            Self::Colon => ":",
            Self::Equals => "=",
            Self::At => "@",
            Self::BracketL => "[",
            Self::BracketR => "]",
            Self::BraceL => "{",
            Self::BraceR => "}",
            Self::Pipe => "|",
            Self::Name => "Name",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Comment => "Comment",
        }
    }

    /// Fixed-text tokens carry an empty value.
    #[must_use]
    pub const fn is_punctuation(self) -> bool {
        !matches!(
            self,
            Self::Eof | Self::Name | Self::Int | Self::Float | Self::String | Self::Comment
        )
    }

    /// Kind of a single-character punctuator.
    pub(crate) const fn punctuator(ch: char) -> Option<Self> {
        Some(match ch {
            '!' => Self::Bang,
            '$' => Self::Dollar,
            '(' => Self::ParenL,
            ')' => Self::ParenR,
            ':' => Self::Colon,
            '=' => Self::Equals,
            '@' => Self::At,
            '[' => Self::BracketL,
            ']' => Self::BracketR,
            '{' => Self::BraceL,
            '}' => Self::BraceR,
            '|' => Self::Pipe,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A single token with its kind, byte range, and value.
///
/// `start..end` indexes the source body. `value` is empty for
/// punctuation and EOF, the raw lexeme for names, numbers, and
/// comments, and the decoded contents for strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl Token {
    pub(crate) const fn empty(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            value: String::new(),
        }
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} \"{}\"", self.kind, self.value)
        }
    }
}
