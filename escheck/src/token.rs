//! The [`Token`] and [`TokenKind`] types produced by the tokenizer.

use crate::{keyword::Keyword, position::Position, punctuator::Punctuator};
use std::fmt;

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input. A valid token kind, not a sentinel error.
    Eof,
    /// An identifier, including contextual keywords used as identifiers.
    Identifier,
    /// A numeric literal (decimal, hex, octal, or binary).
    Number,
    /// A single- or double-quoted string literal.
    String,
    /// A template literal (substitutions are lexed opaquely).
    Template,
    /// A regular expression literal.
    Regex,
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// The literal `null`.
    Null,
    /// The literal `undefined`.
    Undefined,
    /// A reserved or contextual keyword.
    Keyword(Keyword),
    /// An operator or punctuator.
    Punctuator(Punctuator),
}

impl TokenKind {
    /// A short human-readable name for this kind, used in diagnostics.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Eof => "end of input".to_owned(),
            Self::Identifier => "identifier".to_owned(),
            Self::Number => "number".to_owned(),
            Self::String => "string".to_owned(),
            Self::Template => "template literal".to_owned(),
            Self::Regex => "regular expression".to_owned(),
            Self::True => "true".to_owned(),
            Self::False => "false".to_owned(),
            Self::Null => "null".to_owned(),
            Self::Undefined => "undefined".to_owned(),
            Self::Keyword(kw) => format!("keyword '{kw}'"),
            Self::Punctuator(p) => format!("'{p}'"),
        }
    }

    /// Returns `true` if a `/` immediately following a token of this kind
    /// should be read as a regex literal rather than division.
    #[must_use]
    pub const fn allows_following_regex(self) -> bool {
        match self {
            Self::Punctuator(p) => p.allows_following_regex(),
            Self::Keyword(kw) => matches!(kw, Keyword::Return | Keyword::Throw),
            _ => false,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A single lexical token: its kind, the exact source slice that produced it
/// (when meaningful), its span, and whether a line terminator preceded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    /// The exact source slice, kept only for kinds whose text isn't implied
    /// by the kind itself (identifiers, literals); `None` for punctuators and
    /// keywords, whose spelling is recovered from `kind` alone.
    lexeme: Option<Box<str>>,
    start: Position,
    end: Position,
    preceded_by_newline: bool,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        lexeme: Option<Box<str>>,
        start: Position,
        end: Position,
        preceded_by_newline: bool,
    ) -> Self {
        Self {
            kind,
            lexeme,
            start,
            end,
            preceded_by_newline,
        }
    }

    /// The token's kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token, if retained.
    #[must_use]
    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    /// The position of the token's first byte.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// The position one byte past the token's last byte.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Whether at least one line terminator appeared in the whitespace/comment
    /// run immediately preceding this token.
    #[must_use]
    pub const fn preceded_by_newline(&self) -> bool {
        self.preceded_by_newline
    }
}
