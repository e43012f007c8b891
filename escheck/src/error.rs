//! Diagnostics produced by the tokenizer and parser.

use crate::position::Position;
use std::{error::Error as StdError, fmt};

/// The maximum encoded length, in bytes, of a [`Diagnostic`] message.
const MAX_MESSAGE_BYTES: usize = 255;

/// The kind of error carried by a [`Diagnostic`].
///
/// Mirrors the `ErrorCode` enumeration of the original hand-written
/// implementation this validator is modeled on, including the two CLI-level
/// variants (`FileRead`, `OutOfMemory`) that the library itself never
/// constructs but that keep the enumeration complete for callers that map
/// I/O failures onto the same diagnostic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ErrorKind {
    /// No error occurred. Never carried by a [`Diagnostic`] returned from
    /// `validate` — present only for parity with the source enumeration.
    None,
    LexerInvalidChar,
    /// Also used for an unterminated block comment.
    LexerUnterminatedString,
    LexerUnterminatedRegex,
    LexerInvalidNumber,
    LexerInvalidUnicodeEscape,
    ParserUnexpectedToken,
    ParserExpectedToken,
    ParserInvalidAssignment,
    ParserMissingSemicolon,
    ParserUnexpectedEof,
    /// Never constructed by the library; reserved for CLI-level I/O errors.
    FileRead,
    /// Never constructed by the library; reserved for parity with the
    /// original allocator-failure case, which cannot occur under Rust's
    /// allocator (it aborts instead of returning an error).
    OutOfMemory,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::LexerInvalidChar => "invalid character",
            Self::LexerUnterminatedString => "unterminated string or comment",
            Self::LexerUnterminatedRegex => "unterminated regular expression",
            Self::LexerInvalidNumber => "invalid number",
            Self::LexerInvalidUnicodeEscape => "invalid unicode escape",
            Self::ParserUnexpectedToken => "unexpected token",
            Self::ParserExpectedToken => "expected token",
            Self::ParserInvalidAssignment => "invalid assignment target",
            Self::ParserMissingSemicolon => "missing semicolon",
            Self::ParserUnexpectedEof => "unexpected end of input",
            Self::FileRead => "file read error",
            Self::OutOfMemory => "out of memory",
        };
        f.write_str(s)
    }
}

/// A diagnostic describing why `validate` rejected a source text.
///
/// Messages are human-readable and may mention the observed token kind; they
/// are not a machine-stable format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: ErrorKind,
    position: Position,
    message: Box<str>,
}

impl Diagnostic {
    /// Creates a new diagnostic, truncating `message` to
    /// [`MAX_MESSAGE_BYTES`] at a `char` boundary if it is too long.
    #[must_use]
    pub fn new(code: ErrorKind, position: Position, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.len() > MAX_MESSAGE_BYTES {
            let mut cut = MAX_MESSAGE_BYTES;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }
        Self {
            code,
            position,
            message: message.into_boxed_str(),
        }
    }

    /// The kind of error.
    #[must_use]
    pub const fn code(&self) -> ErrorKind {
        self.code
    }

    /// The position the error was reported at.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error at line {}, column {}: {}",
            self.position.line(),
            self.position.column(),
            self.message
        )
    }
}

impl StdError for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, ErrorKind};
    use crate::position::Position;

    #[test]
    fn truncates_overlong_messages() {
        let long = "x".repeat(1000);
        let diag = Diagnostic::new(ErrorKind::LexerInvalidChar, Position::start(), long);
        assert!(diag.message().len() <= 255);
    }

    #[test]
    fn display_matches_cli_format() {
        let diag = Diagnostic::new(
            ErrorKind::ParserMissingSemicolon,
            Position::new(3, 7, 20),
            "expected ';'",
        );
        assert_eq!(diag.to_string(), "Error at line 3, column 7: expected ';'");
    }
}
