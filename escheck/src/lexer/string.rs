//! Single- and double-quoted string literal lexing.

use crate::{
    cursor::{is_line_terminator, Cursor},
    error::{Diagnostic, ErrorKind},
    token::TokenKind,
};

/// Lexes a string literal. The cursor must be positioned at the opening
/// quote.
pub(super) fn lex(cursor: &mut Cursor<'_>) -> Result<(TokenKind, Option<Box<str>>), Diagnostic> {
    let start = cursor.pos();
    let quote = cursor.bump().expect("opening quote");
    let mut lexeme = String::new();
    lexeme.push(quote);

    loop {
        match cursor.peek() {
            None => {
                return Err(Diagnostic::new(
                    ErrorKind::LexerUnterminatedString,
                    start,
                    "unterminated string literal",
                ))
            }
            Some(c) if c == quote => {
                cursor.bump_if(quote);
                lexeme.push(c);
                break;
            }
            Some(c) if is_line_terminator(c) => {
                return Err(Diagnostic::new(
                    ErrorKind::LexerUnterminatedString,
                    start,
                    "line terminator in string literal",
                ))
            }
            Some('\\') => {
                lexeme.push(cursor.bump().expect("peeked"));
                match cursor.bump() {
                    Some(c) => lexeme.push(c),
                    None => {
                        return Err(Diagnostic::new(
                            ErrorKind::LexerUnterminatedString,
                            start,
                            "unterminated string literal",
                        ))
                    }
                }
            }
            Some(_) => lexeme.push(cursor.bump().expect("peeked")),
        }
    }

    Ok((TokenKind::String, Some(lexeme.into_boxed_str())))
}
