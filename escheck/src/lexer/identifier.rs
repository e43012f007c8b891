//! Identifier and keyword lexing, including `\uXXXX` escapes.

use crate::{
    cursor::{is_id_continue, Cursor},
    error::{Diagnostic, ErrorKind},
    keyword::Keyword,
    token::TokenKind,
};

/// Lexes an identifier, contextual keyword, reserved keyword, or one of the
/// `true`/`false`/`null`/`undefined` literal kinds. The cursor must be
/// positioned at an identifier-start character.
pub(super) fn lex(cursor: &mut Cursor<'_>) -> Result<(TokenKind, Option<Box<str>>), Diagnostic> {
    let mut lexeme = String::new();

    loop {
        match cursor.peek() {
            Some('\\') if cursor.peek2() == Some('u') => {
                let escape_start = cursor.pos();
                lexeme.push(cursor.bump().expect("peeked"));
                lexeme.push(cursor.bump().expect("peeked"));
                for _ in 0..4 {
                    match cursor.peek() {
                        Some(h) if h.is_ascii_hexdigit() => lexeme.push(cursor.bump().expect("peeked")),
                        _ => {
                            return Err(Diagnostic::new(
                                ErrorKind::LexerInvalidUnicodeEscape,
                                escape_start,
                                "invalid unicode escape in identifier, expected four hex digits",
                            ))
                        }
                    }
                }
            }
            Some(c) if is_id_continue(c) => lexeme.push(cursor.bump().expect("peeked")),
            _ => break,
        }
    }

    Ok((classify(&lexeme), Some(lexeme.into_boxed_str())))
}

fn classify(lexeme: &str) -> TokenKind {
    match lexeme {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "undefined" => TokenKind::Undefined,
        _ => lexeme
            .parse::<Keyword>()
            .map_or(TokenKind::Identifier, TokenKind::Keyword),
    }
}

#[cfg(test)]
mod tests {
    use super::lex;
    use crate::{cursor::Cursor, keyword::Keyword, token::TokenKind};

    fn lex_str(s: &str) -> (TokenKind, Option<Box<str>>) {
        let mut cur = Cursor::new(s);
        lex(&mut cur).expect("should lex")
    }

    #[test]
    fn plain_identifier() {
        let (kind, lexeme) = lex_str("fooBar123");
        assert_eq!(kind, TokenKind::Identifier);
        assert_eq!(lexeme.as_deref(), Some("fooBar123"));
    }

    #[test]
    fn reserved_keyword() {
        assert_eq!(lex_str("return").0, TokenKind::Keyword(Keyword::Return));
    }

    #[test]
    fn contextual_keyword() {
        assert_eq!(lex_str("async").0, TokenKind::Keyword(Keyword::Async));
    }

    #[test]
    fn literal_keywords_are_their_own_kind() {
        assert_eq!(lex_str("true").0, TokenKind::True);
        assert_eq!(lex_str("false").0, TokenKind::False);
        assert_eq!(lex_str("null").0, TokenKind::Null);
        assert_eq!(lex_str("undefined").0, TokenKind::Undefined);
    }

    #[test]
    fn unicode_escape_in_identifier() {
        let source = "a\\u0062c";
        let (kind, lexeme) = lex_str(source);
        assert_eq!(kind, TokenKind::Identifier);
        assert_eq!(lexeme.as_deref(), Some(source));
    }

    #[test]
    fn invalid_unicode_escape_is_an_error() {
        let mut cur = Cursor::new(r"\u12");
        assert!(lex(&mut cur).is_err());
    }
}
