//! Maximal-munch operator/punctuator recognition.

use crate::{
    error::{Diagnostic, ErrorKind},
    punctuator::{MULTI_CHAR, SINGLE_CHAR},
    token::TokenKind,
    cursor::Cursor,
};

/// Matches the longest punctuator starting at the cursor. `first` is the
/// already-peeked (but not consumed) next char.
pub(super) fn lex(
    cursor: &mut Cursor<'_>,
    first: char,
) -> Result<(TokenKind, Option<Box<str>>), Diagnostic> {
    let rest = cursor.rest();

    for (lexeme, punct) in MULTI_CHAR {
        if rest.starts_with(lexeme) {
            cursor.bump_str(lexeme);
            return Ok((TokenKind::Punctuator(*punct), None));
        }
    }

    for (ch, punct) in SINGLE_CHAR {
        if first == *ch {
            cursor.bump();
            return Ok((TokenKind::Punctuator(*punct), None));
        }
    }

    let pos = cursor.pos();
    Err(Diagnostic::new(
        ErrorKind::LexerInvalidChar,
        pos,
        format!("unexpected character '{first}'"),
    ))
}

#[cfg(test)]
mod tests {
    use super::lex;
    use crate::{cursor::Cursor, punctuator::Punctuator, token::TokenKind};

    fn lex_one(s: &str) -> TokenKind {
        let mut cur = Cursor::new(s);
        let first = cur.peek().unwrap();
        lex(&mut cur, first).expect("should lex").0
    }

    #[test]
    fn three_char_before_two_before_one() {
        assert_eq!(lex_one("==="), TokenKind::Punctuator(Punctuator::StrictEq));
        assert_eq!(lex_one("=="), TokenKind::Punctuator(Punctuator::Eq));
        assert_eq!(lex_one("="), TokenKind::Punctuator(Punctuator::Assign));
    }

    #[test]
    fn four_char_ushr_assign() {
        assert_eq!(lex_one(">>>="), TokenKind::Punctuator(Punctuator::AssignUShr));
    }

    #[test]
    fn unknown_byte_is_an_error() {
        let mut cur = Cursor::new("@");
        assert!(lex(&mut cur, '@').is_err());
    }
}
