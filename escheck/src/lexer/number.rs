//! Numeric literal lexing: decimal, hex, octal, binary, fraction, exponent.
//!
//! Maximal munch only — the value is never validated or computed, matching
//! the non-goal in `SPEC_FULL.md` §1 ("evaluation of numeric or string escape
//! semantics").

use crate::{cursor::Cursor, error::Diagnostic, token::TokenKind};

fn consume_while(cursor: &mut Cursor<'_>, buf: &mut String, pred: impl Fn(char) -> bool) {
    while let Some(c) = cursor.peek() {
        if pred(c) {
            buf.push(cursor.bump().expect("peeked"));
        } else {
            break;
        }
    }
}

/// Lexes a numeric literal. The cursor must be positioned at the leading
/// ASCII digit.
pub(super) fn lex(cursor: &mut Cursor<'_>) -> Result<(TokenKind, Option<Box<str>>), Diagnostic> {
    let mut lexeme = String::new();
    lexeme.push(cursor.bump().expect("leading digit"));

    if lexeme == "0" {
        match cursor.peek() {
            Some('x' | 'X') => {
                lexeme.push(cursor.bump().expect("peeked"));
                consume_while(cursor, &mut lexeme, |c| c.is_ascii_hexdigit());
                return Ok((TokenKind::Number, Some(lexeme.into_boxed_str())));
            }
            Some('b' | 'B') => {
                lexeme.push(cursor.bump().expect("peeked"));
                consume_while(cursor, &mut lexeme, |c| c == '0' || c == '1');
                return Ok((TokenKind::Number, Some(lexeme.into_boxed_str())));
            }
            Some('o' | 'O') => {
                lexeme.push(cursor.bump().expect("peeked"));
                consume_while(cursor, &mut lexeme, |c| ('0'..='7').contains(&c));
                return Ok((TokenKind::Number, Some(lexeme.into_boxed_str())));
            }
            _ => {}
        }
    }

    consume_while(cursor, &mut lexeme, |c| c.is_ascii_digit());

    if cursor.peek() == Some('.') && cursor.peek2().is_some_and(|c| c.is_ascii_digit()) {
        if cursor.bump_if('.') {
            lexeme.push('.');
        }
        consume_while(cursor, &mut lexeme, |c| c.is_ascii_digit());
    }

    if matches!(cursor.peek(), Some('e' | 'E')) && exponent_follows(cursor) {
        lexeme.push(cursor.bump().expect("peeked")); // e/E
        if matches!(cursor.peek(), Some('+' | '-')) {
            lexeme.push(cursor.bump().expect("peeked"));
        }
        consume_while(cursor, &mut lexeme, |c| c.is_ascii_digit());
    }

    Ok((TokenKind::Number, Some(lexeme.into_boxed_str())))
}

/// Looks ahead (without consuming) to check that `[eE][+-]?digit` actually
/// follows, so a bare trailing `e` (as in `1e` with nothing after) is left
/// for the caller rather than swallowed.
fn exponent_follows(cursor: &Cursor<'_>) -> bool {
    let mut chars = cursor.rest().chars();
    chars.next(); // the 'e'/'E' itself
    let mut next = chars.next();
    if matches!(next, Some('+' | '-')) {
        next = chars.next();
    }
    next.is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::lex;
    use crate::cursor::Cursor;

    fn lex_str(s: &str) -> Box<str> {
        let mut cur = Cursor::new(s);
        lex(&mut cur).expect("should lex").1.expect("has lexeme")
    }

    #[test]
    fn decimal_integer() {
        assert_eq!(&*lex_str("42"), "42");
    }

    #[test]
    fn decimal_fraction() {
        assert_eq!(&*lex_str("3.14"), "3.14");
    }

    #[test]
    fn dot_without_following_digit_stops_before_dot() {
        assert_eq!(&*lex_str("3.toString"), "3");
    }

    #[test]
    fn exponent() {
        assert_eq!(&*lex_str("1e10"), "1e10");
        assert_eq!(&*lex_str("1e+10"), "1e+10");
        assert_eq!(&*lex_str("1e-10"), "1e-10");
    }

    #[test]
    fn bare_trailing_e_is_not_consumed() {
        assert_eq!(&*lex_str("1e"), "1");
    }

    #[test]
    fn hex_octal_binary_prefixes() {
        assert_eq!(&*lex_str("0xFF"), "0xFF");
        assert_eq!(&*lex_str("0o17"), "0o17");
        assert_eq!(&*lex_str("0b101"), "0b101");
    }
}
