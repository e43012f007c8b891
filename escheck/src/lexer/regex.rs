//! Regular expression literal lexing.

use crate::{
    cursor::{is_line_terminator, Cursor},
    error::{Diagnostic, ErrorKind},
    token::TokenKind,
};

/// Lexes a regex literal. The cursor must be positioned at the opening `/`,
/// which the caller has already determined is in regex context.
pub(super) fn lex(cursor: &mut Cursor<'_>) -> Result<(TokenKind, Option<Box<str>>), Diagnostic> {
    let start = cursor.pos();
    let mut lexeme = String::new();
    lexeme.push(cursor.bump().expect("opening slash"));
    let mut in_class = false;

    loop {
        match cursor.peek() {
            None => {
                return Err(Diagnostic::new(
                    ErrorKind::LexerUnterminatedRegex,
                    start,
                    "unterminated regular expression literal",
                ))
            }
            Some(c) if is_line_terminator(c) => {
                return Err(Diagnostic::new(
                    ErrorKind::LexerUnterminatedRegex,
                    start,
                    "line terminator in regular expression literal",
                ))
            }
            Some('\\') => {
                lexeme.push(cursor.bump().expect("peeked"));
                match cursor.bump() {
                    Some(c) => lexeme.push(c),
                    None => {
                        return Err(Diagnostic::new(
                            ErrorKind::LexerUnterminatedRegex,
                            start,
                            "unterminated regular expression literal",
                        ))
                    }
                }
            }
            Some('[') => {
                in_class = true;
                lexeme.push(cursor.bump().expect("peeked"));
            }
            Some(']') if in_class => {
                in_class = false;
                lexeme.push(cursor.bump().expect("peeked"));
            }
            Some('/') if !in_class => {
                lexeme.push(cursor.bump().expect("peeked"));
                break;
            }
            Some(_) => lexeme.push(cursor.bump().expect("peeked")),
        }
    }

    while let Some(c) = cursor.peek() {
        if c.is_ascii_alphabetic() {
            lexeme.push(cursor.bump().expect("peeked"));
        } else {
            break;
        }
    }

    Ok((TokenKind::Regex, Some(lexeme.into_boxed_str())))
}

#[cfg(test)]
mod tests {
    use super::lex;
    use crate::{cursor::Cursor, error::ErrorKind};

    fn lex_str(s: &str) -> Box<str> {
        let mut cur = Cursor::new(s);
        lex(&mut cur).expect("should lex").1.expect("has lexeme")
    }

    #[test]
    fn plain_regex_with_flags() {
        assert_eq!(&*lex_str("/abc/gi"), "/abc/gi");
    }

    #[test]
    fn slash_inside_character_class_is_not_a_terminator() {
        assert_eq!(&*lex_str("/[a/b]/"), "/[a/b]/");
    }

    #[test]
    fn escaped_slash_is_not_a_terminator() {
        assert_eq!(&*lex_str(r"/a\/b/"), r"/a\/b/");
    }

    #[test]
    fn unterminated_regex_is_an_error() {
        let mut cur = Cursor::new("/abc");
        let err = lex(&mut cur).unwrap_err();
        assert_eq!(err.code(), ErrorKind::LexerUnterminatedRegex);
    }

    #[test]
    fn line_terminator_inside_regex_is_an_error() {
        let mut cur = Cursor::new("/abc\ndef/");
        let err = lex(&mut cur).unwrap_err();
        assert_eq!(err.code(), ErrorKind::LexerUnterminatedRegex);
    }
}
