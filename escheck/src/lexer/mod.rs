//! The tokenizer: consumes a [`Cursor`](crate::cursor::Cursor) and emits one
//! [`Token`] at a time on demand.
//!
//! More information:
//!  - [ECMAScript Reference][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-lexical-grammar

mod identifier;
mod number;
mod operator;
mod regex;
mod string;
mod template;

use crate::{
    cursor::{is_line_terminator, is_whitespace, Cursor},
    error::{Diagnostic, ErrorKind},
    token::{Token, TokenKind},
};

/// Pull-based tokenizer. Remembers only the previously emitted token's
/// *kind* (see `SPEC_FULL.md` §9, open question 1), which is all `/`
/// disambiguation needs.
pub(crate) struct Lexer<'a> {
    cursor: Cursor<'a>,
    previous_kind: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Creates a tokenizer over `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            previous_kind: None,
        }
    }

    /// Returns the next token, or a lexical [`Diagnostic`] on failure.
    ///
    /// Skips whitespace and comments, records whether a line terminator was
    /// seen in that run, then dispatches on the first trivia-free byte.
    pub(crate) fn next_token(&mut self) -> Result<Token, Diagnostic> {
        self.skip_trivia()?;
        let preceded_by_newline = self.cursor.take_newline_flag();
        let start = self.cursor.pos();

        let (kind, lexeme) = match self.cursor.peek() {
            None => (TokenKind::Eof, None),
            Some(c) if crate::cursor::is_id_start(c) => identifier::lex(&mut self.cursor)?,
            Some(c) if c.is_ascii_digit() => number::lex(&mut self.cursor)?,
            Some(c) if c == '"' || c == '\'' => string::lex(&mut self.cursor)?,
            Some('`') => template::lex(&mut self.cursor)?,
            Some('/') if self.regex_allowed() => regex::lex(&mut self.cursor)?,
            Some(c) => operator::lex(&mut self.cursor, c)?,
        };

        let end = self.cursor.pos();
        let token = Token::new(kind, lexeme, start, end, preceded_by_newline);
        self.previous_kind = Some(kind);
        Ok(token)
    }

    /// Whether a `/` at the cursor should be read as the start of a regex
    /// literal, per the previously emitted token's kind.
    fn regex_allowed(&self) -> bool {
        self.previous_kind
            .is_none_or(|k| k.allows_following_regex())
    }

    /// Skips whitespace, line terminators, and comments. An unterminated
    /// block comment is a lexical error.
    fn skip_trivia(&mut self) -> Result<(), Diagnostic> {
        loop {
            match self.cursor.peek() {
                Some(c) if is_whitespace(c) || is_line_terminator(c) => {
                    self.cursor.bump();
                }
                Some('/') if self.cursor.peek2() == Some('/') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    while let Some(c) = self.cursor.peek() {
                        if is_line_terminator(c) {
                            break;
                        }
                        self.cursor.bump();
                    }
                }
                Some('/') if self.cursor.peek2() == Some('*') => {
                    let start = self.cursor.pos();
                    self.cursor.bump();
                    self.cursor.bump();
                    loop {
                        match self.cursor.peek() {
                            None => {
                                return Err(Diagnostic::new(
                                    ErrorKind::LexerUnterminatedString,
                                    start,
                                    "unterminated block comment",
                                ))
                            }
                            Some('*') if self.cursor.peek2() == Some('/') => {
                                self.cursor.bump();
                                self.cursor.bump();
                                break;
                            }
                            Some(_) => {
                                self.cursor.bump();
                            }
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }
}
