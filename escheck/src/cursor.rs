//! The source cursor: owns the input text and tracks byte offset, line, and
//! column, normalizing `\r`, `\n`, and `\r\n` to a single line increment each.

use crate::position::Position;

/// Cursor over the source text.
pub(crate) struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
    /// Sticky flag: set by [`Cursor::bump`] whenever it consumes a line
    /// terminator, and left set until [`Cursor::take_newline_flag`] reads and
    /// clears it. This lets the tokenizer accumulate "was there a newline in
    /// the trivia I just skipped" across any number of whitespace/comment
    /// runs with a single read at the end.
    newline_seen: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            newline_seen: false,
        }
    }

    /// The cursor's current position.
    pub(crate) fn pos(&self) -> Position {
        Position::new(self.line, self.column, self.offset as u32)
    }

    /// The remainder of the source starting at the cursor's current offset.
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Peeks the next char without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peeks the char after the next one without consuming anything.
    pub(crate) fn peek2(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next()?;
        chars.next()
    }

    /// Returns `true` if no input remains.
    pub(crate) fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Consumes and returns the next char, updating line/column/offset and
    /// the sticky newline flag. `\r\n` is consumed as a single logical line
    /// terminator.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let mut chars = self.rest().chars();
        let ch = chars.next()?;
        self.offset += ch.len_utf8();

        match ch {
            '\r' => {
                if self.peek() == Some('\n') {
                    self.offset += 1;
                }
                self.newline_seen = true;
                self.line += 1;
                self.column = 1;
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                self.newline_seen = true;
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }

        Some(ch)
    }

    /// Consumes the next char only if it equals `expected`.
    pub(crate) fn bump_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes `n` bytes' worth of ASCII-prefix input (used after a
    /// maximal-munch table lookup already validated the exact bytes).
    pub(crate) fn bump_str(&mut self, s: &str) {
        for _ in s.chars() {
            self.bump();
        }
    }

    /// Reads and clears the sticky newline flag.
    pub(crate) fn take_newline_flag(&mut self) -> bool {
        std::mem::take(&mut self.newline_seen)
    }
}

/// ECMAScript `WhiteSpace`: space, tab, vertical tab, form feed, NBSP, BOM,
/// and the U+2000–U+200A block. Does not include line terminators.
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{0020}' | '\u{00A0}' | '\u{FEFF}')
        || ('\u{2000}'..='\u{200A}').contains(&c)
}

/// ECMAScript `LineTerminator`: LF, CR, U+2028, U+2029.
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Approximate identifier-start classification (see `SPEC_FULL.md` §9):
/// ASCII letter, `$`, `_`, or any byte ≥0x80 up to 0xFFFF.
pub(crate) fn is_id_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '$' || c == '_' || (c as u32) >= 0x80 && (c as u32) <= 0xFFFF
}

/// Approximate identifier-continue classification: identifier-start plus
/// ASCII digits.
pub(crate) fn is_id_continue(c: char) -> bool {
    is_id_start(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::{is_line_terminator, is_whitespace, Cursor};

    #[test]
    fn tracks_offset_per_byte() {
        let mut cur = Cursor::new("ab");
        assert_eq!(cur.pos().offset(), 0);
        cur.bump();
        assert_eq!(cur.pos().offset(), 1);
        cur.bump();
        assert_eq!(cur.pos().offset(), 2);
        assert!(cur.is_eof());
    }

    #[test]
    fn collapses_crlf_to_one_line() {
        let mut cur = Cursor::new("a\r\nb");
        cur.bump(); // 'a'
        assert_eq!(cur.pos().line(), 1);
        cur.bump(); // '\r\n' together
        assert_eq!(cur.pos().line(), 2);
        assert_eq!(cur.pos().column(), 1);
        assert_eq!(cur.pos().offset(), 3);
    }

    #[test]
    fn lone_cr_and_lf_each_count_once() {
        let mut cur = Cursor::new("\r\n");
        cur.bump();
        assert_eq!(cur.pos().line(), 2);
        assert!(cur.is_eof());
    }

    #[test]
    fn newline_flag_is_sticky_until_read() {
        let mut cur = Cursor::new("a\nb c");
        cur.bump();
        assert!(!cur.take_newline_flag());
        cur.bump();
        cur.bump();
        assert!(cur.take_newline_flag());
        assert!(!cur.take_newline_flag());
    }

    #[test]
    fn whitespace_set_excludes_line_terminators() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('\n'));
        assert!(is_line_terminator('\n'));
        assert!(is_line_terminator('\u{2028}'));
    }
}
