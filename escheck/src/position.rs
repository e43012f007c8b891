//! A position in the source text.
//!
//! More information:
//!  - [ECMAScript Reference][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-lexical-grammar

use std::{fmt, num::NonZeroU32};

/// A 1-based line/column position plus a 0-based byte offset into the source.
///
/// ## Similar implementations
/// [V8: Location](https://cs.chromium.org/chromium/src/v8/src/parsing/scanner.h?type=cs&q=isValid+Location&g=0&l=216)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    line: NonZeroU32,
    column: NonZeroU32,
    offset: u32,
}

impl Position {
    /// Creates a new `Position`.
    ///
    /// # Panics
    ///
    /// Panics if `line` or `column` is 0 — both are defined to start at 1.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line: NonZeroU32::new(line).expect("line number cannot be 0"),
            column: NonZeroU32::new(column).expect("column number cannot be 0"),
            offset,
        }
    }

    /// The start position: line 1, column 1, offset 0.
    #[inline]
    #[must_use]
    pub const fn start() -> Self {
        Self {
            // SAFETY: 1 is non-zero.
            line: unsafe { NonZeroU32::new_unchecked(1) },
            column: unsafe { NonZeroU32::new_unchecked(1) },
            offset: 0,
        }
    }

    /// Gets the 1-based line number.
    #[inline]
    #[must_use]
    pub const fn line(self) -> u32 {
        self.line.get()
    }

    /// Gets the 1-based column number.
    #[inline]
    #[must_use]
    pub const fn column(self) -> u32 {
        self.column.get()
    }

    /// Gets the 0-based byte offset into the source.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    #[should_panic]
    fn invalid_position_column() {
        Position::new(10, 0, 0);
    }

    #[test]
    #[should_panic]
    fn invalid_position_line() {
        Position::new(0, 10, 0);
    }

    #[test]
    fn position_equality() {
        assert_eq!(Position::new(10, 50, 80), Position::new(10, 50, 80));
        assert_ne!(Position::new(10, 50, 80), Position::new(10, 51, 81));
    }

    #[test]
    fn position_order() {
        assert!(Position::new(10, 50, 80) < Position::new(10, 51, 81));
        assert!(Position::new(9, 50, 80) < Position::new(10, 50, 200));
    }

    #[test]
    fn position_getters() {
        let pos = Position::new(10, 50, 200);
        assert_eq!(pos.line(), 10);
        assert_eq!(pos.column(), 50);
        assert_eq!(pos.offset(), 200);
    }

    #[test]
    fn position_to_string() {
        assert_eq!("10:50", Position::new(10, 50, 200).to_string());
    }

    #[test]
    fn start_position() {
        let pos = Position::start();
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 1);
        assert_eq!(pos.offset(), 0);
    }
}
