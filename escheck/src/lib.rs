//! A hand-written, dependency-free syntactic validator for an
//! ECMAScript-like language.
//!
//! `validate` runs a source text through a context-sensitive, on-demand
//! tokenizer and a recursive-descent parser implementing the full expression
//! precedence ladder and automatic semicolon insertion. It builds no AST,
//! performs no evaluation or semantic analysis, and reports at most one
//! [`Diagnostic`] — the first syntax error encountered.
//!
//! More information:
//!  - [ECMAScript Language Specification][spec]
//!
//! [spec]: https://tc39.es/ecma262/

mod cursor;
mod error;
mod keyword;
mod lexer;
mod parser;
mod position;
mod punctuator;
mod token;

pub use error::{Diagnostic, ErrorKind};
pub use keyword::Keyword;
pub use position::Position;
pub use punctuator::Punctuator;
pub use token::{Token, TokenKind};

use parser::Parser;

/// Validates `source` against the grammar, returning the first syntax error
/// encountered, if any.
///
/// # Errors
///
/// Returns a [`Diagnostic`] describing the first lexical or syntax error in
/// `source`. An empty or whitespace-only source is valid.
pub fn validate(source: &str) -> Result<(), Diagnostic> {
    log::debug!("validating {} bytes of source", source.len());
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}
