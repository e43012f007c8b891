//! Statement-form parsers, one per production named in `SPEC_FULL.md` §4.3.

use super::Parser;
use crate::{
    error::{Diagnostic, ErrorKind},
    keyword::Keyword,
    punctuator::Punctuator,
    token::TokenKind,
};

impl<'a> Parser<'a> {
    /// Dispatches on the current token's kind to the matching statement-form
    /// parser, falling back to an expression statement.
    pub(super) fn parse_statement_inner(&mut self) -> Result<(), Diagnostic> {
        match self.current.kind() {
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const) => {
                self.parse_variable_declaration()
            }
            TokenKind::Keyword(Keyword::Function) => self.parse_function_declaration(),
            TokenKind::Keyword(Keyword::Class) => self.parse_class_declaration(),
            TokenKind::Keyword(Keyword::If) => self.parse_if_statement(),
            TokenKind::Keyword(Keyword::While) => self.parse_while_statement(),
            TokenKind::Keyword(Keyword::Do) => self.parse_do_while_statement(),
            TokenKind::Keyword(Keyword::For) => self.parse_for_statement(),
            TokenKind::Keyword(Keyword::Switch) => self.parse_switch_statement(),
            TokenKind::Keyword(kw) if kw.is_restricted_production() => {
                self.parse_restricted_production_statement(kw)
            }
            TokenKind::Keyword(Keyword::Try) => self.parse_try_statement(),
            TokenKind::Punctuator(Punctuator::OpenBlock) => self.parse_block_statement(),
            TokenKind::Punctuator(Punctuator::Semicolon) => self.advance(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `var|let|const` identifier list, each with an optional initializer.
    fn parse_variable_declaration(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // var | let | const
        self.parse_variable_declarators()?;
        self.consume_semicolon()
    }

    /// A comma-separated list of `identifier (= assignment-expression)?`.
    pub(super) fn parse_variable_declarators(&mut self) -> Result<(), Diagnostic> {
        loop {
            self.expect_identifier_like()?;
            if self.matches_punct(Punctuator::Assign)? {
                self.parse_assignment_expression()?;
            }
            if !self.matches_punct(Punctuator::Comma)? {
                break;
            }
        }
        Ok(())
    }

    pub(super) fn parse_function_declaration(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // function
        if matches!(self.current.kind(), TokenKind::Identifier)
            || matches!(self.current.kind(), TokenKind::Keyword(k) if k.is_contextual())
        {
            self.advance()?;
        }
        self.parse_parameter_list_and_body()
    }

    fn parse_class_declaration(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // class
        self.expect_identifier_like()?;
        if self.check_keyword(Keyword::Extends) {
            self.advance()?;
            self.parse_left_hand_side_expression()?;
        }
        self.expect_punct(Punctuator::OpenBlock)?;
        while !self.check_punct(Punctuator::CloseBlock) && self.current.kind() != TokenKind::Eof {
            if self.matches_punct(Punctuator::Semicolon)? {
                continue;
            }
            self.parse_class_member()?;
        }
        self.expect_punct(Punctuator::CloseBlock)
    }

    /// Recognizes a class member by a permissive shape: an optional leading
    /// `static`/`get`/`set` modifier, a name, then either a method body or a
    /// field with an optional initializer.
    fn parse_class_member(&mut self) -> Result<(), Diagnostic> {
        if self.check_keyword(Keyword::Static)
            || self.check_keyword(Keyword::Get)
            || self.check_keyword(Keyword::Set)
        {
            self.advance()?;
        }
        if self.matches_punct(Punctuator::OpenBracket)? {
            self.parse_assignment_expression()?;
            self.expect_punct(Punctuator::CloseBracket)?;
        } else {
            match self.current.kind() {
                TokenKind::Identifier | TokenKind::Keyword(_) | TokenKind::String | TokenKind::Number => {
                    self.advance()?;
                }
                other => {
                    return Err(self.error_at_current(
                        ErrorKind::ParserUnexpectedToken,
                        format!("unexpected token {other} in class body"),
                    ))
                }
            }
        }
        if self.check_punct(Punctuator::OpenParen) {
            self.parse_parameter_list_and_body()
        } else {
            if self.matches_punct(Punctuator::Assign)? {
                self.parse_assignment_expression()?;
            }
            self.consume_semicolon()
        }
    }

    fn parse_if_statement(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // if
        self.expect_punct(Punctuator::OpenParen)?;
        self.parse_expression()?;
        self.expect_punct(Punctuator::CloseParen)?;
        self.parse_statement()?;
        if self.check_keyword(Keyword::Else) {
            self.advance()?;
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_while_statement(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // while
        self.expect_punct(Punctuator::OpenParen)?;
        self.parse_expression()?;
        self.expect_punct(Punctuator::CloseParen)?;
        self.parse_statement()
    }

    fn parse_do_while_statement(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // do
        self.parse_statement()?;
        if !self.check_keyword(Keyword::While) {
            return Err(self.error_at_current(
                ErrorKind::ParserExpectedToken,
                "expected 'while' after do-while body",
            ));
        }
        self.advance()?;
        self.expect_punct(Punctuator::OpenParen)?;
        self.parse_expression()?;
        self.expect_punct(Punctuator::CloseParen)?;
        self.consume_semicolon()
    }

    /// Recognizes the 3-clause `for (init; test; update)` form and the
    /// `for (var|let|const identifier in|of expr)` iteration form. Per
    /// `SPEC_FULL.md` §9, only a single declarator is recognized in the
    /// declaration position of either form.
    fn parse_for_statement(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // for
        self.expect_punct(Punctuator::OpenParen)?;

        if matches!(
            self.current.kind(),
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const)
        ) {
            self.advance()?;
            self.expect_identifier_like()?;
            if self.check_keyword(Keyword::In) || self.check_keyword(Keyword::Of) {
                self.advance()?;
                self.parse_assignment_expression()?;
                self.expect_punct(Punctuator::CloseParen)?;
                return self.parse_statement();
            }
            if self.matches_punct(Punctuator::Assign)? {
                self.parse_assignment_expression()?;
            }
        } else if self.check_punct(Punctuator::Semicolon) {
            // empty init
        } else {
            self.parse_expression()?;
        }
        self.expect_punct(Punctuator::Semicolon)?;

        if !self.check_punct(Punctuator::Semicolon) {
            self.parse_expression()?;
        }
        self.expect_punct(Punctuator::Semicolon)?;

        if !self.check_punct(Punctuator::CloseParen) {
            self.parse_expression()?;
        }
        self.expect_punct(Punctuator::CloseParen)?;

        self.parse_statement()
    }

    fn parse_switch_statement(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // switch
        self.expect_punct(Punctuator::OpenParen)?;
        self.parse_expression()?;
        self.expect_punct(Punctuator::CloseParen)?;
        self.expect_punct(Punctuator::OpenBlock)?;

        while !self.check_punct(Punctuator::CloseBlock) && self.current.kind() != TokenKind::Eof {
            if self.check_keyword(Keyword::Case) {
                self.advance()?;
                self.parse_expression()?;
                self.expect_punct(Punctuator::Colon)?;
            } else if self.check_keyword(Keyword::Default) {
                self.advance()?;
                self.expect_punct(Punctuator::Colon)?;
            } else {
                return Err(self.error_at_current(
                    ErrorKind::ParserUnexpectedToken,
                    format!("expected 'case' or 'default', found {}", self.current.kind()),
                ));
            }
            while !matches!(
                self.current.kind(),
                TokenKind::Keyword(Keyword::Case | Keyword::Default)
                    | TokenKind::Punctuator(Punctuator::CloseBlock)
                    | TokenKind::Eof
            ) {
                self.parse_statement()?;
            }
        }

        self.expect_punct(Punctuator::CloseBlock)
    }

    /// `return`/`break`/`continue`/`throw`: the four restricted productions,
    /// per [`Keyword::is_restricted_production`]. A line terminator right
    /// after the keyword forces ASI for `return`/`break`/`continue`, but
    /// forbids it for `throw` (a newline there is a hard error).
    fn parse_restricted_production_statement(&mut self, kw: Keyword) -> Result<(), Diagnostic> {
        debug_assert!(kw.is_restricted_production());
        self.advance()?; // return | break | continue | throw
        match kw {
            Keyword::Throw => {
                if self.current.preceded_by_newline() {
                    return Err(self.error_at_current(
                        ErrorKind::ParserUnexpectedToken,
                        "a line terminator is not allowed between 'throw' and its expression",
                    ));
                }
                self.parse_expression()?;
                self.consume_semicolon()
            }
            Keyword::Return => {
                if self.current.preceded_by_newline() {
                    return Ok(());
                }
                if !self.at_statement_end() {
                    self.parse_expression()?;
                }
                self.consume_semicolon()
            }
            Keyword::Break | Keyword::Continue => {
                if !self.current.preceded_by_newline() && self.is_label_like() {
                    self.advance()?;
                }
                self.consume_semicolon()
            }
            _ => unreachable!("is_restricted_production only admits return/break/continue/throw"),
        }
    }

    fn parse_try_statement(&mut self) -> Result<(), Diagnostic> {
        self.advance()?; // try
        self.parse_block_statement()?;
        if self.check_keyword(Keyword::Catch) {
            self.advance()?;
            if self.matches_punct(Punctuator::OpenParen)? {
                self.expect_identifier_like()?;
                self.expect_punct(Punctuator::CloseParen)?;
            }
            self.parse_block_statement()?;
        }
        if self.check_keyword(Keyword::Finally) {
            self.advance()?;
            self.parse_block_statement()?;
        }
        Ok(())
    }

    pub(super) fn parse_block_statement(&mut self) -> Result<(), Diagnostic> {
        self.expect_punct(Punctuator::OpenBlock)?;
        while !self.check_punct(Punctuator::CloseBlock) && self.current.kind() != TokenKind::Eof {
            self.parse_statement()?;
        }
        self.expect_punct(Punctuator::CloseBlock)
    }

    fn parse_expression_statement(&mut self) -> Result<(), Diagnostic> {
        self.parse_expression()?;
        self.consume_semicolon()
    }

    /// Whether the current token could not start an expression, meaning a
    /// `return` has nothing to return.
    fn at_statement_end(&self) -> bool {
        self.check_punct(Punctuator::Semicolon)
            || self.check_punct(Punctuator::CloseBlock)
            || self.current.kind() == TokenKind::Eof
    }

    fn is_label_like(&self) -> bool {
        matches!(self.current.kind(), TokenKind::Identifier)
            || matches!(self.current.kind(), TokenKind::Keyword(k) if k.is_contextual())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;

    fn validate(src: &str) -> Result<(), crate::error::Diagnostic> {
        let mut parser = Parser::new(src)?;
        parser.parse_program()
    }

    #[test]
    fn variable_declaration_with_multiple_declarators() {
        assert!(validate("var a = 1, b, c = a + 1;").is_ok());
    }

    #[test]
    fn if_else_dangling_binds_to_nearest() {
        assert!(validate("if (a) if (b) c(); else d();").is_ok());
    }

    #[test]
    fn for_loop_three_clause() {
        assert!(validate("for (let i = 0; i < 10; i = i + 1) { x(i); }").is_ok());
    }

    #[test]
    fn for_loop_with_all_clauses_omitted() {
        assert!(validate("for (;;) { break; }").is_ok());
    }

    #[test]
    fn for_loop_with_empty_init_clause() {
        assert!(validate("for (; i < n; i = i + 1) {}").is_ok());
    }

    #[test]
    fn for_of_single_declarator() {
        assert!(validate("for (const item of items) { use(item); }").is_ok());
    }

    #[test]
    fn switch_with_case_and_default() {
        assert!(validate("switch (x) { case 1: a(); break; default: b(); }").is_ok());
    }

    #[test]
    fn return_asi_forced_by_newline() {
        assert!(validate("function f() { return\n42; }").is_ok());
    }

    #[test]
    fn throw_with_newline_is_rejected() {
        let err = validate("throw\nnew Error();").unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorKind::ParserUnexpectedToken);
    }

    #[test]
    fn try_without_catch_or_finally_is_permitted() {
        assert!(validate("try { risky(); }").is_ok());
    }

    #[test]
    fn class_with_extends_and_methods() {
        assert!(validate(
            "class Dog extends Animal { static count = 0; bark() { return 1; } }"
        )
        .is_ok());
    }

    #[test]
    fn missing_semicolon_is_rejected() {
        assert!(validate("{ a: 1 b: 2 }").is_err());
    }
}
