//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the diagnostic type, token-cursor helpers, and the
//! [`Parser::parse_program`] entry point.
//!
//! # Parser Architecture
//!
//! The parser pulls tokens lazily from the [`Lexer`] (one call per token,
//! no pre-tokenization pass) and keeps exactly one token of lookahead.
//! Parsing methods are split across multiple files using `impl Parser`
//! blocks:
//! - This module: parser state, helpers, and the statement loop
//! - `statements`: parsing `let`, `return`, and expression statements
//! - `expressions`: precedence-climbing expression parsing
//!
//! # Error handling
//!
//! Diagnostics accumulate in order instead of aborting the parse: a
//! malformed statement is dropped from the program, the loop advances,
//! and parsing continues. `parse_program` therefore always returns a
//! (possibly partial) [`Program`]; callers inspect [`Parser::errors`] to
//! decide whether to trust it.

use crate::parser::ast::{Program, SourceLocation};
use crate::parser::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;
use tracing::debug;

/// A recoverable parse failure, accumulated rather than thrown.
#[derive(Debug, Clone, Error)]
#[error("parse error at {location}: {message}")]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

/// Pratt parser for Tusk source code
pub struct Parser {
    lexer: Lexer,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Create a parser over the given lexer.
    ///
    /// Reads two tokens up front so `cur_token` and `peek_token` are
    /// populated before the first parse call.
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
        }
    }

    /// Convenience constructor from raw source text.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the entire program.
    ///
    /// Loops "parse one statement, advance" until end of input. A
    /// statement that fails to parse is omitted from the result; the
    /// loop still advances, so one bad statement does not stop the
    /// whole parse.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    /// Diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // ===== Helper methods =====

    /// Shift the window: peek becomes current, the lexer supplies a
    /// fresh peek.
    pub(crate) fn next_token(&mut self) {
        self.cur_token =
            std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance if the peek token has the expected kind; otherwise
    /// record a diagnostic and stay put.
    ///
    /// The returned flag must be checked before trusting `cur_token`.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub(crate) fn record_error(
        &mut self,
        message: String,
        location: SourceLocation,
    ) {
        self.errors.push(ParseError { message, location });
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let message = format!(
            "expected next token to be {}, got {} instead",
            expected, self.peek_token.kind
        );
        let location = self.peek_token.location;
        self.record_error(message, location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Statement;

    fn parse(source: &str) -> (Program, Vec<ParseError>) {
        let mut parser = Parser::from_source(source);
        let program = parser.parse_program();
        (program, parser.errors().to_vec())
    }

    fn parse_clean(source: &str) -> Program {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        program
    }

    #[test]
    fn test_let_statements() {
        let program = parse_clean("let x = 5;\nlet y = 10;\nlet foobar = 838383;");

        assert_eq!(program.statements.len(), 3);

        let expected = ["x", "y", "foobar"];
        for (stmt, name) in program.statements.iter().zip(expected) {
            assert_eq!(stmt.token_literal(), "let");
            match stmt {
                Statement::Let { name: ident, .. } => {
                    assert_eq!(ident.value, name);
                    assert_eq!(ident.token_literal(), name);
                }
                other => panic!("expected let statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_let_statements_keep_their_value() {
        let program = parse_clean("let x = 5;");

        match &program.statements[0] {
            Statement::Let { value, .. } => {
                assert_eq!(value.to_string(), "5");
            }
            other => panic!("expected let statement, got {:?}", other),
        }
    }

    #[test]
    fn test_return_statements() {
        let program = parse_clean("return 5;\nreturn 10;\nreturn 993322;");

        assert_eq!(program.statements.len(), 3);

        for stmt in &program.statements {
            assert_eq!(stmt.token_literal(), "return");
            assert!(matches!(stmt, Statement::Return { .. }));
        }
    }

    #[test]
    fn test_missing_assign_is_reported() {
        let (program, errors) = parse("let x 5;");

        assert!(!errors.is_empty());
        assert!(
            errors[0].to_string().contains("expected next token to be '='"),
            "unexpected message: {}",
            errors[0]
        );
        // The malformed statement contributes no node.
        assert!(program
            .statements
            .iter()
            .all(|s| !matches!(s, Statement::Let { .. })));
    }

    #[test]
    fn test_missing_identifier_is_reported() {
        let (_, errors) = parse("let = 5;");

        assert!(!errors.is_empty());
        assert!(errors[0]
            .to_string()
            .contains("expected next token to be identifier"));
    }

    #[test]
    fn test_one_bad_statement_does_not_stop_the_parse() {
        let (program, errors) = parse("let x 5; let y = 7;");

        assert!(!errors.is_empty());
        // The second statement still parses.
        assert!(program.statements.iter().any(|s| matches!(
            s,
            Statement::Let { name, .. } if name.value == "y"
        )));
    }

    #[test]
    fn test_errors_carry_locations() {
        let (_, errors) = parse("let x 5;");

        assert_eq!(errors[0].location.line, 1);
        // Points at the offending `5`.
        assert_eq!(errors[0].location.column, 7);
    }
}
