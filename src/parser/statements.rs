//! Statement parsing implementation
//!
//! Dispatches on the current token kind: `let` and `return` build their
//! dedicated statement nodes; anything else is parsed as an expression
//! statement. All methods return `Option`: `None` means the statement
//! failed, its diagnostics are already recorded, and the caller omits it
//! from the program.

use crate::parser::ast::{Identifier, Statement};
use crate::parser::expressions::Precedence;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a single statement, dispatching on the current token.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse `let <identifier> = <expression>;`
    ///
    /// The bound expression is parsed at lowest precedence and retained
    /// in the node. A malformed head (missing identifier or `=`) aborts
    /// only this statement.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.text.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let { token, name, value })
    }

    /// Parse `return <expression>;`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return { token, value })
    }

    /// Parse a bare expression in statement position.
    ///
    /// The trailing semicolon is optional: semicolons are statement
    /// terminators, not separators, and a missing one at end of input
    /// is tolerated (REPL-friendly).
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { token, expression })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Expression;

    fn parse_single_statement(source: &str) -> Statement {
        let mut parser = Parser::from_source(source);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "unexpected parse errors: {:?}",
            parser.errors()
        );
        assert_eq!(program.statements.len(), 1);
        program.statements.into_iter().next().unwrap()
    }

    #[test]
    fn test_expression_statement_without_semicolon() {
        let stmt = parse_single_statement("foobar");

        match stmt {
            Statement::Expression { expression, .. } => match expression {
                Expression::Identifier(ident) => {
                    assert_eq!(ident.value, "foobar")
                }
                other => panic!("expected identifier, got {:?}", other),
            },
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_return_keeps_its_value() {
        let stmt = parse_single_statement("return 10;");

        match stmt {
            Statement::Return { value, .. } => {
                assert_eq!(value.to_string(), "10")
            }
            other => panic!("expected return statement, got {:?}", other),
        }
    }

    #[test]
    fn test_let_round_trip() {
        let stmt = parse_single_statement("let x = 5;");
        assert_eq!(stmt.to_string(), "let x = 5;");

        // A render re-adds exactly one terminator even when the source
        // omitted it.
        let stmt = parse_single_statement("let x = 5");
        assert_eq!(stmt.to_string(), "let x = 5;");
    }

    #[test]
    fn test_return_without_value_is_an_error() {
        let mut parser = Parser::from_source("return;");
        let program = parser.parse_program();

        assert!(program.statements.is_empty());
        assert!(parser.errors()[0]
            .to_string()
            .contains("no prefix parse function for ';'"));
    }
}
