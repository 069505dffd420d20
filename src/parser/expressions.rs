//! Expression parsing implementation
//!
//! Expressions are parsed with precedence climbing (Pratt parsing): each
//! token kind may have a prefix rule (producing an expression from the
//! current token) and an infix rule (extending an already-parsed left
//! operand). The rule set is fixed, so dispatch is a `match` over the
//! closed [`TokenKind`] enumeration rather than a runtime-mutable table.
//!
//! # Supported Expressions
//!
//! - Identifiers and integer literals
//! - Prefix operators: `!`, unary `-`
//! - Infix operators: `+ - * / < > == !=` (all left-associative)
//!
//! # Precedence
//!
//! Associativity and grouping are encoded by the numeric binding
//! strength of [`Precedence`], not by grammar productions: an infix rule
//! recurses into its right-hand side at its own precedence, so chains of
//! equal-precedence operators parse left-to-right.

use crate::parser::ast::{Expression, Identifier};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

/// Operator binding strength, tightest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `-` and `!`
    Prefix,
    /// Reserved for function-call parsing; no token maps to it yet.
    Call,
}

/// Binding strength of a token in infix position.
///
/// Kinds absent from the table bind lowest, which is what lets a
/// non-operator token terminate the climbing loop.
fn token_precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

/// Whether a token kind has an infix rule.
fn has_infix_rule(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq
    )
}

impl Parser {
    /// Parse one expression with the precedence-climbing core.
    ///
    /// `precedence` is the binding strength of the context: the loop
    /// keeps extending the expression while the peek token binds
    /// strictly tighter.
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semicolon)
            && precedence < self.peek_precedence()
        {
            if !has_infix_rule(self.peek_token.kind) {
                return Some(left);
            }
            self.next_token();
            left = self.parse_infix_expression(left)?;
        }

        Some(left)
    }

    /// Dispatch the prefix rule for the current token kind.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            kind => {
                let message =
                    format!("no prefix parse function for {} found", kind);
                let location = self.cur_token.location;
                self.record_error(message, location);
                None
            }
        }
    }

    fn parse_identifier(&mut self) -> Expression {
        Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.text.clone(),
        })
    }

    /// Parse the current token's text as a signed 64-bit integer.
    ///
    /// Out-of-range or malformed literals become a diagnostic, not a
    /// panic.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        match token.text.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { token, value }),
            Err(_) => {
                let message =
                    format!("could not parse {:?} as integer", token.text);
                self.record_error(message, token.location);
                None
            }
        }
    }

    /// Parse `!<operand>` or `-<operand>`.
    ///
    /// The operand binds at `Prefix` precedence, so `-a + b` parses as
    /// `(-a) + b`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.text.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        })
    }

    /// Parse `<left> <operator> <right>` with the current token as the
    /// operator.
    ///
    /// The right-hand side is parsed at the operator's own precedence,
    /// which yields left-associativity for equal-precedence chains.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.text.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn peek_precedence(&self) -> Precedence {
        token_precedence(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        token_precedence(self.cur_token.kind)
    }
}
