// AST (Abstract Syntax Tree) definitions for the Tusk front end

use crate::parser::lexer::Token;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A name reference, used both as an expression and as the binding
/// target of a `let` statement.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Literal text of the token that introduced this node.
    pub fn token_literal(&self) -> &str {
        &self.token.text
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Expression nodes.
///
/// Children are uniquely owned (boxed), so the tree is strictly
/// single-owner: dropping the root drops everything.
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Literal text of the token that introduced this node.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral { token, .. } => &token.text,
            Expression::Prefix { token, .. } => &token.text,
            Expression::Infix { token, .. } => &token.text,
        }
    }
}

impl fmt::Display for Expression {
    /// Renders the expression as source-like text.
    ///
    /// Prefix and infix expressions are fully parenthesized so the
    /// rendered form makes operator grouping explicit; this is the
    /// round-trip contract the parser tests assert against.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            // Integer literals render their original spelling.
            Expression::IntegerLiteral { token, .. } => {
                write!(f, "{}", token.text)
            }
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

/// Statement nodes.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    /// `return <value>;`
    Return { token: Token, value: Expression },
    /// A bare expression used in statement position.
    Expression { token: Token, expression: Expression },
}

impl Statement {
    /// Literal text of the token that introduced this node.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. } => &token.text,
            Statement::Return { token, .. } => &token.text,
            Statement::Expression { token, .. } => &token.text,
        }
    }
}

impl fmt::Display for Statement {
    /// A render always re-adds exactly one `;` terminator for `let` and
    /// `return`, regardless of whether the source had one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = {};", token.text, name, value)
            }
            Statement::Return { token, value } => {
                write!(f, "{} {};", token.text, value)
            }
            Statement::Expression { expression, .. } => {
                write!(f, "{}", expression)
            }
        }
    }
}

/// Top-level program structure: an ordered sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal text of the first statement's token, or `""` for an
    /// empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
