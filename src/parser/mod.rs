//! Tusk source code parser
//!
//! This module transforms Tusk source text into an Abstract Syntax Tree
//! (AST):
//! - [`lexer`]: Tokenization (source text → tokens, one per call)
//! - [`parse`]: Parsing (tokens → AST, plus accumulated diagnostics)
//! - [`ast`]: AST node definitions and source-like rendering
//!
//! # Supported Grammar
//!
//! Tusk is a small expression-oriented language:
//! - Statements: `let` bindings, `return`, bare expression statements
//! - Expressions: identifiers, 64-bit integer literals, prefix `!`/`-`,
//!   infix `+ - * / < > == !=`
//! - Reserved words: `let`, `fn`, `if`, `else`, `true`, `false`, `return`
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser (precedence climbing) with one token of
//! lookahead, pulled lazily from the lexer. No parser generator
//! dependencies. Malformed input produces an ordered diagnostic list and
//! a partial AST rather than a hard failure.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use expressions::Precedence;
pub use parse::{ParseError, Parser};
