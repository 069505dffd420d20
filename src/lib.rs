//! # Introduction
//!
//! Tusk is a small expression-oriented language. This crate is its front
//! end: a lexer that turns source text into tokens on demand and a Pratt
//! parser that builds an AST while collecting diagnostics instead of
//! aborting on malformed input.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST + diagnostics
//! ```
//!
//! 1. [`parser::lexer`] — pull-based tokenizer; one token per call,
//!    never fails, tags unrecognized characters as illegal tokens.
//! 2. [`parser::parse`] — Pratt parser with one token of lookahead;
//!    always returns a (possibly partial) [`parser::ast::Program`] plus
//!    an ordered diagnostic list.
//! 3. [`parser::ast`] — closed sum types for statements and expressions;
//!    every node renders itself as source-like text via `Display`, the
//!    contract the round-trip tests rely on.
//! 4. [`repl`] — interactive line loop printing rendered ASTs or
//!    diagnostics; not part of the stable library API.
//!
//! Type checking, evaluation, and optimization are out of scope; the
//! worst outcome of any input is an empty program and a non-empty
//! diagnostic list.

pub mod parser;
pub mod repl;
