//! Lexer (tokenizer) for Tusk source code
//!
//! Converts raw source text into [`Token`]s, one per [`Lexer::next_token`]
//! call. The lexer never fails: unrecognized characters become
//! [`TokenKind::Illegal`] tokens and the cursor still advances, so the
//! parser is the one that turns bad input into diagnostics.

use super::ast::SourceLocation;
use std::fmt;

/// The closed set of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input; returned repeatably once the source is exhausted.
    Eof,
    /// A character that matches no other rule.
    Illegal,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
    Bang,     // !
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;

    // Brackets
    LParen,   // (
    RParen,   // )
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]

    // Keywords
    Let,
    Function,
    If,
    Else,
    True,
    False,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Int => write!(f, "integer literal"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Asterisk => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Eq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::Function => write!(f, "'fn'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::Return => write!(f, "'return'"),
        }
    }
}

/// A single lexical token: a kind plus the exact source spelling.
///
/// `text` preserves the original spelling even for single-character
/// tokens; the parser relies on it for literal-value parsing and for
/// error messages. The location points at the token's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Classify a scanned word as a keyword or a plain identifier.
///
/// Consulted only after the maximal identifier scan completes; the
/// keyword set is fixed, so an exhaustive `match` stands in for a
/// lookup table.
fn lookup_keyword(word: &str) -> TokenKind {
    match word {
        "let" => TokenKind::Let,
        "fn" => TokenKind::Function,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "return" => TokenKind::Return,
        _ => TokenKind::Ident,
    }
}

/// Lexer for Tusk source code
///
/// A pull-based state machine over an immutable character buffer. The
/// cursor only ever moves forward, so tokenization always terminates.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scan and return the next token.
    ///
    /// Callable repeatedly; once the input is exhausted every further
    /// call returns an [`TokenKind::Eof`] token with empty text.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();

        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Token::new(TokenKind::Eof, "", loc),
        };

        match ch {
            '=' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==", loc)
                } else {
                    Token::new(TokenKind::Assign, "=", loc)
                }
            }
            '!' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=", loc)
                } else {
                    Token::new(TokenKind::Bang, "!", loc)
                }
            }
            '+' => self.single_char_token(TokenKind::Plus, ch, loc),
            '-' => self.single_char_token(TokenKind::Minus, ch, loc),
            '*' => self.single_char_token(TokenKind::Asterisk, ch, loc),
            '/' => self.single_char_token(TokenKind::Slash, ch, loc),
            '<' => self.single_char_token(TokenKind::Lt, ch, loc),
            '>' => self.single_char_token(TokenKind::Gt, ch, loc),
            ',' => self.single_char_token(TokenKind::Comma, ch, loc),
            ';' => self.single_char_token(TokenKind::Semicolon, ch, loc),
            '(' => self.single_char_token(TokenKind::LParen, ch, loc),
            ')' => self.single_char_token(TokenKind::RParen, ch, loc),
            '{' => self.single_char_token(TokenKind::LBrace, ch, loc),
            '}' => self.single_char_token(TokenKind::RBrace, ch, loc),
            '[' => self.single_char_token(TokenKind::LBracket, ch, loc),
            ']' => self.single_char_token(TokenKind::RBracket, ch, loc),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(loc),
            '0'..='9' => self.number_literal(loc),
            // Anything else is tagged illegal; advancing past it keeps
            // the lexer from stalling on bad input.
            _ => {
                self.advance();
                Token::new(TokenKind::Illegal, ch.to_string(), loc)
            }
        }
    }

    /// Consume one character and emit it as a single-character token.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        ch: char,
        loc: SourceLocation,
    ) -> Token {
        self.advance();
        Token::new(kind, ch.to_string(), loc)
    }

    /// Scan a maximal run of ASCII letters and underscores, then
    /// classify it against the keyword table.
    ///
    /// Digits are not permitted inside identifiers: `foo1` lexes as the
    /// identifier `foo` followed by the integer `1`.
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let word: String = self.input[start..self.position].iter().collect();
        let kind = lookup_keyword(&word);

        Token::new(kind, word, loc)
    }

    /// Scan a maximal run of ASCII digits.
    ///
    /// The value is kept as raw text; parsing it as an integer is the
    /// parser's job, where a failure can become a diagnostic.
    fn number_literal(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.input[start..self.position].iter().collect();

        Token::new(TokenKind::Int, text, loc)
    }

    /// Skip whitespace (space, tab, newline, carriage return)
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            let done = tok.kind == TokenKind::Eof;
            out.push((tok.kind, tok.text));
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_single_char_operators() {
        let cases = [
            ("=", TokenKind::Assign),
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Asterisk),
            ("/", TokenKind::Slash),
            ("!", TokenKind::Bang),
            ("<", TokenKind::Lt),
            (">", TokenKind::Gt),
            (",", TokenKind::Comma),
            (";", TokenKind::Semicolon),
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
            ("{", TokenKind::LBrace),
            ("}", TokenKind::RBrace),
            ("[", TokenKind::LBracket),
            ("]", TokenKind::RBracket),
        ];

        for (source, expected) in cases {
            let tokens = kinds_and_texts(source);
            assert_eq!(tokens.len(), 2, "source {:?}", source);
            assert_eq!(tokens[0], (expected, source.to_string()));
            assert_eq!(tokens[1].0, TokenKind::Eof);
        }
    }

    #[test]
    fn test_two_char_operators() {
        for (source, expected) in [("==", TokenKind::Eq), ("!=", TokenKind::NotEq)] {
            let tokens = kinds_and_texts(source);
            // Never two single-character tokens.
            assert_eq!(tokens.len(), 2, "source {:?}", source);
            assert_eq!(tokens[0], (expected, source.to_string()));
        }
    }

    #[test]
    fn test_assign_followed_by_non_equals() {
        let tokens = kinds_and_texts("=5");
        assert_eq!(tokens[0], (TokenKind::Assign, "=".to_string()));
        assert_eq!(tokens[1], (TokenKind::Int, "5".to_string()));
    }

    #[test]
    fn test_empty_input_repeats_eof() {
        let mut lexer = Lexer::new("");
        for _ in 0..3 {
            let tok = lexer.next_token();
            assert_eq!(tok.kind, TokenKind::Eof);
            assert_eq!(tok.text, "");
        }
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = kinds_and_texts("let fn if else true false return foobar");
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Function, "fn"),
            (TokenKind::If, "if"),
            (TokenKind::Else, "else"),
            (TokenKind::True, "true"),
            (TokenKind::False, "false"),
            (TokenKind::Return, "return"),
            (TokenKind::Ident, "foobar"),
        ];
        for (i, (kind, text)) in expected.iter().enumerate() {
            assert_eq!(tokens[i], (*kind, text.to_string()));
        }
    }

    #[test]
    fn test_digits_split_identifiers() {
        // Digits never blend into identifiers in this grammar.
        let tokens = kinds_and_texts("foo1");
        assert_eq!(tokens[0], (TokenKind::Ident, "foo".to_string()));
        assert_eq!(tokens[1], (TokenKind::Int, "1".to_string()));
    }

    #[test]
    fn test_full_statement() {
        let tokens = kinds_and_texts("let five = 5;");
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (i, (kind, text)) in expected.iter().enumerate() {
            assert_eq!(tokens[i], (*kind, text.to_string()));
        }
    }

    #[test]
    fn test_illegal_character_advances() {
        let tokens = kinds_and_texts("@5");
        assert_eq!(tokens[0], (TokenKind::Illegal, "@".to_string()));
        assert_eq!(tokens[1], (TokenKind::Int, "5".to_string()));
    }

    #[test]
    fn test_locations() {
        let mut lexer = Lexer::new("let x\n  = 5;");
        let let_tok = lexer.next_token();
        assert_eq!(let_tok.location, SourceLocation::new(1, 1));
        let x_tok = lexer.next_token();
        assert_eq!(x_tok.location, SourceLocation::new(1, 5));
        let assign_tok = lexer.next_token();
        assert_eq!(assign_tok.location, SourceLocation::new(2, 3));
    }
}
