//! Interactive read-loop for the Tusk front end
//!
//! Reads one line at a time, runs it through the lexer and parser, and
//! prints either the rendered AST or the accumulated diagnostics. The
//! loop never aborts on bad input; diagnostics are shown and the next
//! line is read. Not part of the stable library API.

use crate::parser::lexer::{Lexer, TokenKind};
use crate::parser::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = ">> ";

/// Run the parse loop until end of input.
///
/// Each line is parsed independently; state does not carry over between
/// lines.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if parser.errors().is_empty() {
            writeln!(output, "{}", program)?;
        } else {
            print_errors(&mut output, &parser)?;
        }
    }
}

/// Run the token-dump loop until end of input.
///
/// Prints every token the lexer produces for each line, one per row;
/// useful for inspecting how source text is split before parsing.
pub fn start_token_dump<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        dump_tokens(&mut output, &line)?;
    }
}

/// Write every token of `source` to `output`, one per line.
pub fn dump_tokens<W: Write>(output: &mut W, source: &str) -> io::Result<()> {
    let mut lexer = Lexer::new(source);

    loop {
        let token = lexer.next_token();
        writeln!(output, "{:?} {:?}", token.kind, token.text)?;
        if token.kind == TokenKind::Eof {
            return Ok(());
        }
    }
}

fn print_errors<W: Write>(output: &mut W, parser: &Parser) -> io::Result<()> {
    debug!(errors = parser.errors().len(), "rejected input line");
    for error in parser.errors() {
        writeln!(output, "\t{}", error)?;
    }
    Ok(())
}
