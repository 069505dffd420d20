// Tusk: front end for a small expression-oriented language

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser as ArgParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tusk::parser::lexer::Lexer;
use tusk::parser::Parser;
use tusk::repl;

#[derive(ArgParser, Debug)]
#[command(name = "tusk")]
#[command(about = "Parse Tusk source and print the AST, or start a REPL")]
struct Args {
    /// Source file to parse; starts the REPL when omitted
    script: Option<PathBuf>,

    /// Dump the token stream instead of parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path, args.tokens),
        None => run_repl(args.tokens),
    }
}

/// Parse a file and print the rendered AST (or its token stream).
///
/// Exits non-zero when the parse produced any diagnostics.
fn run_file(path: &PathBuf, tokens: bool) -> io::Result<()> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", path.display(), err);
            process::exit(1);
        }
    };

    let mut stdout = io::stdout();

    if tokens {
        return repl::dump_tokens(&mut stdout, &source);
    }

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprintln!("{}", error);
        }
        process::exit(1);
    }

    info!(
        statements = program.statements.len(),
        "parsed {}",
        path.display()
    );
    println!("{}", program);
    Ok(())
}

/// Greet the user and hand control to the interactive loop.
fn run_repl(tokens: bool) -> io::Result<()> {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string());

    println!("Hello {}! This is the Tusk programming language!", user);
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if tokens {
        repl::start_token_dump(stdin.lock(), stdout)
    } else {
        repl::start(stdin.lock(), stdout)
    }
}
