use clap::Parser; // clap crate for CLI argument parsing
use model::{Error, Token};
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Scans (and with `--parse`, parses) one WHILE program.
///
/// Tokens are printed one per line as `KIND value`, with the value left out
/// for kinds that carry none, rather than as a single list of
/// `(value, KIND)` pairs. The listing always ends with `EOF`.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Token output: one `KIND value` line per token, ending with `EOF`."
)]
struct Args {
    /// WHILE program on one line; read from standard input when omitted
    source: Option<String>,

    /// Run lexer and parser, and print the syntax tree
    #[arg(short, long)]
    parse: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let source = match args.source {
        Some(source) => source,
        None => match read_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: failed to read standard input: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    log::debug!("source: {:?}", source);

    let result = if args.parse { parse(&source) } else { lex(&source) };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_line() -> io::Result<String> {
    eprintln!("Input program on one line");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn lex(source: &str) -> Result<(), Error> {
    let tokens = lexer::lex(source)?;
    for token in &tokens {
        println!("{}", describe(token));
    }
    Ok(())
}

fn parse(source: &str) -> Result<(), Error> {
    let program = parser::parse_source(source)?;
    println!("{:#?}", program);
    Ok(())
}

/// `KIND value`, or just `KIND` when the kind says it all
fn describe(token: &Token) -> String {
    match token.value() {
        Some(value) => format!("{} {}", token.kind_name(), value),
        None => token.kind_name().to_string(),
    }
}
