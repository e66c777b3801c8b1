use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use kestrel::{error::ParseError, evaluate_source, interpreter::evaluator::Context, parse};

/// kestrel is a small, expression-oriented scripting language with integers,
/// booleans and first-class functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells kestrel to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the fully parenthesized form of the parsed program instead of
    /// evaluating it.
    #[arg(short, long)]
    ast: bool,

    /// The script to run, or its path with `--file`. Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return repl(args.ast);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not \
                           exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if args.ast {
        let (program, errors) = parse(&script);
        if !errors.is_empty() {
            print_parse_errors(&errors);
            return ExitCode::FAILURE;
        }
        println!("{program}");
        return ExitCode::SUCCESS;
    }

    match evaluate_source(&script, &mut Context::new()) {
        Ok(value) if value.is_error() => {
            eprintln!("ERROR: {value}");
            ExitCode::FAILURE
        },
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(errors) => {
            print_parse_errors(&errors);
            ExitCode::FAILURE
        },
    }
}

/// Reads lines from stdin and evaluates each one in a shared context.
fn repl(ast: bool) -> ExitCode {
    let mut context = Context::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read from stdin: {e}");
                return ExitCode::FAILURE;
            },
        }

        if ast {
            let (program, errors) = parse(&line);
            if errors.is_empty() {
                println!("{program}");
            } else {
                print_parse_errors(&errors);
            }
            continue;
        }

        match evaluate_source(&line, &mut context) {
            Ok(value) if value.is_error() => println!("ERROR: {value}"),
            Ok(value) => println!("{value}"),
            Err(errors) => print_parse_errors(&errors),
        }
    }
}

fn print_parse_errors(errors: &[ParseError]) {
    for error in errors {
        eprintln!("{error}");
    }
}

/// Installs a log subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=kestrel=trace`. Logs go to stderr.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
