use std::{fs, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// pascalette runs programs written in a small subset of Pascal and prints
/// the final value of every variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pascalette to read a file instead of an inline program.
    #[arg(short, long)]
    file: bool,

    /// Only lex, parse and check the program, without running it.
    #[arg(short, long)]
    check: bool,

    contents: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let result = if args.check {
        pascalette::check(&source).map(|_| None)
    } else {
        pascalette::run(&source).map(Some)
    };

    match result {
        Ok(Some(memory)) => {
            print!("{memory}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
