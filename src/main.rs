use std::{fs, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use strexpr::interpreter::evaluator::core::Evaluator;

/// strexpr evaluates infix string expressions built from literals, comparison
/// and boolean operators and a small set of functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells strexpr to read expressions, one per line, from a file instead of
    /// evaluating the argument itself.
    #[arg(short, long)]
    file: bool,

    /// Do not register the standard operators and functions. Every expression
    /// is then returned unchanged.
    #[arg(short, long)]
    bare: bool,

    /// Log registration and evaluation steps to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let evaluator = if args.bare {
        Evaluator::new()
    } else {
        match Evaluator::standard() {
            Ok(evaluator) => evaluator,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    };

    let expressions = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text.lines()
                            .filter(|line| !line.trim().is_empty())
                            .map(str::to_string)
                            .collect::<Vec<_>>(),
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![args.contents]
    };

    let mut status = ExitCode::SUCCESS;
    for expression in &expressions {
        match evaluator.evaluate(expression) {
            Ok(Some(result)) => println!("{result}"),
            Ok(None) => println!("NULL"),
            Err(e) => {
                eprintln!("{expression}: {e}");
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}
