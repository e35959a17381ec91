use std::fs;

use clap::Parser;
use opprec::evaluate;

/// opprec evaluates arithmetic expressions with an operator-precedence
/// parser.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells opprec to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Prints every derivation step before the result.
    #[arg(short, long)]
    debug: bool,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate(expression.trim_end_matches(['\r', '\n']), args.debug) {
        Ok(evaluation) => {
            if let Some(trace) = evaluation.trace {
                print!("{trace}");
            }
            println!("{}", evaluation.value);
        },
        Err(e) => {
            if args.debug
               && let Some(trace) = e.trace()
            {
                print!("{trace}");
            }
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
