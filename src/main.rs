use std::fs;

use clap::Parser;
use numeval::{ParseError, evaluate_lines, parse_expr};

/// numeval evaluates arithmetic expressions with `+`, `-`, `*`, `/`, `**`,
/// unary minus and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numeval to read expressions from a file, one per line, instead of
    /// evaluating `contents` directly.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode only prints the value of the last expression.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

/// Prints `error` under the line of source it refers to.
fn report(source_line: &str, error: &ParseError, prefix: &str) {
    eprintln!("{prefix}{error}");
    eprintln!("    {source_line}");
    eprintln!("    {}^", " ".repeat(error.position()));
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if !args.file {
        match parse_expr(&args.contents) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                report(&args.contents, &e, "");
                std::process::exit(1);
            },
        }
        return;
    }

    let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.contents);
                     std::process::exit(1);
                 });

    match evaluate_lines(&script) {
        Ok(results) => {
            let first = if args.pipe_mode { results.len().saturating_sub(1) } else { 0 };
            for result in &results[first..] {
                println!("{}", result.value);
            }
        },
        Err(e) => {
            let source_line = script.lines().nth(e.line - 1).unwrap_or_default();
            report(source_line, &e.error, &format!("Line {}: ", e.line));
            std::process::exit(1);
        },
    }
}
