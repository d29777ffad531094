use clap::Parser;
use serde::Serialize;
use treecalc::{Grammar, analyze};

/// treecalc evaluates an arithmetic expression and can additionally show its
/// parse tree and token statistics.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Restricts the grammar to + - * / and parentheses.
    #[arg(short, long)]
    basic: bool,

    /// Prints the parse tree as JSON.
    #[arg(short, long)]
    tree: bool,

    /// Prints the token classification report as JSON.
    #[arg(short = 'k', long)]
    tokens: bool,

    expression: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grammar = if args.basic {
        Grammar::Basic
    } else {
        Grammar::Scientific
    };

    let analysis = analyze(&args.expression, grammar);

    if args.tree && let Some(tree) = &analysis.tree {
        print_json(tree);
    }
    if args.tokens {
        print_json(&analysis.report);
    }

    match analysis.result {
        Some(result) => println!("{result}"),
        None => {
            if let Some(error) = &analysis.error {
                eprintln!("{error}");
            }
            std::process::exit(1);
        },
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize output: {e}"),
    }
}
