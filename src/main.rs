use std::{fs, io};

use clap::Parser;
use pebble::interpreter::evaluator::core::Context;
use tracing::{Level, debug};

/// pebble is a small imperative scripting language with numbers, strings,
/// booleans, `print`, `if` and `while`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pebble to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed syntax tree to stderr before running.
    #[arg(long)]
    dump_ast: bool,

    /// Increases diagnostic output on stderr (-v for statements, -vv for
    /// every token and expression).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let program = pebble::parse(&script).unwrap_or_else(|e| {
                                            eprintln!("{e}");
                                            std::process::exit(1);
                                        });

    if args.dump_ast {
        eprintln!("{program:#?}");
    }

    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut context = Context::with_input(stdout.lock(), stdin.lock());
    let result = context.run(&program);
    for (name, value) in context.globals.iter() {
        debug!(name, %value, "global at exit");
    }
    drop(context);

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
