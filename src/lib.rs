//! # pebble
//!
//! pebble is a small imperative scripting language written in Rust.
//! Source text is tokenized on demand, parsed into an abstract syntax tree by
//! a recursive-descent parser and executed by a tree-walking evaluator with a
//! single global variable table. The language has numbers, strings,
//! booleans, arithmetic, comparison and logical operators, assignment,
//! `print`, `input`, `if` and `while`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        parser::{core::parse_program, stream::TokenStream},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the source line it was detected on. All of them are
/// fatal: the first one stops the run.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a complete program without running it.
///
/// # Errors
/// Returns the first lexical or syntax error in `source`.
///
/// # Examples
/// ```
/// use pebble::ast::Statement;
///
/// let program = pebble::parse("x = 1; print x").unwrap();
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[0], Statement::Assignment { .. }));
///
/// assert!(pebble::parse("print (1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut tokens = TokenStream::new(source)?;
    parse_program(&mut tokens)
}

/// Parses and executes `source`, writing program output to `output`.
///
/// The whole program is parsed before anything runs, so a syntax error
/// anywhere means no output at all. Runtime errors stop execution at the
/// failing statement; output produced before it has already been written.
/// `input` expressions read the empty string.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// pebble::run("x = 0; while (x < 3) { print x; x = x + 1; }", &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "0\n1\n2\n");
///
/// // Example with an intentional error (unknown variable).
/// let mut output = Vec::new();
/// let res = pebble::run("print 1; print y; print 2;", &mut output);
/// assert!(res.is_err());
/// assert_eq!(String::from_utf8(output).unwrap(), "1\n");
/// ```
pub fn run(source: &str, output: impl Write) -> Result<(), Error> {
    run_with_input(source, output, io::empty())
}

/// Parses and executes `source`, writing output to `output` and serving
/// `input` expressions from `input`, one line each.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// pebble::run_with_input("name = input; print \"hi \" + name", &mut output, "sam\n".as_bytes())
///     .unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "hi sam\n");
/// ```
pub fn run_with_input(source: &str, output: impl Write, input: impl BufRead) -> Result<(), Error> {
    let program = parse(source)?;

    let mut context = Context::with_input(output, input);
    context.run(&program)?;

    Ok(())
}
