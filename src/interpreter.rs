/// The evaluator module executes AST nodes and produces output.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages the global variable
/// table, and writes program output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables and control flow (`while`, `if`).
/// - Reports runtime errors such as undefined variables or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens on
/// demand, each corresponding to a meaningful language element such as a
/// number, string, identifier, keyword or operator.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, keywords and
///   operators.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs an AST
/// that represents the structure of the program's statements and
/// expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting the first syntax error with its line.
/// - Implements operator precedence and associativity.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, strings and booleans.
/// - Implements truthiness, numeric coercion and output rendering.
pub mod value;
