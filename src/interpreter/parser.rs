/// Buffered token access.
///
/// Wraps the lexer so the parser can look at the current token and, when a
/// decision needs it, one token further ahead.
pub mod stream;

/// Entry points and control flow.
///
/// Parses whole programs, full expressions and the `while`/`if` statements.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// multiplication.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `-` and `!`, literals, variables, `input` and
/// parenthesized expressions.
pub mod unary;

/// Block parsing.
///
/// Parses `{ ... }` statement sequences used as loop and branch bodies.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to `print`, `var`, assignment, control
/// flow or expression statements.
pub mod statement;

/// Shared parsing helpers.
pub mod utils;
