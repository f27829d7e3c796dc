/// Core evaluation logic and context management.
///
/// Contains the runtime context, expression dispatch and the result type
/// shared by the whole evaluator.
pub mod core;

/// The global variable table.
///
/// A single unscoped mapping from variable name to value, owned by the
/// context for the duration of a run.
pub mod globals;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and the
/// short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Statement execution.
///
/// Runs programs, blocks and individual statements, including `while` and
/// `if`.
pub mod statement;

/// Program input and output.
///
/// Writes rendered values for `print` and reads lines for `input`.
pub mod console;
