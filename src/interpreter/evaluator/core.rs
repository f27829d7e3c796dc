use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::globals::Globals, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global variable table, the
/// sink that program output is written to and the source `input` reads from.
///
/// ## Usage
///
/// A `Context` is created once per run and every statement is executed
/// against it. Two contexts never share variables, so independent runs do not
/// leak state into each other.
///
/// # Example
/// ```
/// use pebble::interpreter::{evaluator::core::Context, value::core::Value};
///
/// let mut output = Vec::new();
/// let mut context = Context::new(&mut output);
///
/// context.globals.assign("x", Value::Number(4.0));
/// let program = pebble::parse("print x * 2").unwrap();
/// context.run(&program).unwrap();
/// drop(context);
///
/// assert_eq!(String::from_utf8(output).unwrap(), "8\n");
/// ```
pub struct Context<'io> {
    /// Every variable assigned so far in this run.
    pub globals: Globals,
    pub(in crate::interpreter::evaluator) output: Box<dyn Write + 'io>,
    pub(in crate::interpreter::evaluator) input:  Box<dyn BufRead + 'io>,
}

impl<'io> Context<'io> {
    /// Creates a context writing to `output`, with an empty global table and
    /// no input; `input` expressions read as the empty string.
    #[must_use]
    pub fn new(output: impl Write + 'io) -> Self {
        Self::with_input(output, io::empty())
    }

    /// Creates a context writing to `output` and reading `input` lines from
    /// `input`.
    #[must_use]
    pub fn with_input(output: impl Write + 'io, input: impl BufRead + 'io) -> Self {
        Self { globals: Globals::new(),
               output:  Box::new(output),
               input:   Box::new(input), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations and `input`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The freshly produced [`Value`].
    ///
    /// # Errors
    /// - `UnknownVariable` when a referenced variable was never assigned.
    /// - `TypeError` when an operator receives a string it cannot use.
    /// - `Io` when reading input fails.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        trace!(line = expr.line_number(), "evaluating expression");

        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.globals.lookup(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::Input { line } => self.read_input(*line),
        }
    }
}
