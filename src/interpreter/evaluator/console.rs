use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Writes the rendering of `value` followed by a newline to the output.
    ///
    /// # Errors
    /// `RuntimeError::Io` if the output cannot be written.
    pub fn emit(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|source| RuntimeError::Io { source, line })
    }

    /// Reads one line from the input for an `input` expression.
    ///
    /// Pending output is flushed first so a prompt printed just before is
    /// visible. The line ending is stripped. Text that reads as a number
    /// literal becomes a number, anything else a string; end of input gives
    /// the empty string.
    ///
    /// # Errors
    /// `RuntimeError::Io` if flushing the output or reading the input fails.
    ///
    /// # Example
    /// ```
    /// use pebble::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut output = Vec::new();
    /// let mut context = Context::with_input(&mut output, "42\nhello\n".as_bytes());
    ///
    /// assert_eq!(context.read_input(1).unwrap(), Value::Number(42.0));
    /// assert_eq!(context.read_input(1).unwrap(), Value::from("hello"));
    /// assert_eq!(context.read_input(1).unwrap(), Value::from(""));
    /// ```
    pub fn read_input(&mut self, line: usize) -> EvalResult<Value> {
        self.output
            .flush()
            .map_err(|source| RuntimeError::Io { source, line })?;

        let mut buffer = String::new();
        self.input
            .read_line(&mut buffer)
            .map_err(|source| RuntimeError::Io { source, line })?;

        let text = buffer.trim_end_matches(['\n', '\r']);
        Ok(parse_number_input(text).map_or_else(|| Value::from(text), Value::Number))
    }
}

/// Reads `text` as a number if it is written like a number literal, with an
/// optional leading minus sign and surrounding whitespace.
fn parse_number_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);

    let mut parts = digits.splitn(2, '.');
    let whole = parts.next()?;
    let fraction = parts.next().unwrap_or("");

    let is_literal = !whole.is_empty()
                     && whole.bytes().all(|b| b.is_ascii_digit())
                     && fraction.bytes().all(|b| b.is_ascii_digit());

    if is_literal { trimmed.parse().ok() } else { None }
}
