use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` concatenates when either operand is a string, rendering the other
    /// one the way `print` would. Otherwise both operands are converted to
    /// numbers (booleans count as `1` and `0`) and combined with IEEE-754
    /// semantics, so dividing by zero yields an infinity or NaN rather than an
    /// error. The operator must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Errors
    /// `TypeError` if `-`, `*` or `/` is applied to a string.
    ///
    /// # Example
    /// ```
    /// use pebble::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_scalar_op(BinaryOperator::Add,
    ///                                      &Value::from("x"),
    ///                                      &Value::Number(1.0),
    ///                                      1).unwrap();
    /// assert_eq!(joined, Value::from("x1"));
    ///
    /// let quotient = Context::eval_scalar_op(BinaryOperator::Div,
    ///                                        &Value::Number(1.0),
    ///                                        &Value::Number(0.0),
    ///                                        1).unwrap();
    /// assert_eq!(quotient, Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Add && (left.is_string() || right.is_string()) {
            return Ok(Value::Str(format!("{left}{right}")));
        }

        if left.is_string() || right.is_string() {
            return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        }

        let left = left.as_number(line)?;
        let right = right.as_number(line)?;

        Ok(Value::Number(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => left / right,
                             _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                         }))
    }
}
