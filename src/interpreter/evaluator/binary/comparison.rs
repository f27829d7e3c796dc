use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Maps an equality-style operator and a boolean equality result
/// to the final boolean value.
///
/// This function does not perform any comparison itself.
fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

/// Compares two values for `==`.
///
/// If either side is a string, the rendered texts are compared, so
/// `"1" == 1` and `"True" == true` both hold. Otherwise the numeric values
/// are compared, with booleans as `1` and `0`.
#[allow(clippy::float_cmp)]
pub fn values_equal(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    if left.is_string() || right.is_string() {
        return Ok(left.to_string() == right.to_string());
    }

    Ok(left.as_number(line)? == right.as_number(line)?)
}

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `Equal` and `NotEqual` use [`values_equal`]. Ordering operators are
    /// always numeric; a string operand is a type error.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use pebble::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &Value::from("3"), &a, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        Ok(Value::Bool(match op {
                           BinaryOperator::Equal | BinaryOperator::NotEqual => {
                               let equality = values_equal(left, right, line)?;
                               equality_op_result(op, equality)
                           },

                           BinaryOperator::Less
                           | BinaryOperator::Greater
                           | BinaryOperator::LessEqual
                           | BinaryOperator::GreaterEqual => {
                               if left.is_string() || right.is_string() {
                                   return Err(RuntimeError::TypeError { details: format!("cannot order {} and {} with '{op}'",
                                                                                         left.type_name(),
                                                                                         right.type_name()),
                                                                        line });
                               }
                               let left = left.as_number(line)?;
                               let right = right.as_number(line)?;

                               match op {
                                   BinaryOperator::Less => left < right,
                                   BinaryOperator::Greater => left > right,
                                   BinaryOperator::LessEqual => left <= right,
                                   BinaryOperator::GreaterEqual => left >= right,
                                   _ => unreachable!(),
                               }
                           },

                           _ => unreachable!("eval_comparison used with non comparison operator"),
                       }))
    }
}
