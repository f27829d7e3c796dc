use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// The left operand is always evaluated. For `&&` a falsy left side
    /// yields `false` and for `||` a truthy left side yields `true`; in both
    /// cases the right operand is never evaluated, so its errors and side
    /// effects never happen. Otherwise the result is the truthiness of the
    /// right operand.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use pebble::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut output);
    ///
    /// // `missing` is never looked up.
    /// let program = pebble::parse("print false && missing").unwrap();
    /// context.run(&program).unwrap();
    /// drop(context);
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(), "False\n");
    /// ```
    pub fn eval_logic(&mut self,
                      op: BinaryOperator,
                      left: &Expr,
                      right: &Expr,
                      line: usize)
                      -> EvalResult<Value> {
        let left = self.eval(left)?.is_truthy();

        let result = match op {
            BinaryOperator::And => left && self.eval(right)?.is_truthy(),
            BinaryOperator::Or => left || self.eval(right)?.is_truthy(),
            _ => unreachable!("eval_logic used with non logical operator on line {line}"),
        };

        Ok(Value::Bool(result))
    }
}
