use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The global variable table.
///
/// Entries are created on first assignment and overwritten by later ones;
/// nothing is ever removed. There is exactly one scope.
///
/// # Example
/// ```
/// use pebble::interpreter::{evaluator::globals::Globals, value::core::Value};
///
/// let mut globals = Globals::new();
/// globals.assign("x", Value::Number(1.0));
/// globals.assign("x", Value::from("one"));
///
/// assert_eq!(globals.len(), 1);
/// assert_eq!(globals.get("x"), Some(&Value::from("one")));
/// assert!(globals.lookup("y", 3).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Globals {
    values: HashMap<String, Value>,
}

impl Globals {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`, if it has been assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns a copy of the current value of `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` was never assigned.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Stores `value` under `name`, replacing any previous value in place.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    /// Number of variables defined so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all variables in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}
