use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Every evaluation produces a fresh value; values are only ever replaced,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An owned string.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// operators (`&&`, `||`, `!`).
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// Converts the value to an `f64` for arithmetic and ordering.
    ///
    /// Numbers are returned as they are and booleans count as `1` and `0`.
    /// Strings are never converted implicitly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number or a boolean.
    /// - `Err(RuntimeError::TypeError)`: If the value is a string.
    ///
    /// # Example
    /// ```
    /// use pebble::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(1).unwrap(), 2.5);
    /// assert_eq!(Value::Bool(true).as_number(1).unwrap(), 1.0);
    /// assert!(Value::from("7").as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(b) => Ok(f64::from(u8::from(*b))),
            Self::Str(s) => Err(RuntimeError::TypeError { details: format!("expected a number, found string \"{s}\""),
                                                          line }),
        }
    }

    /// Returns the truthiness of the value.
    ///
    /// Numbers are truthy when non-zero, booleans are themselves and strings
    /// are truthy when non-empty.
    ///
    /// # Example
    /// ```
    /// use pebble::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(-3.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Bool(true).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Returns `true` for string values.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Short name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}

/// Renders a value the way `print` shows it.
///
/// Strings are written verbatim, booleans as `True`/`False` and numbers with
/// the shortest text that reads back as the same `f64`, so integral values
/// have no fractional part. Negative zero keeps its sign.
///
/// # Example
/// ```
/// use pebble::interpreter::value::core::Value;
///
/// assert_eq!(Value::Number(14.0).to_string(), "14");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Number(-0.0).to_string(), "-0");
/// assert_eq!(Value::Bool(false).to_string(), "False");
/// assert_eq!(Value::from("hi").to_string(), "hi");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}
