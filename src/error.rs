/// Lexical errors.
///
/// Raised by the lexer when the source contains a character or literal that
/// does not start any token of the language.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program,
/// such as references to undefined variables or operands of the wrong type.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines all error types that can occur while parsing a token stream into
/// an AST: unexpected tokens, unmatched parentheses and truncated input.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error that stops a pebble run.
///
/// Every phase of the pipeline reports its own error type; this enum is what
/// the entry points in the crate root return, so callers can either match on
/// the phase or just print the message.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Syntax(SyntaxError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Gets the source line the error was reported on.
    ///
    /// ## Example
    /// ```
    /// let err = pebble::parse("x = (1 + 2").unwrap_err();
    ///
    /// assert_eq!(err.line_number(), 1);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Lex(e) => e.line_number(),
            Self::Syntax(e) => e.line_number(),
            Self::Runtime(e) => e.line_number(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
