use crate::{
    error::LexError,
    interpreter::lexer::{Lexer, Token},
};

/// A token source with one token of lookahead and an optional second one.
///
/// The stream always holds the current token. A second token is only pulled
/// from the lexer when [`TokenStream::peek_second`] asks for it, and it is
/// handed out by the next [`TokenStream::advance`], so the lexer itself never
/// has to back up.
///
/// # Example
/// ```
/// use pebble::interpreter::{lexer::Token, parser::stream::TokenStream};
///
/// let mut tokens = TokenStream::new("count = 3").unwrap();
///
/// assert_eq!(tokens.peek(), &Token::Identifier("count".to_string()));
/// assert_eq!(tokens.peek_second().unwrap(), &Token::Equals);
///
/// tokens.advance().unwrap();
/// assert_eq!(tokens.peek(), &Token::Equals);
/// ```
pub struct TokenStream<'src> {
    lexer:    Lexer<'src>,
    current:  (Token, usize),
    buffered: Option<(Token, usize)>,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream over `source` and scans its first token.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the first token cannot be scanned.
    pub fn new(source: &'src str) -> Result<Self, LexError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;

        Ok(Self { lexer,
                  current,
                  buffered: None })
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.current.0
    }

    /// Returns the source line of the current token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.current.1
    }

    /// Returns `true` once the current token is [`Token::Eof`].
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current.0 == Token::Eof
    }

    /// Returns the token after the current one without consuming anything.
    ///
    /// # Errors
    /// Returns a [`LexError`] if that token cannot be scanned.
    pub fn peek_second(&mut self) -> Result<&Token, LexError> {
        let second = match self.buffered.take() {
            Some(second) => second,
            None => self.lexer.next_token()?,
        };

        Ok(&self.buffered.insert(second).0)
    }

    /// Consumes the current token and returns it with its line.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the following token cannot be scanned.
    pub fn advance(&mut self) -> Result<(Token, usize), LexError> {
        let next = match self.buffered.take() {
            Some(next) => next,
            None => self.lexer.next_token()?,
        };

        Ok(std::mem::replace(&mut self.current, next))
    }
}
