use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, stream::TokenStream},
    },
};

/// Consumes the current token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `expected`: The token that must come next.
/// - `description`: How the token is named in the error message.
///
/// # Returns
/// The source line of the consumed token.
///
/// # Errors
/// Returns `ExpectedToken`, or `UnexpectedEndOfInput` at the end of the
/// source, if the current token is anything else.
pub(in crate::interpreter::parser) fn expect(tokens: &mut TokenStream<'_>,
                                             expected: &Token,
                                             description: &str)
                                             -> ParseResult<usize> {
    if tokens.peek() == expected {
        let (_, line) = tokens.advance()?;
        return Ok(line);
    }

    let line = tokens.line();
    match tokens.peek() {
        Token::Eof => Err(SyntaxError::UnexpectedEndOfInput { line }.into()),
        found => Err(SyntaxError::ExpectedToken { expected: description.to_string(),
                                                  found: found.to_string(),
                                                  line }.into()),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token stream positioned at an identifier.
///
/// # Returns
/// The identifier text.
///
/// # Errors
/// Returns `ExpectedToken` if the current token is not an identifier, or
/// `UnexpectedEndOfInput` at the end of the source.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<String> {
    let line = tokens.line();
    match tokens.peek() {
        Token::Identifier(_) => match tokens.advance()? {
            (Token::Identifier(name), _) => Ok(name),
            _ => unreachable!(),
        },
        Token::Eof => Err(SyntaxError::UnexpectedEndOfInput { line }.into()),
        found => Err(SyntaxError::ExpectedToken { expected: "identifier".to_string(),
                                                  found: found.to_string(),
                                                  line }.into()),
    }
}

/// Consumes any number of `;` statement terminators.
pub(in crate::interpreter::parser) fn skip_terminators(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<()> {
    while *tokens.peek() == Token::Semicolon {
        tokens.advance()?;
    }
    Ok(())
}
