use crate::{
    ast::Block,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, stream::TokenStream, utils::expect},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; running out of input first is an error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A [`Block`] containing all parsed statements.
///
/// # Errors
/// - `ExpectedToken` if the stream is not positioned at `{`.
/// - `UnexpectedEndOfInput` if the closing `}` is missing.
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Block> {
    let line = expect(tokens, &Token::LBrace, "'{'")?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Token::RBrace => {
                tokens.advance()?;
                break;
            },
            Token::Eof => {
                return Err(SyntaxError::UnexpectedEndOfInput { line: tokens.line() }.into());
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Block { statements, line })
}
