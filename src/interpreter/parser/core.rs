use tracing::debug;

use crate::{
    ast::{ElseBranch, Expr, Program, Statement},
    error::{Error, SyntaxError},
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical_or, block::parse_block, statement::parse_statement,
            stream::TokenStream, utils::expect,
        },
    },
};

/// Result type used by the parser.
///
/// Parsing pulls tokens lazily, so a failure is either a lexical error
/// surfacing from the stream or a syntax error; both are carried as
/// [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// Parses a complete program.
///
/// Statements are parsed one after another until the end of input. The
/// first error aborts parsing; no partial program is returned.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the source.
///
/// # Returns
/// The top-level statements in source order.
pub fn parse_program(tokens: &mut TokenStream<'_>) -> ParseResult<Program> {
    let mut statements = Vec::new();

    while !tokens.at_end() {
        statements.push(parse_statement(tokens)?);
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_logical_or(tokens)
}

/// Parses a parenthesized condition as used by `while` and `if`.
///
/// Grammar: `condition := "(" expression ")"`
fn parse_condition(tokens: &mut TokenStream<'_>, keyword: &str) -> ParseResult<Expr> {
    expect(tokens, &Token::LParen, &format!("'(' after '{keyword}'"))?;
    let condition = parse_expression(tokens)?;

    match tokens.peek() {
        Token::RParen => {
            tokens.advance()?;
            Ok(condition)
        },
        Token::Eof => Err(SyntaxError::UnexpectedEndOfInput { line: tokens.line() }.into()),
        _ => Err(SyntaxError::UnmatchedParenthesis { line: tokens.line() }.into()),
    }
}

/// Parses a `while` loop.
///
/// Syntax:
/// ```text
///     while (<condition>) { <statements> }
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
///
/// # Returns
/// A [`Statement::While`] node.
///
/// # Errors
/// - `ExpectedToken` if the condition is not parenthesized or the body is not
///   a block.
/// - Propagates any errors from the condition or body.
pub fn parse_while(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let line = expect(tokens, &Token::While, "'while'")?;
    let condition = parse_condition(tokens, "while")?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if (<condition>) { <statements> }
///     else if (<condition>) { <statements> }
///     else { <statements> }
/// ```
/// Nested `else if` constructs are parsed recursively.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// A [`Statement::If`] node representing the full conditional.
///
/// # Errors
/// - `ExpectedToken` if a condition or block is malformed, or if `else` is
///   followed by anything other than `if` or a block.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let line = expect(tokens, &Token::If, "'if'")?;
    let condition = parse_condition(tokens, "if")?;
    let then_branch = parse_block(tokens)?;

    let else_branch = if *tokens.peek() == Token::Else {
        tokens.advance()?;

        match tokens.peek() {
            Token::If => Some(ElseBranch::If(Box::new(parse_if(tokens)?))),
            Token::LBrace => Some(ElseBranch::Block(parse_block(tokens)?)),
            found => {
                return Err(SyntaxError::ExpectedToken { expected: "'if' or '{' after 'else'".to_string(),
                                                        found:    found.to_string(),
                                                        line:     tokens.line(), }.into());
            },
        }
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}
