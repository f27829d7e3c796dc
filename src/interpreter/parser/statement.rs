use tracing::debug;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression, parse_if, parse_while},
            stream::TokenStream,
            utils::{expect, parse_identifier, skip_terminators},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a `print` statement.
/// - a `var` declaration.
/// - an assignment.
/// - a `while` loop or an `if` statement.
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
/// Any `;` terminators after the statement are consumed.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let statement = parse_statement_body(tokens)?;
    skip_terminators(tokens)?;

    debug!(kind = statement.kind(),
           line = statement.line_number(),
           "parsed statement");
    Ok(statement)
}

fn parse_statement_body(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    if let Some(statement) = parse_print(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }
    match tokens.peek() {
        Token::While => return parse_while(tokens),
        Token::If => return parse_if(tokens),
        _ => {},
    }

    let line = tokens.line();
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses a print statement of the form `print <expression>`.
///
/// If the current token is not `print`, this function returns `Ok(None)` and
/// does not consume any input.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a possible `print`.
///
/// # Returns
/// - `Ok(Some(Statement::Print))` if a print statement is parsed,
/// - `Ok(None)` if no print statement is present.
fn parse_print(tokens: &mut TokenStream<'_>) -> ParseResult<Option<Statement>> {
    if *tokens.peek() != Token::Print {
        return Ok(None);
    }

    let (_, line) = tokens.advance()?;
    let expr = parse_expression(tokens)?;

    Ok(Some(Statement::Print { expr, line }))
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `var <identifier> = <expression>`.
///
/// If the current token is not `var`, this function returns `Ok(None)` and
/// does not consume any input.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a possible `var`.
///
/// # Returns
/// - `Ok(Some(Statement::VariableDeclaration))` if a declaration is parsed,
/// - `Ok(None)` if no declaration is present.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the identifier is missing,
/// - `=` is missing,
/// - the expression is malformed.
fn parse_variable_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Option<Statement>> {
    if *tokens.peek() != Token::Var {
        return Ok(None);
    }

    let (_, line) = tokens.advance()?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, "'=' after variable name")?;
    let value = parse_expression(tokens)?;

    Ok(Some(Statement::VariableDeclaration { name, value, line }))
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a two-token lookahead: only if the current token is
/// an identifier and the one after it is `=` is an assignment parsed. A lone
/// identifier, or one followed by `==`, is left for the expression parser.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` for assignments,
/// - `Ok(None)` if no assignment is present.
fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Option<Statement>> {
    if !matches!(tokens.peek(), Token::Identifier(_)) || *tokens.peek_second()? != Token::Equals
    {
        return Ok(None);
    }

    let line = tokens.line();
    let name = parse_identifier(tokens)?;
    tokens.advance()?;
    let value = parse_expression(tokens)?;

    Ok(Some(Statement::Assignment { name, value, line }))
}
