use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{core::{ParseResult, parse_expression}, stream::TokenStream},
    },
};

/// Parses a unary expression (a `factor`).
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators bind tighter than any binary operator and are
/// right-associative, so `!-x` is parsed as `!(-x)` and `-2 + 3` as
/// `(-2) + 3`. A `-` reaching this function is unary by position.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let op = match tokens.peek() {
        Token::Minus => UnaryOperator::Negate,
        Token::Bang => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    let (_, line) = tokens.advance()?;
    let expr = parse_unary(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, string and boolean literals
/// - identifiers
/// - the `input` keyword
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | STRING | BOOL
///              | IDENTIFIER
///              | "input"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - `UnexpectedToken` for any token that cannot start an expression.
/// - `UnexpectedEndOfInput` at the end of the source.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    match tokens.peek() {
        Token::Number(_) | Token::Str(_) | Token::Bool(_) => parse_literal(tokens),
        Token::LParen => parse_grouping(tokens),
        Token::Identifier(_) => {
            let (token, line) = tokens.advance()?;
            let Token::Identifier(name) = token else {
                unreachable!()
            };
            Ok(Expr::Variable { name, line })
        },
        Token::Input => {
            let (_, line) = tokens.advance()?;
            Ok(Expr::Input { line })
        },
        Token::Eof => Err(SyntaxError::UnexpectedEndOfInput { line: tokens.line() }.into()),
        tok => Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                  line:  tokens.line(), }.into()),
    }
}

/// Parses a number, string or boolean literal.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let (token, line) = tokens.advance()?;
    let value = match token {
        Token::Number(n) => LiteralValue::Number(n),
        Token::Str(s) => LiteralValue::Str(s),
        Token::Bool(b) => LiteralValue::Bool(b),
        _ => unreachable!(),
    };

    Ok(Expr::Literal { value, line })
}

/// Parses a parenthesized expression of the form `( expression )`.
///
/// The function consumes the opening `(`, parses an expression, and expects a
/// closing `)`. A missing closing parenthesis produces
/// `SyntaxError::UnmatchedParenthesis`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `(`.
///
/// # Returns
/// The inner expression; grouping leaves no node of its own.
fn parse_grouping(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let (_, line) = tokens.advance()?;
    let expr = parse_expression(tokens)?;

    if *tokens.peek() == Token::RParen {
        tokens.advance()?;
        Ok(expr)
    } else {
        Err(SyntaxError::UnmatchedParenthesis { line }.into())
    }
}
