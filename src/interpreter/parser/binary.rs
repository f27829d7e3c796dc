use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, stream::TokenStream, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// Parses an operand with `next`, then, while the current token maps to one
/// of `operators`, consumes it, parses another operand and folds both into a
/// [`Expr::BinaryOp`]. This gives `a - b - c` the shape `(a - b) - c`.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `operators`: Operators that belong to this level.
/// - `next`: Parser for the next-higher precedence level.
///
/// # Returns
/// The folded expression tree.
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          operators: &[BinaryOperator],
                          next: fn(&mut TokenStream<'_>) -> ParseResult<Expr>)
                          -> ParseResult<Expr> {
    let mut left = next(tokens)?;

    while let Some(op) = token_to_binary_operator(tokens.peek())
          && operators.contains(&op)
    {
        let (_, line) = tokens.advance()?;
        let right = next(tokens)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses logical OR expressions.
///
/// Precedence is the lowest of all operators. Both operands are always
/// parsed; whether the right one runs is decided at evaluation time.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, &[BinaryOperator::And], parse_equality)
}

/// Parses equality expressions.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_comparison)
}

/// Parses ordering comparisons.
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Less,
                             BinaryOperator::Greater,
                             BinaryOperator::LessEqual,
                             BinaryOperator::GreaterEqual],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Example
/// ```
/// use pebble::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::{binary::parse_additive, stream::TokenStream},
/// };
///
/// let mut tokens = TokenStream::new("10 - 3 - 2").unwrap();
/// let expr = parse_additive(&mut tokens).unwrap();
///
/// // Left-associative: (10 - 3) - 2
/// let Expr::BinaryOp { left, op, .. } = expr else { panic!("expected a binary node") };
/// assert_eq!(op, BinaryOperator::Sub);
/// assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
/// ```
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Mul, BinaryOperator::Div],
                           parse_unary)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens. `-` maps to subtraction here; whether it
/// is actually unary is decided by where the parser meets it.
///
/// # Example
/// ```
/// use pebble::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}
