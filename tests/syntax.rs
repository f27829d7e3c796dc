use pebble::{
    ast::{BinaryOperator, ElseBranch, Expr, LiteralValue, Statement, UnaryOperator},
    error::LexError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::stream::TokenStream,
    },
    parse,
};

fn tokens_of(src: &str) -> Vec<(Token, usize)> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let (token, line) = lexer.next_token().unwrap();
        if token == Token::Eof {
            return tokens;
        }
        tokens.push((token, line));
    }
}

fn kinds_of(src: &str) -> Vec<Token> {
    tokens_of(src).into_iter().map(|(token, _)| token).collect()
}

fn number(value: f64) -> Expr {
    Expr::Literal { value: LiteralValue::Number(value),
                    line:  1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn single_expression(src: &str) -> Expr {
    let mut program = parse(src).unwrap();
    assert_eq!(program.statements.len(), 1);
    match program.statements.remove(0) {
        Statement::Expression { expr, .. } | Statement::Print { expr, .. } => expr,
        other => panic!("Expected an expression, got {other:?}"),
    }
}

#[test]
fn operators_prefer_the_longest_match() {
    use Token::{
        AndAnd, Bang, BangEqual, EqualEqual, Equals, Greater, GreaterEqual, Less, LessEqual, OrOr,
    };
    assert_eq!(kinds_of("== != <= >= < > && || ! ="),
               vec![EqualEqual,
                    BangEqual,
                    LessEqual,
                    GreaterEqual,
                    Less,
                    Greater,
                    AndAnd,
                    OrOr,
                    Bang,
                    Equals]);
    assert_eq!(kinds_of("a==b"),
               vec![Token::Identifier("a".to_string()),
                    EqualEqual,
                    Token::Identifier("b".to_string())]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds_of("print if else while var input true false"),
               vec![Token::Print,
                    Token::If,
                    Token::Else,
                    Token::While,
                    Token::Var,
                    Token::Input,
                    Token::Bool(true),
                    Token::Bool(false)]);
    assert_eq!(kinds_of("printer while_ _x"),
               vec![Token::Identifier("printer".to_string()),
                    Token::Identifier("while_".to_string()),
                    Token::Identifier("_x".to_string())]);
}

#[test]
fn identifiers_stop_at_digits() {
    assert_eq!(kinds_of("x1"), vec![Token::Identifier("x".to_string()), Token::Number(1.0)]);
}

#[test]
fn number_and_string_literals() {
    assert_eq!(kinds_of("42 3.25 2."),
               vec![Token::Number(42.0), Token::Number(3.25), Token::Number(2.0)]);
    assert_eq!(kinds_of(r#""a\"b" "" "tab\t""#),
               vec![Token::Str("a\"b".to_string()),
                    Token::Str(String::new()),
                    Token::Str("tab\t".to_string())]);
}

#[test]
fn all_blank_characters_are_skipped() {
    assert_eq!(kinds_of("print\x0B1 \t\r\x0C2"),
               vec![Token::Print, Token::Number(1.0), Token::Number(2.0)]);
}

#[test]
fn oversized_number_literal_is_rejected() {
    let literal = format!("1{}", "0".repeat(400));
    let mut lexer = Lexer::new(&literal);
    match lexer.next_token() {
        Err(LexError::InvalidNumber { literal: text, line }) => {
            assert_eq!(text, literal);
            assert_eq!(line, 1);
        },
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn lexer_tracks_lines() {
    let tokens = tokens_of("a\n\nb // note\n\"x\ny\" c");
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
    assert_eq!(lines, vec![1, 3, 4, 5]);
}

#[test]
fn lexer_keeps_returning_eof() {
    let mut lexer = Lexer::new("  // only a comment");
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
    }
}

#[test]
fn token_stream_looks_two_tokens_ahead() {
    let mut tokens = TokenStream::new("x = 1").unwrap();
    assert_eq!(*tokens.peek(), Token::Identifier("x".to_string()));
    assert_eq!(*tokens.peek_second().unwrap(), Token::Equals);
    assert_eq!(*tokens.peek(), Token::Identifier("x".to_string()));

    tokens.advance().unwrap();
    assert_eq!(*tokens.peek(), Token::Equals);
    tokens.advance().unwrap();
    assert_eq!(*tokens.peek(), Token::Number(1.0));
    tokens.advance().unwrap();
    assert!(tokens.at_end());
}

#[test]
fn precedence_shapes_the_tree() {
    assert_eq!(single_expression("2 + 3 * 4"),
               binary(number(2.0),
                      BinaryOperator::Add,
                      binary(number(3.0), BinaryOperator::Mul, number(4.0))));
    assert_eq!(single_expression("10 - 3 - 2"),
               binary(binary(number(10.0), BinaryOperator::Sub, number(3.0)),
                      BinaryOperator::Sub,
                      number(2.0)));
}

#[test]
fn logical_operators_bind_loosest() {
    let expr = single_expression("1 < 2 || 3 == 4 && 5");
    let Expr::BinaryOp { op: BinaryOperator::Or, left, right, .. } = expr else {
        panic!("Expected '||' at the root");
    };
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Less, .. }));
    let Expr::BinaryOp { op: BinaryOperator::And, left, .. } = *right else {
        panic!("Expected '&&' on the right");
    };
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Equal, .. }));
}

#[test]
fn unary_minus_applies_to_the_primary() {
    let expr = single_expression("-2 * 3");
    let Expr::BinaryOp { op: BinaryOperator::Mul, left, .. } = expr else {
        panic!("Expected '*' at the root");
    };
    assert_eq!(*left,
               Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(number(2.0)),
                               line: 1, });
}

#[test]
fn statements_are_recognised() {
    let program = parse("var a = 1\nb = a\nprint b\nb == 1\nwhile (a) { a = 0 }\ninput").unwrap();
    let kinds: Vec<&str> = program.statements.iter().map(Statement::kind).collect();
    assert_eq!(kinds,
               vec!["declaration", "assignment", "print", "expression", "while", "expression"]);
    let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn while_body_keeps_statement_order() {
    let program = parse("while (x < 3) { print x; x = x + 1; }").unwrap();
    let Statement::While { body, .. } = &program.statements[0] else {
        panic!("Expected a while loop");
    };
    assert_eq!(body.statements.len(), 2);
    assert!(matches!(body.statements[0], Statement::Print { .. }));
    assert!(matches!(body.statements[1], Statement::Assignment { .. }));
}

#[test]
fn else_if_nests_inside_the_else_branch() {
    let program = parse("if (a) { } else if (b) { print 1 } else { print 2 }").unwrap();
    let Statement::If { else_branch: Some(ElseBranch::If(inner)), .. } = &program.statements[0]
    else {
        panic!("Expected an else-if chain");
    };
    assert!(matches!(**inner,
                     Statement::If { else_branch: Some(ElseBranch::Block(_)),
                                     .. }));
}

#[test]
fn empty_source_is_an_empty_program() {
    assert!(parse("").unwrap().statements.is_empty());
    assert!(parse("  // nothing\n\n").unwrap().statements.is_empty());
}
