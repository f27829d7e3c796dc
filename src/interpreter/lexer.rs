use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello\n"`. Escapes are already
    /// decoded.
    #[regex(r#""([^"\\]|\\[\s\S])*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `var`
    #[token("var")]
    Var,
    /// `input`
    #[token("input")]
    Input,
    /// Identifier tokens; variable names such as `x` or `loop_count`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// Line breaks; only counted, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns, form feeds and vertical tabs.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the scanner; [`Lexer::next_token`]
    /// returns it once the source is exhausted.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::Bool(b) => write!(f, "boolean {b}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Eof => write!(f, "end of input"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl Token {
    /// Returns the source spelling of keyword and operator tokens.
    ///
    /// Tokens that carry a payload have no fixed spelling and return an empty
    /// string.
    ///
    /// # Example
    /// ```
    /// use pebble::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::BangEqual.symbol(), "!=");
    /// assert_eq!(Token::While.symbol(), "while");
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Var => "var",
            Self::Input => "input",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Bang => "!",
            Self::Number(_)
            | Self::Str(_)
            | Self::Bool(_)
            | Self::Identifier(_)
            | Self::Comment
            | Self::NewLine
            | Self::Ignored
            | Self::Eof => "",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Pull-based token source.
///
/// Wraps the generated scanner so that tokens are produced one at a time, on
/// demand, each paired with the line it starts on. Once the source is
/// exhausted every further call yields [`Token::Eof`].
///
/// # Example
/// ```
/// use pebble::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 1");
///
/// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("x".to_string()), 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Equals, 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Number(1.0), 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Scans and returns the next token together with its source line.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the input at the cursor does not form a
    /// token: an unknown character, an unterminated string or a malformed
    /// number.
    pub fn next_token(&mut self) -> Result<(Token, usize), LexError> {
        match self.inner.next() {
            None => Ok((Token::Eof, self.inner.extras.line)),
            Some(Ok(token)) => {
                // Multi-line strings have already advanced the counter.
                let line = self.inner.extras.line - self.inner.slice().matches('\n').count();
                trace!(%token, line, "scanned token");
                Ok((token, line))
            },
            Some(Err(())) => Err(self.classify_error()),
        }
    }

    fn classify_error(&self) -> LexError {
        let slice = self.inner.slice();
        let line = self.inner.extras.line;

        match slice.chars().next() {
            Some('"') => LexError::UnterminatedString { line },
            Some(c) if c.is_ascii_digit() => LexError::InvalidNumber { literal: slice.to_string(),
                                                                       line },
            Some(character) => LexError::UnexpectedCharacter { character, line },
            None => LexError::UnexpectedCharacter { character: '\0',
                                                    line },
        }
    }
}

/// Parses a numeric literal from the current token slice. Literals too large
/// for an `f64` are rejected.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Decodes a quoted string literal and keeps the line counter in step with
/// any line breaks inside it.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    unescape(&slice[1..slice.len() - 1])
}

/// Resolves backslash escapes. Unknown escapes keep the escaped character.
///
/// # Example
/// ```
/// use pebble::interpreter::lexer::unescape;
///
/// assert_eq!(unescape(r#"a\tb\n\"q\"\\"#), "a\tb\n\"q\"\\");
/// assert_eq!(unescape(r"\x"), "x");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
