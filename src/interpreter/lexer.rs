use logos::Logos;

use crate::{
    error::{LexError, LexErrorKind},
    interpreter::{
        registry::core::{Builtin, Entry, lookup},
        value::core::Value,
    },
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
///
/// Identifiers never reach the parser: [`tokenize`] resolves them through the
/// registry into `Number`, `Bool` or `Function` tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Boolean constants, `true` and `false`.
    Bool(bool),
    /// A builtin function, carrying its name and arity.
    Function(&'static Builtin),
    /// Identifier resolved against the registry, such as `pi` or `sqrt`.
    ///
    /// Internal to the lexer: [`tokenize`] always replaces it with the
    /// `Number`, `Bool` or `Function` token the entry stands for, so the
    /// parser never receives it.
    #[doc(hidden)]
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", resolve_identifier)]
    Identifier(&'static Entry),
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `=` or `==`
    #[token("=")]
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<<`
    #[token("<<")]
    LessLess,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>>`
    #[token(">>")]
    GreaterGreater,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

impl From<&'static Entry> for Token {
    fn from(entry: &'static Entry) -> Self {
        match entry {
            Entry::Constant(Value::Number(n)) => Self::Number(*n),
            Entry::Constant(Value::Bool(b)) => Self::Bool(*b),
            Entry::Function(builtin) => Self::Function(builtin),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Number(n) => return write!(f, "{}", Value::Number(*n)),
            Self::Bool(b) => return write!(f, "{b}"),
            Self::Function(builtin) => builtin.name,
            Self::Identifier(_) => "identifier",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::LessLess => "<<",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::GreaterGreater => ">>",
            Self::Ampersand => "&",
            Self::DoubleAmpersand => "&&",
            Self::Pipe => "|",
            Self::DoublePipe => "||",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
        };
        write!(f, "{symbol}")
    }
}

/// Splits a line into tokens paired with their byte offsets.
///
/// Whitespace is skipped. Identifiers are matched case-insensitively and
/// replaced by the registry entry they name.
///
/// # Errors
/// Returns a `LexError` for a character that starts no token, for a number
/// with a second `.` or a `.` at the end of the line, and for an identifier
/// missing from the registry.
///
/// # Example
/// ```
/// use calq::{
///     error::LexErrorKind,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("2 * PI").unwrap();
/// assert_eq!(tokens[0], (Token::Number(2.0), 0));
/// assert_eq!(tokens[1], (Token::Star, 2));
/// assert_eq!(tokens[2], (Token::Number(std::f64::consts::PI), 4));
///
/// let tokens = tokenize("sqrt e").unwrap();
/// assert!(tokens.iter().all(|(token, _)| !matches!(token, Token::Identifier(_))));
///
/// let err = tokenize("1 + Foo").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::UnknownIdentifier);
/// assert_eq!(err.lexeme, "foo");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(Token::Identifier(entry)) => tokens.push((Token::from(entry), position)),
            Ok(tok) => tokens.push((tok, position)),
            Err(kind) => {
                let lexeme = match kind {
                    LexErrorKind::UnknownIdentifier => lexer.slice().to_ascii_lowercase(),
                    _ => lexer.slice().to_string(),
                };
                return Err(LexError { kind,
                                      lexeme,
                                      position });
            },
        }
    }

    log::debug!("tokenized {} token(s) from {source:?}", tokens.len());
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// The regex already limits the literal to digits with at most one `.`; this
/// rejects a second `.` directly after the match, a `.` that ends the line,
/// and literals too long to be finite.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    let remainder = lex.remainder();
    if remainder.starts_with('.') || (slice.ends_with('.') && remainder.is_empty()) {
        return Err(LexErrorKind::MalformedNumber);
    }

    match slice.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(LexErrorKind::MalformedNumber),
    }
}

/// Looks the lowercased identifier up in the registry.
fn resolve_identifier(lex: &logos::Lexer<Token>) -> Result<&'static Entry, LexErrorKind> {
    lookup(&lex.slice().to_ascii_lowercase()).ok_or(LexErrorKind::UnknownIdentifier)
}
