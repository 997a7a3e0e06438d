/// Lexing errors.
///
/// Raised while splitting a line into tokens: characters that start no
/// token, malformed numeric literals, and identifiers missing from the
/// registry.
pub mod lex_error;
/// Parsing errors.
///
/// Structural problems detected while reducing the token sequence: missing
/// operands, unbalanced parentheses, arity mismatches and leftover tokens.
pub mod parse_error;
/// Domain errors.
///
/// Failures of the arithmetic itself, such as a negative factorial, a
/// division by zero or a boolean used where a number is required.
pub mod domain_error;

pub use domain_error::DomainError;
pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;

/// Any failure raised while evaluating a line.
///
/// The plain `Display` form is the terse message shown at the prompt: unknown
/// identifiers are named, every other failure reads `invalid expression!`.
/// The alternate form (`{:#}`) shows the detailed message of the underlying
/// error.
///
/// # Example
/// ```
/// use calq::evaluate;
///
/// let err = evaluate("(1 + 2").unwrap_err();
/// assert_eq!(err.to_string(), "invalid expression!");
/// assert_eq!(format!("{err:#}"),
///            "Error at column 0: Expected closing parenthesis ')' but none found.");
///
/// let err = evaluate("foo(1)").unwrap_err();
/// assert_eq!(err.to_string(), "unknown identifier 'foo'!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid expression.
    Parse(ParseError),
    /// The expression is well-formed but its value is undefined.
    Domain(DomainError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<DomainError> for Error {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return match self {
                Self::Lex(e) => write!(f, "{e}"),
                Self::Parse(e) => write!(f, "{e}"),
                Self::Domain(e) => write!(f, "{e}"),
            };
        }

        if let Self::Lex(e) = self
           && let Some(name) = e.unknown_identifier()
        {
            return write!(f, "unknown identifier '{name}'!");
        }

        write!(f, "invalid expression!")
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Domain(e) => Some(e),
        }
    }
}
