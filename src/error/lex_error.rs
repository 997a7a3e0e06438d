/// Classifies why the lexer rejected a piece of input.
///
/// This is the error type handed to `logos`, so it must be cheap to clone and
/// provide a default for characters that match no token at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that starts no token, such as `$` or a leading `.`.
    #[default]
    UnexpectedCharacter,
    /// A numeric literal with a second `.` or ending in `.` at end of input.
    MalformedNumber,
    /// An identifier with no registry entry.
    UnknownIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A lexical error together with the offending text.
pub struct LexError {
    /// What went wrong.
    pub kind:     LexErrorKind,
    /// The rejected text. Identifiers are stored lowercased.
    pub lexeme:   String,
    /// Byte offset of the lexeme in the input line.
    pub position: usize,
}

impl LexError {
    /// Returns the identifier name if this is an unknown-identifier error.
    #[must_use]
    pub fn unknown_identifier(&self) -> Option<&str> {
        match self.kind {
            LexErrorKind::UnknownIdentifier => Some(&self.lexeme),
            _ => None,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { kind, lexeme, position } = self;
        match kind {
            LexErrorKind::UnexpectedCharacter => {
                write!(f, "Error at column {position}: Unexpected character '{lexeme}'.")
            },
            LexErrorKind::MalformedNumber => {
                write!(f, "Error at column {position}: Malformed number '{lexeme}'.")
            },
            LexErrorKind::UnknownIdentifier => {
                write!(f, "Error at column {position}: Unknown identifier '{lexeme}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
