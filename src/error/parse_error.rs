#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all structural errors found while parsing a token sequence.
pub enum ParseError {
    /// The line contained no tokens.
    EmptyInput,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The function name.
        name:     &'static str,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Byte offset of the function name.
        position: usize,
    },
    /// A function of arity other than one was used without parentheses.
    ExpectedArgumentList {
        /// The function name.
        name:     &'static str,
        /// Byte offset of the function name.
        position: usize,
    },
    /// Found extra tokens after the expression was complete.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Groups, call arguments or unary operators are nested too deeply.
    NestingTooDeep {
        /// Byte offset of the first token past the limit.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Empty input."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at column {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at column {position}: Expected closing parenthesis ')' but none found."),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error at column {position}: '{name}' takes {expected} argument(s) but {found} were given."),

            Self::ExpectedArgumentList { name, position } => write!(f,
                                                                    "Error at column {position}: '{name}' must be called with parentheses."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at column {position}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { position } => {
                write!(f, "Error at column {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
