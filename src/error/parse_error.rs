#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The scanner found a character that is not part of the language.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source column where the error occurred.
        col:       usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source column where the error occurred.
        col:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source column where the error occurred.
        col: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source column where the error occurred.
        col: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source column where the error occurred.
        col:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, col } => {
                write!(f, "Invalid character '{character}' at column {col}.")
            },

            Self::UnexpectedToken { token, col } => {
                write!(f, "Invalid syntax at column {col}: unexpected token {token}.")
            },

            Self::UnexpectedEndOfInput { col } => {
                write!(f, "Unexpected end of input at column {col}.")
            },

            Self::ExpectedClosingParen { col } => write!(f,
                                                         "Expected closing parenthesis ')' at column {col} but none found."),

            Self::UnexpectedTrailingTokens { token, col } => write!(f,
                                                                    "Extra tokens after expression at column {col}: {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
