#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source column where the error occurred.
        col: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source column where the error occurred.
        col: usize,
    },
    /// An integer was too large to be promoted to a real number exactly.
    LiteralTooLarge {
        /// The source column where the error occurred.
        col: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { col } => write!(f, "Division by zero at column {col}."),

            Self::Overflow { col } => write!(f,
                                             "Integer overflow while trying to compute result at column {col}."),

            Self::LiteralTooLarge { col } => write!(f,
                                                    "Literal at column {col} is too large to be represented exactly."),
        }
    }
}

impl std::error::Error for RuntimeError {}
