/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Parse errors include unrecognized characters, unexpected tokens,
/// unbalanced parentheses, and input left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include division by zero and integer arithmetic that leaves the
/// representable range.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
