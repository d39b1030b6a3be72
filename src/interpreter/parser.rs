/// Binary operator parsing.
///
/// Contains the left-associative parsing loops for the additive and
/// multiplicative precedence levels, and the token-to-operator mapping.
pub mod binary;
/// Parser entry points.
///
/// Declares the parser result type, the top-level `parse` function that
/// enforces full consumption of the token sequence, and `parse_expression`,
/// the head of the precedence hierarchy.
pub mod core;
/// Unary and primary expression parsing.
///
/// Handles the right-recursive prefix operators and the atomic expressions
/// they apply to: literals and parenthesized groups.
pub mod unary;
