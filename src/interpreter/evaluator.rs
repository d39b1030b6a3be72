/// Binary arithmetic evaluation.
///
/// Applies the four arithmetic operators to evaluated operands, promoting
/// integers to reals for mixed operations and checking for division by zero
/// and integer overflow.
pub mod binary;
/// Core evaluation dispatch.
///
/// Declares the evaluator result type and the tree-walking `eval` function
/// that dispatches on AST node variants.
pub mod core;
/// Unary operator evaluation.
///
/// Applies negation and unary plus to an evaluated operand.
pub mod unary;
