use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for evaluation. The evaluator dispatches on
/// the expression variant: literals evaluate to their stored value, unary and
/// binary operations evaluate their operands first (left before right) and
/// then apply the operator. The match is exhaustive over the closed set of
/// node variants, so no unhandled node kind can reach evaluation.
///
/// Evaluation is purely functional over the tree; nothing outside the
/// returned value is touched.
///
/// # Parameters
/// - `expr`: Root of the expression tree to evaluate.
///
/// # Returns
/// The computed [`Value`].
///
/// # Errors
/// Propagates the first `RuntimeError` raised anywhere in the tree; once an
/// operand fails, the enclosing operation is never applied.
///
/// # Example
/// ```
/// use numeval::interpreter::{
///     evaluator::core::eval,
///     lexer::tokenize,
///     parser::core::parse,
///     value::Value,
/// };
///
/// let tokens = tokenize("2 * (3 + 4)").unwrap();
/// let expr = parse(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(eval(&expr).unwrap(), Value::Integer(14));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(value.into()),
        Expr::UnaryOp { op, expr, col } => {
            let value = eval(expr)?;
            eval_unary(*op, &value, *col)
        },
        Expr::BinaryOp { left, op, right, col } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary(*op, &left, &right, *col)
        },
    }
}
