use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation. Integers stay integers and reals stay
///   reals, the same typing that multiplying by `-1` would produce.
///   Negating `i64::MIN` reports an overflow.
/// - `Plus`: passthrough; the operand is returned unchanged.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `col`: Source column for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use numeval::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_unary(UnaryOperator::Plus, &Value::Real(2.5), 1).unwrap();
/// assert_eq!(v, Value::Real(2.5));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, col: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { col }),
            Value::Real(r) => Ok(Value::Real(-r)),
        },
        UnaryOperator::Plus => Ok(*value),
    }
}
