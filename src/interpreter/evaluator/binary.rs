use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary arithmetic operation.
///
/// Two integer operands produce an integer result, with division truncating
/// toward zero. If either operand is real, both sides are promoted to `f64`
/// and the result is real. Division by zero is checked explicitly for both
/// numeric categories, and integer arithmetic that leaves the `i64` range
/// reports an overflow instead of wrapping.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `col`: Source column for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use numeval::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let x = Value::Real(1.5);
/// let y = Value::Real(2.0);
///
/// let result = eval_binary(BinaryOperator::Mul, &x, &y, 1).unwrap();
/// assert_eq!(result, Value::Real(3.0));
///
/// let result = eval_binary(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), 1);
/// assert_eq!(result.unwrap(), Value::Integer(3));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   col: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Integer, Real};

    match (left, right) {
        (Real(_), _) | (_, Real(_)) => {
            let left = left.as_real(col)?;
            let right = right.as_real(col)?;

            Ok(Real(match op {
                        Add => left + right,
                        Sub => left - right,
                        Mul => left * right,
                        Div => {
                            if right == 0.0 {
                                return Err(RuntimeError::DivisionByZero { col });
                            }
                            left / right
                        },
                    }))
        },
        (Integer(a), Integer(b)) => {
            let computed = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                Div => {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero { col });
                    }
                    a.checked_div(*b)
                },
            };

            computed.map(Integer).ok_or(RuntimeError::Overflow { col })
        },
    }
}
