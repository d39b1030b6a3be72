use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value produced by evaluation.
///
/// This enum models the two numeric types that can appear in expressions and
/// results. Integer and real values stay distinct through arithmetic;
/// promotion to real happens only when an operation mixes the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64` for mixed-type arithmetic.
    ///
    /// Reals are returned as-is. For integers, conversion fails if the value
    /// is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `col`: Source column for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The numeric value.
    /// - `Err(RuntimeError::LiteralTooLarge)`: If the integer is not exactly
    ///   representable.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    ///
    /// assert_eq!(x.as_real(1).unwrap(), 10.0);
    /// ```
    pub fn as_real(&self, col: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { col }),
        }
    }

    /// Returns `true` if the value is [`Real`].
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` if the value is [`Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(n) => (*n).into(),
        }
    }
}
