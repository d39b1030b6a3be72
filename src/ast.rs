/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw constant values that can appear directly in
/// source text. The lexer produces them and the parser stores them inside
/// [`Expr::Literal`] leaf nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl<T: Into<Self> + Clone> From<&T> for LiteralValue {
    fn from(v: &T) -> Self {
        v.clone().into()
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of three variants: literal leaves, unary operations
/// and binary operations. Each variant carries the source column of the token
/// it was built from so errors can point back into the input. Every node owns
/// its child subtrees exclusively; the tree is built bottom-up by the parser,
/// consumed read-only by the evaluator, and dropped as a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer or real).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Column in the source text.
        col:   usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Column in the source text.
        col:  usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Column in the source text.
        col:   usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use numeval::ast::Expr;
    ///
    /// let expr = Expr::Literal { value: 5.into(),
    ///                            col:   3, };
    ///
    /// assert_eq!(expr.column(), 3);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { col, .. } | Self::UnaryOp { col, .. } | Self::BinaryOp { col, .. } => {
                *col
            },
        }
    }
}

/// Represents a binary operator.
///
/// The four arithmetic operators the grammar accepts between two operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
///
/// Unary operators bind tighter than any binary operator and may repeat.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Unary plus; returns its operand unchanged (e.g. `+x`).
    Plus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Plus => "+",
        };
        write!(f, "{operator}")
    }
}
