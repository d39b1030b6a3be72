use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators bind tighter than any binary operator and are
/// right-recursive, so they may repeat: `--5` is parsed as `-(-(5))` and
/// `+-5` as `+(-(5))`, each application wrapping the inner result in one
/// more [`Expr::UnaryOp`] node.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, col)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           col:  *col, })
    } else if let Some((Token::Plus, col)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Plus,
                           expr: Box::new(expr),
                           col:  *col, })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar: integer literals, real
/// literals and parenthesized expressions. Anything else in this position is
/// a syntax error; the end-of-input token gets its own error so a truncated
/// expression like `1 +` reads as unexpected end of input rather than an
/// unexpected token.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | REAL
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { col: 0 })?;

    match peeked {
        (Token::Integer(..) | Token::Real(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::End, col) => Err(ParseError::UnexpectedEndOfInput { col: *col }),
        (tok, col) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                        col:   *col, }),
    }
}

/// Parses a numeric literal into a leaf node.
///
/// The literal's value travels inside the token variant, so a literal zero
/// is a real payload and never mistaken for an absent one.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (tok, col) = tokens.peek().unwrap();
    match tok {
        Token::Integer(n) => {
            tokens.next();
            Ok(Expr::Literal { value: n.into(),
                               col:   *col, })
        },
        Token::Real(r) => {
            tokens.next();
            Ok(Expr::Literal { value: r.into(),
                               col:   *col, })
        },
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields [`ParseError::ExpectedClosingParen`].
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, col) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { col }),
    }
}
