use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression tree.
///
/// This is the entry point for parsing. After the top-level expression has
/// been parsed, the current token must be [`Token::End`]; anything else means
/// part of the input was left unconsumed, which is a syntax error even though
/// the leading expression parsed cleanly (`1 2` fails here, not earlier).
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - [`ParseError::UnexpectedTrailingTokens`] if tokens remain after the
///   expression.
/// - [`ParseError::UnexpectedEndOfInput`] if the sequence is missing its
///   [`Token::End`] terminator.
/// - Propagates any error from sub-expression parsing untouched.
///
/// # Example
/// ```
/// use numeval::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("(1 + 2) * 3").unwrap();
/// let expr = parse(&mut tokens.iter().peekable()).unwrap();
///
/// // The root node is the multiplication, at the column of `*`.
/// assert_eq!(expr.column(), 9);
/// ```
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::End, _)) => Ok(expr),
        Some((tok, col)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                       col:   *col, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { col: expr.column() }),
    }
}

/// Parses a full expression.
///
/// This is the head of the precedence hierarchy. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the tighter-binding levels.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens)
}
