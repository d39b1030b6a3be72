use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5` or `2.`.
    ///
    /// Digits with at most one decimal point. A second decimal point is never
    /// part of the literal; it starts the next token instead, so `1..2` lexes
    /// as `1.` followed by `.2`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    #[regex(r"\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Appended exactly once by [`tokenize`]; the scanner
    /// itself never produces it.
    End,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Converts source text into a sequence of `(token, column)` pairs.
///
/// Columns are 1-based and refer to the first character of each token.
/// Whitespace produces no tokens. The returned sequence is always terminated
/// by exactly one [`Token::End`], never anywhere else.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] naming the first character that
/// is not part of the language; no partial token sequence is produced.
///
/// # Example
/// ```
/// use numeval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Integer(1), 1),
///                 (Token::Plus, 3),
///                 (Token::Integer(2), 5),
///                 (Token::End, 6)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start + 1));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character,
                                                      col: lexer.span().start + 1, });
        }
    }

    tokens.push((Token::End, source.len() + 1));
    Ok(tokens)
}

/// Parses a real literal from the current token slice.
///
/// A slice consisting of a lone decimal point is defined to be `0.0`; every
/// other accepted slice parses with [`str::parse`], so `"3."` is `3.0` and
/// `".5"` is `0.5`.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    if slice == "." {
        return Some(0.0);
    }
    slice.parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
