//! # numeval
//!
//! numeval is a small arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates arithmetic expressions with integer
//! and floating-point numbers, the four basic operators, unary plus and
//! minus, and parenthesized grouping with standard precedence.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::eval,
    lexer::tokenize,
    parser::core::parse,
    value::Value,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression node variants.
/// - Attaches source columns to AST nodes for error reporting.
/// - Defines the operator enums shared by parser and evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// the source column of each failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source columns and human-readable messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and the runtime
/// value representation to provide a complete pipeline from source text to
/// numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the evaluator,
/// such as exact-representability checks when promoting integers to reals.
///
/// # Responsibilities
/// - Safely convert between integer and floating-point types without silent
///   data loss.
pub mod util;

/// Runs the full pipeline over one expression and returns the result.
///
/// The stages run strictly in order, tokenize, parse, evaluate, and the first
/// failing stage's error is returned with no later stage invoked. Exactly one
/// error is ever surfaced per call. Each call is independent and stateless;
/// evaluating the same text twice always yields the same result.
///
/// # Errors
/// Returns the first error encountered: a lexical or syntax error from the
/// front end, or a runtime error (such as division by zero) from evaluation.
///
/// # Examples
/// ```
/// use numeval::{interpreter::value::Value, run};
///
/// // Multiplication binds tighter than addition.
/// let value = run("1 + 2 * 3").unwrap();
/// assert_eq!(value, Value::Integer(7));
///
/// // Division by zero is reported instead of producing a value.
/// let res = run("1 / 0");
/// assert!(res.is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse(&mut iter)?;

    let value = eval(&expr)?;
    Ok(value)
}
