/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs the
/// arithmetic operations, and produces a single numeric result. It is the
/// core execution engine of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Promotes integers to reals when an operation mixes the two.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a meaningful language element such as a
/// number, an operator, or a parenthesis. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Handles integer and real literals and the operator characters.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that encodes operator precedence, associativity, and
/// grouping, ready for the evaluator to walk.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes via recursive descent.
/// - Validates the grammar, reporting errors with column info.
/// - Rejects input left over after a complete expression.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the numeric value produced by evaluation, either a
/// 64-bit integer or a double precision real, together with conversion and
/// promotion helpers.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two numeric variants.
/// - Provides safe promotion from integer to real.
/// - Renders values for display in the shell.
pub mod value;
