//! # numeval
//!
//! numeval is an arithmetic expression evaluator written in Rust.
//! It parses expressions made of integer and decimal literals, `+`, `-`, `*`,
//! `/`, `**`, unary minus and parentheses, and computes their value while
//! parsing, without building a syntax tree.
//!
//! ```
//! use numeval::{Number, parse_expr};
//!
//! assert_eq!(parse_expr("2 + 3 * 4"), Ok(Number::Integer(14)));
//! assert_eq!(parse_expr("10 / 4"), Ok(Number::Float(2.5)));
//! ```

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

pub use crate::{
    error::{ParseError, ScriptError},
    interpreter::{parser::core::ParseResult, value::core::Number},
};

/// Provides error types for parsing and script evaluation.
///
/// This module defines the errors that can be raised while reading an
/// expression. Each error carries the character offset at which parsing
/// failed, so callers can point at the offending input.
///
/// # Responsibilities
/// - Defines the closed set of parse failures.
/// - Attaches line numbers when evaluating multi-line scripts.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together the cursor, the precedence levels, the
/// arithmetic kernel and the numeric value type.
///
/// # Responsibilities
/// - Coordinates the cursor, parser and evaluator.
/// - Provides the entry point for parsing a single expression.
/// - Keeps every parse independent of the others.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Promote `i64` to `f64`.
/// - Narrow exponents for checked integer powers.
pub mod util;

/// The value of one line of a script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineResult {
    /// 1-based line number in the script.
    pub line:  usize,
    /// The value of the expression on that line.
    pub value: Number,
}

/// Parses and evaluates a single arithmetic expression.
///
/// The whole string must form one expression; surrounding whitespace is
/// ignored. Each call is independent of every other call.
///
/// # Errors
/// Returns a [`ParseError`] if a number is missing, a parenthesis is left
/// open or input remains after the expression.
///
/// # Examples
/// ```
/// use numeval::{Number, ParseError, parse_expr};
///
/// assert_eq!(parse_expr("2 ** 3 ** 2"), Ok(Number::Integer(512)));
/// assert_eq!(parse_expr("1.5 * 2"), Ok(Number::Float(3.0)));
/// assert_eq!(parse_expr("2 + "), Err(ParseError::ExpectedNumber { position: 4 }));
/// ```
pub fn parse_expr(source: &str) -> ParseResult<Number> {
    interpreter::parser::core::parse(source)
}

/// Evaluates a script containing one expression per line.
///
/// Blank lines are skipped. Every other line is parsed on its own with
/// [`parse_expr`]; evaluation stops at the first line that fails.
///
/// # Errors
/// Returns a [`ScriptError`] holding the 1-based line number and the
/// [`ParseError`] of the first failing line.
///
/// # Examples
/// ```
/// use numeval::{LineResult, Number, evaluate_lines};
///
/// let results = evaluate_lines("1 + 1\n\n2 ** 10\n").unwrap();
/// assert_eq!(results,
///            vec![LineResult { line:  1,
///                              value: Number::Integer(2), },
///                 LineResult { line:  3,
///                              value: Number::Integer(1024), }]);
///
/// let err = evaluate_lines("1 + 1\n(2").unwrap_err();
/// assert_eq!(err.line, 2);
/// ```
pub fn evaluate_lines(source: &str) -> Result<Vec<LineResult>, ScriptError> {
    source.lines()
          .enumerate()
          .filter(|(_, text)| !text.trim().is_empty())
          .map(|(idx, text)| {
              let line = idx + 1;
              parse_expr(text).map(|value| LineResult { line, value })
                              .map_err(|error| ScriptError { line, error })
          })
          .collect()
}
