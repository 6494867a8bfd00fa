use crate::{
    error::ParseError,
    interpreter::{cursor::Cursor, parser::binary::parse_sum, value::core::Number},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Remaining stack below which a nested parse switches to a fresh segment.
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each additional stack segment.
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Runs a nested grammar level, growing the stack first when it runs low.
///
/// Parentheses and `**` chains nest without bound, so every re-entry into a
/// looser level goes through here.
pub(crate) fn nested<T>(parse_level: impl FnOnce() -> ParseResult<T>) -> ParseResult<T> {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, parse_level)
}

/// Parses and evaluates a complete expression.
///
/// A fresh [`Cursor`] is created for every call, so no state is shared
/// between invocations. After the loosest level has been parsed, trailing
/// whitespace is skipped and the input must be exhausted.
///
/// Grammar: `input := sum`
///
/// # Errors
/// - [`ParseError::ExpectedNumber`] if a literal is missing.
/// - [`ParseError::MissingClosingParen`] if a `(` is never closed.
/// - [`ParseError::TrailingInput`] if characters remain after the expression.
///
/// # Example
/// ```
/// use numeval::{error::ParseError, interpreter::{parser::core::parse, value::core::Number}};
///
/// assert_eq!(parse("(2 + 3) * 4"), Ok(Number::Integer(20)));
/// assert_eq!(parse("(2 + 3"), Err(ParseError::MissingClosingParen { position: 6 }));
/// ```
pub fn parse(source: &str) -> ParseResult<Number> {
    let mut cursor = Cursor::new(source);
    let value = parse_expression(&mut cursor).inspect_err(|e| log::debug!("{source:?}: {e}"))?;

    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        let err = ParseError::TrailingInput { position: cursor.position() };
        log::debug!("{source:?}: {err}");
        return Err(err);
    }

    log::trace!("{source:?} = {value}");
    Ok(value)
}

/// Parses a full expression at the current cursor position.
///
/// This begins at the lowest-precedence level, sum, and recursively descends
/// through the precedence hierarchy. Parenthesized sub-expressions re-enter
/// here.
///
/// Grammar: `expression := sum`
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    parse_sum(cursor)
}
