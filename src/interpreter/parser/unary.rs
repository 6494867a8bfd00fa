use crate::{
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        evaluator::unary::eval_negate,
        parser::{
            core::{ParseResult, nested, parse_expression},
            number::parse_number,
        },
        value::core::Number,
    },
};

/// Parses a unary expression.
///
/// Negation is right-associative and may be repeated, so `--3` is `3` and
/// `- - -3` is `-3`. Leading signs are counted and applied innermost first,
/// so long runs of `-` do not nest calls.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the operand.
///
/// # Returns
/// The value of the operand, negated once per leading `-`.
pub fn parse_unary(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let mut signs = 0_usize;
    while cursor.consume_literal("-") {
        signs += 1;
    }

    let mut value = parse_primary(cursor)?;
    for _ in 0..signs {
        value = eval_negate(value);
    }
    Ok(value)
}

/// Parses a primary (atomic) expression.
///
/// A primary is either a parenthesized expression, which restarts at the
/// loosest precedence level, or a number literal.
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | number
/// ```
/// # Errors
/// Returns [`ParseError::MissingClosingParen`] when the inner expression is
/// not followed by `)`.
pub fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    if cursor.consume_literal("(") {
        let value = nested(|| parse_expression(cursor))?;
        if !cursor.consume_literal(")") {
            return Err(ParseError::MissingClosingParen { position: cursor.position() });
        }
        return Ok(value);
    }
    parse_number(cursor)
}
