use crate::interpreter::{
    cursor::Cursor,
    evaluator::binary::core::eval_binary,
    operator::BinaryOperator,
    parser::{
        core::{ParseResult, nested},
        unary::parse_unary,
    },
    value::core::Number,
};

/// Consumes the first operator of `candidates` that comes next.
fn consume_operator(cursor: &mut Cursor<'_>,
                    candidates: &[BinaryOperator])
                    -> Option<BinaryOperator> {
    candidates.iter()
              .copied()
              .find(|op| cursor.consume_literal(op.literal()))
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `sum := product (("+" | "-") product)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the operand.
///
/// # Returns
/// The value of the folded chain.
pub fn parse_sum(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let mut left = parse_product(cursor)?;
    while let Some(op) = consume_operator(cursor, &BinaryOperator::ADDITIVE) {
        let right = parse_product(cursor)?;
        left = eval_binary(op, left, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Because `*` is a prefix of
/// `**`, the loop stops as soon as `**` is ahead; that operator belongs to
/// [`parse_power`].
///
/// The rule is: `product := power (("*" | "/") power)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the operand.
///
/// # Returns
/// The value of the folded chain.
pub fn parse_product(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let mut left = parse_power(cursor)?;
    loop {
        if cursor.peek_literal(BinaryOperator::Pow.literal()) {
            break;
        }
        let Some(op) = consume_operator(cursor, &BinaryOperator::MULTIPLICATIVE) else {
            break;
        };
        let right = parse_power(cursor)?;
        left = eval_binary(op, left, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`, which is achieved by recursing into this level for the
/// right operand. The left operand is a unary expression, so `-2 ** 2` is
/// `(-2) ** 2`.
///
/// The rule is: `power := unary ("**" power)?`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the operand.
///
/// # Returns
/// The value of the exponentiation, or of the lone operand.
pub fn parse_power(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let base = parse_unary(cursor)?;
    if cursor.consume_literal(BinaryOperator::Pow.literal()) {
        let exponent = nested(|| parse_power(cursor))?;
        return Ok(eval_binary(BinaryOperator::Pow, base, exponent));
    }
    Ok(base)
}
