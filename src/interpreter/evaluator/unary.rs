use crate::interpreter::value::core::Number;

/// Evaluates arithmetic negation.
///
/// Integers are negated exactly; `i64::MIN`, whose negation does not fit,
/// is promoted to a float.
///
/// # Example
/// ```
/// use numeval::interpreter::{evaluator::unary::eval_negate, value::core::Number};
///
/// assert_eq!(eval_negate(Number::Integer(5)), Number::Integer(-5));
/// assert_eq!(eval_negate(Number::Float(-2.5)), Number::Float(2.5));
/// ```
#[must_use]
pub fn eval_negate(value: Number) -> Number {
    match value {
        Number::Integer(n) => n.checked_neg()
                               .map_or_else(|| Number::from(-value.as_real()), Number::from),
        Number::Float(r) => Number::Float(-r),
    }
}
