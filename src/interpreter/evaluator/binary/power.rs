use crate::{interpreter::value::core::Number, util::num::exponent_to_u32};

/// Evaluates an exponentiation operation.
///
/// Integer–integer exponentiation with a non-negative exponent uses checked
/// arithmetic and stays an integer. Negative integer exponents, results that
/// overflow `i64` and any float operand are computed with `powf`.
///
/// A negative base with a fractional exponent yields `NaN`.
///
/// # Example
/// ```
/// use numeval::interpreter::{evaluator::binary::power::eval_pow, value::core::Number};
///
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(10)), Number::Integer(1024));
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(-1)), Number::Float(0.5));
/// assert_eq!(eval_pow(Number::Float(4.0), Number::Float(0.5)), Number::Float(2.0));
/// ```
#[must_use]
pub fn eval_pow(base: Number, exponent: Number) -> Number {
    if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
       && e >= 0
    {
        if let Some(n) = exponent_to_u32(e).and_then(|e| b.checked_pow(e)) {
            return Number::Integer(n);
        }
        // Exponents past u32::MAX are still exact for these bases.
        match b {
            0 | 1 => return Number::Integer(b),
            -1 => return Number::Integer(if e % 2 == 0 { 1 } else { -1 }),
            _ => log::debug!("integer overflow in {b} ** {e}, promoting to float"),
        }
    }

    Number::Float(base.as_real().powf(exponent.as_real()))
}
