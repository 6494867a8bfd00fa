use crate::interpreter::{operator::BinaryOperator, value::core::Number};

/// Evaluates a scalar arithmetic operation.
///
/// Two integers are added, subtracted or multiplied exactly. Division is
/// always true division and yields a float, as does any operation with a
/// float operand. Integer results that leave the `i64` range are recomputed
/// in floating point instead of wrapping.
///
/// Division by zero is not an error: it produces `inf`, `-inf` or `NaN`.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed `Number`.
///
/// # Example
/// ```
/// use numeval::interpreter::{
///     evaluator::binary::scalar::eval_scalar_op, operator::BinaryOperator, value::core::Number,
/// };
///
/// let x = Number::Float(1.5);
/// let y = Number::Integer(2);
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Mul, x, y), Number::Float(3.0));
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, Number::Integer(10), Number::Integer(4)),
///            Number::Float(2.5));
///
/// let inf = eval_scalar_op(BinaryOperator::Div, Number::Integer(1), Number::Integer(0));
/// assert_eq!(inf.as_real(), f64::INFINITY);
/// ```
#[must_use]
pub fn eval_scalar_op(op: BinaryOperator, left: Number, right: Number) -> Number {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    if let (Number::Integer(a), Number::Integer(b)) = (left, right) {
        let exact = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Pow => None,
        };
        if let Some(n) = exact {
            return Number::Integer(n);
        }
        if op != Div {
            log::debug!("integer overflow in {a} {op} {b}, promoting to float");
        }
    }

    let (l, r) = (left.as_real(), right.as_real());
    Number::Float(match op {
                      Add => l + r,
                      Sub => l - r,
                      Mul => l * r,
                      Div => l / r,
                      Pow => l.powf(r),
                  })
}
