use crate::interpreter::{
    evaluator::binary::{power::eval_pow, scalar::eval_scalar_op},
    operator::BinaryOperator,
    value::core::Number,
};

/// Evaluates `left op right`.
///
/// This is the single entry point the grammar levels use to combine operands.
/// Exponentiation is routed to [`eval_pow`]; all other operators go through
/// [`eval_scalar_op`].
///
/// # Example
/// ```
/// use numeval::interpreter::{
///     evaluator::binary::core::eval_binary, operator::BinaryOperator, value::core::Number,
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Number::Integer(2), Number::Integer(3));
/// assert_eq!(sum, Number::Integer(5));
///
/// let quotient = eval_binary(BinaryOperator::Div, Number::Integer(8), Number::Integer(2));
/// assert_eq!(quotient, Number::Float(4.0));
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: Number, right: Number) -> Number {
    match op {
        BinaryOperator::Pow => eval_pow(left, right),
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            eval_scalar_op(op, left, right)
        },
    }
}
