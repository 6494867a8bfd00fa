/// Numeric conversion helpers.
///
/// This module gathers the conversions between integer and floating-point
/// types that the arithmetic kernel relies on. Promotion from `i64` to `f64`
/// follows the usual IEEE 754 rounding; exponent narrowing is checked.
pub mod num;
