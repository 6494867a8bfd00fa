/// Promotes an `i64` to `f64`.
///
/// Values beyond `2^53` in magnitude round to the nearest representable
/// double, exactly like a float literal of the same digits would.
///
/// ## Example
/// ```
/// use numeval::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(i64::MAX), 9_223_372_036_854_775_808.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Narrows an `i64` exponent to `u32` for `i64::checked_pow`.
///
/// ## Returns
/// - `Some(u32)`: If the exponent is non-negative and fits.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use numeval::util::num::exponent_to_u32;
///
/// assert_eq!(exponent_to_u32(10), Some(10));
/// assert_eq!(exponent_to_u32(-1), None);
/// assert_eq!(exponent_to_u32(i64::MAX), None);
/// ```
#[must_use]
pub fn exponent_to_u32(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}
