/// Numeric value representation.
///
/// Defines the `Number` type produced by every grammar level: an exact 64-bit
/// integer or a double-precision float, with conversions and formatting.
pub mod core;
