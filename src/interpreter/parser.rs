/// Entry point and top-level driver.
///
/// Runs the loosest grammar level over the whole input and rejects anything
/// left over.
pub mod core;

/// Binary operator levels.
///
/// Sum, product and power: the levels that combine two operands.
pub mod binary;

/// Unary negation and primary expressions.
///
/// Handles leading `-`, parenthesized sub-expressions and dispatch to the
/// number literal reader.
pub mod unary;

/// Number literal reader.
///
/// Reads a run of digits with an optional fractional part and decides
/// between integer and float from the text that was consumed.
pub mod number;
