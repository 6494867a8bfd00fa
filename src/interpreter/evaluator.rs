/// Binary operator evaluation logic.
///
/// Combines two numbers with `+`, `-`, `*`, `/` or `**`, applying the
/// integer/float promotion rules.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;
