/// Operator dispatch.
pub mod core;

/// Exponentiation.
///
/// Integer powers stay exact while they fit in an `i64`; everything else is
/// computed with `powf`.
pub mod power;

/// Addition, subtraction, multiplication and division.
pub mod scalar;
