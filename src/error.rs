/// Parsing errors.
///
/// Defines the error type returned by a single expression parse: a missing
/// number, an unbalanced parenthesis, or input left over after a complete
/// expression.
pub mod parse_error;
/// Script errors.
///
/// Attaches a line number to a [`ParseError`] when a script is evaluated one
/// expression per line.
pub mod script_error;

pub use parse_error::ParseError;
pub use script_error::ScriptError;
