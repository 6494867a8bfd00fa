use crate::error::ParseError;

/// An expression in a multi-line script failed to parse.
///
/// Wraps the underlying [`ParseError`] together with the 1-based line number
/// of the offending expression. Positions inside `error` are relative to the
/// start of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptError {
    /// The source line where the error occurred.
    pub line:  usize,
    /// The parse failure on that line.
    pub error: ParseError,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
