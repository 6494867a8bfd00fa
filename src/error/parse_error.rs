#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Every position is a character offset into the source text, counted from
/// zero, after any whitespace that preceded the failing construct.
pub enum ParseError {
    /// A numeric literal was required but no digit was found.
    ExpectedNumber {
        /// Offset where the literal should have started.
        position: usize,
    },
    /// An opening parenthesis `(` was consumed but no matching `)` followed.
    MissingClosingParen {
        /// Offset where the closing parenthesis was expected.
        position: usize,
    },
    /// A complete expression was parsed but input remains.
    TrailingInput {
        /// Offset of the first unconsumed character.
        position: usize,
    },
}

impl ParseError {
    /// Returns the character offset the error points at.
    ///
    /// # Example
    /// ```
    /// use numeval::{error::ParseError, parse_expr};
    ///
    /// let err = parse_expr("2 3").unwrap_err();
    /// assert_eq!(err, ParseError::TrailingInput { position: 2 });
    /// assert_eq!(err.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ExpectedNumber { position }
            | Self::MissingClosingParen { position }
            | Self::TrailingInput { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { position } => {
                write!(f, "Error at position {position}: Expected a number.")
            },

            Self::MissingClosingParen { position } => write!(f,
                                                             "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::TrailingInput { position } => write!(f,
                                                       "Error at position {position}: Unexpected input after expression."),
        }
    }
}

impl std::error::Error for ParseError {}
