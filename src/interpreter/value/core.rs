use std::str::FromStr;

use crate::{error::ParseError, interpreter::parser::core::parse, util::num::i64_to_f64};

/// Represents the result of evaluating an expression.
///
/// Arithmetic between two integers stays integral, except division, which
/// always produces a float. Any operation with a float operand yields a
/// float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl Number {
    /// Converts the value to an `f64`, promoting integers.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Float(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(*n),
            Self::Float(r) => *r,
        }
    }

    /// Returns the integer payload, or `None` for floats.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Float(_) => None,
        }
    }

    /// Returns `true` for the `Integer` variant.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns `true` for the `Float` variant.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl FromStr for Number {
    type Err = ParseError;

    /// Parses and evaluates an arithmetic expression.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::value::core::Number;
    ///
    /// let n: Number = "2 ** 3 ** 2".parse().unwrap();
    /// assert_eq!(n, Number::Integer(512));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) if r.is_nan() => write!(f, "nan"),
            Self::Float(r) if r.is_infinite() => {
                if r.is_sign_negative() {
                    write!(f, "-inf")
                } else {
                    write!(f, "inf")
                }
            },
            // Debug keeps the trailing `.0` on integral floats.
            Self::Float(r) => write!(f, "{r:?}"),
        }
    }
}
