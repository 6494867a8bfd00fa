/// Binary operators recognized by the grammar.
///
/// Each operator knows the literal text the cursor matches for it. `Pow` is
/// spelled `**`, which shares its first character with `Mul`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`
    Pow,
}

impl BinaryOperator {
    /// Operators of the sum level, in the order they are tried.
    pub const ADDITIVE: [Self; 2] = [Self::Add, Self::Sub];
    /// Operators of the product level, in the order they are tried.
    pub const MULTIPLICATIVE: [Self; 2] = [Self::Mul, Self::Div];

    /// Returns the source text of the operator.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.literal(), "**");
    /// assert_eq!(BinaryOperator::Div.literal(), "/");
    /// ```
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}
