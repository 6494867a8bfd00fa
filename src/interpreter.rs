/// The cursor module tracks the read position in the source text.
///
/// The cursor is the only lexical layer: there is no separate token stream.
/// Grammar levels ask it whether a literal such as `**` or `(` comes next and
/// consume it on a match.
///
/// # Responsibilities
/// - Skips whitespace before every lookahead.
/// - Matches and consumes operator literals without backtracking.
/// - Converts byte offsets into the character offsets used in errors.
pub mod cursor;
/// The evaluator module combines numeric operands.
///
/// Evaluation happens while parsing: each grammar level hands its operands to
/// the evaluator as soon as both sides are known.
///
/// # Responsibilities
/// - Applies `+`, `-`, `*`, `/`, `**` and unary `-` to numbers.
/// - Enforces integer/float promotion, including true division.
/// - Falls back to floating point when an integer result leaves the `i64`
///   range.
pub mod evaluator;
/// The operator module names the binary operators and their spelling.
pub mod operator;
/// The parser module implements the precedence levels.
///
/// Five mutually recursive functions (sum, product, power, unary, primary)
/// each parse their production and return its value directly.
///
/// # Responsibilities
/// - Encodes precedence and associativity in the call structure.
/// - Distinguishes `**` from `*` before consuming a multiplication.
/// - Reports missing numbers, unbalanced parentheses and trailing input.
pub mod parser;
/// The value module defines the numeric result type.
///
/// # Responsibilities
/// - Defines the `Number` enum with its integer and float variants.
/// - Provides promotion to `f64` and display formatting.
pub mod value;
