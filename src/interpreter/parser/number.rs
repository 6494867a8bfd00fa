use crate::{
    error::ParseError,
    interpreter::{cursor::Cursor, parser::core::ParseResult, value::core::Number},
};

/// Parses a number literal.
///
/// Reads a maximal run of ASCII digits containing at most one `.`; a second
/// `.` ends the literal. The literal is an integer when no `.` was read and a
/// float otherwise, so `1.` and `.5` are both floats. Integer literals too
/// large for `i64` are read as floats.
///
/// Grammar: `number := digit* ("." digit*)?` with at least one digit.
///
/// # Errors
/// Returns [`ParseError::ExpectedNumber`] if no digit was read.
///
/// # Example
/// ```
/// use numeval::interpreter::{cursor::Cursor, parser::number::parse_number, value::core::Number};
///
/// let mut cursor = Cursor::new(" 1.25.5");
/// assert_eq!(parse_number(&mut cursor), Ok(Number::Float(1.25)));
/// assert_eq!(cursor.rest(), ".5");
/// ```
pub fn parse_number(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    cursor.skip_whitespace();
    let start = cursor.offset();

    let mut saw_digit = false;
    let mut saw_dot = false;
    while let Some(ch) = cursor.peek_char() {
        if ch.is_ascii_digit() {
            saw_digit = true;
        } else if ch == '.' && !saw_dot {
            saw_dot = true;
        } else {
            break;
        }
        cursor.bump(ch);
    }

    let expected_number = || ParseError::ExpectedNumber { position: cursor.position_of(start) };
    if !saw_digit {
        return Err(expected_number());
    }

    let token = cursor.slice_from(start);
    if saw_dot {
        return token.parse::<f64>()
                    .map(Number::from)
                    .map_err(|_| expected_number());
    }
    match token.parse::<i64>() {
        Ok(n) => Ok(Number::from(n)),
        Err(_) => {
            log::debug!("integer literal {token} exceeds i64, reading it as a float");
            token.parse::<f64>()
                 .map(Number::from)
                 .map_err(|_| expected_number())
        },
    }
}
