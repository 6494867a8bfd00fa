use std::thread;

use numeval::{LineResult, Number, ParseError, ScriptError, evaluate_lines, parse_expr};

fn assert_value(src: &str, expected: Number) {
    match parse_expr(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: ParseError) {
    match parse_expr(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e, expected, "wrong error for {src:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 3", Number::Integer(5));
    assert_value("10 - 4", Number::Integer(6));
    assert_value("3 * 4", Number::Integer(12));
    assert_value("10 / 4", Number::Float(2.5));
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", Number::Integer(14));
    assert_value("10 - 2 * 3", Number::Integer(4));
    assert_value("8 / 2 + 1", Number::Float(5.0));
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", Number::Integer(20));
    assert_value("(10 - 2) * (3 + 1)", Number::Integer(32));
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2 ** 3", Number::Integer(8));
    assert_value("2 ** 3 ** 2", Number::Integer(512));
    assert_value("(2 ** 3) ** 2", Number::Integer(64));
}

#[test]
fn double_star_is_not_two_multiplications() {
    assert_value("3 ** 2 * 2", Number::Integer(18));
    assert_value("2 * 3 ** 2", Number::Integer(18));
    assert_failure("2 * * 3", ParseError::ExpectedNumber { position: 4 });
}

#[test]
fn unary_minus() {
    assert_value("-3 + 5", Number::Integer(2));
    assert_value("-(2 + 3)", Number::Integer(-5));
    assert_value("2 * -3", Number::Integer(-6));
    assert_value("--3", Number::Integer(3));
    assert_value("---3", Number::Integer(-3));
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_value("-2 ** 2", Number::Integer(4));
    assert_value("-(2 ** 2)", Number::Integer(-4));
    assert_value("2 ** -2", Number::Float(0.25));
}

#[test]
fn numeric_promotion() {
    assert_value("3 * 4", Number::Integer(12));
    assert_value("10 / 4", Number::Float(2.5));
    assert_value("1.5 * 2", Number::Float(3.0));
    assert_value("6 / 3", Number::Float(2.0));
    assert_value("1.0 + 1", Number::Float(2.0));
    assert_value("2 ** 0.5 ** 0", Number::Float(2.0));

    let product = parse_expr("6 * 7").unwrap();
    assert!(product.is_integer());
    assert_eq!(product.as_integer(), Some(42));
    assert_eq!(parse_expr("84 / 2").unwrap().as_integer(), None);
}

#[test]
fn float_literals() {
    assert_value("1.", Number::Float(1.0));
    assert_value(".5", Number::Float(0.5));
    assert_value("3.25", Number::Float(3.25));
    assert_value("10", Number::Integer(10));
}

#[test]
fn whitespace_is_ignored() {
    assert_value("2+3", Number::Integer(5));
    assert_value("2 + 3", Number::Integer(5));
    assert_value("  2  +  3  ", Number::Integer(5));
    assert_value("\t( 2\n*3 )\r\n", Number::Integer(6));
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(parse_expr("1 / 0").unwrap().as_real(), f64::INFINITY);
    assert_eq!(parse_expr("-1 / 0").unwrap().as_real(), f64::NEG_INFINITY);
    assert!(parse_expr("0 / 0").unwrap().as_real().is_nan());
    assert!(parse_expr("1.5 / 0.0").unwrap().is_float());
}

#[test]
fn integer_overflow_promotes_to_float() {
    let sum = parse_expr("9223372036854775807 + 1").unwrap();
    assert!(sum.is_float());
    assert!((sum.as_real() - 9.223_372_036_854_776e18).abs() < 1.0);

    let power = parse_expr("2 ** 64").unwrap();
    assert_eq!(power, Number::Float(18_446_744_073_709_551_616.0));

    assert_value("2 ** 62", Number::Integer(4_611_686_018_427_387_904));
    assert_value("1 ** 99999999999", Number::Integer(1));
    assert_value("-1 ** 99999999999", Number::Integer(-1));
}

#[test]
fn oversized_integer_literal_reads_as_float() {
    let value = parse_expr("100000000000000000000").unwrap();
    assert_eq!(value, Number::Float(1e20));
}

#[test]
fn malformed_input() {
    assert_failure("(2 + 3", ParseError::MissingClosingParen { position: 6 });
    assert_failure("2 + ", ParseError::ExpectedNumber { position: 4 });
    assert_failure("2 3", ParseError::TrailingInput { position: 2 });
    assert_failure("", ParseError::ExpectedNumber { position: 0 });
    assert_failure("   ", ParseError::ExpectedNumber { position: 3 });
    assert_failure("()", ParseError::ExpectedNumber { position: 1 });
}

#[test]
fn error_positions_count_characters() {
    assert_failure("\u{3000}2 \u{3000}x", ParseError::TrailingInput { position: 4 });
    assert_failure("\u{a0}(1", ParseError::MissingClosingParen { position: 3 });
}

#[test]
fn error_messages_mention_position() {
    let err = parse_expr("2 +").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 3: Expected a number.");

    let err = parse_expr("(1").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 2: Expected closing parenthesis ')' but none found.");
}

#[test]
fn long_runs_of_unary_minus() {
    assert_value(&format!("{}1", "-".repeat(200_000)), Number::Integer(1));
    assert_value(&format!("{}1", "-".repeat(200_001)), Number::Integer(-1));
    assert_value(&format!("2 * {}3.5", "- ".repeat(100_001)), Number::Float(-7.0));
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 100_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&src, Number::Integer(1));

    let src = format!("{}-2 * 3{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&src, Number::Integer(-6));

    let unclosed = format!("{}1", "(".repeat(depth));
    assert_failure(&unclosed, ParseError::MissingClosingParen { position: depth + 1 });
}

#[test]
fn long_power_chains() {
    let src = format!("{}1", "1 ** ".repeat(50_000));
    assert_value(&src, Number::Integer(1));
}

#[test]
fn parsing_is_repeatable() {
    for src in ["2 + 3 * 4", "10 / 4", "(2 + 3", "2 ** 3 ** 2"] {
        assert_eq!(parse_expr(src), parse_expr(src));
    }
}

#[test]
fn concurrent_parses_do_not_interfere() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    thread::spawn(move || {
                                        let src = format!("{i} * ({i} + 1) ** 2");
                                        parse_expr(&src)
                                    })
                                })
                                .collect();

    for (i, handle) in (0_i64..).zip(handles) {
        let value = handle.join().expect("parser thread panicked");
        assert_eq!(value, Ok(Number::Integer(i * (i + 1) * (i + 1))));
    }
}

#[test]
fn number_from_str() {
    let value: Number = "(1 + 2) * 3".parse().unwrap();
    assert_eq!(value, Number::Integer(9));
    assert!("1 +".parse::<Number>().is_err());
}

#[test]
fn number_display() {
    assert_eq!(Number::Integer(-12).to_string(), "-12");
    assert_eq!(Number::Float(3.0).to_string(), "3.0");
    assert_eq!(Number::Float(2.5).to_string(), "2.5");
    assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
    assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-inf");
    assert_eq!(Number::Float(f64::NAN).to_string(), "nan");
}

#[test]
fn script_lines_are_independent() {
    let results = evaluate_lines("2 + 3\n\n   \n10 / 4\n-2 ** 2").unwrap();
    assert_eq!(results,
               vec![LineResult { line:  1,
                                 value: Number::Integer(5), },
                    LineResult { line:  4,
                                 value: Number::Float(2.5), },
                    LineResult { line:  5,
                                 value: Number::Integer(4), }]);
}

#[test]
fn script_reports_first_failing_line() {
    let err = evaluate_lines("1 + 1\n2 *\n(3").unwrap_err();
    assert_eq!(err,
               ScriptError { line:  2,
                             error: ParseError::ExpectedNumber { position: 3 }, });
    assert_eq!(err.to_string(), "Line 2: Error at position 3: Expected a number.");
}

#[test]
fn empty_script_has_no_results() {
    assert_eq!(evaluate_lines(""), Ok(Vec::new()));
}
