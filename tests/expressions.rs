use numeval::{interpreter::value::Value, run};

fn assert_value(src: &str, expected: Value) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected, "Expression: {src}"),
        Err(e) => panic!("Expression failed: {src}\nError: {e}"),
    }
}

fn assert_error(src: &str, fragment: &str) {
    match run(src) {
        Ok(value) => {
            panic!("Expression succeeded with {value} but was expected to fail: {src}")
        },
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(fragment),
                    "Expression: {src}\nExpected error mentioning {fragment:?}, got: {message}");
        },
    }
}

#[test]
fn integer_literals() {
    assert_value("0", Value::Integer(0));
    assert_value("7", Value::Integer(7));
    assert_value("12345", Value::Integer(12345));
    assert_value("  42\t", Value::Integer(42));
}

#[test]
fn real_literals() {
    assert_value("3.25", Value::Real(3.25));
    assert_value("0.0", Value::Real(0.0));
    assert_value(".5", Value::Real(0.5));
    assert_value("3.", Value::Real(3.0));
}

#[test]
fn precedence() {
    assert_value("1 + 2 * 3", Value::Integer(7));
    assert_value("2 * 3 + 4 * 5", Value::Integer(26));
    assert_value("10 - 4 / 2", Value::Integer(8));
}

#[test]
fn grouping_overrides_precedence() {
    assert_value("(1 + 2) * 3", Value::Integer(9));
    assert_value("2 * (3 + 4)", Value::Integer(14));
    assert_value("((7))", Value::Integer(7));
}

#[test]
fn left_associativity() {
    assert_value("7 - 3 - 2", Value::Integer(2));
    assert_value("16 / 4 / 2", Value::Integer(2));
    assert_value("1 - 2 + 3", Value::Integer(2));
}

#[test]
fn unary_operators() {
    assert_value("-5", Value::Integer(-5));
    assert_value("--5", Value::Integer(5));
    assert_value("+-5", Value::Integer(-5));
    assert_value("+5", Value::Integer(5));
    assert_value("-+-5", Value::Integer(5));
    assert_value("-(1 + 2)", Value::Integer(-3));
    assert_value("-2.5", Value::Real(-2.5));
    assert_value("2 - -3", Value::Integer(5));
}

#[test]
fn integer_division_truncates() {
    assert_value("7 / 2", Value::Integer(3));
    assert_value("-7 / 2", Value::Integer(-3));
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    assert_value("1 + 2.5", Value::Real(3.5));
    assert_value("7.0 / 2", Value::Real(3.5));
    assert_value("2 * 1.5", Value::Real(3.0));
    assert_value("1.5 + 1.5", Value::Real(3.0));
}

#[test]
fn division_by_zero() {
    assert_error("1 / 0", "Division by zero");
    assert_error("1.0 / 0.0", "Division by zero");
    assert_error("1 / 0.0", "Division by zero");
    assert_error("1 / (2 - 2)", "Division by zero");
}

#[test]
fn lexical_errors() {
    assert_error("1 $ 2", "Invalid character '$'");
    assert_error("a + 1", "Invalid character 'a'");
}

#[test]
fn syntax_errors() {
    assert_error("(1 + 2", "closing parenthesis");
    assert_error("1 2", "Extra tokens");
    assert_error("1 +", "end of input");
    assert_error("", "end of input");
    assert_error("   ", "end of input");
    assert_error("*3", "unexpected token");
    assert_error(")", "unexpected token");
}

#[test]
fn malformed_literal_rescans_second_point() {
    // `1..2` lexes as `1.` followed by `.2`; the parser then rejects the
    // second literal as trailing input.
    assert_error("1..2", "Extra tokens");
}

#[test]
fn integer_overflow_is_reported() {
    assert_error("9223372036854775807 + 1", "overflow");
    assert_error("-9223372036854775807 - 2", "overflow");
    assert_error("3037000500 * 3037000500", "overflow");
}

#[test]
fn repeated_runs_are_independent() {
    let first = run("(1 + 2) * 3").unwrap();
    let second = run("(1 + 2) * 3").unwrap();
    assert_eq!(first, second);

    // A failing run leaves nothing behind for the next one.
    assert!(run("1 / 0").is_err());
    assert_value("1 / 1", Value::Integer(1));
}
