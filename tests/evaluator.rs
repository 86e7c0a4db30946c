use flatcalc::{
    error::{EvalError, FormatError, MathError},
    evaluate,
};

fn assert_evaluates(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(value) => {
            assert_eq!(value, expected,
                       "'{expression}' evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_format_error(expression: &str) {
    match evaluate(expression) {
        Err(EvalError::Format(_)) => {},
        other => panic!("'{expression}' expected a format error, got {other:?}"),
    }
}

fn assert_division_by_zero(expression: &str) {
    match evaluate(expression) {
        Err(EvalError::Math(MathError::DivisionByZero)) => {},
        other => panic!("'{expression}' expected division by zero, got {other:?}"),
    }
}

#[test]
fn four_basic_operators() {
    assert_evaluates("2+3", 5.0);
    assert_evaluates("2-3", -1.0);
    assert_evaluates("2*3", 6.0);
    assert_evaluates("6/3", 2.0);
}

#[test]
fn single_literals() {
    assert_evaluates("42", 42.0);
    assert_evaluates("-7", -7.0);
    assert_evaluates(".5", 0.5);
    assert_evaluates("3.", 3.0);
}

#[test]
fn operator_precedence() {
    assert_evaluates("3*4+2", 14.0);
    assert_evaluates("10/2-3", 2.0);
    assert_evaluates("2+3*4", 14.0);
    assert_evaluates("2+3*4-6/3", 12.0);
}

#[test]
fn decimal_literals() {
    assert_evaluates("2.5*3+1.5", 9.0);
    assert_evaluates("1/0.5", 2.0);
}

#[test]
fn unary_minus() {
    assert_evaluates("-5+3*2", 1.0);
    assert_evaluates("2*-3", -6.0);
    assert_evaluates("2--3", 5.0);
    assert_evaluates("-2-3", -5.0);
    assert_evaluates("-0.5*4", -2.0);
}

#[test]
fn whitespace_is_stripped_entirely() {
    assert_evaluates(" 2 + 3 ", 5.0);
    assert_evaluates("2 +3* 4", 14.0);
    // Whitespace is not a separator, so split digits join back up.
    assert_evaluates("1 2", 12.0);
}

#[test]
fn same_tier_chains_evaluate_left_to_right() {
    assert_evaluates("20/4/5", 1.0);
    assert_evaluates("100/10/5", 2.0);
    assert_evaluates("2*3*4", 24.0);
    assert_evaluates("10-2-3", 5.0);
    assert_evaluates("2-3+4", 3.0);
    assert_evaluates("8/4*2", 4.0);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(evaluate(""),
               Err(EvalError::Format(FormatError::EmptyExpression)));
    assert_eq!(evaluate(" \t\n"),
               Err(EvalError::Format(FormatError::EmptyExpression)));
}

#[test]
fn invalid_characters_are_rejected_with_positions() {
    assert_eq!(evaluate("2&3"),
               Err(EvalError::Format(FormatError::InvalidOperator { position: 1 })));
    assert_eq!(evaluate("&"),
               Err(EvalError::Format(FormatError::InvalidNumber { position: 0 })));
    assert_eq!(evaluate("2+a"),
               Err(EvalError::Format(FormatError::InvalidNumber { position: 2 })));
    // Positions refer to the whitespace-stripped expression.
    assert_eq!(evaluate(" 2 & 3"),
               Err(EvalError::Format(FormatError::InvalidOperator { position: 1 })));
}

#[test]
fn malformed_literals_are_rejected() {
    assert_eq!(evaluate("1.2.3"),
               Err(EvalError::Format(FormatError::InvalidNumber { position: 0 })));
    assert_eq!(evaluate("--5"),
               Err(EvalError::Format(FormatError::InvalidNumber { position: 0 })));
    assert_format_error(".");
}

#[test]
fn misplaced_operators_are_rejected() {
    assert_eq!(evaluate("+5"),
               Err(EvalError::Format(FormatError::InvalidNumber { position: 0 })));
    assert_eq!(evaluate("*5"),
               Err(EvalError::Format(FormatError::InvalidNumber { position: 0 })));
    assert_eq!(evaluate("5//2"),
               Err(EvalError::Format(FormatError::InvalidNumber { position: 2 })));
}

#[test]
fn trailing_operator_fails_the_arity_check() {
    assert_eq!(evaluate("5-"),
               Err(EvalError::Format(FormatError::MalformedExpression)));
    assert_eq!(evaluate("2+3*"),
               Err(EvalError::Format(FormatError::MalformedExpression)));
}

#[test]
fn division_by_zero_is_reported() {
    assert_division_by_zero("5/0");
    assert_division_by_zero("0/0");
    assert_division_by_zero("1+6/0");
    assert_division_by_zero("5/0.0");
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let first = evaluate("0.1+0.2*3.3-4/7").unwrap();
    for _ in 0..10 {
        let again = evaluate("0.1+0.2*3.3-4/7").unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}
