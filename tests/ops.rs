use flatcalc::{
    error::{EvalError, FormatError, MathError},
    ops::{abs, abs_int, abs_str, add, add_int, add_str, divide, divide_int, divide_str, multiply,
          multiply_int, multiply_str, power, power_int, power_str, square_root, square_root_int,
          square_root_str, subtract, subtract_int, subtract_str, super_sum, super_sum_int,
          super_sum_str},
};

#[test]
fn abs_variants() {
    assert_eq!(abs(5.5), 5.5);
    assert_eq!(abs(-3.7), 3.7);
    assert_eq!(abs(0.0), 0.0);

    assert_eq!(abs_int(10), 10);
    assert_eq!(abs_int(-7), 7);
    assert_eq!(abs_int(0), 0);

    assert_eq!(abs_str("-15.3").unwrap(), "15.3");
    assert!(matches!(abs_str("invalid"),
                     Err(FormatError::InvalidOperand { .. })));
}

#[test]
fn add_variants() {
    assert_eq!(add(2.5, 3.5), 6.0);
    assert_eq!(add_int(4, 5), 9);

    assert_eq!(add_str("3.2", "1.8").unwrap(), "5");
    assert!(add_str("a", "2").is_err());
}

#[test]
fn add_str_round_trips_the_f64_computation() {
    let computed = add(3.2, 1.8);
    assert_eq!(add_str("3.2", "1.8").unwrap(), computed.to_string());
}

#[test]
fn subtract_variants() {
    assert_eq!(subtract(5.5, 2.5), 3.0);
    assert_eq!(subtract_int(10, 4), 6);

    assert_eq!(subtract_str("7.5", "2.5").unwrap(), "5");
    assert!(subtract_str("x", "1").is_err());
}

#[test]
fn multiply_variants() {
    assert_eq!(multiply(2.5, 4.0), 10.0);
    assert_eq!(multiply_int(3, 5), 15);

    assert_eq!(multiply_str("2.5", "4").unwrap(), "10");
    assert!(multiply_str("a", "3").is_err());
}

#[test]
fn divide_variants() {
    assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
    assert_eq!(divide(5.0, 0.0), Err(MathError::DivisionByZero));

    assert_eq!(divide_int(10, 2).unwrap(), 5);
    assert_eq!(divide_int(5, 0), Err(MathError::DivisionByZero));

    assert_eq!(divide_str("10", "2").unwrap(), "5");
    assert_eq!(divide_str("5", "0"),
               Err(EvalError::Math(MathError::DivisionByZero)));
    assert!(matches!(divide_str("a", "2"), Err(EvalError::Format(_))));
}

#[test]
fn power_variants() {
    assert_eq!(power(2.0, 3.0).unwrap(), 8.0);
    assert_eq!(power(2.0, -1.0).unwrap(), 0.5);
    assert_eq!(power(0.0, -1.0), Err(MathError::DivisionByZero));

    assert_eq!(power_int(2, 3).unwrap(), 8);
    assert_eq!(power_int(5, 0).unwrap(), 1);
    // Negative integer exponents surface the inherited error kind.
    assert_eq!(power_int(2, -1), Err(MathError::DivisionByZero));

    assert_eq!(power_str("2", "3").unwrap(), "8");
    assert_eq!(power_str("0", "-1"),
               Err(EvalError::Math(MathError::DivisionByZero)));
    assert!(matches!(power_str("a", "2"), Err(EvalError::Format(_))));
}

#[test]
fn square_root_variants() {
    assert_eq!(square_root(25.0).unwrap(), 5.0);
    assert!(matches!(square_root(-1.0),
                     Err(FormatError::NegativeSquareRoot { .. })));

    assert_eq!(square_root_int(25).unwrap(), 5);
    assert_eq!(square_root_int(26).unwrap(), 5);
    assert_eq!(square_root_int(1).unwrap(), 1);
    assert!(square_root_int(-1).is_err());

    assert_eq!(square_root_str("25").unwrap(), "5");
    assert!(square_root_str("a").is_err());
    assert!(matches!(square_root_str("-1"),
                     Err(FormatError::NegativeSquareRoot { .. })));
}

#[test]
fn super_sum_concatenates_and_reparses() {
    assert_eq!(super_sum(12.3, 4.56).unwrap(), 124.56);
    assert_eq!(super_sum_int(123, 456).unwrap(), 123_456.0);
    assert_eq!(super_sum_str("12.3", "4.56").unwrap(), 124.56);
}

#[test]
fn super_sum_failure_cases() {
    // The head operand must be representable as i32.
    assert!(matches!(super_sum(f64::NAN, f64::INFINITY),
                     Err(FormatError::IntegerOverflow { .. })));
    assert!(super_sum(3e10, 1.0).is_err());

    // A negative second operand puts a '-' mid-string.
    assert!(matches!(super_sum(12.0, -4.5),
                     Err(FormatError::InvalidOperand { .. })));
    assert!(super_sum_int(12, -3).is_err());

    assert!(matches!(super_sum_str("a", "1"),
                     Err(FormatError::InvalidOperand { .. })));
}
