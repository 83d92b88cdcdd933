use deskcalc::{
    error::{CalcError, EvalError, LexError},
    get_results,
    interpreter::symbols::{BOLTZMANN, E, PI},
};

fn assert_values(src: &str, expected: &[f64]) {
    match get_results(src) {
        Ok(values) => assert_eq!(values, expected, "Script {src:?} produced unexpected values"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match get_results(src) {
        Ok(values) => panic!("Script {src:?} succeeded with {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-4, "{actual} is not close to {expected}");
}

#[test]
fn precedence_and_grouping() {
    assert_values("2+3*4;", &[14.0]);
    assert_values("(2+3)*4;", &[20.0]);
    assert_values("{1+1}*5;", &[10.0]);
    assert_values("{(1 + 2) * {3 - 1}} / 4;", &[1.5]);
    assert_values("10 - 4 - 3;", &[3.0]);
    assert_values("64 / 4 / 2;", &[8.0]);
    assert_values("2 * 3 ^ 2;", &[18.0]);
}

#[test]
fn powers_are_left_associative() {
    assert_values("2^10;", &[1024.0]);
    assert_values("2^3^2;", &[64.0]);
    assert_values("2^-1;", &[0.5]);
}

#[test]
fn unary_signs_bind_to_primaries() {
    assert_values("-3 + +2;", &[-1.0]);
    assert_values("- -3;", &[3.0]);
    assert_values("-2^2;", &[4.0]);
    assert_values("-(1 + 2) * 2;", &[-6.0]);
}

#[test]
fn remainder_keeps_the_sign_of_the_dividend() {
    assert_values("7 % 3;", &[1.0]);
    assert_values("-7 % 3;", &[-1.0]);
    assert_values("7.5 % 2;", &[1.5]);
}

#[test]
fn floating_point_literals() {
    assert_values(".5 + 5.;", &[5.5]);
    assert_values("1e3 + 2.5E-1;", &[1000.25]);
    assert_values("0.1 + 0.2;", &[0.1 + 0.2]);
}

#[test]
fn factorials() {
    assert_values("0!;", &[1.0]);
    assert_values("5!;", &[120.0]);
    assert_values("2!!;", &[2.0]);
    assert_values("3!!;", &[720.0]);
    assert_values("20!;", &[2_432_902_008_176_640_000.0]);
    assert_values("(1 + 2)! * 2;", &[12.0]);
}

#[test]
fn factorial_requires_a_non_negative_integer() {
    assert!(matches!(assert_failure("2.5!;"),
                     CalcError::Eval(EvalError::InvalidFactorial { .. })));
    assert!(matches!(assert_failure("(0 - 1)!;"),
                     CalcError::Eval(EvalError::InvalidFactorial { .. })));
    assert!(matches!(assert_failure("-3!;"),
                     CalcError::Eval(EvalError::InvalidFactorial { .. })));
    assert!(matches!(assert_failure("21!;"), CalcError::Eval(EvalError::Overflow { .. })));
}

#[test]
fn roots() {
    let values = get_results("8R3; -8R3; 2R2; 81 R 4; 5R1;").unwrap();
    assert_close(values[0], 2.0);
    assert_close(values[1], -2.0);
    assert_close(values[2], std::f64::consts::SQRT_2);
    assert_close(values[3], 3.0);
    assert_close(values[4], 5.0);
}

#[test]
fn roots_of_awkward_radicands_are_finite() {
    let values = get_results("-2R3; -4R5; -6R7; 1e200R2; 1e10R100; 1e20R40;").unwrap();
    assert!(values.iter().all(|v| v.is_finite()), "{values:?}");
    assert_close(values[0], -(2f64.cbrt()));
    assert_close(values[1], -(4f64.powf(0.2)));
    assert_close(values[2], -(6f64.powf(1.0 / 7.0)));
    assert!((values[3] / 1e100 - 1.0).abs() < 1e-9, "{} is not close to 1e100", values[3]);
    assert_close(values[4], 10f64.powf(0.1));
    assert_close(values[5], 10f64.sqrt());
}

#[test]
fn invalid_roots_are_errors() {
    assert!(matches!(assert_failure("-4R2;"), CalcError::Eval(EvalError::NoRealRoot { .. })));
    assert!(matches!(assert_failure("4R-2;"),
                     CalcError::Eval(EvalError::NegativeRootDegree { .. })));
    assert!(matches!(assert_failure("4R0;"),
                     CalcError::Eval(EvalError::InvalidRootDegree { .. })));
    assert!(matches!(assert_failure("4R0.5;"),
                     CalcError::Eval(EvalError::InvalidRootDegree { .. })));
    assert!(matches!(assert_failure("4R3000000000;"),
                     CalcError::Eval(EvalError::RootDegreeTooLarge { .. })));
}

#[test]
fn division_by_zero_is_error() {
    for src in ["1/0;", "1%0;", "1/(2-2);", "0/0;", "5 % -0;"] {
        assert!(matches!(assert_failure(src), CalcError::Eval(EvalError::DivisionByZero { .. })),
                "{src} did not fail with a division by zero");
    }
}

#[test]
fn declaration_then_reference() {
    assert_values("let v=5; v+1;", &[5.0, 6.0]);
    assert_values("let v=5; let v=9; v;", &[5.0, 9.0, 9.0]);
    assert_values("let a = 2; let b = a * 3; b - a;", &[2.0, 6.0, 4.0]);
}

#[test]
fn assignment_to_declared_variables() {
    assert_values("let x = 1; x = 3; x + 1;", &[1.0, 3.0, 4.0]);
    assert_values("let x = 1; x = x + 1; x = x * 10;", &[1.0, 2.0, 20.0]);
    assert!(matches!(assert_failure("x = 3;"),
                     CalcError::Eval(EvalError::UnknownVariable { ref name, .. }) if name == "x"));
}

#[test]
fn underscores_are_not_identifier_characters() {
    assert!(matches!(assert_failure("undeclared_name;"),
                     CalcError::Lex(LexError::BadToken { ref token, .. }) if token == "_"));
}

#[test]
fn unknown_variable_is_error() {
    assert!(matches!(assert_failure("undeclared;"),
                     CalcError::Eval(EvalError::UnknownVariable { ref name, .. }) if name == "undeclared"));
}

#[test]
fn predefined_constants() {
    assert_values("pi; e; k;", &[PI, E, BOLTZMANN]);
    assert_values("let pi = 3; pi;", &[3.0, 3.0]);
}

#[test]
fn malformed_statements() {
    assert!(matches!(assert_failure("(1 + 2;"),
                     CalcError::Eval(EvalError::ExpectedToken { expected: "')'", .. })));
    assert!(matches!(assert_failure("{1;"),
                     CalcError::Eval(EvalError::ExpectedToken { expected: "'}'", .. })));
    assert!(matches!(assert_failure("let x 3;"),
                     CalcError::Eval(EvalError::ExpectedToken { expected: "'='", .. })));
    assert!(matches!(assert_failure("let 3 = 3;"),
                     CalcError::Eval(EvalError::ExpectedIdentifier { .. })));
    assert!(matches!(assert_failure("let let = 3;"),
                     CalcError::Eval(EvalError::ExpectedIdentifier { .. })));
    assert!(matches!(assert_failure("1 + * 2;"),
                     CalcError::Eval(EvalError::ExpectedToken { expected: "primary", .. })));
    assert!(matches!(assert_failure("1 # 2;"), CalcError::Lex(LexError::BadToken { ref token, .. }) if token == "#"));
}

#[test]
fn identifiers_never_start_with_the_root_operator() {
    assert!(matches!(assert_failure("let Rate = 1;"),
                     CalcError::Eval(EvalError::ExpectedIdentifier { .. })));
    assert_values("let xR2 = 4; xR2 R 2 * 0 + xR2;", &[4.0, 4.0]);
}

#[test]
fn exit_stops_evaluation() {
    assert_values("1; exit; 2;", &[1.0]);
    assert_values("exit", &[]);
}

#[test]
fn help_requests_and_empty_statements_are_skipped() {
    assert_values("?; 3; ;;; 4;", &[3.0, 4.0]);
}

#[test]
fn end_of_input_finishes_the_last_statement() {
    assert_values("2 + 2", &[4.0]);
    assert_values("2; 1 +", &[2.0]);
    assert_values("", &[]);
}
