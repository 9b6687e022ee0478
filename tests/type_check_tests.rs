use mathlang::types::{Kind, Mismatch, check};
use mathlang::{Options, Program, check_source, parse_source};

fn parse_program(input: &str) -> Program {
    parse_source(input, &Options::default()).expect("parsing failed")
}

fn diagnostics(input: &str) -> Vec<String> {
    check_source(input).expect("parsing failed")
}

#[test]
fn types_function_returning_assignment() {
    assert_eq!(
        diagnostics("f(x) = a = 1\nf(2)"),
        vec!["Expected Undefined got Number".to_string()]
    );
}

#[test]
fn types_structured_mismatch() {
    let program = parse_program("f(x) = a = 1\nf(2)");
    let mismatches = check(&program);
    assert_eq!(mismatches.len(), 1);

    let Mismatch { expected, found, .. } = &mismatches[0];
    assert_eq!((*expected, *found), (Kind::Undefined, Kind::Number));
}

#[test]
fn types_well_typed_programs() {
    assert!(diagnostics("1 + 2 * 3").is_empty());
    assert!(diagnostics("x = 2\n3x").is_empty());
    assert!(diagnostics("f(x) = 2x\nf(5)").is_empty());
    assert!(diagnostics("f(x, y) = {\n  a = x\n  a + y\n}\nf(1, 2)").is_empty());
    assert!(diagnostics("sqrt(log(100))").is_empty());
    assert!(diagnostics("").is_empty());
}

#[test]
fn types_program_must_end_in_a_number() {
    assert_eq!(
        diagnostics("x = 1"),
        vec!["Expected Undefined got Number".to_string()]
    );
}

#[test]
fn types_program_may_end_in_a_definition() {
    assert!(diagnostics("f(x) = 1").is_empty());
    assert!(diagnostics("f(x) = x^2").is_empty());
    assert!(diagnostics("f(x) = {\n  a = x\n  a * 2\n}").is_empty());
}

#[test]
fn types_undefined_into_operator() {
    assert_eq!(
        diagnostics("f(x) = a = 1\nf(2) + 1"),
        vec!["Expected Undefined got Number".to_string()]
    );
}

#[test]
fn types_recursion_terminates() {
    assert!(diagnostics("f(x) = f(x)\nf(1)").is_empty());
}

#[test]
fn types_unknown_names_are_unconstrained() {
    assert!(diagnostics("y + 1").is_empty());
    assert!(diagnostics("g(1)").is_empty());
}

#[test]
fn types_checking_does_not_fail_on_runtime_errors() {
    assert!(diagnostics("1 / 0").is_empty());
}
