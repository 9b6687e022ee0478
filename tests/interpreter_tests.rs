use mathlang::compiler::{Instruction, Op};
use mathlang::{Error, Locals, Machine, Options, RuntimeError, compile, evaluate, parse_source, run};

fn run_program(input: &str) -> Result<f64, Error> {
    evaluate(input, &Options::default())
}

fn runtime_error(input: &str) -> RuntimeError {
    match run_program(input) {
        Err(Error::Runtime(err)) => err,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn interp_seeded_locals() {
    let program = vec![Instruction::Name("x".into()), Instruction::Op(Op::GetLocal)];
    let locals = Locals::from([("x".to_string(), 4.0)]);
    assert_eq!(run(&program, locals), Ok(4.0));
}

#[test]
fn interp_assignment_is_an_expression() {
    assert_eq!(run_program("x = 5").unwrap(), 5.0);
}

#[test]
fn interp_definition_alone_yields_nan() {
    assert!(run_program("f(x) = x").unwrap().is_nan());
    assert!(run_program("").unwrap().is_nan());
}

#[test]
fn interp_stdlib() {
    assert_close(run_program("log(100)").unwrap(), 2.0);
    assert_close(run_program("ln(1)").unwrap(), 0.0);
    assert_eq!(run_program("sqrt(9)").unwrap(), 3.0);
    assert_eq!(run_program("modulo(12, 5)").unwrap(), 2.0);
    assert_eq!(run_program("negate(1)").unwrap(), -1.0);
    assert_eq!(run_program("exponentiate(2, 10)").unwrap(), 1024.0);
    assert_eq!(run_program("add(1, subtract(5, 2))").unwrap(), 4.0);
    assert_eq!(run_program("multiply(3, divide(8, 4))").unwrap(), 6.0);
    assert_eq!(run_program("print(5)").unwrap(), 5.0);
}

#[test]
fn interp_modulo_operator() {
    assert_eq!(run_program("7 % 4").unwrap(), 3.0);
}

#[test]
fn interp_division_by_zero() {
    assert_eq!(runtime_error("1 / 0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("divide(1, 0)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("x = 0\n2 / x"), RuntimeError::DivisionByZero);
}

#[test]
fn interp_unknown_names() {
    assert_eq!(runtime_error("y"), RuntimeError::UnknownVariable("y".into()));
    assert_eq!(runtime_error("g(1)"), RuntimeError::UnknownFunction("g".into()));
}

#[test]
fn interp_arity() {
    assert_eq!(
        runtime_error("f(x) = x\nf(1, 2)"),
        RuntimeError::Arity {
            name: "f".into(),
            expected: 1,
            found: 2,
        }
    );
    assert_eq!(
        runtime_error("sqrt(1, 2)"),
        RuntimeError::Arity {
            name: "sqrt".into(),
            expected: 1,
            found: 2,
        }
    );
}

#[test]
fn interp_calls_do_not_see_caller_locals() {
    assert_eq!(
        runtime_error("x = 1\nf(y) = x\nf(2)"),
        RuntimeError::UnknownVariable("x".into())
    );
}

#[test]
fn interp_calls_do_not_see_caller_functions() {
    assert_eq!(
        runtime_error("g(x) = x\nf(x) = g(x)\nf(1)"),
        RuntimeError::UnknownFunction("g".into())
    );
    assert_eq!(
        runtime_error("f(x) = f(x)\nf(1)"),
        RuntimeError::UnknownFunction("f".into())
    );
}

#[test]
fn interp_nested_definition() {
    let source = "f(x) = {\n  g(y) = y * 2\n  g(x) + 1\n}\nf(3)";
    assert_eq!(run_program(source).unwrap(), 7.0);
}

#[test]
fn interp_callee_locals_stay_local() {
    let source = "f(x) = {\n  a = x * 10\n  a\n}\na = 1\nf(2) + a";
    assert_eq!(run_program(source).unwrap(), 21.0);
}

#[test]
fn interp_call_depth_limit() {
    let source = "f(x) = {\n  g(y) = y\n  g(x)\n}\nf(1)";

    let shallow = Options::default().with_max_call_depth(1);
    assert!(matches!(
        evaluate(source, &shallow),
        Err(Error::Runtime(RuntimeError::CallDepthExceeded(1)))
    ));

    let deep = Options::default().with_max_call_depth(2);
    assert_eq!(evaluate(source, &deep).unwrap(), 1.0);
}

#[test]
fn interp_depth_limit_ignores_builtins() {
    let options = Options::default().with_max_call_depth(0);
    assert_eq!(evaluate("sqrt(sqrt(16))", &options).unwrap(), 2.0);
    assert!(matches!(
        evaluate("f(x) = x\nf(1)", &options),
        Err(Error::Runtime(RuntimeError::CallDepthExceeded(0)))
    ));
}

#[test]
fn interp_machine_is_reusable() {
    let program = parse_source("f(x) = x^2\nf(3)", &Options::default()).unwrap();
    let instructions = compile(&program);
    let machine = Machine::new();
    assert_eq!(machine.run(&instructions, Locals::new()), Ok(9.0));
    assert_eq!(machine.run(&instructions, Locals::new()), Ok(9.0));
}

#[test]
fn interp_malformed_program() {
    let program = vec![Instruction::Number(1.0), Instruction::Op(Op::GetLocal)];
    assert!(matches!(
        run(&program, Locals::new()),
        Err(RuntimeError::MalformedProgram(_))
    ));
}
