use mathlang::ast::{
    BinOpKind, Define, Expression, Param, ParamList, Program, Statement, StmtList,
};
use mathlang::lexer::tokenize;
use mathlang::{ParseError, parse};

fn parse_program(input: &str) -> Program {
    let tokens = tokenize(input).expect("lexing failed");
    match parse(tokens) {
        Ok(program) => program,
        Err(err) => panic!("parsing failed: {err}"),
    }
}

fn parse_error(input: &str) -> ParseError {
    let tokens = tokenize(input).expect("lexing failed");
    match parse(tokens) {
        Ok(program) => panic!("expected a syntax error, parsed {program:?}"),
        Err(err) => err,
    }
}

fn single_expression(input: &str) -> Expression {
    let program = parse_program(input);
    match program.stmts() {
        [Statement::Expression(expr)] => expr.clone(),
        other => panic!("expected a single expression, got {other:?}"),
    }
}

fn lit(value: f64) -> Expression {
    Expression::literal(value, value.to_string())
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn bin(op: BinOpKind, left: Expression, right: Expression) -> Expression {
    Expression::binary(op, left, right)
}

fn params(names: &[&str]) -> ParamList {
    ParamList::new(names.iter().map(|name| Param::new(*name)).collect())
}

#[test]
fn parse_empty_program() {
    assert!(parse_program("").stmts().is_empty());
}

#[test]
fn parse_precedence() {
    assert_eq!(
        single_expression("1 + 2 * 3"),
        bin(
            BinOpKind::Add,
            lit(1.0),
            bin(BinOpKind::Multiply, lit(2.0), lit(3.0))
        )
    );
}

#[test]
fn parse_chains_group_to_the_right() {
    assert_eq!(
        single_expression("1 - 2 - 3"),
        bin(
            BinOpKind::Subtract,
            lit(1.0),
            bin(BinOpKind::Subtract, lit(2.0), lit(3.0))
        )
    );
    assert_eq!(
        single_expression("2^3^2"),
        bin(
            BinOpKind::Exponentiate,
            lit(2.0),
            bin(BinOpKind::Exponentiate, lit(3.0), lit(2.0))
        )
    );
}

#[test]
fn parse_grouping() {
    assert_eq!(
        single_expression("(1 + 2) * 3"),
        bin(
            BinOpKind::Multiply,
            bin(BinOpKind::Add, lit(1.0), lit(2.0)),
            lit(3.0)
        )
    );
}

#[test]
fn parse_negation_takes_the_whole_expression() {
    assert_eq!(
        single_expression("-1 + 2"),
        Expression::negate(bin(BinOpKind::Add, lit(1.0), lit(2.0)))
    );
}

#[test]
fn parse_juxtaposition() {
    assert_eq!(
        single_expression("3x"),
        bin(BinOpKind::Multiply, lit(3.0), var("x"))
    );
    assert_eq!(
        single_expression("2x^2"),
        bin(
            BinOpKind::Exponentiate,
            bin(BinOpKind::Multiply, lit(2.0), var("x")),
            lit(2.0)
        )
    );
}

#[test]
fn parse_literal_keeps_source() {
    assert_eq!(single_expression("0x10"), Expression::literal(16.0, "0x10"));
    assert_ne!(single_expression("0x10"), Expression::number(16.0));
}

#[test]
fn parse_calls() {
    assert_eq!(
        single_expression("f(1, x)"),
        Expression::call("f", vec![lit(1.0), var("x")])
    );
    assert_eq!(single_expression("g()"), Expression::call("g", vec![]));
}

#[test]
fn parse_call_with_number_argument_is_not_a_definition() {
    assert_eq!(
        single_expression("f(x, 1)"),
        Expression::call("f", vec![var("x"), lit(1.0)])
    );
}

#[test]
fn parse_assignment() {
    let program = parse_program("x = 1 + 2");
    assert_eq!(
        program.stmts(),
        &[Statement::assign(
            "x",
            bin(BinOpKind::Add, lit(1.0), lit(2.0))
        )]
    );
}

#[test]
fn parse_inline_definition() {
    let program = parse_program("f(x) = 2x");
    let expected = Define::new(
        "f",
        params(&["x"]),
        StmtList::new(vec![Statement::Expression(bin(
            BinOpKind::Multiply,
            lit(2.0),
            var("x"),
        ))]),
    );
    assert_eq!(program.stmts(), &[Statement::Define(expected)]);
}

#[test]
fn parse_definition_without_parameters() {
    let program = parse_program("g() = 1");
    let Some(define) = program.first_define() else {
        panic!("expected a definition");
    };
    assert!(define.params.is_empty());
    assert_eq!(define.body.stmts, vec![Statement::Expression(lit(1.0))]);
}

#[test]
fn parse_block_definition() {
    let program = parse_program("f(x, y) = {\n  a = x\n  a + y\n}\nf(1, 2)");
    assert_eq!(program.stmts().len(), 2);

    let expected = Define::new(
        "f",
        params(&["x", "y"]),
        StmtList::new(vec![
            Statement::assign("a", var("x")),
            Statement::Expression(bin(BinOpKind::Add, var("a"), var("y"))),
        ]),
    );
    assert_eq!(program.stmts()[0], Statement::Define(expected));
    assert_eq!(
        program.stmts()[1],
        Statement::Expression(Expression::call("f", vec![lit(1.0), lit(2.0)]))
    );
}

#[test]
fn parse_inline_body_can_be_an_assignment() {
    let program = parse_program("f(x) = a = 1\nf(2)");
    let Some(define) = program.first_define() else {
        panic!("expected a definition");
    };
    assert_eq!(define.body.stmts, vec![Statement::assign("a", lit(1.0))]);
}

#[test]
fn parse_multiple_statements() {
    let program = parse_program("x = 1\n\ny = 2\nx + y\n");
    assert_eq!(program.stmts().len(), 3);
}

#[test]
fn parse_error_missing_operand() {
    let err = parse_error("1 +");
    assert!(err.is_committed());
    assert_eq!(err.to_string(), "unexpected end of input, expected expression");
}

#[test]
fn parse_error_trailing_tokens() {
    let err = parse_error("1 2");
    assert_eq!(
        err.to_string(),
        "unexpected token, expected newline or end of input, found number '2' at 1:3"
    );
}

#[test]
fn parse_error_unclosed_group() {
    parse_error("(1 + 2");
}

#[test]
fn parse_error_dangling_argument_comma() {
    let err = parse_error("f(1,)");
    assert_eq!(err.expected, vec!["argument".to_string()]);
}

#[test]
fn parse_error_missing_function_body() {
    let err = parse_error("f(x) =");
    assert_eq!(err.expected, vec!["function body".to_string()]);
}

#[test]
fn parse_error_redefining_stdlib() {
    let err = parse_error("add(x, y) = x + y");
    assert!(err.message.contains("cannot redefine stdlib function 'add'"));
    assert!(err.to_string().ends_with("at 1:1"));
}
