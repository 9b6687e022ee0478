use mathlang::compiler::{Instruction, Op};
use mathlang::{Options, compile, parse_source};

fn compile_program(input: &str) -> Vec<Instruction> {
    compile(&parse_source(input, &Options::default()).expect("parsing failed"))
}

fn listing(input: &str) -> String {
    compile_program(input)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn name(name: &str) -> Instruction {
    Instruction::Name(name.to_string())
}

#[test]
fn compile_binary_pushes_right_operand_first() {
    assert_eq!(
        compile_program("1 - 2"),
        vec![
            Instruction::Number(2.0),
            Instruction::Number(1.0),
            Instruction::Op(Op::Subtract),
        ]
    );
}

#[test]
fn compile_variable_reads_local() {
    assert_eq!(
        compile_program("-x"),
        vec![name("x"), Instruction::Op(Op::GetLocal), Instruction::Op(Op::Negate)]
    );
}

#[test]
fn compile_assignment() {
    assert_eq!(
        compile_program("x = 3"),
        vec![Instruction::Number(3.0), name("x"), Instruction::Op(Op::SetLocal)]
    );
}

#[test]
fn compile_call_reverses_arguments() {
    assert_eq!(
        compile_program("f(1, 2)"),
        vec![
            Instruction::Number(2.0),
            Instruction::Number(1.0),
            Instruction::Number(2.0),
            name("f"),
            Instruction::Op(Op::Call),
        ]
    );
}

#[test]
fn compile_definition() {
    assert_eq!(
        compile_program("f(x, y) = x"),
        vec![
            Instruction::Block(vec![name("x"), Instruction::Op(Op::GetLocal)]),
            name("y"),
            name("x"),
            Instruction::Number(2.0),
            name("f"),
            Instruction::Op(Op::Define),
        ]
    );
}

#[test]
fn compile_statements_in_order() {
    assert_eq!(
        compile_program("1\n2"),
        vec![Instruction::Number(1.0), Instruction::Number(2.0)]
    );
}

#[test]
fn compile_listing() {
    assert_eq!(
        listing("f(x) = 2x\nf(5)"),
        "['x' getLocal 2 multiply] 'x' 1 'f' define 5 1 'f' call"
    );
}

#[test]
fn compile_operator_tags() {
    assert_eq!(listing("1 + 2 * 3"), "3 2 multiply 1 add");
    assert_eq!(listing("8 % 3 ^ 2"), "2 3 exponentiate 8 modulo");
    assert_eq!(listing("4 / 2"), "2 4 divide");
}
