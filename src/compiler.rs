//! # Compiler
//!
//! Lowers the AST into a flat postfix instruction list for the stack machine
//! in [`crate::interpreter`]. Operands are pushed before the operation that
//! consumes them.
//!
//! Binary operators emit their *right* operand first:
//!
//! ```text
//! 1 - 2   =>   2 1 subtract
//! ```
//!
//! so that the first value the machine pops is the left operand. Call
//! arguments and parameter names are reversed for the same reason.

use std::fmt;

use crate::ast::{BinOpKind, Define, ExprKind, Expression, Program, Statement, StmtList};

/// Operation tags understood by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiate,
    Negate,
    GetLocal,
    SetLocal,
    Call,
    Define,
}

impl Op {
    pub fn tag(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
            Op::Modulo => "modulo",
            Op::Exponentiate => "exponentiate",
            Op::Negate => "negate",
            Op::GetLocal => "getLocal",
            Op::SetLocal => "setLocal",
            Op::Call => "call",
            Op::Define => "define",
        }
    }

    /// The arithmetic operator this tag stands for, if any.
    pub fn as_binary(self) -> Option<BinOpKind> {
        let op = match self {
            Op::Add => BinOpKind::Add,
            Op::Subtract => BinOpKind::Subtract,
            Op::Multiply => BinOpKind::Multiply,
            Op::Divide => BinOpKind::Divide,
            Op::Modulo => BinOpKind::Modulo,
            Op::Exponentiate => BinOpKind::Exponentiate,
            _ => return None,
        };
        Some(op)
    }
}

impl From<BinOpKind> for Op {
    fn from(op: BinOpKind) -> Self {
        match op {
            BinOpKind::Add => Op::Add,
            BinOpKind::Subtract => Op::Subtract,
            BinOpKind::Multiply => Op::Multiply,
            BinOpKind::Divide => Op::Divide,
            BinOpKind::Modulo => Op::Modulo,
            BinOpKind::Exponentiate => Op::Exponentiate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Number(f64),
    Name(String),
    /// The body of a function, run when the function is called
    Block(Vec<Instruction>),
    Op(Op),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Number(value) => write!(f, "{value}"),
            Instruction::Name(name) => write!(f, "'{name}'"),
            Instruction::Block(block) => {
                f.write_str("[")?;
                for (index, instruction) in block.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{instruction}")?;
                }
                f.write_str("]")
            }
            Instruction::Op(op) => f.write_str(op.tag()),
        }
    }
}

/// Compile a whole program.
pub fn compile(program: &Program) -> Vec<Instruction> {
    let mut out = Vec::new();
    program.compile_into(&mut out);
    tracing::debug!(instructions = out.len(), "compiled program");
    out
}

/// Compile a statement list on its own (a function body, say).
pub fn compile_block(body: &StmtList) -> Vec<Instruction> {
    let mut out = Vec::new();
    body.compile_into(&mut out);
    out
}

/// Compile a single expression.
pub fn compile_expression(expr: &Expression) -> Vec<Instruction> {
    let mut out = Vec::new();
    expr.compile_into(&mut out);
    out
}

trait Compile {
    fn compile_into(&self, out: &mut Vec<Instruction>);
}

impl Compile for Program {
    fn compile_into(&self, out: &mut Vec<Instruction>) {
        self.body.compile_into(out);
    }
}

impl Compile for StmtList {
    fn compile_into(&self, out: &mut Vec<Instruction>) {
        for stmt in &self.stmts {
            stmt.compile_into(out);
        }
    }
}

impl Compile for Statement {
    fn compile_into(&self, out: &mut Vec<Instruction>) {
        match self {
            Statement::Define(define) => define.compile_into(out),
            Statement::Assign(assign) => {
                assign.value.compile_into(out);
                out.push(Instruction::Name(assign.name.clone()));
                out.push(Instruction::Op(Op::SetLocal));
            }
            Statement::Expression(expr) => expr.compile_into(out),
        }
    }
}

impl Compile for Define {
    fn compile_into(&self, out: &mut Vec<Instruction>) {
        out.push(Instruction::Block(compile_block(&self.body)));
        out.extend(
            self.params
                .params
                .iter()
                .rev()
                .map(|param| Instruction::Name(param.name.clone())),
        );
        out.push(Instruction::Number(self.params.len() as f64));
        out.push(Instruction::Name(self.name.clone()));
        out.push(Instruction::Op(Op::Define));
    }
}

impl Compile for Expression {
    fn compile_into(&self, out: &mut Vec<Instruction>) {
        match &self.kind {
            ExprKind::Number { value, .. } => out.push(Instruction::Number(*value)),
            ExprKind::Variable { name } => {
                out.push(Instruction::Name(name.clone()));
                out.push(Instruction::Op(Op::GetLocal));
            }
            ExprKind::Binary { op, left, right } => {
                right.compile_into(out);
                left.compile_into(out);
                out.push(Instruction::Op((*op).into()));
            }
            ExprKind::Negate { value } => {
                value.compile_into(out);
                out.push(Instruction::Op(Op::Negate));
            }
            ExprKind::Call { name, args } => {
                for arg in args.iter().rev() {
                    arg.compile_into(out);
                }
                out.push(Instruction::Number(args.len() as f64));
                out.push(Instruction::Name(name.clone()));
                out.push(Instruction::Op(Op::Call));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_operand_comes_first() {
        let expr = Expression::binary(
            BinOpKind::Subtract,
            Expression::number(1.0),
            Expression::number(2.0),
        );
        assert_eq!(
            compile_expression(&expr),
            vec![
                Instruction::Number(2.0),
                Instruction::Number(1.0),
                Instruction::Op(Op::Subtract),
            ]
        );
    }

    #[test]
    fn display_uses_tags() {
        let block = Instruction::Block(vec![
            Instruction::Name("x".into()),
            Instruction::Op(Op::GetLocal),
        ]);
        assert_eq!(block.to_string(), "['x' getLocal]");
    }
}
