//! The built-in functions every program can call.
//!
//! The binary operators are thin aliases for the two-argument entries here:
//! `a / b` and `divide(a, b)` run the same code, so both fail the same way on
//! a zero divisor.

use crate::ast::BinOpKind;
use crate::interpreter::RuntimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiate,
    Negate,
    Sqrt,
    Log,
    Ln,
    Print,
}

impl Builtin {
    pub const ALL: [Builtin; 11] = [
        Builtin::Add,
        Builtin::Subtract,
        Builtin::Multiply,
        Builtin::Divide,
        Builtin::Modulo,
        Builtin::Exponentiate,
        Builtin::Negate,
        Builtin::Sqrt,
        Builtin::Log,
        Builtin::Ln,
        Builtin::Print,
    ];

    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "add",
            Builtin::Subtract => "subtract",
            Builtin::Multiply => "multiply",
            Builtin::Divide => "divide",
            Builtin::Modulo => "modulo",
            Builtin::Exponentiate => "exponentiate",
            Builtin::Negate => "negate",
            Builtin::Sqrt => "sqrt",
            Builtin::Log => "log",
            Builtin::Ln => "ln",
            Builtin::Print => "print",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Builtin::Add
            | Builtin::Subtract
            | Builtin::Multiply
            | Builtin::Divide
            | Builtin::Modulo
            | Builtin::Exponentiate => 2,
            Builtin::Negate | Builtin::Sqrt | Builtin::Log | Builtin::Ln | Builtin::Print => 1,
        }
    }

    /// The function backing a binary operator.
    pub fn for_operator(op: BinOpKind) -> Builtin {
        match op {
            BinOpKind::Add => Builtin::Add,
            BinOpKind::Subtract => Builtin::Subtract,
            BinOpKind::Multiply => Builtin::Multiply,
            BinOpKind::Divide => Builtin::Divide,
            BinOpKind::Modulo => Builtin::Modulo,
            BinOpKind::Exponentiate => Builtin::Exponentiate,
        }
    }

    pub fn call(self, args: &[f64]) -> Result<f64, RuntimeError> {
        if args.len() != self.arity() {
            return Err(RuntimeError::Arity {
                name: self.name().to_string(),
                expected: self.arity(),
                found: args.len(),
            });
        }

        let value = match (self, args) {
            (Builtin::Divide, [_, right]) if *right == 0.0 => {
                return Err(RuntimeError::DivisionByZero);
            }
            (Builtin::Add, [left, right]) => BinOpKind::Add.apply(*left, *right),
            (Builtin::Subtract, [left, right]) => BinOpKind::Subtract.apply(*left, *right),
            (Builtin::Multiply, [left, right]) => BinOpKind::Multiply.apply(*left, *right),
            (Builtin::Divide, [left, right]) => BinOpKind::Divide.apply(*left, *right),
            (Builtin::Modulo, [left, right]) => BinOpKind::Modulo.apply(*left, *right),
            (Builtin::Exponentiate, [left, right]) => BinOpKind::Exponentiate.apply(*left, *right),
            (Builtin::Negate, [value]) => -value,
            (Builtin::Sqrt, [value]) => value.sqrt(),
            (Builtin::Log, [value]) => value.log10(),
            (Builtin::Ln, [value]) => value.ln(),
            (Builtin::Print, [value]) => {
                tracing::info!(value = *value, "print");
                *value
            }
            _ => unreachable!("arity checked above"),
        };

        Ok(value)
    }
}
