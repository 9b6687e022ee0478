use super::{NodeId, structural_eq};

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiate,
}

impl BinOpKind {
    pub const ALL: [BinOpKind; 6] = [
        BinOpKind::Add,
        BinOpKind::Subtract,
        BinOpKind::Multiply,
        BinOpKind::Divide,
        BinOpKind::Modulo,
        BinOpKind::Exponentiate,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Subtract => "-",
            BinOpKind::Multiply => "*",
            BinOpKind::Divide => "/",
            BinOpKind::Modulo => "%",
            BinOpKind::Exponentiate => "^",
        }
    }

    /// Binding strength: `^` binds tighter than `* / %`, which bind tighter than `+ -`.
    pub fn precedence(self) -> u8 {
        match self {
            BinOpKind::Add | BinOpKind::Subtract => 1,
            BinOpKind::Multiply | BinOpKind::Divide | BinOpKind::Modulo => 2,
            BinOpKind::Exponentiate => 3,
        }
    }

    /// Plain IEEE arithmetic; no error cases.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOpKind::Add => left + right,
            BinOpKind::Subtract => left - right,
            BinOpKind::Multiply => left * right,
            BinOpKind::Divide => left / right,
            BinOpKind::Modulo => left % right,
            BinOpKind::Exponentiate => left.powf(right),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Expression {
    pub id: NodeId,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A literal. `source` keeps the text it was written as, if it came from source.
    Number { value: f64, source: Option<String> },
    Variable { name: String },
    Binary {
        op: BinOpKind,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Negate { value: Box<Expression> },
    Call { name: String, args: Vec<Expression> },
}

impl Expression {
    pub fn new(kind: ExprKind) -> Self {
        Self {
            id: NodeId::fresh(),
            kind,
        }
    }

    pub fn number(value: f64) -> Self {
        Self::new(ExprKind::Number {
            value,
            source: None,
        })
    }

    pub fn literal(value: f64, source: impl Into<String>) -> Self {
        Self::new(ExprKind::Number {
            value,
            source: Some(source.into()),
        })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Variable { name: name.into() })
    }

    pub fn binary(op: BinOpKind, left: Expression, right: Expression) -> Self {
        Self::new(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn negate(value: Expression) -> Self {
        Self::new(ExprKind::Negate {
            value: Box::new(value),
        })
    }

    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self::new(ExprKind::Call {
            name: name.into(),
            args,
        })
    }

    /// The literal value, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            ExprKind::Number { value, .. } => Some(value),
            _ => None,
        }
    }
}

structural_eq! {
    Expression => [kind];
}
