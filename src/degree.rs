//! # Degree analysis
//!
//! Estimates the polynomial degree of a one-parameter function so a plotter
//! can pick a sampling strategy. The analysis walks the body and tracks how
//! many times the input variable is multiplied into each sub-expression:
//!
//! | node | degree |
//! |---|---|
//! | number | 0 |
//! | input variable | 1 |
//! | assigned variable | degree of its value |
//! | `a * b` | `a + b` |
//! | `a / b`, `a % b` | `a - b` |
//! | `a + b`, `a - b` | whichever has the larger magnitude |
//! | `a ^ b` | `a * value(b)` when `b` is constant |
//! | `-a` | `a` |
//!
//! Anything else (calls, nested definitions, exponents that depend on the
//! input) is indeterminate and reported as NaN. The result is the absolute
//! value of the degree of the body's last statement.

use std::collections::HashMap;
use std::fmt;

use crate::ast::{BinOpKind, Define, ExprKind, Expression, Statement, StmtList};
use crate::compiler::compile_expression;
use crate::interpreter::{self, Locals};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegreeError {
    /// Only functions of exactly one variable have a degree.
    Arity { found: usize },
}

impl fmt::Display for DegreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeError::Arity { found } => write!(
                f,
                "can only determine the degree of functions with 1 input variable, found {found}"
            ),
        }
    }
}

impl std::error::Error for DegreeError {}

/// The degree of `define` in its single parameter.
pub fn degree(define: &Define) -> Result<f64, DegreeError> {
    let [input] = define.params.params.as_slice() else {
        return Err(DegreeError::Arity {
            found: define.params.len(),
        });
    };

    let mut analysis = Analysis {
        variables: HashMap::from([(input.name.clone(), 1.0)]),
    };
    let degree = analysis.stmt_list(&define.body).abs();

    tracing::debug!(function = %define.name, degree, "computed degree");
    Ok(degree)
}

struct Analysis {
    variables: HashMap<String, f64>,
}

impl Analysis {
    fn stmt_list(&mut self, list: &StmtList) -> f64 {
        list.stmts
            .iter()
            .fold(f64::NAN, |_, stmt| self.statement(stmt))
    }

    fn statement(&mut self, stmt: &Statement) -> f64 {
        match stmt {
            Statement::Assign(assign) => {
                let degree = self.expression(&assign.value);
                self.variables.insert(assign.name.clone(), degree);
                f64::NAN
            }
            Statement::Expression(expr) => self.expression(expr),
            Statement::Define(_) => f64::NAN,
        }
    }

    fn expression(&mut self, expr: &Expression) -> f64 {
        match &expr.kind {
            ExprKind::Number { .. } => 0.0,
            ExprKind::Variable { name } => self.variables.get(name).copied().unwrap_or(f64::NAN),
            ExprKind::Negate { value } => self.expression(value),
            ExprKind::Call { .. } => f64::NAN,
            ExprKind::Binary { op, left, right } => {
                let left_degree = self.expression(left);
                let right_degree = self.expression(right);

                match op {
                    BinOpKind::Multiply => left_degree + right_degree,
                    BinOpKind::Divide | BinOpKind::Modulo => left_degree - right_degree,
                    BinOpKind::Add | BinOpKind::Subtract => {
                        if left_degree.is_nan() || right_degree.is_nan() {
                            f64::NAN
                        } else if left_degree.abs() > right_degree.abs() {
                            left_degree
                        } else {
                            right_degree
                        }
                    }
                    BinOpKind::Exponentiate => {
                        if left_degree.is_nan() || right_degree != 0.0 {
                            return f64::NAN;
                        }
                        left_degree * constant_value(right)
                    }
                }
            }
        }
    }
}

/// Evaluate a constant sub-expression on the machine; NaN if that fails.
fn constant_value(expr: &Expression) -> f64 {
    interpreter::run(&compile_expression(expr), Locals::new()).unwrap_or(f64::NAN)
}
