//! # Optimizer
//!
//! Constant folding. Children are rewritten first, then a node whose
//! operands have all become number literals is replaced by a literal holding
//! the result. Nodes that are not folded keep their ids, so running the pass
//! a second time changes nothing.
//!
//! A node is only folded when the result is finite. A division by zero is
//! an error at run time and folding it would quietly turn that error into
//! infinity; overflow and NaN results have no literal form and would not
//! survive formatting.

use crate::ast::{
    Assign, BinOpKind, Define, ExprKind, Expression, Program, Statement, StmtList,
};

/// Fold constants throughout `program`.
pub fn optimize(program: Program) -> Program {
    let mut folder = Folder::default();
    let program = Program {
        body: folder.stmt_list(program.body),
        ..program
    };
    tracing::debug!(folded = folder.folded, "optimized program");
    program
}

/// Fold constants in a single expression.
pub fn optimize_node(expr: Expression) -> Expression {
    Folder::default().expression(expr)
}

#[derive(Debug, Default)]
struct Folder {
    folded: usize,
}

impl Folder {
    fn stmt_list(&mut self, list: StmtList) -> StmtList {
        StmtList {
            stmts: list
                .stmts
                .into_iter()
                .map(|stmt| self.statement(stmt))
                .collect(),
            ..list
        }
    }

    fn statement(&mut self, stmt: Statement) -> Statement {
        match stmt {
            Statement::Define(define) => Statement::Define(Define {
                body: self.stmt_list(define.body),
                ..define
            }),
            Statement::Assign(assign) => Statement::Assign(Assign {
                value: self.expression(assign.value),
                ..assign
            }),
            Statement::Expression(expr) => Statement::Expression(self.expression(expr)),
        }
    }

    fn expression(&mut self, expr: Expression) -> Expression {
        let Expression { id, kind } = expr;

        let kind = match kind {
            ExprKind::Binary { op, left, right } => {
                let left = self.expression(*left);
                let right = self.expression(*right);

                if let Some(value) = fold(op, &left, &right) {
                    self.folded += 1;
                    return Expression::number(value);
                }

                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                }
            }
            ExprKind::Negate { value } => {
                let value = self.expression(*value);

                if let Some(number) = value.as_number().filter(|n| n.is_finite()) {
                    self.folded += 1;
                    return Expression::number(-number);
                }

                ExprKind::Negate {
                    value: Box::new(value),
                }
            }
            ExprKind::Call { name, args } => ExprKind::Call {
                name,
                args: args.into_iter().map(|arg| self.expression(arg)).collect(),
            },
            leaf @ (ExprKind::Number { .. } | ExprKind::Variable { .. }) => leaf,
        };

        Expression { id, kind }
    }
}

fn fold(op: BinOpKind, left: &Expression, right: &Expression) -> Option<f64> {
    let (left, right) = (left.as_number()?, right.as_number()?);
    Some(op.apply(left, right)).filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_nodes_keep_their_ids() {
        let expr = Expression::binary(
            BinOpKind::Add,
            Expression::variable("x"),
            Expression::number(1.0),
        );
        let id = expr.id;
        assert_eq!(optimize_node(expr).id, id);
    }

    #[test]
    fn division_by_literal_zero_is_kept() {
        let expr = Expression::binary(
            BinOpKind::Divide,
            Expression::number(1.0),
            Expression::number(0.0),
        );
        assert_eq!(optimize_node(expr.clone()), expr);
    }

    #[test]
    fn non_finite_results_are_kept() {
        for (op, left, right) in [
            (BinOpKind::Exponentiate, 10.0, 400.0),
            (BinOpKind::Modulo, 0.0, 0.0),
            (BinOpKind::Divide, 0.0, 0.0),
        ] {
            let expr = Expression::binary(op, Expression::number(left), Expression::number(right));
            assert_eq!(optimize_node(expr.clone()), expr);
        }
    }
}
