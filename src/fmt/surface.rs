//! Pretty printer for source code
//!
//! This module provides Display implementations for the AST. The output is
//! canonical: one statement per line, single-statement function bodies
//! inline, longer bodies as an indented block, and only the parentheses
//! needed to read back the same tree.

use std::fmt::{self, Display, Write};

use crate::ast::{BinOpKind, Define, ExprKind, Expression, Program, Statement, StmtList};

const INDENT: &str = "  ";

/// Binding strength required of a negation's operand: anything compound is
/// parenthesized.
const ATOM: u8 = u8::MAX;

struct Formatter {
    buffer: String,
    indent_level: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.body.fmt(f)
    }
}

impl Display for StmtList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_statements(&self.stmts, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_statement(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_expression(self, &mut formatter, 0);
        f.write_str(&formatter.finish())
    }
}

fn format_statements(stmts: &[Statement], fmt: &mut Formatter) {
    for (i, stmt) in stmts.iter().enumerate() {
        if i > 0 {
            fmt.write_newline();
            fmt.write_indent();
        }
        format_statement(stmt, fmt);
    }
}

fn format_statement(stmt: &Statement, fmt: &mut Formatter) {
    match stmt {
        Statement::Define(define) => format_define(define, fmt),
        Statement::Assign(assign) => {
            fmt.write_str(&assign.name);
            fmt.write_str(" = ");
            format_expression(&assign.value, fmt, 0);
        }
        Statement::Expression(expr) => format_expression(expr, fmt, 0),
    }
}

fn format_define(define: &Define, fmt: &mut Formatter) {
    fmt.write_str(&define.name);
    fmt.write_str("(");
    for (i, param) in define.params.names().enumerate() {
        if i > 0 {
            fmt.write_str(", ");
        }
        fmt.write_str(param);
    }
    fmt.write_str(") = ");

    if let [stmt] = define.body.stmts.as_slice() {
        format_statement(stmt, fmt);
        return;
    }

    fmt.write_str("{");
    fmt.indent();
    if !define.body.is_empty() {
        fmt.write_newline();
        fmt.write_indent();
        format_statements(&define.body.stmts, fmt);
    }
    fmt.dedent();
    fmt.write_newline();
    fmt.write_indent();
    fmt.write_str("}");
}

fn format_expression(expr: &Expression, fmt: &mut Formatter, parent_prec: u8) {
    match &expr.kind {
        ExprKind::Number { value, source } => {
            let needs_parens = value.is_sign_negative() && source.is_none() && parent_prec > 0;
            wrap(fmt, needs_parens, |fmt| format_number(*value, source.as_deref(), fmt));
        }
        ExprKind::Variable { name } => fmt.write_str(name),
        ExprKind::Binary { op, left, right } => {
            format_binary_op(*op, left, right, fmt, parent_prec)
        }
        ExprKind::Negate { value } => wrap(fmt, parent_prec > 0, |fmt| {
            fmt.write_str("-");
            format_expression(value, fmt, ATOM);
        }),
        ExprKind::Call { name, args } => {
            fmt.write_str(name);
            fmt.write_str("(");
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    fmt.write_str(", ");
                }
                format_expression(arg, fmt, 0);
            }
            fmt.write_str(")");
        }
    }
}

fn format_number(value: f64, source: Option<&str>, fmt: &mut Formatter) {
    match source {
        Some(source) => fmt.write_str(source),
        None => {
            let _ = write!(fmt.buffer, "{value}");
        }
    }
}

fn format_binary_op(
    op: BinOpKind,
    left: &Expression,
    right: &Expression,
    fmt: &mut Formatter,
    parent_prec: u8,
) {
    if let Some((coefficient, name)) = juxtaposition(op, left, right) {
        fmt.write_str(&coefficient);
        fmt.write_str(name);
        return;
    }

    let op_prec = op.precedence();

    wrap(fmt, op_prec < parent_prec, |fmt| {
        // chains group to the right, so only the left side needs the stricter bound
        format_expression(left, fmt, op_prec + 1);
        fmt.write_str(" ");
        fmt.write_str(op.symbol());
        fmt.write_str(" ");
        format_expression(right, fmt, op_prec);
    });
}

/// `2 * x` prints as `2x` when the number can be written directly in front
/// of a name. The result is an atom: `2x^2` reads as `(2x)^2`.
///
/// Only decimal coefficients are written this way, and only when the pair
/// cannot lex as a single literal: `0x10 * a`, `2 * e1` and `0 * x1` keep
/// the explicit operator.
fn juxtaposition<'a>(
    op: BinOpKind,
    left: &Expression,
    right: &'a Expression,
) -> Option<(String, &'a str)> {
    if op != BinOpKind::Multiply {
        return None;
    }

    let (ExprKind::Number { value, source }, ExprKind::Variable { name }) = (&left.kind, &right.kind)
    else {
        return None;
    };

    if !value.is_finite() || value.is_sign_negative() {
        return None;
    }

    let coefficient = source.clone().unwrap_or_else(|| value.to_string());
    let radix = ["0b", "0o", "0x"]
        .iter()
        .any(|prefix| coefficient.starts_with(prefix));
    let merges = radix
        || name.starts_with('e')
        || (coefficient == "0" && name.starts_with(['b', 'o', 'x']));

    (!merges).then_some((coefficient, name.as_str()))
}

fn wrap(fmt: &mut Formatter, parens: bool, body: impl FnOnce(&mut Formatter)) {
    if parens {
        fmt.write_str("(");
    }
    body(fmt);
    if parens {
        fmt.write_str(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_nested_chain_keeps_parens() {
        let expr = Expression::binary(
            BinOpKind::Subtract,
            Expression::binary(
                BinOpKind::Subtract,
                Expression::number(1.0),
                Expression::number(2.0),
            ),
            Expression::number(3.0),
        );
        assert_eq!(expr.to_string(), "(1 - 2) - 3");
    }

    #[test]
    fn right_nested_chain_drops_parens() {
        let expr = Expression::binary(
            BinOpKind::Subtract,
            Expression::number(1.0),
            Expression::binary(
                BinOpKind::Subtract,
                Expression::number(2.0),
                Expression::number(3.0),
            ),
        );
        assert_eq!(expr.to_string(), "1 - 2 - 3");
    }

    #[test]
    fn negative_folded_number_as_operand() {
        let expr = Expression::binary(
            BinOpKind::Multiply,
            Expression::number(-3.0),
            Expression::variable("x"),
        );
        assert_eq!(expr.to_string(), "(-3) * x");
    }

    #[test]
    fn juxtaposition_that_would_lex_as_one_literal() {
        let expr = Expression::binary(
            BinOpKind::Multiply,
            Expression::literal(2.0, "2"),
            Expression::variable("e1"),
        );
        assert_eq!(expr.to_string(), "2 * e1");

        let expr = Expression::binary(
            BinOpKind::Multiply,
            Expression::literal(2.0, "2"),
            Expression::variable("x"),
        );
        assert_eq!(expr.to_string(), "2x");
    }

    #[test]
    fn radix_coefficient_keeps_operator() {
        let expr = Expression::binary(
            BinOpKind::Multiply,
            Expression::literal(16.0, "0x10"),
            Expression::variable("a"),
        );
        assert_eq!(expr.to_string(), "0x10 * a");
    }
}
