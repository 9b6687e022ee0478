//! Graph construction.
//!
//! Walks the tree once, giving every node a vertex and wiring up the flows
//! its evaluation implies:
//!
//! - a number literal is a concrete `Number`
//! - operators and built-in calls pass their operands into the built-in's
//!   `Number` parameters and receive its `Number` result
//! - an assignment passes its value into a fresh slot for the name; the
//!   statement itself is `Undefined`
//! - a definition gets an open signature, registered before its body is
//!   visited so the body can refer to it; the statement is `Undefined`
//! - a statement list takes the type of its last statement
//! - the program as a whole has to produce a `Number`, unless it ends in a
//!   definition, in which case there is nothing to produce

use std::collections::HashMap;

use crate::ast::{Define, ExprKind, Expression, Program, Statement, StmtList};
use crate::stdlib::Builtin;

use super::env::{Contexts, ScopeId};
use super::graph::{TypeGraph, VertexId};
use super::signature::Signature;
use super::ty::Kind;

/// Build the type graph for `program`.
pub fn build(program: &Program) -> TypeGraph {
    let contexts = Contexts::propagate(program);
    let mut graph = TypeGraph::new();
    let builtins = Builtin::ALL
        .into_iter()
        .map(|builtin| (builtin, Signature::builtin(&mut graph, builtin)))
        .collect();

    let mut inference = Inference {
        graph,
        contexts,
        builtins,
    };
    inference.program(program);
    inference.graph
}

struct Inference {
    graph: TypeGraph,
    contexts: Contexts,
    builtins: HashMap<Builtin, Signature>,
}

impl Inference {
    fn program(&mut self, program: &Program) {
        let body = self.stmt_list(&program.body);
        if matches!(program.stmts().last(), Some(Statement::Define(_))) {
            return;
        }
        let vertex = self.graph.node(program.id, Kind::Number);
        self.graph.flow(body, vertex);
    }

    fn stmt_list(&mut self, list: &StmtList) -> VertexId {
        let vertex = self.graph.node(list.id, Kind::Open);

        let mut last = None;
        for stmt in &list.stmts {
            last = Some(self.statement(stmt));
        }

        if let Some(last) = last {
            self.graph.flow(last, vertex);
        }
        vertex
    }

    fn statement(&mut self, stmt: &Statement) -> VertexId {
        let scope = self.contexts.scope_of(stmt.id());

        match stmt {
            Statement::Define(define) => self.define(define, scope),
            Statement::Assign(assign) => {
                let vertex = self.graph.node(assign.id, Kind::Undefined);
                let value = self.expression(&assign.value, scope);
                let target = self.graph.vertex(Kind::Open);
                self.graph.flow(value, target);
                self.contexts.set_local(scope, &assign.name, target);
                vertex
            }
            Statement::Expression(expr) => self.expression(expr, scope),
        }
    }

    fn define(&mut self, define: &Define, scope: ScopeId) -> VertexId {
        let vertex = self.graph.node(define.id, Kind::Undefined);
        let body_scope = self.contexts.scope_of(define.body.id);

        let params = define
            .params
            .params
            .iter()
            .map(|param| {
                let slot = self.graph.node(param.id, Kind::Open);
                self.contexts.set_local(body_scope, &param.name, slot);
                slot
            })
            .collect();

        let signature = Signature::open(&mut self.graph, params);
        let returns = signature.returns;
        self.contexts.define(scope, &define.name, signature);

        let body = self.stmt_list(&define.body);
        self.graph.flow(body, returns);
        vertex
    }

    fn expression(&mut self, expr: &Expression, scope: ScopeId) -> VertexId {
        match &expr.kind {
            ExprKind::Number { .. } => self.graph.node(expr.id, Kind::Number),
            ExprKind::Variable { name } => {
                let vertex = self.graph.node(expr.id, Kind::Open);
                if let Some(local) = self.contexts.local(scope, name) {
                    self.graph.flow(local, vertex);
                }
                vertex
            }
            ExprKind::Binary { op, left, right } => {
                let operands = vec![
                    self.expression(left, scope),
                    self.expression(right, scope),
                ];
                let vertex = self.graph.node(expr.id, Kind::Open);
                let signature = self.builtins.get(&Builtin::for_operator(*op)).cloned();
                self.apply(signature, &operands, vertex);
                vertex
            }
            ExprKind::Negate { value } => {
                let operand = self.expression(value, scope);
                let vertex = self.graph.node(expr.id, Kind::Open);
                let signature = self.builtins.get(&Builtin::Negate).cloned();
                self.apply(signature, &[operand], vertex);
                vertex
            }
            ExprKind::Call { name, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.expression(arg, scope))
                    .collect::<Vec<_>>();
                let vertex = self.graph.node(expr.id, Kind::Open);
                let signature = match Builtin::lookup(name) {
                    Some(builtin) => self.builtins.get(&builtin).cloned(),
                    None => self.contexts.function(scope, name).cloned(),
                };
                self.apply(signature, &args, vertex);
                vertex
            }
        }
    }

    /// Flow arguments into parameters pairwise and the result into `vertex`.
    fn apply(&mut self, signature: Option<Signature>, args: &[VertexId], vertex: VertexId) {
        let Some(signature) = signature else {
            return;
        };

        for (arg, param) in args.iter().zip(&signature.params) {
            self.graph.flow(*arg, *param);
        }
        self.graph.flow(signature.returns, vertex);
    }
}
