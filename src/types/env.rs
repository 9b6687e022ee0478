//! Lexical scopes for the checker.
//!
//! The first pass over the tree gives every statement list its own scope
//! record and remembers, for every statement, which record it lives in.
//! The second pass (graph construction) fills the records with the vertices
//! of assigned locals and the signatures of defined functions.

use std::collections::HashMap;

use crate::ast::{NodeId, Program, Statement, StmtList};

use super::graph::VertexId;
use super::signature::Signature;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct ScopeRecord {
    parent: Option<ScopeId>,
    locals: HashMap<String, VertexId>,
    funcs: HashMap<String, Signature>,
}

#[derive(Debug, Default)]
pub struct Contexts {
    scopes: Vec<ScopeRecord>,
    context_of: HashMap<NodeId, ScopeId>,
}

impl Contexts {
    /// Allocate a scope per statement list and link every statement to it.
    pub fn propagate(program: &Program) -> Self {
        let mut contexts = Contexts::default();
        contexts.stmt_list(&program.body, None);
        contexts
    }

    fn stmt_list(&mut self, list: &StmtList, parent: Option<ScopeId>) {
        let scope = ScopeId(self.scopes.len());
        self.scopes.push(ScopeRecord {
            parent,
            ..ScopeRecord::default()
        });
        self.context_of.insert(list.id, scope);

        for stmt in &list.stmts {
            self.context_of.insert(stmt.id(), scope);
            if let Statement::Define(define) = stmt {
                self.stmt_list(&define.body, Some(scope));
            }
        }
    }

    /// The scope a statement lives in, or the scope a statement list opens.
    pub fn scope_of(&self, node: NodeId) -> ScopeId {
        self.context_of.get(&node).copied().unwrap_or_default()
    }

    /// Locals are not inherited: a function body sees only its own.
    pub fn local(&self, scope: ScopeId, name: &str) -> Option<VertexId> {
        self.scopes.get(scope.0)?.locals.get(name).copied()
    }

    pub fn set_local(&mut self, scope: ScopeId, name: impl ToString, vertex: VertexId) {
        if let Some(record) = self.scopes.get_mut(scope.0) {
            record.locals.insert(name.to_string(), vertex);
        }
    }

    /// Functions resolve through enclosing scopes, innermost first.
    pub fn function(&self, scope: ScopeId, name: &str) -> Option<&Signature> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let record = self.scopes.get(id.0)?;
            if let Some(signature) = record.funcs.get(name) {
                return Some(signature);
            }
            current = record.parent;
        }
        None
    }

    pub fn define(&mut self, scope: ScopeId, name: impl ToString, signature: Signature) {
        if let Some(record) = self.scopes.get_mut(scope.0) {
            record.funcs.insert(name.to_string(), signature);
        }
    }
}
