//! # Abstract Syntax Tree
//!
//! The tree produced by the parser. Every node owns its children and carries
//! a [`NodeId`] that is unique for the lifetime of the process. Passes that
//! need per-node scratch state (the type checker) key side tables by that id
//! instead of mutating the tree.
//!
//! Structural equality ignores ids: two trees compare equal when they have
//! the same shape and the same literals, regardless of where they came from.
//!
//! ## Layout
//!
//! ```text
//! Program
//!   └─ StmtList
//!        ├─ Statement::Define (name, ParamList, StmtList)
//!        ├─ Statement::Assign (name, Expression)
//!        └─ Statement::Expression
//!             Number | Variable | Binary | Negate | Call
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

pub mod expression;
pub mod statement;

pub use expression::{BinOpKind, ExprKind, Expression};
pub use statement::{Assign, Define, Param, ParamList, Statement};

/// Global counter handing out node ids
static NEXT_NODE_ID: AtomicU32 = AtomicU32::new(0);

/// Stable identity of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Implements `PartialEq` over the listed fields only, leaving ids out.
macro_rules! structural_eq {
    ($($ty:ty => [$($field:ident),*]);* $(;)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    true $(&& self.$field == other.$field)*
                }
            }
        )*
    };
}

pub(crate) use structural_eq;

/// A sequence of statements; its value is the value of the last one.
#[derive(Debug, Clone)]
pub struct StmtList {
    pub id: NodeId,
    pub stmts: Vec<Statement>,
}

impl StmtList {
    pub fn new(stmts: Vec<Statement>) -> Self {
        Self {
            id: NodeId::fresh(),
            stmts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Program {
    pub id: NodeId,
    pub body: StmtList,
}

impl Program {
    pub fn new(body: StmtList) -> Self {
        Self {
            id: NodeId::fresh(),
            body,
        }
    }

    pub fn stmts(&self) -> &[Statement] {
        &self.body.stmts
    }

    /// The first top-level `Define`, if any. Handy for `degree` and `execute`.
    pub fn first_define(&self) -> Option<&Define> {
        self.body.stmts.iter().find_map(|stmt| match stmt {
            Statement::Define(define) => Some(define),
            _ => None,
        })
    }
}

structural_eq! {
    StmtList => [stmts];
    Program => [body];
}
