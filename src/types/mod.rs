//! # Type checking
//!
//! A lightweight structural check, not Hindley-Milner inference. Every node
//! gets a vertex in a directed graph; edges record where values flow
//! (argument into parameter, body into return slot, and so on). Vertices
//! are either concrete (`Number`, `Undefined`, `Function`) or open. A
//! mismatch is any concrete vertex that can reach a concrete vertex of a
//! different kind through open vertices only.
//!
//! Checking never fails and never runs the program; it returns the list of
//! mismatches found, empty when none.

pub mod env;
pub mod error;
pub mod graph;
pub mod infer;
pub mod signature;
pub mod ty;

pub use error::Mismatch;
pub use graph::{TypeGraph, VertexId};
pub use ty::Kind;

use crate::ast::Program;

/// Check `program`, returning structured mismatches.
pub fn check(program: &Program) -> Vec<Mismatch> {
    let graph = infer::build(program);
    let mismatches = graph.mismatches();
    tracing::debug!(
        vertices = graph.len(),
        mismatches = mismatches.len(),
        "type checked program"
    );
    mismatches
}

/// Check `program`, returning one human-readable line per mismatch.
pub fn type_check(program: &Program) -> Vec<String> {
    check(program).iter().map(ToString::to_string).collect()
}
