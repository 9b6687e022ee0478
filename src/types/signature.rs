use crate::stdlib::Builtin;

use super::graph::{TypeGraph, VertexId};
use super::ty::Kind;

/// The vertices describing a function: the function itself, one per
/// parameter, and one for what it returns.
#[derive(Debug, Clone)]
pub struct Signature {
    pub function: VertexId,
    pub params: Vec<VertexId>,
    pub returns: VertexId,
}

impl Signature {
    /// A signature of a user-defined function: everything starts out open.
    pub fn open(graph: &mut TypeGraph, params: Vec<VertexId>) -> Self {
        Self {
            function: graph.vertex(Kind::Function),
            params,
            returns: graph.vertex(Kind::Open),
        }
    }

    /// Every built-in takes and returns numbers.
    pub fn builtin(graph: &mut TypeGraph, builtin: Builtin) -> Self {
        let function = graph.vertex(Kind::Function);
        let params = (0..builtin.arity())
            .map(|_| graph.vertex(Kind::Number))
            .collect();
        let returns = graph.vertex(Kind::Number);

        Self {
            function,
            params,
            returns,
        }
    }
}
