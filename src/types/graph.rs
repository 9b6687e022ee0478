//! Directed graph of type vertices.
//!
//! An edge `a -> b` means "the value at `a` flows into `b`", so `b` has to
//! accept whatever `a` holds. Open vertices act as type variables: the search
//! walks straight through them.

use std::collections::{HashSet, VecDeque};

use crate::ast::NodeId;

use super::error::Mismatch;
use super::ty::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(usize);

#[derive(Debug, Clone)]
struct Vertex {
    kind: Kind,
    node: Option<NodeId>,
    edges: Vec<VertexId>,
}

#[derive(Debug, Default)]
pub struct TypeGraph {
    vertices: Vec<Vertex>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex that belongs to no AST node.
    pub fn vertex(&mut self, kind: Kind) -> VertexId {
        self.push(kind, None)
    }

    /// Add the vertex for an AST node's type.
    pub fn node(&mut self, node: NodeId, kind: Kind) -> VertexId {
        self.push(kind, Some(node))
    }

    fn push(&mut self, kind: Kind, node: Option<NodeId>) -> VertexId {
        self.vertices.push(Vertex {
            kind,
            node,
            edges: vec![],
        });
        VertexId(self.vertices.len() - 1)
    }

    /// Record that the value at `lower` flows into `upper`.
    pub fn flow(&mut self, lower: VertexId, upper: VertexId) {
        self.vertices[lower.0].edges.push(upper);
    }

    pub fn kind(&self, vertex: VertexId) -> Kind {
        self.vertices[vertex.0].kind
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// From every concrete vertex, search forward through open vertices and
    /// report each concrete vertex reached whose kind differs.
    pub fn mismatches(&self) -> Vec<Mismatch> {
        let mut found = vec![];

        for (index, source) in self.vertices.iter().enumerate() {
            if source.kind.is_open() {
                continue;
            }

            let mut visited = HashSet::from([VertexId(index)]);
            let mut queue: VecDeque<VertexId> = source.edges.iter().copied().collect();

            while let Some(next) = queue.pop_front() {
                if !visited.insert(next) {
                    continue;
                }

                let target = &self.vertices[next.0];
                if target.kind.is_open() {
                    queue.extend(target.edges.iter().copied());
                } else if target.kind != source.kind {
                    found.push(Mismatch::new(source.kind, target.kind).at(target.node));
                }
            }
        }

        found
    }
}
