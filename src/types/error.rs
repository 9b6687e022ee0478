//! # Type Mismatch Definitions
//!
//! The checker never fails: every inconsistency it finds becomes a
//! [`Mismatch`] value, and the caller decides what to do with the list.
//!
//! ## Example Messages
//!
//! ```text
//! Expected Undefined got Number
//! Expected Number got Undefined
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::types::graph`] - Reachability search that produces mismatches
//! - [`crate::types::infer`] - Builds the graph being searched

use std::fmt;

use crate::ast::NodeId;

use super::ty::Kind;

/// A value of one kind can reach a place that requires another.
///
/// # Fields
///
/// * `expected` - The kind of the vertex the search started from
/// * `found` - The kind of the concrete vertex it reached
/// * `node` - The AST node owning the reached vertex, when there is one
///   (standard-library parameters and local slots have none)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: Kind,
    pub found: Kind,
    pub node: Option<NodeId>,
}

impl Mismatch {
    /// Create a mismatch between two concrete kinds.
    ///
    /// # Arguments
    ///
    /// * `expected` - The kind the value started out as
    /// * `found` - The kind it was required to be
    pub fn new(expected: Kind, found: Kind) -> Self {
        Self {
            expected,
            found,
            node: None,
        }
    }

    /// Attach the AST node where the mismatch surfaced (chainable).
    pub fn at(mut self, node: Option<NodeId>) -> Self {
        self.node = node;
        self
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expected {} got {}", self.expected, self.found)
    }
}

impl std::error::Error for Mismatch {}
