//! Node identifiers.
//!
//! A [`NodeId`] names one node of a laid-out chart. It is a plain index into
//! the node arena that produced it, so it is only meaningful together with that
//! arena and never keeps a node alive.

use std::fmt;

/// Index of a node inside a chart hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps an arena index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}
