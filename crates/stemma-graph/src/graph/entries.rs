//! Node and link entries stored by [`Dag`](super::Dag).

use std::fmt;

/// Index of a node in the sorted-id node table of a [`Dag`](super::Dag).
///
/// Indices are only meaningful for the graph that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIx(usize);

impl NodeIx {
    pub(in crate::graph) fn new(ix: usize) -> Self {
        Self(ix)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(in crate::graph) id: String,
    pub(in crate::graph) children: Vec<NodeIx>,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Link targets of this node, in link order.
    pub fn children(&self) -> &[NodeIx] {
        &self.children
    }
}

/// A directed `source -> target` link ("is parent of" / "is member of union").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub source: NodeIx,
    pub target: NodeIx,
}
