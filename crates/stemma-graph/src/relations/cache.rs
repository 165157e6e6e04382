//! Relation caches used by [`Relations`](super::Relations).
//!
//! Each table covers the whole graph and is filled by one pass the first time any node is
//! queried. Nothing invalidates them: the underlying [`Dag`](crate::Dag) is immutable.

use crate::graph::NodeIx;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::cell::OnceCell;

/// Insertion-ordered neighbor set.
pub type AdjacencySet = IndexSet<NodeIx, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub(in crate::relations) struct RelationCache {
    pub(in crate::relations) parents: OnceCell<Vec<Vec<NodeIx>>>,
    pub(in crate::relations) first_level: OnceCell<Vec<AdjacencySet>>,
    pub(in crate::relations) second_level: OnceCell<Vec<AdjacencySet>>,
}
