//! Derived relations: parents, first-level and second-level adjacency.
//!
//! The link list only records child lists. Everything else is derived here on first use and
//! memoized for the lifetime of the [`Relations`] value.

use crate::error::{Error, Result};
use crate::graph::{Dag, Link, Node, NodeIx};

mod cache;

pub use cache::AdjacencySet;
use cache::RelationCache;

#[derive(Debug, Clone)]
pub struct Relations {
    dag: Dag,
    cache: RelationCache,
}

impl Relations {
    /// Builds the graph for `links` and wraps it. An empty link list is rejected.
    pub fn from_links<S: AsRef<str>>(links: &[(S, S)]) -> Result<Self> {
        if links.is_empty() {
            return Err(Error::MissingLinks);
        }
        Ok(Self::new(Dag::new(links)?))
    }

    pub fn new(dag: Dag) -> Self {
        Self {
            dag,
            cache: RelationCache::default(),
        }
    }

    pub fn dag(&self) -> &Dag {
        &self.dag
    }

    pub fn find(&self, id: &str) -> Result<NodeIx> {
        self.dag.find(id)
    }

    pub fn id(&self, ix: NodeIx) -> &str {
        self.dag.id(ix)
    }

    pub fn nodes(&self) -> &[Node] {
        self.dag.nodes()
    }

    pub fn node_ixs(&self) -> impl Iterator<Item = NodeIx> + '_ {
        self.dag.node_ixs()
    }

    pub fn node_count(&self) -> usize {
        self.dag.node_count()
    }

    pub fn links(&self) -> &[Link] {
        self.dag.links()
    }

    pub fn children(&self, ix: NodeIx) -> &[NodeIx] {
        self.dag.children(ix)
    }

    /// Sources of all links targeting `ix`, in link order.
    pub fn parents(&self, ix: NodeIx) -> &[NodeIx] {
        &self.parent_table()[ix.index()]
    }

    /// Direct neighbors of `ix`, in either link direction.
    pub fn first_level_adjacency(&self, ix: NodeIx) -> &AdjacencySet {
        &self.first_level_table()[ix.index()]
    }

    /// Neighbors of the neighbors of `ix` (including its direct neighbors and `ix` itself).
    ///
    /// For a member node this reaches through its family nodes to partners, parents, children
    /// and siblings.
    pub fn second_level_adjacency(&self, ix: NodeIx) -> &AdjacencySet {
        &self.second_level_table()[ix.index()]
    }

    /// Nodes without parents, in node order.
    pub fn roots(&self) -> Vec<NodeIx> {
        self.node_ixs()
            .filter(|&ix| self.parents(ix).is_empty())
            .collect()
    }

    fn parent_table(&self) -> &Vec<Vec<NodeIx>> {
        self.cache.parents.get_or_init(|| {
            tracing::trace!(nodes = self.dag.node_count(), "building parent cache");
            let mut parents: Vec<Vec<NodeIx>> = vec![Vec::new(); self.dag.node_count()];
            for link in self.dag.links() {
                parents[link.target.index()].push(link.source);
            }
            parents
        })
    }

    fn first_level_table(&self) -> &Vec<AdjacencySet> {
        self.cache.first_level.get_or_init(|| {
            tracing::trace!(nodes = self.dag.node_count(), "building first-level adjacency");
            let mut adjacency: Vec<AdjacencySet> =
                vec![AdjacencySet::default(); self.dag.node_count()];
            for link in self.dag.links() {
                adjacency[link.source.index()].insert(link.target);
                adjacency[link.target.index()].insert(link.source);
            }
            adjacency
        })
    }

    fn second_level_table(&self) -> &Vec<AdjacencySet> {
        self.cache.second_level.get_or_init(|| {
            tracing::trace!(nodes = self.dag.node_count(), "building second-level adjacency");
            let first = self.first_level_table();
            let mut adjacency: Vec<AdjacencySet> =
                vec![AdjacencySet::default(); self.dag.node_count()];
            let mut merge = |from: NodeIx, to: NodeIx| {
                adjacency[to.index()].extend(first[from.index()].iter().copied());
            };
            for link in self.dag.links() {
                merge(link.source, link.source);
                merge(link.target, link.target);
                merge(link.source, link.target);
                merge(link.target, link.source);
            }
            adjacency
        })
    }
}
