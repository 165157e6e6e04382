//! Generation assignment by layered BFS from every root.
//!
//! Each root floods outward over the undirected parent/child relation: parents land one
//! generation above, children one below. A node keeps the first generation it is given, so
//! the order of roots (node order) and of each node's parents and children (link order)
//! decides the result when waves meet.
//!
//! A parent without parents of its own is seated right after its partner in the row. When it
//! has no partner, or the partner is not in the row yet, it goes to the end of the row rather
//! than the front, so rows already discovered keep their order.

use crate::error::{Error, Result};
use crate::graph::{NodeIx, Relations};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generations {
    of_node: Vec<Option<i32>>,
    buckets: BTreeMap<i32, Vec<NodeIx>>,
}

impl Generations {
    fn with_node_count(count: usize) -> Self {
        Self {
            of_node: vec![None; count],
            buckets: BTreeMap::new(),
        }
    }

    pub fn generation(&self, ix: NodeIx) -> Option<i32> {
        self.of_node[ix.index()]
    }

    /// Nodes per generation, ascending. Order inside a bucket is discovery order.
    pub fn buckets(&self) -> &BTreeMap<i32, Vec<NodeIx>> {
        &self.buckets
    }

    pub fn bucket(&self, generation: i32) -> Option<&[NodeIx]> {
        self.buckets.get(&generation).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn into_buckets(self) -> BTreeMap<i32, Vec<NodeIx>> {
        self.buckets
    }

    /// Returns `false` if `ix` already had a generation.
    fn assign(
        &mut self,
        graph: &Relations,
        ix: NodeIx,
        generation: i32,
        is_partner: bool,
    ) -> bool {
        if self.of_node[ix.index()].is_some() {
            return false;
        }
        self.of_node[ix.index()] = Some(generation);

        let bucket = self.buckets.entry(generation).or_default();
        let slot = is_partner
            .then(|| partner_of(graph, ix))
            .flatten()
            .and_then(|partner| bucket.iter().position(|&n| n == partner));
        match slot {
            Some(pos) => bucket.insert(pos + 1, ix),
            None => bucket.push(ix),
        }
        true
    }
}

/// The other parent of the first family node `ix` feeds into.
fn partner_of(graph: &Relations, ix: NodeIx) -> Option<NodeIx> {
    let &family = graph.children(ix).first()?;
    match graph.parents(family) {
        [first, rest @ ..] if *first == ix => rest.first().copied(),
        [first, ..] => Some(*first),
        [] => None,
    }
}

pub fn assign_generations(graph: &Relations) -> Result<Generations> {
    let mut generations = Generations::with_node_count(graph.node_count());

    for root in graph.roots() {
        generations.assign(graph, root, 0, false);
        let mut border = vec![root];
        while !border.is_empty() {
            let mut next: Vec<NodeIx> = Vec::new();
            for &node in &border {
                let Some(generation) = generations.generation(node) else {
                    continue;
                };
                for &parent in graph.parents(node) {
                    // A parent without parents of its own married into the family; seat it
                    // next to its partner rather than at the end of the row.
                    let is_partner = graph.parents(parent).is_empty();
                    if generations.assign(graph, parent, generation - 1, is_partner) {
                        next.push(parent);
                    }
                }
                for &child in graph.children(node) {
                    if generations.assign(graph, child, generation + 1, false) {
                        next.push(child);
                    }
                }
            }
            border = next;
        }
    }

    if let Some(ix) = graph.node_ixs().find(|&ix| generations.generation(ix).is_none()) {
        tracing::warn!(node = graph.id(ix), "node not reachable from any root");
        return Err(Error::MalformedGraph {
            reason: format!("node {} is not reachable from any root", graph.id(ix)),
        });
    }

    tracing::debug!(
        generations = generations.len(),
        nodes = graph.node_count(),
        "assigned generations"
    );
    Ok(generations)
}
