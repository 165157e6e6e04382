//! Partnership and sibling groups.
//!
//! Every family node induces one partnership group (its parents) and one sibling group (its
//! children). Group ids are indices into the respective group list, allocated in node order.

use crate::family::FamilyGraph;
use crate::graph::NodeIx;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: usize,
    /// The family node the group was derived from.
    pub family: NodeIx,
    pub nodes: Vec<NodeIx>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    partnerships: Vec<Group>,
    sibling_groups: Vec<Group>,
    partnership_ids: Vec<Vec<usize>>,
    sibling_ids: Vec<Vec<usize>>,
    clusters: Vec<Vec<NodeIx>>,
    siblings: Vec<Vec<NodeIx>>,
}

impl Grouping {
    pub fn partnership_groups(&self) -> &[Group] {
        &self.partnerships
    }

    pub fn sibling_groups(&self) -> &[Group] {
        &self.sibling_groups
    }

    pub fn partnership_group_ids(&self, ix: NodeIx) -> &[usize] {
        &self.partnership_ids[ix.index()]
    }

    pub fn sibling_group_ids(&self, ix: NodeIx) -> &[usize] {
        &self.sibling_ids[ix.index()]
    }

    /// `ix` together with everyone it shares a partnership group with, in group order.
    /// Empty when `ix` is not a parent of any family node.
    pub fn partner_cluster(&self, ix: NodeIx) -> &[NodeIx] {
        &self.clusters[ix.index()]
    }

    /// Everyone `ix` shares a partnership group with, excluding `ix`.
    pub fn partners(&self, ix: NodeIx) -> Vec<NodeIx> {
        self.clusters[ix.index()]
            .iter()
            .copied()
            .filter(|&n| n != ix)
            .collect()
    }

    /// Members of all sibling groups of `ix`, including `ix` itself.
    pub fn siblings(&self, ix: NodeIx) -> &[NodeIx] {
        &self.siblings[ix.index()]
    }

    /// Zero for nodes without a parent family (founding roots).
    pub fn sibling_count(&self, ix: NodeIx) -> usize {
        self.siblings[ix.index()].len()
    }
}

fn flatten(groups: &[Group], ids: &[usize]) -> Vec<NodeIx> {
    let mut out: IndexSet<NodeIx, FxBuildHasher> = IndexSet::default();
    for &id in ids {
        out.extend(groups[id].nodes.iter().copied());
    }
    out.into_iter().collect()
}

pub fn assign_grouping(graph: &FamilyGraph) -> Grouping {
    let count = graph.node_count();
    let mut partnerships: Vec<Group> = Vec::new();
    let mut sibling_groups: Vec<Group> = Vec::new();
    let mut partnership_ids: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut sibling_ids: Vec<Vec<usize>> = vec![Vec::new(); count];

    for family in graph.node_ixs().filter(|&ix| !graph.is_member(ix)) {
        let id = partnerships.len();
        let parents = graph.parents(family).to_vec();
        for &parent in &parents {
            partnership_ids[parent.index()].push(id);
        }
        partnerships.push(Group {
            id,
            family,
            nodes: parents,
        });

        let id = sibling_groups.len();
        let children = graph.children(family).to_vec();
        for &child in &children {
            sibling_ids[child.index()].push(id);
        }
        sibling_groups.push(Group {
            id,
            family,
            nodes: children,
        });
    }

    let clusters = partnership_ids
        .iter()
        .map(|ids| flatten(&partnerships, ids))
        .collect();
    let siblings = sibling_ids
        .iter()
        .map(|ids| flatten(&sibling_groups, ids))
        .collect();

    tracing::debug!(
        partnerships = partnerships.len(),
        sibling_groups = sibling_groups.len(),
        "assigned grouping"
    );
    Grouping {
        partnerships,
        sibling_groups,
        partnership_ids,
        sibling_ids,
        clusters,
        siblings,
    }
}
