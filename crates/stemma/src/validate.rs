//! Graph preconditions checked before layout.
//!
//! Generation assignment assumes an acyclic graph in which every node descends from a root.
//! On a cycle the layering is meaningless, so such graphs are rejected up front.

use crate::error::{Error, Result};
use crate::family::FamilyGraph;
use crate::graph::Relations;
use crate::model::LayoutOptions;
use std::collections::VecDeque;

pub fn check(graph: &FamilyGraph, options: &LayoutOptions) -> Result<()> {
    check_acyclic(graph.relations())?;
    if options.require_alternation {
        check_alternation(graph)?;
    }
    Ok(())
}

/// Kahn's algorithm: a DAG can be consumed completely starting from its roots.
pub fn check_acyclic(graph: &Relations) -> Result<()> {
    let mut indegree: Vec<usize> = graph.node_ixs().map(|ix| graph.parents(ix).len()).collect();
    let mut queue: VecDeque<_> = graph.roots().into_iter().collect();
    let mut consumed = 0usize;

    while let Some(v) = queue.pop_front() {
        consumed += 1;
        for &w in graph.children(v) {
            let d = &mut indegree[w.index()];
            *d = d.saturating_sub(1);
            if *d == 0 {
                queue.push_back(w);
            }
        }
    }

    if consumed == graph.node_count() {
        return Ok(());
    }
    let stuck = graph
        .node_ixs()
        .find(|ix| indegree[ix.index()] > 0)
        .map(|ix| graph.id(ix).to_string())
        .unwrap_or_default();
    tracing::warn!(node = %stuck, "graph contains a cycle");
    Err(Error::MalformedGraph {
        reason: format!(
            "{} nodes lie on or below a cycle (first: {stuck})",
            graph.node_count() - consumed
        ),
    })
}

/// Every link must join a member node and a family node.
pub fn check_alternation(graph: &FamilyGraph) -> Result<()> {
    for link in graph.links() {
        if graph.is_member(link.source) == graph.is_member(link.target) {
            let (source, target) = (graph.id(link.source), graph.id(link.target));
            tracing::warn!(source, target, "link does not alternate member and family nodes");
            return Err(Error::MalformedGraph {
                reason: format!("link {source} -> {target} joins two nodes of the same kind"),
            });
        }
    }
    Ok(())
}
