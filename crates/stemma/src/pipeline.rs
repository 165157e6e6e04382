//! The layout pipeline and its result.

use crate::error::Result;
use crate::family::FamilyGraph;
use crate::graph::NodeIx;
use crate::grouping::{Group, Grouping};
use crate::model::{LayoutOptions, NodeLayout, Point};
use crate::{age, align, generation, grouping, relax, validate};
use std::collections::BTreeMap;

/// Runs validation, generation assignment, grouping, age inference, alignment and relaxation
/// on `graph`.
///
/// The graph itself is not modified; all decoration lives in the returned [`FamilyLayout`], so
/// laying out the same graph twice gives identical results.
pub fn layout<'g>(graph: &'g FamilyGraph, options: &LayoutOptions) -> Result<FamilyLayout<'g>> {
    validate::check(graph, options)?;

    let generations = generation::assign_generations(graph.relations())?;
    let grouping = grouping::assign_grouping(graph);
    let ages = age::assign_ages(graph, options.default_birth_year);

    let of_node: Vec<i32> = graph
        .node_ixs()
        .map(|ix| generations.generation(ix).unwrap_or_default())
        .collect();
    let mut buckets = generations.into_buckets();
    let mut positions = align::align_all(graph, &mut buckets, &grouping, &ages, options.node_size);
    relax::relax_all(graph.relations(), &buckets, &mut positions, options);

    let nodes = graph
        .node_ixs()
        .map(|ix| NodeLayout {
            generation: of_node[ix.index()],
            position: positions[ix.index()],
            age: ages[ix.index()],
            partnership_group_ids: grouping.partnership_group_ids(ix).to_vec(),
            sibling_group_ids: grouping.sibling_group_ids(ix).to_vec(),
        })
        .collect();

    Ok(FamilyLayout {
        graph,
        nodes,
        buckets,
        grouping,
    })
}

#[derive(Debug, Clone)]
pub struct FamilyLayout<'g> {
    graph: &'g FamilyGraph,
    nodes: Vec<NodeLayout>,
    buckets: BTreeMap<i32, Vec<NodeIx>>,
    grouping: Grouping,
}

impl<'g> FamilyLayout<'g> {
    pub fn graph(&self) -> &'g FamilyGraph {
        self.graph
    }

    pub fn node(&self, ix: NodeIx) -> &NodeLayout {
        &self.nodes[ix.index()]
    }

    pub fn nodes(&self) -> &[NodeLayout] {
        &self.nodes
    }

    pub fn generation(&self, ix: NodeIx) -> i32 {
        self.nodes[ix.index()].generation
    }

    pub fn x(&self, ix: NodeIx) -> f64 {
        self.nodes[ix.index()].position.x
    }

    pub fn y(&self, ix: NodeIx) -> f64 {
        self.nodes[ix.index()].position.y
    }

    pub fn position(&self, ix: NodeIx) -> Point {
        self.nodes[ix.index()].position
    }

    pub fn age(&self, ix: NodeIx) -> Option<f64> {
        self.nodes[ix.index()].age
    }

    pub fn partners(&self, ix: NodeIx) -> Vec<NodeIx> {
        self.grouping.partners(ix)
    }

    pub fn siblings(&self, ix: NodeIx) -> &[NodeIx] {
        self.grouping.siblings(ix)
    }

    pub fn sibling_count(&self, ix: NodeIx) -> usize {
        self.grouping.sibling_count(ix)
    }

    pub fn partnership_group_ids(&self, ix: NodeIx) -> &[usize] {
        &self.nodes[ix.index()].partnership_group_ids
    }

    pub fn sibling_group_ids(&self, ix: NodeIx) -> &[usize] {
        &self.nodes[ix.index()].sibling_group_ids
    }

    pub fn partnership_groups(&self) -> &[Group] {
        self.grouping.partnership_groups()
    }

    pub fn sibling_groups(&self) -> &[Group] {
        self.grouping.sibling_groups()
    }

    /// Final row order of every generation, ascending by generation.
    pub fn generations(&self) -> &BTreeMap<i32, Vec<NodeIx>> {
        &self.buckets
    }

    /// Positions keyed by node id.
    pub fn positions(&self) -> BTreeMap<String, Point> {
        self.graph
            .node_ixs()
            .map(|ix| (self.graph.id(ix).to_string(), self.position(ix)))
            .collect()
    }
}
