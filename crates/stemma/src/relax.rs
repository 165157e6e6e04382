//! Force relaxation of x coordinates within one generation.
//!
//! Each node feels pressure from its immediate row neighbors when they sit closer than the
//! node width, plus a weak pull toward its parents and children. The row order never
//! changes; a final placement sweep enforces the minimum spacing exactly.

use crate::graph::{NodeIx, Relations};
use crate::model::{LayoutOptions, Point};
use std::collections::BTreeMap;

/// Push away from `neighbor`, proportional to the overlap. Zero once they are `spacing` apart.
fn pressure(neighbor_x: f64, x: f64, spacing: f64) -> f64 {
    let difference = x - neighbor_x;
    let overlap = spacing - difference.abs();
    if overlap < 0.0 {
        return 0.0;
    }
    if difference < 0.0 { -overlap } else { overlap }
}

fn gravity(relative_x: f64, x: f64) -> f64 {
    relative_x - x
}

fn pass_count(options: &LayoutOptions, nodes: usize) -> usize {
    options.passes_per_node.saturating_mul(nodes)
}

/// Relaxes one generation, given in row order, then enforces spacing.
pub fn relax(
    graph: &Relations,
    nodes: &[NodeIx],
    positions: &mut [Point],
    options: &LayoutOptions,
) {
    let spacing = options.node_size.x;
    let passes = pass_count(options, nodes.len());
    if passes > 0 {
        let pull = options.gravity / passes as f64;
        for _ in 0..passes {
            for (i, &node) in nodes.iter().enumerate() {
                let x = positions[node.index()].x;
                let mut force = 0.0;
                if let Some(next) = nodes.get(i + 1) {
                    force += pressure(positions[next.index()].x, x, spacing);
                }
                if i > 0 {
                    force += pressure(positions[nodes[i - 1].index()].x, x, spacing);
                }
                for relative in graph.parents(node).iter().chain(graph.children(node)) {
                    force += pull * gravity(positions[relative.index()].x, x);
                }
                positions[node.index()].x += force;
            }
        }
    }
    enforce_placement(nodes, positions, spacing);
}

/// Walks the row left to right and pushes every node to at least `spacing` right of its
/// predecessor.
pub fn enforce_placement(nodes: &[NodeIx], positions: &mut [Point], spacing: f64) {
    let mut position_x = f64::NEG_INFINITY;
    for node in nodes {
        position_x += spacing;
        let x = &mut positions[node.index()].x;
        if *x < position_x {
            *x = position_x;
        } else {
            position_x = *x;
        }
    }
}

/// Runs `options.relaxation_sweeps` sweeps of [`relax`] over all generations, top to bottom.
pub fn relax_all(
    graph: &Relations,
    buckets: &BTreeMap<i32, Vec<NodeIx>>,
    positions: &mut [Point],
    options: &LayoutOptions,
) {
    for _ in 0..options.relaxation_sweeps {
        for nodes in buckets.values() {
            relax(graph, nodes, positions, options);
        }
    }
    tracing::debug!(
        sweeps = options.relaxation_sweeps,
        generations = buckets.len(),
        "relaxed generations"
    );
}
