//! Layout options, geometry primitives and the per-node decoration record.

use serde::{Deserialize, Serialize};

/// Footprint reserved for every node: `x` is the minimum horizontal spacing inside a
/// generation, `y` the distance between generations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    pub x: f64,
    pub y: f64,
}

impl Default for NodeSize {
    fn default() -> Self {
        Self { x: 100.0, y: 150.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub node_size: NodeSize,
    /// Full relaxation sweeps over all generations after alignment.
    pub relaxation_sweeps: usize,
    /// Relaxation passes per node of a generation (a generation of `n` nodes runs
    /// `passes_per_node * n` passes).
    pub passes_per_node: usize,
    /// Pull toward parents and children, divided by the number of passes.
    pub gravity: f64,
    /// Birth year used when a member's birth date has no recognizable year.
    pub default_birth_year: f64,
    /// Reject links that do not join a member node and a family node.
    pub require_alternation: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_size: NodeSize::default(),
            relaxation_sweeps: 8,
            passes_per_node: 10,
            gravity: 0.1,
            default_birth_year: 1980.0,
            require_alternation: false,
        }
    }
}

/// Layout decoration of one node. Each field is written by exactly one pipeline stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NodeLayout {
    pub generation: i32,
    pub position: Point,
    pub age: Option<f64>,
    pub partnership_group_ids: Vec<usize>,
    pub sibling_group_ids: Vec<usize>,
}
