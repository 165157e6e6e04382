//! Initial coordinates: ordering inside each generation and alignment toward relatives.
//!
//! Generations are processed top to bottom. Each one is sorted and evenly spaced three
//! times; after the first spacing nodes move under the mean of their parents, after the
//! second partners are pulled together. Only the resulting order survives the third spacing,
//! so these alignments decide order rather than final distances. Every generation is then
//! shifted so its midpoint lines up with the running center.

use crate::family::FamilyGraph;
use crate::graph::NodeIx;
use crate::grouping::Grouping;
use crate::model::{NodeSize, Point};
use std::cmp::Ordering;
use std::collections::BTreeMap;

struct Aligner<'a> {
    graph: &'a FamilyGraph,
    grouping: &'a Grouping,
    ages: &'a [Option<f64>],
    node_size: NodeSize,
    x: Vec<Option<f64>>,
    y: Vec<Option<f64>>,
}

fn cmp_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable insertion sort.
///
/// The row comparator only looks at x when both nodes have one, so it is not transitive when
/// a row mixes placed and unplaced nodes; `slice::sort_by` may panic on such comparators.
fn insertion_sort_by<F>(nodes: &mut [NodeIx], mut cmp: F)
where
    F: FnMut(NodeIx, NodeIx) -> Ordering,
{
    for i in 1..nodes.len() {
        let mut j = i;
        while j > 0 && cmp(nodes[j - 1], nodes[j]) == Ordering::Greater {
            nodes.swap(j - 1, j);
            j -= 1;
        }
    }
}

impl<'a> Aligner<'a> {
    fn age(&self, ix: NodeIx) -> Option<f64> {
        self.ages[ix.index()]
    }

    fn cmp_in_row(&self, a: NodeIx, b: NodeIx) -> Ordering {
        if let (Some(xa), Some(xb)) = (self.x[a.index()], self.x[b.index()]) {
            let by_x = xa.total_cmp(&xb);
            if by_x != Ordering::Equal {
                return by_x;
            }
        }
        cmp_optional(self.age(a), self.age(b))
    }

    fn align_generation(&mut self, generation: i32, nodes: &mut [NodeIx]) {
        for pass in 1..=3 {
            insertion_sort_by(nodes, |a, b| self.cmp_in_row(a, b));

            let y = f64::from(generation) * self.node_size.y;
            for (i, &node) in nodes.iter().enumerate() {
                self.x[node.index()] = Some(i as f64 * self.node_size.x);
                self.y[node.index()] = Some(y);
            }

            match pass {
                1 => {
                    for &node in nodes.iter() {
                        self.align_to_parents(node);
                    }
                }
                2 => {
                    for &node in nodes.iter() {
                        if self.graph.is_member(node) {
                            self.align_partners(node);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Moves `ix` to the mean x of its placed parents. Rootless nodes stay put.
    fn align_to_parents(&mut self, ix: NodeIx) {
        let placed: Vec<f64> = self
            .graph
            .parents(ix)
            .iter()
            .filter_map(|p| self.x[p.index()])
            .collect();
        if placed.is_empty() {
            return;
        }
        self.x[ix.index()] = Some(placed.iter().sum::<f64>() / placed.len() as f64);
    }

    /// Collapses the partner cluster of `ix` onto its lowest-ranked member, ranked by sibling
    /// count and then age (both ascending).
    fn align_partners(&mut self, ix: NodeIx) {
        let mut cluster = self.grouping.partner_cluster(ix).to_vec();
        if cluster.len() < 2 {
            return;
        }
        cluster.sort_by(|&a, &b| {
            self.grouping
                .sibling_count(a)
                .cmp(&self.grouping.sibling_count(b))
                .then_with(|| cmp_optional(self.age(a), self.age(b)))
        });
        let lowest = cluster[0];
        let Some(anchor) = self.x[lowest.index()] else {
            return;
        };
        for &partner in &cluster[1..] {
            self.x[partner.index()] = Some(anchor + 1.0);
        }
    }

    fn recenter(&mut self, nodes: &[NodeIx], center: f64) -> f64 {
        let (min, max) = nodes
            .iter()
            .filter_map(|n| self.x[n.index()])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        if min > max {
            return center;
        }
        let own_center = (min + max) / 2.0;
        let offset = center - own_center;
        for node in nodes {
            if let Some(x) = self.x[node.index()].as_mut() {
                *x += offset;
            }
        }
        own_center + offset
    }
}

/// Orders every generation bucket in place and returns the aligned position of every node.
///
/// `buckets` must cover every node of `graph`.
pub fn align_all(
    graph: &FamilyGraph,
    buckets: &mut BTreeMap<i32, Vec<NodeIx>>,
    grouping: &Grouping,
    ages: &[Option<f64>],
    node_size: NodeSize,
) -> Vec<Point> {
    let mut aligner = Aligner {
        graph,
        grouping,
        ages,
        node_size,
        x: vec![None; graph.node_count()],
        y: vec![None; graph.node_count()],
    };

    let mut center = 0.0;
    for (&generation, nodes) in buckets.iter_mut() {
        aligner.align_generation(generation, nodes);
        center = aligner.recenter(nodes, center);
    }

    tracing::debug!(generations = buckets.len(), "aligned generations");
    aligner
        .x
        .iter()
        .zip(&aligner.y)
        .map(|(x, y)| Point {
            x: x.unwrap_or_default(),
            y: y.unwrap_or_default(),
        })
        .collect()
}
