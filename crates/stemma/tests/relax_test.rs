use stemma::graph::{NodeIx, Relations};
use stemma::relax::{enforce_placement, relax};
use stemma::{LayoutOptions, Point};

fn relations(links: &[(&str, &str)]) -> Relations {
    Relations::from_links(links).unwrap()
}

fn place(r: &Relations, xs: &[(&str, f64)]) -> Vec<Point> {
    let mut positions = vec![Point::default(); r.node_count()];
    for (id, x) in xs {
        positions[r.find(id).unwrap().index()].x = *x;
    }
    positions
}

fn row(r: &Relations, ids: &[&str]) -> Vec<NodeIx> {
    ids.iter().map(|id| r.find(id).unwrap()).collect()
}

fn assert_spaced(nodes: &[NodeIx], positions: &[Point], spacing: f64) {
    for pair in nodes.windows(2) {
        let (left, right) = (positions[pair[0].index()].x, positions[pair[1].index()].x);
        assert!(
            right >= left + spacing,
            "{left} and {right} are closer than {spacing}"
        );
    }
}

#[test]
fn enforce_placement_pushes_overlapping_nodes_right() {
    let r = relations(&[("F", "A"), ("F", "B"), ("F", "C")]);
    let nodes = row(&r, &["A", "B", "C"]);
    let mut positions = place(&r, &[("A", 0.0), ("B", 10.0), ("C", 500.0)]);

    enforce_placement(&nodes, &mut positions, 100.0);

    assert_eq!(positions[nodes[0].index()].x, 0.0);
    assert_eq!(positions[nodes[1].index()].x, 100.0);
    assert_eq!(positions[nodes[2].index()].x, 500.0);
}

#[test]
fn enforce_placement_leaves_spaced_rows_alone() {
    let r = relations(&[("F", "A"), ("F", "B")]);
    let nodes = row(&r, &["A", "B"]);
    let mut positions = place(&r, &[("A", -75.5), ("B", 30.0)]);

    enforce_placement(&nodes, &mut positions, 100.0);

    assert_eq!(positions[nodes[0].index()].x, -75.5);
    assert_eq!(positions[nodes[1].index()].x, 30.0);
}

#[test]
fn relax_separates_stacked_nodes() {
    let r = relations(&[("F", "A"), ("F", "B"), ("F", "C"), ("F", "D")]);
    let nodes = row(&r, &["A", "B", "C", "D"]);
    let mut positions = place(&r, &[("A", 0.0), ("B", 1.0), ("C", 2.0), ("D", 3.0)]);
    let options = LayoutOptions::default();

    relax(&r, &nodes, &mut positions, &options);

    assert_spaced(&nodes, &positions, options.node_size.x);
}

#[test]
fn relax_pulls_a_lone_child_toward_its_parent() {
    let r = relations(&[("P", "F"), ("F", "C")]);
    let nodes = row(&r, &["C"]);
    let mut positions = place(&r, &[("F", 400.0), ("C", 0.0)]);

    relax(&r, &nodes, &mut positions, &LayoutOptions::default());

    let c = positions[r.find("C").unwrap().index()].x;
    assert!(c > 0.0 && c < 400.0, "child at {c}");
}

#[test]
fn relax_keeps_row_order() {
    let r = relations(&[("F", "A"), ("F", "B"), ("F", "C")]);
    let nodes = row(&r, &["A", "B", "C"]);
    let mut positions = place(&r, &[("A", -50.0), ("B", 0.0), ("C", 50.0)]);

    relax(&r, &nodes, &mut positions, &LayoutOptions::default());

    let xs: Vec<f64> = nodes.iter().map(|n| positions[n.index()].x).collect();
    assert!(xs[0] < xs[1] && xs[1] < xs[2], "{xs:?}");
    assert_spaced(&nodes, &positions, 100.0);
}
