use std::collections::BTreeMap;
use stemma::graph::Relations;
use stemma::validate::{check, check_acyclic, check_alternation};
use stemma::{Error, FamilyGraph, LayoutOptions, MemberRecord};

fn family(links: &[(&str, &str)], members: &[&str]) -> FamilyGraph {
    let members: BTreeMap<String, MemberRecord> = members
        .iter()
        .map(|id| (id.to_string(), MemberRecord::default()))
        .collect();
    FamilyGraph::from_links(links, &members).unwrap()
}

fn reason(err: Error) -> String {
    match err {
        Error::MalformedGraph { reason } => reason,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn acyclic_accepts_dags_with_shared_descendants() {
    let r = Relations::from_links(&[
        ("A", "F1"),
        ("B", "F1"),
        ("F1", "C"),
        ("C", "F2"),
        ("D", "F2"),
        ("F2", "E"),
    ])
    .unwrap();

    assert_eq!(check_acyclic(&r), Ok(()));
}

#[test]
fn acyclic_rejects_a_cycle_below_a_root() {
    let r = Relations::from_links(&[("R", "A"), ("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")])
        .unwrap();

    let reason = reason(check_acyclic(&r).unwrap_err());
    assert!(reason.starts_with("4 nodes"), "{reason}");
    assert!(reason.contains("first: A"), "{reason}");
}

#[test]
fn acyclic_rejects_a_graph_without_roots() {
    let r = Relations::from_links(&[("A", "B"), ("B", "A")]).unwrap();

    assert!(matches!(
        check_acyclic(&r),
        Err(Error::MalformedGraph { .. })
    ));
}

#[test]
fn alternation_names_the_offending_link() {
    let g = family(&[("A", "F1"), ("F1", "C"), ("C", "D")], &["A", "C", "D"]);

    let reason = reason(check_alternation(&g).unwrap_err());
    assert_eq!(reason, "link C -> D joins two nodes of the same kind");
}

#[test]
fn alternation_rejects_family_to_family_links() {
    let g = family(&[("A", "F1"), ("F1", "F2")], &["A"]);

    assert!(check_alternation(&g).is_err());
}

#[test]
fn check_only_enforces_alternation_on_request() {
    let g = family(&[("A", "B")], &[]);
    let strict = LayoutOptions {
        require_alternation: true,
        ..Default::default()
    };

    assert_eq!(check(&g, &LayoutOptions::default()), Ok(()));
    assert!(check(&g, &strict).is_err());

    let alternating = family(&[("A", "F1"), ("B", "F1"), ("F1", "C")], &["A", "B", "C"]);
    assert_eq!(check(&alternating, &strict), Ok(()));
}
