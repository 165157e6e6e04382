use stemma_graph::{Dag, Error};

#[test]
fn dag_sorts_and_deduplicates_node_ids() {
    let dag = Dag::new(&[("b", "f"), ("a", "f"), ("f", "c")]).unwrap();

    let ids: Vec<&str> = dag.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "f"]);
    assert_eq!(dag.node_count(), 4);
}

#[test]
fn dag_keeps_links_in_input_order() {
    let dag = Dag::new(&[("b", "f"), ("a", "f"), ("f", "c")]).unwrap();

    let links: Vec<(&str, &str)> = dag
        .links()
        .iter()
        .map(|l| (dag.id(l.source), dag.id(l.target)))
        .collect();
    assert_eq!(links, vec![("b", "f"), ("a", "f"), ("f", "c")]);
}

#[test]
fn dag_child_lists_follow_link_order() {
    let dag = Dag::new(&[("f", "z"), ("f", "a"), ("f", "m")]).unwrap();

    let f = dag.find("f").unwrap();
    let children: Vec<&str> = dag.children(f).iter().map(|&c| dag.id(c)).collect();
    assert_eq!(children, vec!["z", "a", "m"]);
    assert!(dag.children(dag.find("a").unwrap()).is_empty());
}

#[test]
fn dag_find_reports_unknown_ids() {
    let dag = Dag::new(&[("a", "b")]).unwrap();

    assert_eq!(
        dag.find("nope"),
        Err(Error::UnresolvedNode {
            id: "nope".to_string()
        })
    );
    assert!(dag.has_node("a"));
    assert!(!dag.has_node("nope"));
}

#[test]
fn dag_accepts_owned_id_pairs() {
    let links = vec![
        ("@I1@".to_string(), "[\"@I1@\",\"@I2@\"]".to_string()),
        ("@I2@".to_string(), "[\"@I1@\",\"@I2@\"]".to_string()),
    ];
    let dag = Dag::new(&links).unwrap();

    assert_eq!(dag.node_count(), 3);
    assert_eq!(dag.link_count(), 2);
}

#[test]
fn dag_node_count_matches_unique_ids() {
    let links = [
        ("a", "f1"),
        ("b", "f1"),
        ("f1", "c"),
        ("f1", "d"),
        ("c", "f2"),
        ("e", "f2"),
        ("f2", "g"),
        ("a", "f1"),
    ];
    let dag = Dag::new(&links).unwrap();

    let mut unique: Vec<&str> = links.iter().flat_map(|(v, w)| [*v, *w]).collect();
    unique.sort();
    unique.dedup();
    assert_eq!(dag.node_count(), unique.len());
    assert_eq!(dag.link_count(), links.len());
}
