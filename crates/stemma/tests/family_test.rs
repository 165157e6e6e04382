use serde_json::json;
use stemma::{FamilyData, FamilyGraph, MemberRecord, NodeKind};

#[test]
fn member_record_reads_german_and_english_keys() {
    let german = MemberRecord::from_value(json!({
        "Name": "Anna",
        "Zweitnamen": "Maria",
        "Geburtstag": "03.04.1901",
        "Todestag": "1970",
        "Beruf": "Lehrerin",
    }))
    .unwrap();
    let english = MemberRecord::from_value(json!({
        "name": "Anna",
        "second_names": "Maria",
        "birth_date": "03.04.1901",
        "death_place": "Bremen",
    }))
    .unwrap();

    for record in [&german, &english] {
        assert_eq!(record.name(), "Anna");
        assert_eq!(record.second_names(), "Maria");
        assert_eq!(record.birth_date(), "03.04.1901");
    }
    assert_eq!(german.death_date(), "1970");
    assert_eq!(german.occupation(), "Lehrerin");
    assert_eq!(english.death_place(), "Bremen");
}

#[test]
fn member_record_falls_back_on_missing_or_empty_fields() {
    let record = MemberRecord::from_value(json!({ "Name": "", "name": "Bert", "Geburtstag": "" }))
        .unwrap();

    assert_eq!(record.name(), "Bert");
    assert_eq!(record.birth_date(), "?");
    assert_eq!(record.death_date(), "");
    assert_eq!(record.image_path(), "");

    let empty = MemberRecord::default();
    assert_eq!(empty.name(), "?");
    assert_eq!(empty.birth_date(), "?");
}

#[test]
fn member_record_keeps_unknown_fields() {
    let mut record = MemberRecord::default();
    record.insert("name", "Carl").insert("custom", 42);

    assert_eq!(record.name(), "Carl");
    assert_eq!(record.get("custom"), Some(&json!(42)));
    assert_eq!(record.fields().len(), 2);
    assert!(MemberRecord::from_value(json!(["not", "an", "object"])).is_none());
}

#[test]
fn family_data_deserializes_from_json() {
    let data: FamilyData = serde_json::from_value(json!({
        "members": {
            "A": { "name": "Anna", "birth_date": "1950" },
            "B": { "Name": "Bert" },
            "C": {}
        },
        "links": [["A", "F1"], ["B", "F1"], ["F1", "C"]]
    }))
    .unwrap();

    assert_eq!(data.members.len(), 3);
    assert_eq!(data.links[2], ("F1".to_string(), "C".to_string()));

    let g = FamilyGraph::from_data(&data).unwrap();
    let a = g.find("A").unwrap();
    let f1 = g.find("F1").unwrap();
    assert!(g.is_member(a));
    assert!(!g.is_member(f1));
    assert_eq!(g.kind(f1), &NodeKind::Family);
    assert_eq!(g.member(a).map(MemberRecord::name), Some("Anna"));
    assert!(g.member(f1).is_none());
}

#[test]
fn family_data_members_are_optional() {
    let data: FamilyData = serde_json::from_str(r#"{"links": [["A", "B"]]}"#).unwrap();
    let g = FamilyGraph::from_data(&data).unwrap();

    assert!(data.members.is_empty());
    assert!(g.node_ixs().all(|ix| !g.is_member(ix)));
}

#[test]
fn member_records_for_unknown_ids_are_ignored() {
    let data: FamilyData = serde_json::from_value(json!({
        "members": { "A": {}, "Ghost": { "name": "nobody" } },
        "links": [["A", "F1"]]
    }))
    .unwrap();
    let g = FamilyGraph::from_data(&data).unwrap();

    assert_eq!(g.node_count(), 2);
    assert!(g.find("Ghost").is_err());
}

#[test]
fn family_graph_exposes_relations() {
    let data: FamilyData = serde_json::from_value(json!({
        "members": { "A": {}, "B": {}, "C": {} },
        "links": [["A", "F1"], ["B", "F1"], ["F1", "C"]]
    }))
    .unwrap();
    let g = FamilyGraph::from_data(&data).unwrap();
    let ix = |id: &str| g.find(id).unwrap();

    assert_eq!(g.parents(ix("F1")), &[ix("A"), ix("B")]);
    assert_eq!(g.children(ix("F1")), &[ix("C")]);
    assert_eq!(g.roots(), vec![ix("A"), ix("B")]);
    assert!(g.second_level_adjacency(ix("A")).contains(&ix("B")));
}

#[test]
fn member_record_renders_numeric_birth_dates() {
    let record = MemberRecord::from_value(json!({ "birth_date": 1950 })).unwrap();
    assert_eq!(record.birth_date(), "1950");

    let record = MemberRecord::from_value(json!({ "birth_date": null })).unwrap();
    assert_eq!(record.birth_date(), "?");
}
