//! Member/family typing on top of [`Relations`].
//!
//! Family data arrives as a map of member records keyed by node id plus the link list. A node
//! with a record is a member (a person); every other node is a family node (a union joining
//! parents to children).

use crate::error::Result;
use crate::graph::{AdjacencySet, Link, Node, NodeIx, Relations};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Input record attached to a member node. The layout only reads the birth date; the other
/// accessors serve renderers and editors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberRecord(Map<String, Value>);

impl MemberRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns `None` unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn lookup(&self, keys: &[&str], skip_empty: bool) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.0.get(*key).and_then(Value::as_str))
            .find(|value| !(skip_empty && value.is_empty()))
    }

    pub fn name(&self) -> &str {
        self.lookup(&["Name", "name"], true).unwrap_or("?")
    }

    pub fn second_names(&self) -> &str {
        self.lookup(&["Zweitnamen", "second_names"], true).unwrap_or("")
    }

    /// Birth date text. A bare number such as `{"birth_date": 1950}` reads as its decimal
    /// form, so the year heuristic still finds it.
    pub fn birth_date(&self) -> Cow<'_, str> {
        ["Geburtstag", "birth_date"]
            .iter()
            .find_map(|key| match self.0.get(*key)? {
                Value::String(text) if !text.is_empty() => Some(Cow::Borrowed(text.as_str())),
                Value::Number(n) => Some(Cow::Owned(n.to_string())),
                _ => None,
            })
            .unwrap_or(Cow::Borrowed("?"))
    }

    pub fn death_date(&self) -> &str {
        self.lookup(&["Todestag", "death_date"], false).unwrap_or("")
    }

    pub fn birth_place(&self) -> &str {
        self.lookup(&["Geburtsort", "birth_place"], true).unwrap_or("")
    }

    pub fn death_place(&self) -> &str {
        self.lookup(&["Todesort", "death_place"], false).unwrap_or("")
    }

    pub fn marriage(&self) -> &str {
        self.lookup(&["Hochzeit", "marriage"], false).unwrap_or("")
    }

    pub fn occupation(&self) -> &str {
        self.lookup(&["Beruf", "occupation"], false).unwrap_or("")
    }

    pub fn note(&self) -> &str {
        self.lookup(&["Notiz", "note"], false).unwrap_or("")
    }

    pub fn image_path(&self) -> &str {
        self.lookup(&["image_path"], false).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Member(MemberRecord),
    Family,
}

impl NodeKind {
    pub fn is_member(&self) -> bool {
        matches!(self, NodeKind::Member(_))
    }
}

/// Serialized family document: `{"members": {id: {...}}, "links": [[source, target], ...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilyData {
    #[serde(default)]
    pub members: BTreeMap<String, MemberRecord>,
    pub links: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct FamilyGraph {
    relations: Relations,
    kinds: Vec<NodeKind>,
}

impl FamilyGraph {
    pub fn new(relations: Relations, members: &BTreeMap<String, MemberRecord>) -> Self {
        let kinds = relations
            .nodes()
            .iter()
            .map(|node| match members.get(node.id()) {
                Some(record) => NodeKind::Member(record.clone()),
                None => NodeKind::Family,
            })
            .collect();
        Self { relations, kinds }
    }

    pub fn from_links<S: AsRef<str>>(
        links: &[(S, S)],
        members: &BTreeMap<String, MemberRecord>,
    ) -> Result<Self> {
        Ok(Self::new(Relations::from_links(links)?, members))
    }

    pub fn from_data(data: &FamilyData) -> Result<Self> {
        Self::from_links(&data.links, &data.members)
    }

    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    pub fn kind(&self, ix: NodeIx) -> &NodeKind {
        &self.kinds[ix.index()]
    }

    pub fn is_member(&self, ix: NodeIx) -> bool {
        self.kinds[ix.index()].is_member()
    }

    pub fn member(&self, ix: NodeIx) -> Option<&MemberRecord> {
        match &self.kinds[ix.index()] {
            NodeKind::Member(record) => Some(record),
            NodeKind::Family => None,
        }
    }

    pub fn find(&self, id: &str) -> Result<NodeIx> {
        Ok(self.relations.find(id)?)
    }

    pub fn id(&self, ix: NodeIx) -> &str {
        self.relations.id(ix)
    }

    pub fn nodes(&self) -> &[Node] {
        self.relations.nodes()
    }

    pub fn node_ixs(&self) -> impl Iterator<Item = NodeIx> + '_ {
        self.relations.node_ixs()
    }

    pub fn node_count(&self) -> usize {
        self.relations.node_count()
    }

    pub fn links(&self) -> &[Link] {
        self.relations.links()
    }

    pub fn parents(&self, ix: NodeIx) -> &[NodeIx] {
        self.relations.parents(ix)
    }

    pub fn children(&self, ix: NodeIx) -> &[NodeIx] {
        self.relations.children(ix)
    }

    pub fn first_level_adjacency(&self, ix: NodeIx) -> &AdjacencySet {
        self.relations.first_level_adjacency(ix)
    }

    pub fn second_level_adjacency(&self, ix: NodeIx) -> &AdjacencySet {
        self.relations.second_level_adjacency(ix)
    }

    pub fn roots(&self) -> Vec<NodeIx> {
        self.relations.roots()
    }
}
