//! Graph core: nodes, links and ordered child lists built from a raw link list.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

mod entries;

pub use entries::{Link, Node, NodeIx};

/// An immutable directed graph over string ids.
///
/// Node ids are deduplicated and sorted at construction, so node indices are deterministic for
/// a given set of ids regardless of link order. Links keep their input order, and so do the
/// child lists derived from them.
#[derive(Debug, Clone)]
pub struct Dag {
    nodes: Vec<Node>,
    node_index: HashMap<String, NodeIx>,
    links: Vec<Link>,
}

impl Dag {
    pub fn new<S: AsRef<str>>(links: &[(S, S)]) -> Result<Self> {
        let mut ids: Vec<&str> = links
            .iter()
            .flat_map(|(v, w)| [v.as_ref(), w.as_ref()])
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let mut node_index: HashMap<String, NodeIx> = HashMap::default();
        let nodes = ids
            .iter()
            .enumerate()
            .map(|(ix, id)| {
                node_index.insert((*id).to_string(), NodeIx::new(ix));
                Node {
                    id: (*id).to_string(),
                    children: Vec::new(),
                }
            })
            .collect();

        let mut dag = Self {
            nodes,
            node_index,
            links: Vec::with_capacity(links.len()),
        };
        for (v, w) in links {
            let source = dag.find(v.as_ref())?;
            let target = dag.find(w.as_ref())?;
            dag.nodes[source.index()].children.push(target);
            dag.links.push(Link { source, target });
        }
        Ok(dag)
    }

    pub fn find(&self, id: &str) -> Result<NodeIx> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnresolvedNode { id: id.to_string() })
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, ix: NodeIx) -> &Node {
        &self.nodes[ix.index()]
    }

    pub fn id(&self, ix: NodeIx) -> &str {
        &self.nodes[ix.index()].id
    }

    pub fn children(&self, ix: NodeIx) -> &[NodeIx] {
        &self.nodes[ix.index()].children
    }

    /// All nodes in sorted-id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_ixs(&self) -> impl Iterator<Item = NodeIx> + '_ {
        (0..self.nodes.len()).map(NodeIx::new)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All links in input order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
