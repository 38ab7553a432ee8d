//! The per-request network container.

use rustc_hash::FxBuildHasher;
use std::collections::BTreeSet;

use crate::link::{Link, Node, NodeId};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// A parsed network as supplied by the caller: node table, link list, and the
/// declared isolated (zero-degree) nodes.
///
/// The container itself does no deduplication or direction resolution; that
/// is the preprocessing layer's job. It only guarantees id-based lookup.
pub struct Network {
    nodes: Vec<Node>,
    node_index: HashMap<NodeId, usize>,
    links: Vec<Link>,
    isolated: BTreeSet<NodeId>,
}

impl Network {
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        links: Vec<Link>,
        isolated: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        let mut stored: Vec<Node> = Vec::new();
        let mut node_index: HashMap<NodeId, usize> = HashMap::default();
        for node in nodes {
            if node_index.contains_key(&node.id) {
                continue;
            }
            node_index.insert(node.id, stored.len());
            stored.push(node);
        }
        Self {
            nodes: stored,
            node_index,
            links,
            isolated: isolated.into_iter().collect(),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// All node ids in ascending id order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn isolated(&self) -> &BTreeSet<NodeId> {
        &self.isolated
    }
}
