//! Derived neighbor / incident-link index.
//!
//! Rebuilt whenever the active link set changes. Iteration over nodes and
//! neighbor sets is in ascending id order, so anything derived from a scan of
//! this index is reproducible without a separate sort.

use std::collections::{BTreeMap, BTreeSet};

use crate::link::{Link, NodeId};

static EMPTY_NEIGHBORS: BTreeSet<NodeId> = BTreeSet::new();

/// Node -> neighbor set and node -> incident links. Every node passed to
/// [`Adjacency::build`] appears as a key, isolated ones with empty values.
/// Shadow links never contribute to adjacency or degree.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: BTreeMap<NodeId, BTreeSet<NodeId>>,
    incident: BTreeMap<NodeId, Vec<Link>>,
}

impl Adjacency {
    pub fn build(links: &[Link], all_nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut neighbors: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
        let mut incident: BTreeMap<NodeId, Vec<Link>> = BTreeMap::new();

        for id in all_nodes {
            neighbors.entry(id).or_default();
            incident.entry(id).or_default();
        }

        for link in links {
            if link.shadow {
                continue;
            }
            incident.entry(link.src).or_default().push(link.clone());
            if !link.is_feedback() {
                incident.entry(link.trg).or_default().push(link.clone());
                neighbors.entry(link.src).or_default().insert(link.trg);
                neighbors.entry(link.trg).or_default().insert(link.src);
            } else {
                neighbors.entry(link.src).or_default();
            }
        }

        for links in incident.values_mut() {
            links.sort_unstable();
        }

        Self {
            neighbors,
            incident,
        }
    }

    pub fn neighbors(&self, id: NodeId) -> &BTreeSet<NodeId> {
        self.neighbors.get(&id).unwrap_or(&EMPTY_NEIGHBORS)
    }

    /// Incident non-shadow links, feedback included, in canonical link order.
    pub fn links_of(&self, id: NodeId) -> &[Link] {
        self.incident.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct-neighbor degree. Feedback links do not add to it.
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.neighbors.contains_key(&id)
    }

    /// All indexed nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }
}
