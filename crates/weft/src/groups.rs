//! Node classification: assigns each node to a discrete, ordered class based
//! on which categories of incident links it has.
//!
//! The caller supplies the full class order up front; a node whose derived
//! key is absent from that order is a configuration defect and aborts the
//! layout.

use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use weft_graphlib::{Adjacency, NodeId};

use crate::error::{InvariantViolation, Result};

/// Classification inputs, supplied per layout request.
#[derive(Debug, Clone, Default)]
pub struct GroupSpec {
    /// Canonical class keys in display order; a key's position is its class
    /// index. Must cover every key the graph can produce.
    pub order: Vec<String>,
    /// Relation label -> category name. Unmapped relations fall back to the
    /// relation label itself.
    pub relation_categories: BTreeMap<String, String>,
    /// Nodes carrying the discriminating tag bit.
    pub tagged: BTreeSet<NodeId>,
}

/// A node's derived class key: the set of categories its incident links
/// touch, plus the tag bit. Structured rather than string-typed; the
/// canonical rendering exists for order lookup and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub categories: BTreeSet<String>,
    pub tagged: bool,
}

impl fmt::Display for GroupKey {
    /// Canonical rendering: categories sorted, slash-separated, in parens; a
    /// trailing `+` marks the tag bit. Identical category sets always render
    /// identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, cat) in self.categories.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{cat}")?;
        }
        write!(f, ")")?;
        if self.tagged {
            write!(f, "+")?;
        }
        Ok(())
    }
}

pub struct Classifier<'a> {
    spec: &'a GroupSpec,
    index: FxHashMap<&'a str, usize>,
}

impl<'a> Classifier<'a> {
    pub fn new(spec: &'a GroupSpec) -> Self {
        let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
        for (i, key) in spec.order.iter().enumerate() {
            index.entry(key.as_str()).or_insert(i);
        }
        Self { spec, index }
    }

    pub fn class_count(&self) -> usize {
        self.spec.order.len()
    }

    pub fn class_label(&self, class: usize) -> &str {
        &self.spec.order[class]
    }

    pub fn key_for(&self, node: NodeId, adj: &Adjacency) -> GroupKey {
        let mut categories: BTreeSet<String> = BTreeSet::new();
        for link in adj.links_of(node) {
            let category = self
                .spec
                .relation_categories
                .get(&link.relation)
                .cloned()
                .unwrap_or_else(|| link.relation.clone());
            categories.insert(category);
        }
        GroupKey {
            categories,
            tagged: self.spec.tagged.contains(&node),
        }
    }

    /// The node's class index in the supplied order. A missing key means the
    /// supplied order is incomplete for this graph, which is fatal.
    pub fn class_of(&self, node: NodeId, adj: &Adjacency) -> Result<usize> {
        let key = self.key_for(node, adj);
        let canonical = key.to_string();
        self.index
            .get(canonical.as_str())
            .copied()
            .ok_or_else(|| InvariantViolation::MissingGroupKey { key: canonical }.into())
    }

    /// Classifies every node in the index. Every node maps to exactly one
    /// class or the whole layout aborts.
    pub fn classify_all(&self, adj: &Adjacency) -> Result<BTreeMap<NodeId, usize>> {
        let mut classes: BTreeMap<NodeId, usize> = BTreeMap::new();
        for node in adj.nodes() {
            classes.insert(node, self.class_of(node, adj)?);
        }
        Ok(classes)
    }
}
