//! Node identity and link value objects.
//!
//! Nodes are keyed by [`NodeId`] everywhere; display names are carried on
//! [`Node`] and may collide after normalization, so they are never used as
//! map or set keys.

use std::fmt;

/// Stable, opaque node identity. Cheap to copy, hashable, totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node: identity plus display name. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A link between two nodes, tagged with a relation label.
///
/// Links are value objects: `Eq`/`Hash`/`Ord` consider every field, and the
/// derived `Ord` (source, target, relation, directed, shadow) is the
/// canonical total order used when one of an undirected flip pair has to be
/// chosen deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Link {
    pub src: NodeId,
    pub trg: NodeId,
    pub relation: String,
    pub directed: bool,
    pub shadow: bool,
}

impl Link {
    pub fn new(src: NodeId, trg: NodeId, relation: impl Into<String>) -> Self {
        Self {
            src,
            trg,
            relation: relation.into(),
            directed: false,
            shadow: false,
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// A self-loop. Derived from the endpoints so it can never disagree with
    /// them.
    pub fn is_feedback(&self) -> bool {
        self.src == self.trg
    }

    /// The reversed counterpart: same relation and flags, endpoints swapped.
    pub fn flipped(&self) -> Self {
        Self {
            src: self.trg,
            trg: self.src,
            relation: self.relation.clone(),
            directed: self.directed,
            shadow: self.shadow,
        }
    }

    /// The synthetic mirror of this link, used so a link is visible at its
    /// target's row as well.
    pub fn shadow_twin(&self) -> Self {
        Self {
            shadow: true,
            ..self.clone()
        }
    }

    /// Endpoint on the opposite side of `id`, if `id` is an endpoint at all.
    pub fn other_end(&self, id: NodeId) -> Option<NodeId> {
        if self.src == id {
            Some(self.trg)
        } else if self.trg == id {
            Some(self.src)
        } else {
            None
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        let shadow = if self.shadow { " (shadow)" } else { "" };
        write!(
            f,
            "{}{}{} [{}]{}",
            self.src, arrow, self.trg, self.relation, shadow
        )
    }
}
