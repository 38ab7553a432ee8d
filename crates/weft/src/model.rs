//! Terminal layout artifacts: row and column orders.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use serde::Serialize;
use weft_graphlib::{Link, NodeId};

use crate::annots::{Annot, AnnotTracks};
use crate::error::{InvariantViolation, Result};

/// A total, gap-free, injective node -> row assignment.
#[derive(Debug, Clone, Default)]
pub struct NodeOrder {
    rows: Vec<NodeId>,
    index: FxHashMap<NodeId, usize>,
}

impl NodeOrder {
    /// Builds the order from `rows[i] = node at row i`. Rejects duplicate
    /// placements; density and totality follow from the vector shape.
    pub fn from_rows(rows: Vec<NodeId>) -> Result<Self> {
        let mut index: FxHashMap<NodeId, usize> = FxHashMap::default();
        for (row, &node) in rows.iter().enumerate() {
            if index.insert(node, row).is_some() {
                return Err(InvariantViolation::DuplicateRow { node }.into());
            }
        }
        Ok(Self { rows, index })
    }

    pub fn row(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    pub fn node_at(&self, row: usize) -> Option<NodeId> {
        self.rows.get(row).copied()
    }

    /// Nodes in row order.
    pub fn rows(&self) -> &[NodeId] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A total, dense link -> column assignment, shadow links included, with a
/// shadow-free numbering derived alongside for callers that hide shadows.
#[derive(Debug, Clone, Default)]
pub struct LinkOrder {
    columns: IndexSet<Link>,
    // Full-order indices of the non-shadow columns, ascending.
    plain_cols: Vec<usize>,
}

impl LinkOrder {
    pub fn from_columns(columns: Vec<Link>) -> Result<Self> {
        let mut set: IndexSet<Link> = IndexSet::with_capacity(columns.len());
        for link in columns {
            if set.contains(&link) {
                return Err(InvariantViolation::DuplicateColumn {
                    link: link.to_string(),
                }
                .into());
            }
            set.insert(link);
        }
        let plain_cols = set
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.shadow)
            .map(|(i, _)| i)
            .collect();
        Ok(Self {
            columns: set,
            plain_cols,
        })
    }

    /// Column in the shadow-inclusive numbering.
    pub fn column(&self, link: &Link) -> Option<usize> {
        self.columns.get_index_of(link)
    }

    /// Column in the shadow-free numbering; `None` for shadow links.
    pub fn plain_column(&self, link: &Link) -> Option<usize> {
        if link.shadow {
            return None;
        }
        let full = self.column(link)?;
        self.plain_cols.binary_search(&full).ok()
    }

    pub fn link_at(&self, column: usize) -> Option<&Link> {
        self.columns.get_index(column)
    }

    /// Links in column order, shadow links included.
    pub fn columns(&self) -> impl Iterator<Item = &Link> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn plain_len(&self) -> usize {
        self.plain_cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Counts reported to callers after a layout completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub nodes: usize,
    pub columns: usize,
    pub plain_columns: usize,
}

/// What a completed layout hands back: the two orders plus any annotation
/// bands the strategy derived. Owned by the caller; nothing is cached.
#[derive(Debug)]
pub struct LayoutResult {
    pub node_order: NodeOrder,
    pub link_order: LinkOrder,
    pub row_annots: Vec<Annot>,
    pub col_annots: AnnotTracks,
}

impl LayoutResult {
    pub fn stats(&self) -> LayoutStats {
        LayoutStats {
            nodes: self.node_order.len(),
            columns: self.link_order.len(),
            plain_columns: self.link_order.plain_len(),
        }
    }
}
