//! Node and link ordering strategies.
//!
//! Every strategy is deterministic given identical input: no hash-order
//! dependence is permitted, so any set iteration that can reach the output is
//! routed through a canonical sort first. The shared tie-break for node
//! ranking is descending degree, then name, then id: names are not
//! guaranteed unique, ids are, so the id settles the last word.

mod control_top;
mod default_bfs;
mod grouped;
mod hierarchical;
mod set_membership;
mod similarity;

pub use control_top::{ControlTopOptions, control_top_order};
pub use default_bfs::default_order;
pub use grouped::grouped_order;
pub use hierarchical::{HierarchicalOptions, Orientation, hierarchical_order};
pub use set_membership::{LinkMeaning, SetLayout, SetOptions, set_membership_order};
pub use similarity::{SimilarityMetric, SimilarityOptions, similarity_order};

use std::cmp::Ordering;

use weft_graphlib::{Adjacency, Link, Network, NodeId};

use crate::error::{InvariantViolation, Result};
use crate::groups::GroupSpec;
use crate::model::{LinkOrder, NodeOrder};
use crate::monitor::{LoopReporter, Monitor, Window};

/// The closed set of ordering strategies.
#[derive(Debug, Clone)]
pub enum Algorithm {
    /// Degree-seeded breadth-first order; the default.
    DefaultBfs,
    /// Breadth-first order over a similarity-reordered neighbor relation.
    Similarity(SimilarityOptions),
    /// Class-bucketed breadth-first order for alignment-style layouts.
    GroupedBfs(GroupSpec),
    /// Bipartite set-membership order.
    SetMembership(SetOptions),
    /// Hierarchy-respecting order for directed acyclic structures.
    Hierarchical(HierarchicalOptions),
    /// Caller-forced row order.
    ControlTop(ControlTopOptions),
}

/// Descending degree, then name, then id.
pub(crate) fn cmp_nodes(net: &Network, adj: &Adjacency, a: NodeId, b: NodeId) -> Ordering {
    adj.degree(b)
        .cmp(&adj.degree(a))
        .then_with(|| net.name(a).unwrap_or("").cmp(net.name(b).unwrap_or("")))
        .then_with(|| a.cmp(&b))
}

pub(crate) fn sort_nodes(net: &Network, adj: &Adjacency, nodes: &mut [NodeId]) {
    nodes.sort_by(|&a, &b| cmp_nodes(net, adj, a, b));
}

/// Ascending name, then id. Used for the isolated-node tail.
pub(crate) fn sort_by_name(net: &Network, nodes: &mut [NodeId]) {
    nodes.sort_by(|&a, &b| {
        net.name(a)
            .unwrap_or("")
            .cmp(net.name(b).unwrap_or(""))
            .then_with(|| a.cmp(&b))
    });
}

/// Default link -> column policy: primary by the lower endpoint row, then the
/// higher endpoint row, then relation and direction; each shadow link lands
/// immediately after its plain counterpart.
pub fn assign_columns(
    links: &[Link],
    order: &NodeOrder,
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<LinkOrder> {
    let mut rep = LoopReporter::new(monitor, window, links.len());

    let mut keyed: Vec<(usize, usize, usize, &Link)> = Vec::with_capacity(links.len());
    for link in links {
        rep.tick()?;
        let src_row = row_of(order, link, link.src)?;
        let trg_row = row_of(order, link, link.trg)?;
        let (lo, hi) = if src_row <= trg_row {
            (src_row, trg_row)
        } else {
            (trg_row, src_row)
        };
        keyed.push((lo, hi, src_row, link));
    }

    keyed.sort_by(|a, b| {
        (a.0, a.1, a.3.relation.as_str(), a.2, a.3.shadow).cmp(&(
            b.0,
            b.1,
            b.3.relation.as_str(),
            b.2,
            b.3.shadow,
        ))
    });

    LinkOrder::from_columns(keyed.into_iter().map(|(_, _, _, l)| l.clone()).collect())
}

pub(crate) fn row_of(order: &NodeOrder, link: &Link, node: NodeId) -> Result<usize> {
    order.row(node).ok_or_else(|| {
        InvariantViolation::UnplacedEndpoint {
            link: link.to_string(),
            node,
        }
        .into()
    })
}

/// Full-coverage check every strategy runs before publishing its order.
pub(crate) fn check_complete(rows: &[NodeId], expected: usize) -> Result<()> {
    if rows.len() != expected {
        return Err(InvariantViolation::NodeCountMismatch {
            placed: rows.len(),
            expected,
        }
        .into());
    }
    Ok(())
}
