//! Similarity-clustering order: the default breadth-first machinery over a
//! neighbor relation reordered by connection overlap, so nodes wired alike
//! land on adjacent rows.

use std::cmp::Ordering;

use weft_graphlib::{Adjacency, Network, NodeId};

use crate::error::Result;
use crate::model::NodeOrder;
use crate::monitor::{Monitor, Window};

use super::default_bfs::bfs_rows;
use super::{check_complete, cmp_nodes, sort_nodes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityMetric {
    /// Neighborhood overlap (Jaccard) with the node being expanded.
    #[default]
    Jaccard,
    /// Plain degree-decreasing expansion.
    Degree,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityOptions {
    pub metric: SimilarityMetric,
}

pub fn similarity_order(
    net: &Network,
    adj: &Adjacency,
    opts: &SimilarityOptions,
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<NodeOrder> {
    let rows = match opts.metric {
        SimilarityMetric::Degree => bfs_rows(
            net,
            adj,
            |_, next| sort_nodes(net, adj, next),
            monitor,
            window,
        )?,
        SimilarityMetric::Jaccard => bfs_rows(
            net,
            adj,
            |v, next| {
                next.sort_by(|&a, &b| {
                    cmp_jaccard(adj, v, a, b).then_with(|| cmp_nodes(net, adj, a, b))
                });
            },
            monitor,
            window,
        )?,
    };
    check_complete(&rows, adj.node_count())?;
    NodeOrder::from_rows(rows)
}

/// Orders `a` before `b` when `a`'s neighborhood overlaps `v`'s more.
/// Compared in integer cross-multiplied form so no float round-off can flip a
/// tie between runs.
fn cmp_jaccard(adj: &Adjacency, v: NodeId, a: NodeId, b: NodeId) -> Ordering {
    let (ia, ua) = overlap(adj, v, a);
    let (ib, ub) = overlap(adj, v, b);
    // ia/ua > ib/ub  <=>  ia*ub > ib*ua
    (ib * ua).cmp(&(ia * ub))
}

fn overlap(adj: &Adjacency, v: NodeId, w: NodeId) -> (usize, usize) {
    let nv = adj.neighbors(v);
    let nw = adj.neighbors(w);
    let inter = nv.intersection(nw).count();
    let union = nv.len() + nw.len() - inter;
    (inter, union.max(1))
}
