//! Degree-seeded breadth-first ordering, the default row layout.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use weft_graphlib::{Adjacency, Network, NodeId};

use crate::error::Result;
use crate::model::NodeOrder;
use crate::monitor::{LoopReporter, Monitor, Window};

use super::{check_complete, sort_by_name, sort_nodes};

/// Breadth-first row assignment: seed with the highest-degree unvisited node
/// (ties by name, then id), expand neighbors by descending degree then name,
/// repeat per component, and append isolated nodes at the end in name order.
pub fn default_order(
    net: &Network,
    adj: &Adjacency,
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<NodeOrder> {
    let rows = bfs_rows(
        net,
        adj,
        |_, next| sort_nodes(net, adj, next),
        monitor,
        window,
    )?;
    check_complete(&rows, adj.node_count())?;
    NodeOrder::from_rows(rows)
}

/// The traversal shared by the default and similarity orders. The caller
/// controls only how a visited node's unvisited neighbors are ranked before
/// they enter the queue.
pub(crate) fn bfs_rows(
    net: &Network,
    adj: &Adjacency,
    order_neighbors: impl Fn(NodeId, &mut Vec<NodeId>),
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<Vec<NodeId>> {
    let mut rep = LoopReporter::new(monitor, window, adj.node_count());
    let mut rows: Vec<NodeId> = Vec::with_capacity(adj.node_count());
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();

    let mut seeds: Vec<NodeId> = adj.nodes().filter(|&v| adj.degree(v) > 0).collect();
    sort_nodes(net, adj, &mut seeds);

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    for seed in seeds {
        if visited.contains(&seed) {
            continue;
        }
        queue.push_back(seed);
        while let Some(v) = queue.pop_front() {
            if !visited.insert(v) {
                continue;
            }
            rows.push(v);
            rep.tick()?;

            let mut next: Vec<NodeId> = adj
                .neighbors(v)
                .iter()
                .copied()
                .filter(|n| !visited.contains(n))
                .collect();
            order_neighbors(v, &mut next);
            queue.extend(next);
        }
    }

    let mut tail: Vec<NodeId> = adj.nodes().filter(|&v| adj.degree(v) == 0).collect();
    sort_by_name(net, &mut tail);
    for v in tail {
        rows.push(v);
        rep.tick()?;
    }

    Ok(rows)
}
