//! Group-aware breadth-first order for alignment-style layouts.
//!
//! Nodes are bucketed into classes first; processing then proceeds strictly
//! class-by-class in class-index order. Breadth-first expansion inside a
//! class defers any neighbor belonging to a different class into that class's
//! own queue, so a later class starts with the nodes earlier classes fed into
//! it. Each node is enqueued and visited exactly once globally.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use weft_graphlib::{Adjacency, Network, NodeId};

use crate::annots::{Annot, scan_runs};
use crate::error::Result;
use crate::groups::{Classifier, GroupSpec};
use crate::model::NodeOrder;
use crate::monitor::{LoopReporter, Monitor, Window};

use super::{check_complete, sort_nodes};

/// Returns the row order plus one layer-zero annotation band per non-empty
/// class (the first and last row the class occupies).
pub fn grouped_order(
    net: &Network,
    adj: &Adjacency,
    spec: &GroupSpec,
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<(NodeOrder, Vec<Annot>)> {
    let classifier = Classifier::new(spec);
    let classes = classifier.classify_all(adj)?;
    let class_count = classifier.class_count();

    // Per-class seed lists in the shared within-class order.
    let mut buckets: Vec<Vec<NodeId>> = vec![Vec::new(); class_count];
    for (&node, &class) in &classes {
        buckets[class].push(node);
    }
    for bucket in &mut buckets {
        sort_nodes(net, adj, bucket);
    }

    let mut rep = LoopReporter::new(monitor, window, adj.node_count());
    let mut queues: Vec<VecDeque<NodeId>> = vec![VecDeque::new(); class_count];
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut enqueued: FxHashSet<NodeId> = FxHashSet::default();
    let mut rows: Vec<NodeId> = Vec::with_capacity(adj.node_count());

    for class in 0..class_count {
        let mut seed_idx = 0usize;
        loop {
            while let Some(v) = queues[class].pop_front() {
                if !visited.insert(v) {
                    continue;
                }
                rows.push(v);
                rep.tick()?;

                let mut next: Vec<NodeId> = adj
                    .neighbors(v)
                    .iter()
                    .copied()
                    .filter(|n| !visited.contains(n) && !enqueued.contains(n))
                    .collect();
                sort_nodes(net, adj, &mut next);
                for n in next {
                    enqueued.insert(n);
                    queues[classes[&n]].push_back(n);
                }
            }

            // Queue drained; reseed from this class's remaining unvisited
            // nodes so disconnected members are still emitted here.
            let mut reseeded = false;
            while seed_idx < buckets[class].len() {
                let candidate = buckets[class][seed_idx];
                seed_idx += 1;
                if !visited.contains(&candidate) {
                    queues[class].push_back(candidate);
                    reseeded = true;
                    break;
                }
            }
            if !reseeded {
                break;
            }
        }
    }

    check_complete(&rows, adj.node_count())?;

    let annots = scan_runs(0, rows.len(), 0, |i| {
        classifier.class_label(classes[&rows[i]])
    });

    let order = NodeOrder::from_rows(rows)?;
    Ok((order, annots))
}
