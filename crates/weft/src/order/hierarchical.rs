//! Hierarchy-respecting order for directed acyclic structures: every ancestor
//! lands on a row above its descendants.

use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

use weft_graphlib::{Adjacency, Link, Network, NodeId};

use crate::error::{CriteriaViolation, Result};
use crate::model::NodeOrder;
use crate::monitor::{LoopReporter, Monitor, Window};

use super::{check_complete, sort_by_name, sort_nodes};

/// Which way the arrows run relative to the hierarchy roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// A link's source is the ancestor; arrows point down the hierarchy.
    #[default]
    Down,
    /// A link's target is the ancestor; arrows point up toward the roots.
    Up,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchicalOptions {
    pub orientation: Orientation,
}

/// Longest-path leveling: a node's level is the longest ancestor chain above
/// it, roots at level zero. Within a level: descending degree, then name,
/// then id. Isolated nodes follow at the end in name order. Self-loops do
/// not participate in the hierarchy; a cycle through distinct nodes is a
/// criteria violation.
pub fn hierarchical_order(
    net: &Network,
    adj: &Adjacency,
    links: &[Link],
    opts: &HierarchicalOptions,
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<NodeOrder> {
    let mut parents: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    let mut children: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for link in links {
        if link.shadow || link.is_feedback() {
            continue;
        }
        if !link.directed {
            return Err(CriteriaViolation::UndirectedLink {
                link: link.to_string(),
            }
            .into());
        }
        let (parent, child) = match opts.orientation {
            Orientation::Down => (link.src, link.trg),
            Orientation::Up => (link.trg, link.src),
        };
        parents.entry(child).or_default().insert(parent);
        children.entry(parent).or_default().insert(child);
    }

    check_acyclic(&children)?;

    // Longest path from the roots, memoized over the parent relation.
    let mut levels: FxHashMap<NodeId, usize> = FxHashMap::default();
    fn level_of(
        v: NodeId,
        parents: &BTreeMap<NodeId, BTreeSet<NodeId>>,
        levels: &mut FxHashMap<NodeId, usize>,
    ) -> usize {
        if let Some(&lvl) = levels.get(&v) {
            return lvl;
        }
        let lvl = parents
            .get(&v)
            .into_iter()
            .flatten()
            .map(|&p| level_of(p, parents, levels) + 1)
            .max()
            .unwrap_or(0);
        levels.insert(v, lvl);
        lvl
    }

    let mut by_level: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
    for v in adj.nodes() {
        if adj.degree(v) == 0 {
            continue;
        }
        let lvl = level_of(v, &parents, &mut levels);
        by_level.entry(lvl).or_default().push(v);
    }

    let mut rep = LoopReporter::new(monitor, window, adj.node_count());
    let mut rows: Vec<NodeId> = Vec::with_capacity(adj.node_count());
    for (_, mut level) in by_level {
        sort_nodes(net, adj, &mut level);
        for v in level {
            rows.push(v);
            rep.tick()?;
        }
    }

    let mut tail: Vec<NodeId> = adj.nodes().filter(|&v| adj.degree(v) == 0).collect();
    sort_by_name(net, &mut tail);
    for v in tail {
        rows.push(v);
        rep.tick()?;
    }

    check_complete(&rows, adj.node_count())?;
    NodeOrder::from_rows(rows)
}

fn check_acyclic(children: &BTreeMap<NodeId, BTreeSet<NodeId>>) -> Result<()> {
    fn dfs(
        v: NodeId,
        children: &BTreeMap<NodeId, BTreeSet<NodeId>>,
        visited: &mut BTreeSet<NodeId>,
        stack: &mut BTreeSet<NodeId>,
    ) -> Result<()> {
        if !visited.insert(v) {
            return Ok(());
        }
        stack.insert(v);
        for &c in children.get(&v).into_iter().flatten() {
            if stack.contains(&c) {
                return Err(CriteriaViolation::Cycle { node: c }.into());
            }
            dfs(c, children, visited, stack)?;
        }
        stack.remove(&v);
        Ok(())
    }

    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut stack: BTreeSet<NodeId> = BTreeSet::new();
    for &v in children.keys() {
        dfs(v, children, &mut visited, &mut stack)?;
    }
    Ok(())
}
