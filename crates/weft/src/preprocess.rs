//! Canonicalizes the raw link list before any ordering runs: endpoint
//! validation, relation direction inference, duplicate culling, and shadow
//! synthesis.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};

use weft_graphlib::{Link, Network, NodeId};

use crate::error::{InvariantViolation, Result};
use crate::monitor::{LoopReporter, Monitor, Window};

/// Union of link endpoints and pre-declared isolated nodes.
pub fn extract_nodes(links: &[Link], isolated: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    let mut nodes: BTreeSet<NodeId> = isolated.clone();
    for link in links {
        nodes.insert(link.src);
        nodes.insert(link.trg);
    }
    nodes
}

/// Checks the container invariants the layout core relies on: every link
/// endpoint and declared isolated node resolves in the node table, and every
/// node in the table is either a link endpoint or declared isolated.
pub fn validate(net: &Network) -> Result<()> {
    let mut touched: FxHashSet<NodeId> = FxHashSet::default();
    for link in net.links() {
        for node in [link.src, link.trg] {
            if !net.has_node(node) {
                return Err(InvariantViolation::MissingEndpoint { node }.into());
            }
            touched.insert(node);
        }
    }
    for &node in net.isolated() {
        if !net.has_node(node) {
            return Err(InvariantViolation::MissingEndpoint { node }.into());
        }
        touched.insert(node);
    }
    for node in net.nodes() {
        if !touched.contains(&node.id) {
            return Err(InvariantViolation::UnaccountedNode { node: node.id }.into());
        }
    }
    Ok(())
}

/// Resolves, per relation label, whether the relation behaves as directed.
///
/// Two pieces of evidence flag a relation as directed: a caller-supplied
/// directed flag on any of its links, or ANY node pair carrying both a
/// forward and a distinct backward link of that relation (self-loops
/// excluded). The topological rule is deliberately coarse: one opposing
/// pair flags the whole relation even if most instances run one way, and
/// downstream orderings depend on exactly this behavior.
pub fn infer_relation_directions(
    links: &[Link],
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<BTreeMap<String, bool>> {
    let mut pairs: FxHashSet<(NodeId, NodeId, &str)> = FxHashSet::default();
    for link in links {
        if !link.is_feedback() {
            pairs.insert((link.src, link.trg, link.relation.as_str()));
        }
    }

    let mut rep = LoopReporter::new(monitor, window, links.len());
    let mut table: BTreeMap<String, bool> = BTreeMap::new();
    for link in links {
        rep.tick()?;
        let entry = table.entry(link.relation.clone()).or_insert(false);
        if link.directed
            || (!link.is_feedback()
                && pairs.contains(&(link.trg, link.src, link.relation.as_str())))
        {
            *entry = true;
        }
    }
    Ok(table)
}

/// Stamps every link with its relation's resolved directed flag.
pub fn assign_directions(links: &mut [Link], table: &BTreeMap<String, bool>) {
    for link in links.iter_mut() {
        link.directed = table.get(&link.relation).copied().unwrap_or(false);
    }
}

/// Removes duplicate links and, for undirected non-self-loop links where both
/// orientations are present, keeps exactly one canonical representative.
///
/// The survivor is the `Ord`-smaller of the two orientations, so the outcome
/// is independent of input order, and already-canonical input is a fixed
/// point. Returns `(kept, culled)`.
pub fn preprocess_links(
    links: &[Link],
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<(Vec<Link>, Vec<Link>)> {
    // First pass: which undirected links exist in both orientations.
    let mut orientations: FxHashMap<Link, (bool, bool)> = FxHashMap::default();
    for link in links {
        if link.directed || link.is_feedback() {
            continue;
        }
        let flipped = link.flipped();
        let (canonical, forward) = if flipped < *link {
            (flipped, false)
        } else {
            (link.clone(), true)
        };
        let entry = orientations.entry(canonical).or_insert((false, false));
        if forward {
            entry.0 = true;
        } else {
            entry.1 = true;
        }
    }

    let mut rep = LoopReporter::new(monitor, window, links.len());
    let mut seen: FxHashSet<Link> = FxHashSet::default();
    let mut kept: Vec<Link> = Vec::with_capacity(links.len());
    let mut culled: Vec<Link> = Vec::new();

    for link in links {
        rep.tick()?;
        let survivor = if !link.directed && !link.is_feedback() {
            let flipped = link.flipped();
            let canonical = if flipped < *link {
                flipped
            } else {
                link.clone()
            };
            match orientations.get(&canonical) {
                // Both orientations present: only the canonical form survives.
                Some((true, true)) => canonical,
                _ => link.clone(),
            }
        } else {
            link.clone()
        };

        if seen.insert(survivor.clone()) {
            kept.push(survivor);
        } else {
            culled.push(link.clone());
        }
    }
    Ok((kept, culled))
}

/// Synthesizes the shadow mirror for every non-feedback link, keeping each
/// shadow adjacent to its plain counterpart in the returned list.
pub fn with_shadows(links: &[Link]) -> Vec<Link> {
    let mut out: Vec<Link> = Vec::with_capacity(links.len() * 2);
    for link in links {
        out.push(link.clone());
        if !link.is_feedback() {
            out.push(link.shadow_twin());
        }
    }
    out
}
