//! Bipartite set-membership order.
//!
//! The graph must split cleanly into "set" nodes and "element" nodes joined
//! by a single directed relation; each structural precondition that fails
//! raises its own criteria violation so the caller can fall back to another
//! strategy. Rows carry the sets first (largest set highest), then the
//! elements grouped by membership signature; columns group plain links by
//! set and shadow links by element.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};

use weft_graphlib::{Adjacency, Link, Network, NodeId};

use crate::annots::{Annot, AnnotTracks, scan_runs};
use crate::error::{CriteriaViolation, Result};
use crate::model::{LinkOrder, NodeOrder};
use crate::monitor::{LoopReporter, Monitor, Window};

use super::{check_complete, row_of, sort_by_name};

/// What a link's direction means in set terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMeaning {
    /// Links point element -> set.
    #[default]
    BelongsTo,
    /// Links point set -> element.
    Contains,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SetOptions {
    pub meaning: LinkMeaning,
}

/// Everything the set layout decides on its own: the default column policy
/// does not apply here.
pub struct SetLayout {
    pub node_order: NodeOrder,
    pub link_order: LinkOrder,
    pub row_annots: Vec<Annot>,
    pub col_annots: AnnotTracks,
}

pub fn set_membership_order(
    net: &Network,
    adj: &Adjacency,
    active_links: &[Link],
    opts: &SetOptions,
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<SetLayout> {
    let plain: Vec<&Link> = active_links.iter().filter(|l| !l.shadow).collect();
    check_criteria(adj, &plain, opts)?;

    let (elements_per_set, sets_per_element) = partition(&plain, opts);

    // Sets by descending cardinality, ties by name then id.
    let mut set_order: Vec<NodeId> = elements_per_set.keys().copied().collect();
    set_order.sort_by(|&a, &b| {
        elements_per_set[&b]
            .len()
            .cmp(&elements_per_set[&a].len())
            .then_with(|| net.name(a).unwrap_or("").cmp(net.name(b).unwrap_or("")))
            .then_with(|| a.cmp(&b))
    });
    let set_rank: FxHashMap<NodeId, usize> = set_order
        .iter()
        .enumerate()
        .map(|(i, &s)| (s, i))
        .collect();

    // Membership signature: the element's sets as ascending set-order ranks.
    let signatures: FxHashMap<NodeId, Vec<usize>> = sets_per_element
        .iter()
        .map(|(&e, sets)| {
            let mut sig: Vec<usize> = sets.iter().map(|s| set_rank[s]).collect();
            sig.sort_unstable();
            (e, sig)
        })
        .collect();

    let mut rep = LoopReporter::new(monitor, window, adj.node_count());
    // Set rows are fixed as soon as the set order is known.
    rep.set_done(set_order.len())?;

    // Elements breadth-first from the set order: each set contributes its
    // not-yet-placed elements, grouped by signature, signatures ascending.
    let mut placed: FxHashSet<NodeId> = FxHashSet::default();
    let mut element_rows: Vec<NodeId> = Vec::with_capacity(sets_per_element.len());
    for &set in &set_order {
        let mut groups: BTreeMap<&[usize], Vec<NodeId>> = BTreeMap::new();
        for &e in &elements_per_set[&set] {
            if !placed.contains(&e) {
                groups.entry(signatures[&e].as_slice()).or_default().push(e);
            }
        }
        for (_, mut members) in groups {
            sort_by_name(net, &mut members);
            for e in members {
                placed.insert(e);
                element_rows.push(e);
                rep.tick()?;
            }
        }
    }

    let mut rows: Vec<NodeId> = set_order.clone();
    rows.extend(element_rows.iter().copied());
    check_complete(&rows, adj.node_count())?;

    let sig_label = |e: NodeId| -> String {
        let names: Vec<&str> = signatures[&e]
            .iter()
            .map(|&rank| net.name(set_order[rank]).unwrap_or(""))
            .collect();
        names.join("+")
    };

    let row_annots = scan_runs(set_order.len(), element_rows.len(), 0, |i| {
        sig_label(element_rows[i])
    });

    let node_order = NodeOrder::from_rows(rows)?;

    // Columns: plain links grouped by set row then element row, shadow links
    // after them grouped by element row then set row. Grouping shadows by
    // element is what keeps the signature bands contiguous.
    let (plain_links, shadow_links): (Vec<Link>, Vec<Link>) = active_links
        .iter()
        .cloned()
        .partition(|l| !l.shadow);
    let plain_cols = sort_columns(plain_links, &node_order, opts, false)?;
    let shadow_cols = sort_columns(shadow_links, &node_order, opts, true)?;

    let set_of = |l: &Link| side(l, opts).0;
    let element_of = |l: &Link| side(l, opts).1;

    let col_annots = AnnotTracks {
        plain: scan_runs(0, plain_cols.len(), 0, |i| {
            net.name(set_of(&plain_cols[i])).unwrap_or("")
        }),
        shadow: scan_runs(plain_cols.len(), shadow_cols.len(), 0, |i| {
            sig_label(element_of(&shadow_cols[i]))
        }),
    };

    let mut columns = plain_cols;
    columns.extend(shadow_cols);
    let link_order = LinkOrder::from_columns(columns)?;

    Ok(SetLayout {
        node_order,
        link_order,
        row_annots,
        col_annots,
    })
}

/// (set endpoint, element endpoint) of a link under the configured meaning.
fn side(link: &Link, opts: &SetOptions) -> (NodeId, NodeId) {
    match opts.meaning {
        LinkMeaning::BelongsTo => (link.trg, link.src),
        LinkMeaning::Contains => (link.src, link.trg),
    }
}

fn sort_columns(
    cols: Vec<Link>,
    order: &NodeOrder,
    opts: &SetOptions,
    by_element_first: bool,
) -> Result<Vec<Link>> {
    let mut keyed: Vec<((usize, usize), Link)> = Vec::with_capacity(cols.len());
    for link in cols {
        let (set, element) = side(&link, opts);
        let set_row = row_of(order, &link, set)?;
        let element_row = row_of(order, &link, element)?;
        let key = if by_element_first {
            (element_row, set_row)
        } else {
            (set_row, element_row)
        };
        keyed.push((key, link));
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, l)| l).collect())
}

/// Validates every structural precondition, one distinct violation each.
fn check_criteria(adj: &Adjacency, plain: &[&Link], opts: &SetOptions) -> Result<()> {
    let isolated = adj.nodes().filter(|&v| adj.degree(v) == 0).count();
    if isolated > 0 {
        return Err(CriteriaViolation::IsolatedNodes { count: isolated }.into());
    }

    let mut relations: BTreeSet<&str> = BTreeSet::new();
    for link in plain {
        if !link.directed {
            return Err(CriteriaViolation::UndirectedLink {
                link: link.to_string(),
            }
            .into());
        }
        relations.insert(link.relation.as_str());
    }
    if relations.len() != 1 {
        return Err(CriteriaViolation::MultipleRelations {
            count: relations.len(),
        }
        .into());
    }

    let mut sets: BTreeSet<NodeId> = BTreeSet::new();
    let mut elements: BTreeSet<NodeId> = BTreeSet::new();
    for link in plain {
        let (set, element) = side(link, opts);
        sets.insert(set);
        elements.insert(element);
    }
    if let Some(&node) = sets.intersection(&elements).next() {
        return Err(CriteriaViolation::SetElementOverlap { node }.into());
    }
    Ok(())
}

fn partition(
    plain: &[&Link],
    opts: &SetOptions,
) -> (
    BTreeMap<NodeId, BTreeSet<NodeId>>,
    BTreeMap<NodeId, BTreeSet<NodeId>>,
) {
    let mut elements_per_set: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    let mut sets_per_element: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for link in plain {
        let (set, element) = side(link, opts);
        elements_per_set.entry(set).or_default().insert(element);
        sets_per_element.entry(element).or_default().insert(set);
    }
    (elements_per_set, sets_per_element)
}
