//! Caller-forced row order: the caller already knows where every node goes
//! and the engine only validates and publishes it.

use rustc_hash::FxHashSet;

use weft_graphlib::{Network, NodeId};

use crate::error::{CriteriaViolation, Result};
use crate::model::NodeOrder;
use crate::monitor::{LoopReporter, Monitor, Window};

#[derive(Debug, Clone, Default)]
pub struct ControlTopOptions {
    /// Row order, top to bottom. Must name every node exactly once.
    pub order: Vec<NodeId>,
}

pub fn control_top_order(
    net: &Network,
    opts: &ControlTopOptions,
    monitor: &mut dyn Monitor,
    window: Window,
) -> Result<NodeOrder> {
    let mut rep = LoopReporter::new(monitor, window, opts.order.len());
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    for &node in &opts.order {
        rep.tick()?;
        if !net.has_node(node) {
            return Err(CriteriaViolation::UnknownForcedNode { node }.into());
        }
        if !seen.insert(node) {
            return Err(CriteriaViolation::DuplicateForcedNode { node }.into());
        }
    }
    if seen.len() != net.node_count() {
        return Err(CriteriaViolation::IncompleteForcedOrder {
            missing: net.node_count() - seen.len(),
        }
        .into());
    }
    NodeOrder::from_rows(opts.order.clone())
}
