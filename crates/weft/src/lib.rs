#![forbid(unsafe_code)]

//! BioFabric-style network ordering: nodes to horizontal rows, links to
//! vertical columns.
//!
//! The caller supplies a parsed [`Network`](graphlib::Network) and picks an
//! [`Algorithm`]; the engine canonicalizes the link set, runs the strategy on
//! one worker thread with cooperative cancellation, and returns a
//! [`LayoutResult`]: a dense node -> row bijection, a dense link -> column
//! assignment (shadow links included), and any annotation bands the strategy
//! derives. Rendering is someone else's job.

pub mod annots;
pub mod error;
pub mod groups;
pub mod model;
pub mod monitor;
pub mod order;
pub mod preprocess;

pub use weft_graphlib as graphlib;

pub use annots::{Annot, AnnotTracks};
pub use error::{CriteriaViolation, Error, InvariantViolation, Result};
pub use groups::{Classifier, GroupKey, GroupSpec};
pub use model::{LayoutResult, LayoutStats, LinkOrder, NodeOrder};
pub use monitor::{CancelFlag, FlagMonitor, LoopReporter, Monitor, SilentMonitor, Window};
pub use order::{
    Algorithm, ControlTopOptions, HierarchicalOptions, LinkMeaning, Orientation, SetOptions,
    SimilarityMetric, SimilarityOptions,
};

use crate::graphlib::{Adjacency, Link, Network};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine-wide switches, independent of the chosen strategy.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Synthesize a shadow mirror per non-feedback link so every link is
    /// visible at both endpoint rows.
    pub shadows: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self { shadows: true }
    }
}

/// Runs one complete layout request.
///
/// Either a complete valid result is returned or an error propagates and the
/// caller discards all partial state; there is no in-between. The monitor is
/// polled at every progress report, so a cancel request takes effect at the
/// next checkpoint.
pub fn layout(
    network: &Network,
    algorithm: Algorithm,
    params: LayoutParams,
    monitor: &mut dyn Monitor,
) -> Result<LayoutResult> {
    preprocess::validate(network)?;
    tracing::debug!(
        nodes = network.node_count(),
        links = network.link_count(),
        "layout start"
    );

    let window = Window::FULL;

    let mut raw: Vec<Link> = network.links().to_vec();
    let directions = preprocess::infer_relation_directions(&raw, monitor, window.sub(0.0, 0.05))?;
    preprocess::assign_directions(&mut raw, &directions);
    let (kept, culled) = preprocess::preprocess_links(&raw, monitor, window.sub(0.05, 0.12))?;
    tracing::debug!(kept = kept.len(), culled = culled.len(), "links canonicalized");

    let active: Vec<Link> = if params.shadows {
        preprocess::with_shadows(&kept)
    } else {
        kept.clone()
    };
    let all_nodes = preprocess::extract_nodes(&kept, network.isolated());
    let adj = Adjacency::build(&kept, all_nodes);

    let order_window = window.sub(0.12, 0.85);
    let (node_order, row_annots, preassigned) = match algorithm {
        Algorithm::DefaultBfs => (
            order::default_order(network, &adj, monitor, order_window)?,
            Vec::new(),
            None,
        ),
        Algorithm::Similarity(opts) => (
            order::similarity_order(network, &adj, &opts, monitor, order_window)?,
            Vec::new(),
            None,
        ),
        Algorithm::GroupedBfs(spec) => {
            let (node_order, bands) =
                order::grouped_order(network, &adj, &spec, monitor, order_window)?;
            (node_order, bands, None)
        }
        Algorithm::Hierarchical(opts) => (
            order::hierarchical_order(network, &adj, &kept, &opts, monitor, order_window)?,
            Vec::new(),
            None,
        ),
        Algorithm::ControlTop(opts) => (
            order::control_top_order(network, &opts, monitor, order_window)?,
            Vec::new(),
            None,
        ),
        Algorithm::SetMembership(opts) => {
            let set = order::set_membership_order(
                network,
                &adj,
                &active,
                &opts,
                monitor,
                order_window,
            )?;
            (
                set.node_order,
                set.row_annots,
                Some((set.link_order, set.col_annots)),
            )
        }
    };

    let (link_order, col_annots) = match preassigned {
        Some(assigned) => assigned,
        None => (
            order::assign_columns(&active, &node_order, monitor, window.sub(0.85, 0.98))?,
            AnnotTracks::default(),
        ),
    };

    LoopReporter::new(monitor, window, 1).finish()?;

    let result = LayoutResult {
        node_order,
        link_order,
        row_annots,
        col_annots,
    };
    let stats = result.stats();
    tracing::debug!(
        nodes = stats.nodes,
        columns = stats.columns,
        "layout complete"
    );
    Ok(result)
}
