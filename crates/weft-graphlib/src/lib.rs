//! Network container APIs used by `weft`.
//!
//! This crate owns the value types a fabric layout operates on: stable node
//! identity, link value objects, the per-request [`Network`] container, and
//! the derived [`Adjacency`] index. Everything here is ordering-neutral; the
//! layout algorithms in `weft` decide what the orders mean.

mod adjacency;
mod link;
mod network;

pub use adjacency::Adjacency;
pub use link::{Link, Node, NodeId};
pub use network::Network;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
