//! Layout failure taxonomy.
//!
//! Three outcomes are distinguished deliberately: a strategy's structural
//! precondition failing ([`CriteriaViolation`], recoverable, the caller may
//! pick another strategy), a user-requested abort ([`Error::Cancelled`],
//! expected control flow, never logged as an error), and an internal
//! consistency failure ([`InvariantViolation`], a defect, never retried).

use weft_graphlib::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout criteria not met: {0}")]
    CriteriaNotMet(#[from] CriteriaViolation),

    #[error("layout cancelled")]
    Cancelled,

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    pub fn is_criteria(&self) -> bool {
        matches!(self, Error::CriteriaNotMet(_))
    }
}

/// A strategy's structural precondition failed on this graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaViolation {
    #[error("graph has {count} isolated node(s), layout requires none")]
    IsolatedNodes { count: usize },

    #[error("undirected link {link}, layout requires directed links")]
    UndirectedLink { link: String },

    #[error("graph carries {count} distinct relations, layout requires exactly one")]
    MultipleRelations { count: usize },

    #[error("node {node} appears as both a set and an element")]
    SetElementOverlap { node: NodeId },

    #[error("cycle detected through node {node}, layout requires a DAG")]
    Cycle { node: NodeId },

    #[error("forced order names unknown node {node}")]
    UnknownForcedNode { node: NodeId },

    #[error("forced order lists node {node} more than once")]
    DuplicateForcedNode { node: NodeId },

    #[error("forced order leaves {missing} node(s) unplaced")]
    IncompleteForcedOrder { missing: usize },
}

/// An internal consistency check failed. Ordering state built so far cannot
/// be trusted; the whole layout aborts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("link endpoint {node} is missing from the node table")]
    MissingEndpoint { node: NodeId },

    #[error("node {node} is neither a link endpoint nor declared isolated")]
    UnaccountedNode { node: NodeId },

    #[error("node group key {key:?} is not present in the supplied group order")]
    MissingGroupKey { key: String },

    #[error("ordering placed {placed} nodes, expected {expected}")]
    NodeCountMismatch { placed: usize, expected: usize },

    #[error("node {node} was assigned more than one row")]
    DuplicateRow { node: NodeId },

    #[error("link {link} was assigned more than one column")]
    DuplicateColumn { link: String },

    #[error("link {link} references node {node} with no assigned row")]
    UnplacedEndpoint { link: String, node: NodeId },
}
