//! Error types for network construction and simulation.

use thiserror::Error;

/// Result type alias for fallible operations of this crate.
pub type DynamicsResult<T> = Result<T, DynamicsError>;

/// Errors that can occur while building a network or running its dynamics.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DynamicsError {
    /// The offset table is empty, so it does not even describe zero nodes.
    #[error("invalid graph: the offset table must contain at least one entry")]
    EmptyOffsetTable,

    /// The first entry of the offset table is not zero.
    #[error("invalid graph: the offset table must start at 0, found {first}")]
    NonZeroFirstOffset { first: usize },

    /// The offset table decreases between two consecutive nodes.
    #[error("invalid graph: offsets of node {node} are decreasing ({begin} > {end})")]
    DecreasingOffsets {
        node: usize,
        begin: usize,
        end: usize,
    },

    /// The last offset disagrees with the size of the edge arrays.
    #[error("invalid graph: last offset is {last}, but there are {sources} sources and {weights} weights")]
    EdgeCountMismatch {
        last: usize,
        sources: usize,
        weights: usize,
    },

    /// An edge references a node outside of `[0, num_nodes)`.
    #[error("invalid graph: edge {edge} references node {source_node}, but there are only {num_nodes} nodes")]
    NodeOutOfRange {
        edge: usize,
        source_node: usize,
        num_nodes: usize,
    },

    /// A global state does not have one value per node of the graph.
    #[error("state has {actual} values, but the network has {expected} nodes")]
    StateLengthMismatch { expected: usize, actual: usize },

    /// The state vector is too wide to be encoded into a `StateId`.
    #[error("cannot encode a state of {width} nodes, at most {max} are supported")]
    StateWidthOverflow { width: usize, max: usize },

    /// The state identifier does not fit into the requested number of bits.
    #[error("state id {id} does not fit into {width} bits")]
    StateIdOutOfRange { id: u64, width: usize },

    /// A buffer required by the simulation could not be allocated.
    #[error("cannot allocate {requested} entries for the {buffer}")]
    AllocationFailed {
        buffer: &'static str,
        requested: usize,
    },

    /// There are not enough distinct global states to draw the requested initial states.
    #[error("cannot draw {requested} distinct initial states of {num_nodes} nodes")]
    TooFewDistinctStates { requested: usize, num_nodes: usize },

    /// Expression windows must contain at least one row.
    #[error("invalid expression window: {size} (must be >= 1)")]
    InvalidWindow { size: usize },

    /// A node name does not exist in the network.
    #[error("unknown node `{0}`")]
    UnknownNode(String),

    /// The textual network representation is malformed.
    #[error("parse error: {0}")]
    Parse(String),
}

