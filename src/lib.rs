//! A library for simulating synchronous dynamics of Boolean regulatory networks.
//!
//! A network is a directed graph of nodes, each holding a single Boolean value. In every
//! discrete time step, all nodes are updated in parallel using a weighted majority rule over
//! their predecessors: a node becomes active when the weighted sum of its active regulators
//! is positive, inactive when the sum is negative, and keeps its value otherwise.
//!
//! The library provides two analyses:
//!  - `attractors`: follow the global states from an initial configuration until a state
//!    repeats (and record a fixed-length trace of state identifiers).
//!  - `time_series`: record the full trajectory of global states for a number of steps.
//!
//! ```rust
//! use boolean_dynamics::{NetworkState, RegulatoryNetwork};
//! use boolean_dynamics::time_series::time_series;
//! use std::convert::TryFrom;
//!
//! let network = RegulatoryNetwork::try_from("a -> b\nb -> c\nc -> a").unwrap();
//! let initial = NetworkState::from(vec![true, false, false]);
//! let series = time_series(network.as_graph(), &initial, 4).unwrap();
//! assert_eq!(&[1u8, 1, 1], series.row(3));
//! ```

#[macro_use]
extern crate lazy_static;

use fxhash::FxHashMap;
use std::iter::Map;
use std::ops::Range;

pub mod attractors;
pub mod bitvector;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod time_series;

/// **(internal)** Utility methods for `NodeId`.
mod _impl_node_id;
/// **(internal)** Construction, validation and inspection of `PredecessorGraph`.
mod _impl_predecessor_graph;
/// **(internal)** `PredecessorGraph` to regulation string.
mod _impl_predecessor_graph_display;
/// **(internal)** Utility methods for `Regulation`.
mod _impl_regulation;
/// **(internal)** Implements the textual format of `RegulatoryNetwork`.
mod _impl_regulatory_network;
/// **(internal)** Converting between `StateId` and `NetworkState`.
mod _impl_state_id;

pub use bitvector::{BitVector, NetworkState};
pub use error::{DynamicsError, DynamicsResult};

/// The largest number of nodes whose global state can be encoded into a `StateId`.
pub const MAX_STATE_WIDTH: usize = 64;

/// A type-safe index of a node inside a `PredecessorGraph`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// A single incoming edge of a node: the `source` node and the signed `weight` of its
/// influence.
///
/// Positive weights are activating, negative weights are inhibiting. The magnitude scales
/// the contribution of the `source` to the majority sum of the target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Regulation {
    source: NodeId,
    weight: i32,
}

/// A static directed graph with signed edge weights in a compressed
/// predecessor-oriented layout.
///
/// For every node `n`, the incoming edges are stored in the slice
/// `inc_ptr[n]..inc_ptr[n + 1]` of the two parallel arrays `inc_adj` (source nodes) and
/// `regulation` (weights). Once constructed, the layout is validated and never mutated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredecessorGraph {
    inc_adj: Vec<NodeId>,
    regulation: Vec<i32>,
    inc_ptr: Vec<usize>,
}

/// A `PredecessorGraph` together with the names of its nodes.
///
/// A regulatory network can be described using a simple string format. In this format,
/// each line represents a regulation or a comment (starting with `#`).
///
/// Regulations are written as `"source 'arrow' target"`. The arrow is either `->`
/// (activation, weight `+1`), `-|` (inhibition, weight `-1`), or one of these with an
/// explicit magnitude, e.g. `-3>` (weight `+3`) or `-2|` (weight `-2`).
///
/// Example of a `RegulatoryNetwork`:
///
/// ```rg
///  # Regulators of a
///  b -| a
///
///  # Regulators of b
///  a -> b
///  b -2| b
/// ```
///
/// Nodes receive their `NodeId`s in the lexicographic order of their names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegulatoryNetwork {
    graph: PredecessorGraph,
    names: Vec<String>,
    name_to_index: FxHashMap<String, NodeId>,
}

/// A unique integer encoding of a full `NetworkState`. Node `0` is the least significant bit.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StateId(u64);

/// An iterator over all `NodeId`s of a `PredecessorGraph`.
pub type NodeIdIterator = Map<Range<usize>, fn(usize) -> NodeId>;
