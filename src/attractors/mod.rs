//! Following the synchronous dynamics of a network until a global state repeats.
//!
//! Since the state space is finite and the dynamics deterministic, every trajectory
//! eventually enters a cycle of states (an *attractor*). Two drivers are provided:
//!
//!  - `attractor_trace` records the `StateId` of a fixed number of consecutive states,
//!    leaving the detection of repetitions to the caller (see `first_repetition`).
//!  - `find_attractor` stops as soon as a state is visited for the second time and returns
//!    the transient length together with the states of the cycle.

use crate::StateId;

/// **(internal)** Utility methods of `Attractor`.
mod _impl_attractor;
/// **(internal)** Implementation of the attractor drivers.
mod _impl_attractor_finder;

pub use _impl_attractor_finder::{attractor_trace, find_attractor, first_repetition};

/// A cycle of global states reached from some initial state.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Attractor {
    /// Number of rounds before the trajectory first enters the cycle.
    transient: usize,
    /// States of the cycle, in the order in which they are visited.
    cycle: Vec<StateId>,
}
