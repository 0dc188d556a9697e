//! Synchronous update semantics of a `PredecessorGraph`.
//!
//! Every round reads the *previous* global state and writes the *next* one. The two never
//! share storage: `SynchronousDynamics::step_into` takes them as separate borrows and
//! `StateBuffer` keeps two slots that are swapped after each round.

use crate::bitvector::{BitVector, NetworkState};
use crate::{NodeId, PredecessorGraph};

/// **(internal)** Implementation of the ping-pong `StateBuffer`.
mod _impl_state_buffer;
/// **(internal)** Implementation of `SynchronousDynamics`.
mod _impl_synchronous_dynamics;

pub(crate) use _impl_state_buffer::reserve_buffer;

/// The synchronous weighted-majority dynamics of a borrowed `PredecessorGraph`.
#[derive(Clone, Copy, Debug)]
pub struct SynchronousDynamics<'a> {
    graph: &'a PredecessorGraph,
}

/// Two state slots used to advance a network without updating it in place.
///
/// `current` is the state after the last completed round. `advance` computes the next round
/// into the spare slot and then swaps the slots, so no state is ever copied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateBuffer {
    current: NetworkState,
    spare: NetworkState,
    rounds: usize,
}

/// Compute the next value of a single node under the weighted majority rule.
///
/// The sum of `previous[predecessor] * weight` over all incoming edges decides the result:
/// a positive sum activates the node, a negative sum deactivates it and a zero sum
/// (including a node with no predecessors) keeps the `current` value.
///
/// `predecessors` and `weights` are parallel slices and must only reference nodes of
/// `previous`.
pub fn majority_activation(
    current: bool,
    previous: &NetworkState,
    predecessors: &[NodeId],
    weights: &[i32],
) -> bool {
    debug_assert_eq!(predecessors.len(), weights.len());
    let sum: i64 = predecessors
        .iter()
        .zip(weights)
        .filter(|(source, _)| previous.get(source.to_index()))
        .map(|(_, weight)| i64::from(*weight))
        .sum();
    match sum {
        s if s > 0 => true,
        s if s < 0 => false,
        _ => current,
    }
}
