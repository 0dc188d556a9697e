use crate::bitvector::NetworkState;
use crate::dynamics::{StateBuffer, SynchronousDynamics};
use crate::error::{DynamicsError, DynamicsResult};
use crate::PredecessorGraph;

impl StateBuffer {
    /// Create a buffer for advancing `initial` through the dynamics of `graph`.
    ///
    /// Fails if `initial` does not have one value per node.
    pub fn new(graph: &PredecessorGraph, initial: NetworkState) -> DynamicsResult<StateBuffer> {
        graph.check_state(&initial)?;
        Ok(StateBuffer {
            spare: initial.clone(),
            current: initial,
            rounds: 0,
        })
    }

    /// The state after the last completed round.
    pub fn current(&self) -> &NetworkState {
        &self.current
    }

    /// The number of rounds completed so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Compute one synchronous round and make its result the `current` state.
    ///
    /// `dynamics` must belong to the graph this buffer was created for.
    pub fn advance(&mut self, dynamics: &SynchronousDynamics) -> &NetworkState {
        dynamics.write_round(&self.current, &mut self.spare);
        std::mem::swap(&mut self.current, &mut self.spare);
        self.rounds += 1;
        &self.current
    }

    /// Consume the buffer and return the `current` state.
    pub fn into_current(self) -> NetworkState {
        self.current
    }
}

/// **(internal)** Allocate an output buffer of `len` copies of `value`, reporting a failed
/// reservation as `DynamicsError::AllocationFailed` instead of aborting.
pub(crate) fn reserve_buffer<T: Clone>(
    buffer: &'static str,
    len: usize,
    value: T,
) -> DynamicsResult<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| DynamicsError::AllocationFailed {
            buffer,
            requested: len,
        })?;
    data.resize(len, value);
    Ok(data)
}
