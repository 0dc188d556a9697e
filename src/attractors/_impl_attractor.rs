use crate::attractors::Attractor;
use crate::bitvector::NetworkState;
use crate::error::DynamicsResult;
use crate::StateId;

impl Attractor {
    pub(crate) fn new(transient: usize, cycle: Vec<StateId>) -> Attractor {
        Attractor { transient, cycle }
    }

    /// Number of rounds needed to reach the first state of the cycle.
    pub fn transient(&self) -> usize {
        self.transient
    }

    /// States of the cycle, starting with the first one that was reached.
    pub fn cycle(&self) -> &[StateId] {
        &self.cycle
    }

    pub fn period(&self) -> usize {
        self.cycle.len()
    }

    pub fn is_fixed_point(&self) -> bool {
        self.cycle.len() == 1
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.cycle.contains(&id)
    }

    /// Decode the states of the cycle for a network of `num_nodes` nodes.
    pub fn states(&self, num_nodes: usize) -> DynamicsResult<Vec<NetworkState>> {
        self.cycle.iter().map(|id| id.decode(num_nodes)).collect()
    }
}
