use crate::bitvector::{BitVector, NetworkState};
use crate::dynamics::{majority_activation, SynchronousDynamics};
use crate::error::DynamicsResult;
use crate::{NodeId, PredecessorGraph};

impl<'a> SynchronousDynamics<'a> {
    pub fn new(graph: &'a PredecessorGraph) -> SynchronousDynamics<'a> {
        SynchronousDynamics { graph }
    }

    pub fn graph(&self) -> &'a PredecessorGraph {
        self.graph
    }

    /// Compute the next value of `node` from the `previous` global state.
    pub fn update_node(&self, node: NodeId, previous: &NetworkState) -> bool {
        majority_activation(
            previous.get(node.to_index()),
            previous,
            self.graph.predecessors(node),
            self.graph.weights(node),
        )
    }

    /// Compute one synchronous round: every node of `next` is computed from `previous` only.
    ///
    /// Fails if either state does not match the number of nodes of the graph.
    pub fn step_into(
        &self,
        previous: &NetworkState,
        next: &mut NetworkState,
    ) -> DynamicsResult<()> {
        self.graph.check_state(previous)?;
        self.graph.check_state(next)?;
        self.write_round(previous, next);
        Ok(())
    }

    /// Compute the synchronous successor of `state`.
    pub fn successor(&self, state: &NetworkState) -> DynamicsResult<NetworkState> {
        let mut next = state.clone();
        self.step_into(state, &mut next)?;
        Ok(next)
    }

    /// True if `state` is mapped onto itself by one synchronous round.
    pub fn is_fixed_point(&self, state: &NetworkState) -> DynamicsResult<bool> {
        self.graph.check_state(state)?;
        Ok(self
            .graph
            .nodes()
            .all(|node| self.update_node(node, state) == state.get(node.to_index())))
    }

    /// **(internal)** One synchronous round without length checks. Both states must have
    /// `num_nodes` values.
    pub(crate) fn write_round(&self, previous: &NetworkState, next: &mut NetworkState) {
        for node in self.graph.nodes() {
            next.set(node.to_index(), self.update_node(node, previous));
        }
    }
}
