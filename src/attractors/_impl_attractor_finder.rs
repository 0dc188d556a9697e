use crate::attractors::Attractor;
use crate::bitvector::NetworkState;
use crate::dynamics::{reserve_buffer, StateBuffer, SynchronousDynamics};
use crate::error::DynamicsResult;
use crate::{PredecessorGraph, StateId};
use fxhash::FxHashMap;
use tracing::{debug, trace};

/// Record the identifiers of `num_states` consecutive global states, starting with `state`.
///
/// Entry `i` of the result is the identifier of the state *before* round `i` is applied,
/// i.e. after `i` completed rounds; entry `0` identifies `state` itself. The identifier is
/// computed once per completed round.
///
/// On success, `state` is overwritten with the global state after `num_states` rounds.
/// On failure (invalid state length, more than `MAX_STATE_WIDTH` nodes, trace allocation),
/// `state` is left untouched.
pub fn attractor_trace(
    graph: &PredecessorGraph,
    state: &mut NetworkState,
    num_states: usize,
) -> DynamicsResult<Vec<StateId>> {
    graph.check_state(state)?;
    let mut id = StateId::encode(state)?;
    let mut attractor_id = reserve_buffer("attractor trace", num_states, id)?;
    debug!(
        num_nodes = graph.num_nodes(),
        num_states, "attractor_trace_start"
    );

    let dynamics = SynchronousDynamics::new(graph);
    let mut buffer = StateBuffer::new(graph, state.clone())?;
    for (i, entry) in attractor_id.iter_mut().enumerate() {
        *entry = id;
        buffer.advance(&dynamics);
        id = StateId::encode(buffer.current())?;
        if cfg!(feature = "print-progress") {
            trace!(step = i, state = %id, "attractor_trace_step");
        }
    }

    *state = buffer.into_current();
    debug!(final_state = %id, "attractor_trace_complete");
    Ok(attractor_id)
}

/// Follow the dynamics from `initial` until some global state is visited for the second time.
///
/// At most `max_steps` rounds are computed. Returns `None` if no state repeats within
/// this budget.
pub fn find_attractor(
    graph: &PredecessorGraph,
    initial: &NetworkState,
    max_steps: usize,
) -> DynamicsResult<Option<Attractor>> {
    graph.check_state(initial)?;
    StateId::encode(initial)?;
    debug!(
        num_nodes = graph.num_nodes(),
        max_steps, "find_attractor_start"
    );

    let dynamics = SynchronousDynamics::new(graph);
    let mut buffer = StateBuffer::new(graph, initial.clone())?;
    let mut visited: FxHashMap<StateId, usize> = FxHashMap::default();
    let mut trajectory: Vec<StateId> = Vec::new();
    loop {
        let id = StateId::encode(buffer.current())?;
        if let Some(first) = visited.get(&id) {
            let attractor = Attractor::new(*first, trajectory.split_off(*first));
            debug!(
                transient = attractor.transient(),
                period = attractor.period(),
                "attractor_found"
            );
            return Ok(Some(attractor));
        }
        visited.insert(id, buffer.rounds());
        trajectory.push(id);
        if buffer.rounds() == max_steps {
            debug!(max_steps, "find_attractor_budget_exhausted");
            return Ok(None);
        }
        buffer.advance(&dynamics);
        if cfg!(feature = "print-progress") {
            trace!(step = buffer.rounds(), visited = visited.len(), "find_attractor_step");
        }
    }
}

/// Find the first identifier of `trace` that occurs again later.
///
/// Returns `(first, repeat)`: the index of the first visit and the index of the earliest
/// repeated visit, so `repeat - first` is the period of the attractor and `first` is the
/// transient length.
pub fn first_repetition(trace: &[StateId]) -> Option<(usize, usize)> {
    let mut visited: FxHashMap<StateId, usize> = FxHashMap::default();
    for (i, id) in trace.iter().enumerate() {
        if let Some(first) = visited.insert(*id, i) {
            return Some((first, i));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::attractors::{attractor_trace, find_attractor, first_repetition};
    use crate::bitvector::{BitVector, NetworkState};
    use crate::error::DynamicsError;
    use crate::{PredecessorGraph, StateId};
    use pretty_assertions::assert_eq;

    fn ids(values: &[u64]) -> Vec<StateId> {
        values.iter().map(|v| StateId::from(*v)).collect()
    }

    /// `0 -| 1` and `1 -| 0`: two mutually inhibiting nodes.
    fn toggle_switch() -> PredecessorGraph {
        PredecessorGraph::from_edges(2, &[(0, 1, -1), (1, 0, -1)]).unwrap()
    }

    /// Node 2 is constantly active; node 0 copies node 1 and node 1 negates node 0.
    fn oscillator() -> PredecessorGraph {
        PredecessorGraph::from_edges(3, &[(1, 0, 2), (2, 0, -1), (0, 1, -2), (2, 1, 1)]).unwrap()
    }

    #[test]
    fn toggle_switch_trace_is_pinned() {
        let graph = toggle_switch();
        let mut state = NetworkState::from(vec![true, false]);
        let trace = attractor_trace(&graph, &mut state, 5).unwrap();
        // [1, 0] is a fixed point of the switch, with id 0b01.
        assert_eq!(ids(&[1, 1, 1, 1, 1]), trace);
        assert_eq!(NetworkState::from(vec![true, false]), state);

        let mut again = NetworkState::from(vec![true, false]);
        assert_eq!(trace, attractor_trace(&graph, &mut again, 5).unwrap());
    }

    #[test]
    fn trace_records_state_before_each_round() {
        let graph = PredecessorGraph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        let mut state = NetworkState::from(vec![true, false, false]);
        let trace = attractor_trace(&graph, &mut state, 5).unwrap();
        assert_eq!(ids(&[0b001, 0b011, 0b111, 0b111, 0b111]), trace);
        assert_eq!(NetworkState::from(vec![true; 3]), state);
        assert_eq!(Some((2, 3)), first_repetition(&trace));
    }

    #[test]
    fn trace_leaves_final_state_in_place() {
        let graph = oscillator();
        let mut state = NetworkState::from(vec![false, false, true]);
        let trace = attractor_trace(&graph, &mut state, 6).unwrap();
        assert_eq!(ids(&[4, 6, 7, 5, 4, 6]), trace);
        // Six rounds of a period-four cycle.
        assert_eq!(NetworkState::from(vec![true, true, true]), state);
        assert_eq!(Some((0, 4)), first_repetition(&trace));
    }

    #[test]
    fn empty_trace_does_not_touch_the_state() {
        let graph = oscillator();
        let mut state = NetworkState::from(vec![false, false, true]);
        assert!(attractor_trace(&graph, &mut state, 0).unwrap().is_empty());
        assert_eq!(NetworkState::from(vec![false, false, true]), state);
    }

    #[test]
    fn trace_rejects_invalid_input_before_mutation() {
        let graph = PredecessorGraph::empty(65);
        let mut state = NetworkState::from(vec![true; 65]);
        assert_eq!(
            Err(DynamicsError::StateWidthOverflow {
                width: 65,
                max: 64
            }),
            attractor_trace(&graph, &mut state, 3)
        );
        assert_eq!(NetworkState::from(vec![true; 65]), state);

        let mut short = NetworkState::empty(1);
        assert!(attractor_trace(&toggle_switch(), &mut short, 3).is_err());
    }

    #[test]
    fn find_period_four_cycle() {
        let graph = oscillator();
        let initial = NetworkState::from(vec![false, false, true]);
        let attractor = find_attractor(&graph, &initial, 100).unwrap().unwrap();
        assert_eq!(0, attractor.transient());
        assert_eq!(ids(&[4, 6, 7, 5]), attractor.cycle());
        assert_eq!(4, attractor.period());
        assert!(!attractor.is_fixed_point());
        assert!(attractor.contains(StateId::from(7)));
        assert_eq!(
            vec![true, true, true],
            attractor.states(3).unwrap()[2].values()
        );
    }

    #[test]
    fn find_fixed_point_after_transient() {
        let graph = PredecessorGraph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        let initial = NetworkState::from(vec![true, false, false]);
        let attractor = find_attractor(&graph, &initial, 10).unwrap().unwrap();
        assert_eq!(2, attractor.transient());
        assert_eq!(ids(&[7]), attractor.cycle());
        assert!(attractor.is_fixed_point());
    }

    #[test]
    fn find_respects_step_budget() {
        let graph = oscillator();
        let initial = NetworkState::from(vec![false, false, true]);
        assert_eq!(None, find_attractor(&graph, &initial, 3).unwrap());
        assert!(find_attractor(&graph, &initial, 4).unwrap().is_some());
        assert_eq!(None, find_attractor(&graph, &initial, 0).unwrap());
    }

    #[test]
    fn isolated_nodes_are_fixed_points() {
        let graph = PredecessorGraph::empty(4);
        let initial = NetworkState::from(vec![true, false, true, true]);
        let attractor = find_attractor(&graph, &initial, 1).unwrap().unwrap();
        assert_eq!(0, attractor.transient());
        assert_eq!(ids(&[0b1101]), attractor.cycle());
    }

    #[test]
    fn no_repetition_in_distinct_trace() {
        assert_eq!(None, first_repetition(&ids(&[1, 2, 3])));
        assert_eq!(None, first_repetition(&[]));
    }
}
