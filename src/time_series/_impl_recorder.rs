use crate::bitvector::{BitVector, NetworkState};
use crate::dynamics::{reserve_buffer, StateBuffer, SynchronousDynamics};
use crate::error::{DynamicsError, DynamicsResult};
use crate::time_series::TimeSeries;
use crate::{PredecessorGraph, StateId};
use fxhash::FxHashSet;
use rand::Rng;
use tracing::{debug, trace};

/// Record `time` consecutive global states of `graph`, starting with `initial`.
///
/// Row `0` is `initial`, row `t` is the state after `t` synchronous rounds. Each row is
/// written once, after its round is complete.
pub fn time_series(
    graph: &PredecessorGraph,
    initial: &NetworkState,
    time: usize,
) -> DynamicsResult<TimeSeries> {
    graph.check_state(initial)?;
    let num_nodes = graph.num_nodes();
    let mut series = reserve_buffer("trajectory", buffer_len(time, num_nodes)?, 0u8)?;
    debug!(num_nodes, time, "time_series_start");
    record_into(graph, initial, &mut series, time)?;
    debug!(rows = time, "time_series_complete");
    Ok(TimeSeries::from_raw(num_nodes, time, series))
}

/// Draw a uniformly random global state of `num_nodes` nodes.
pub fn random_state<R: Rng + ?Sized>(num_nodes: usize, rng: &mut R) -> NetworkState {
    let values: Vec<bool> = (0..num_nodes).map(|_| rng.gen()).collect();
    NetworkState::from(values)
}

/// Concatenate `repeats` series of `steps` rows each, every one started from a distinct
/// random initial state.
///
/// The result has `repeats * steps` rows. Fails with `TooFewDistinctStates` if the network
/// does not have `repeats` distinct states.
pub fn stitch_series<R: Rng + ?Sized>(
    graph: &PredecessorGraph,
    repeats: usize,
    steps: usize,
    rng: &mut R,
) -> DynamicsResult<TimeSeries> {
    let num_nodes = graph.num_nodes();
    if let Some(count) = StateId::state_count(num_nodes) {
        if u64::try_from(repeats).map_or(true, |repeats| repeats > count) {
            return Err(DynamicsError::TooFewDistinctStates {
                requested: repeats,
                num_nodes,
            });
        }
    }
    let num_rows = repeats
        .checked_mul(steps)
        .ok_or(DynamicsError::AllocationFailed {
            buffer: "stitched trajectory",
            requested: usize::MAX,
        })?;
    let row_len = buffer_len(steps, num_nodes)?;
    let mut series = reserve_buffer("stitched trajectory", buffer_len(num_rows, num_nodes)?, 0u8)?;
    debug!(num_nodes, repeats, steps, "stitch_series_start");

    let mut known_states: FxHashSet<Vec<u8>> = FxHashSet::default();
    for i in 0..repeats {
        let mut initial = random_state(num_nodes, rng);
        while !known_states.insert(initial.to_bytes()) {
            initial = random_state(num_nodes, rng);
        }
        if cfg!(feature = "print-progress") {
            trace!(repeat = i, initial = ?initial, "stitch_series_repeat");
        }
        record_into(graph, &initial, &mut series[i * row_len..(i + 1) * row_len], steps)?;
    }

    debug!(rows = num_rows, "stitch_series_complete");
    Ok(TimeSeries::from_raw(num_nodes, num_rows, series))
}

/// **(internal)** Size of a `rows × num_nodes` buffer, or an allocation error if it
/// does not fit into `usize`.
fn buffer_len(rows: usize, num_nodes: usize) -> DynamicsResult<usize> {
    rows.checked_mul(num_nodes)
        .ok_or(DynamicsError::AllocationFailed {
            buffer: "trajectory",
            requested: usize::MAX,
        })
}

/// **(internal)** Write `time` rows of the trajectory of `initial` into `rows`,
/// which must hold exactly `time * num_nodes` entries.
fn record_into(
    graph: &PredecessorGraph,
    initial: &NetworkState,
    rows: &mut [u8],
    time: usize,
) -> DynamicsResult<()> {
    if time == 0 {
        return Ok(());
    }
    let num_nodes = graph.num_nodes();
    let dynamics = SynchronousDynamics::new(graph);
    let mut buffer = StateBuffer::new(graph, initial.clone())?;
    initial.write_bytes(&mut rows[..num_nodes]);
    for t in 1..time {
        let state = buffer.advance(&dynamics);
        state.write_bytes(&mut rows[t * num_nodes..(t + 1) * num_nodes]);
    }
    Ok(())
}
