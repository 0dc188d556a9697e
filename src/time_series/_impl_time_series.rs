use crate::bitvector::NetworkState;
use crate::time_series::TimeSeries;

impl TimeSeries {
    /// **(internal)** Wrap an already filled buffer. `data` must hold
    /// `num_rows * num_nodes` entries.
    pub(crate) fn from_raw(num_nodes: usize, num_rows: usize, data: Vec<u8>) -> TimeSeries {
        debug_assert_eq!(num_nodes * num_rows, data.len());
        TimeSeries {
            num_nodes,
            num_rows,
            data,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of recorded time points (including the initial state).
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Values of all nodes at time point `t`.
    pub fn row(&self, t: usize) -> &[u8] {
        &self.data[t * self.num_nodes..(t + 1) * self.num_nodes]
    }

    /// The global state at time point `t`.
    pub fn row_state(&self, t: usize) -> NetworkState {
        NetworkState::from_bytes(self.row(t))
    }

    /// Value of `node` at time point `t`.
    pub fn get(&self, t: usize, node: usize) -> bool {
        assert!(node < self.num_nodes, "Node {} out of range.", node);
        self.data[t * self.num_nodes + node] != 0
    }

    /// Values of one node over all time points.
    pub fn node_activity(&self, node: usize) -> Vec<u8> {
        assert!(node < self.num_nodes, "Node {} out of range.", node);
        (0..self.num_rows)
            .map(|t| self.data[t * self.num_nodes + node])
            .collect()
    }

    /// Iterate over all rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.num_rows).map(move |t| self.row(t))
    }

    /// The whole row-major buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
