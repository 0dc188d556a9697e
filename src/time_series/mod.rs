//! Recording trajectories of global states and summarising them as expression profiles.
//!
//! A `TimeSeries` stores one row of `0`/`1` values per time point, with row `0` being the
//! initial state. Several series started from distinct random states can be stitched
//! together (`stitch_series`) and then aggregated into per-window node activity
//! (`to_expression`).

/// **(internal)** Implementation of `to_expression` and `Expression`.
mod _impl_expression;
/// **(internal)** Implementation of the trajectory recorders.
mod _impl_recorder;
/// **(internal)** Utility methods of `TimeSeries`.
mod _impl_time_series;

pub use _impl_expression::to_expression;
pub use _impl_recorder::{random_state, stitch_series, time_series};

/// A flat row-major buffer of `num_rows × num_nodes` node values.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TimeSeries {
    num_nodes: usize,
    num_rows: usize,
    data: Vec<u8>,
}

/// How the activity of a node within a window is normalised.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExpressionNorm {
    /// Divide by the total activity of all nodes within the same window.
    #[default]
    Window,
    /// Divide by the total activity of all nodes in the whole series.
    Total,
}

/// Relative activity of every node in consecutive non-overlapping windows of a `TimeSeries`.
///
/// Stored row-major as `num_nodes × num_windows`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    num_nodes: usize,
    num_windows: usize,
    values: Vec<f64>,
}
