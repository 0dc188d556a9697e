use crate::error::{DynamicsError, DynamicsResult};
use crate::time_series::{Expression, ExpressionNorm, TimeSeries};
use tracing::debug;

/// Compute the activity of every node within consecutive windows of `window` rows,
/// normalised according to `norm`.
///
/// Rows that do not fill a complete window at the end of the series are ignored. A window
/// (or series) without any activity has a zero denominator, so its entries are `NaN`.
pub fn to_expression(
    series: &TimeSeries,
    window: usize,
    norm: ExpressionNorm,
) -> DynamicsResult<Expression> {
    if window == 0 {
        return Err(DynamicsError::InvalidWindow { size: window });
    }
    let num_nodes = series.num_nodes();
    let num_windows = series.num_rows() / window;
    debug!(num_nodes, num_windows, window, ?norm, "to_expression");

    let mut values = vec![0.0; num_nodes * num_windows];
    for (t, row) in series.rows().take(num_windows * window).enumerate() {
        let w = t / window;
        for (node, value) in row.iter().enumerate() {
            values[node * num_windows + w] += f64::from(*value);
        }
    }

    match norm {
        ExpressionNorm::Window => {
            for w in 0..num_windows {
                let total: f64 = (0..num_nodes).map(|n| values[n * num_windows + w]).sum();
                for n in 0..num_nodes {
                    values[n * num_windows + w] /= total;
                }
            }
        }
        ExpressionNorm::Total => {
            let total: f64 = series.as_slice().iter().map(|v| f64::from(*v)).sum();
            for value in values.iter_mut() {
                *value /= total;
            }
        }
    }

    Ok(Expression {
        num_nodes,
        num_windows,
        values,
    })
}

impl Expression {
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_windows(&self) -> usize {
        self.num_windows
    }

    /// Relative activity of `node` in window `window`.
    pub fn get(&self, node: usize, window: usize) -> f64 {
        assert!(window < self.num_windows, "Window {} out of range.", window);
        self.values[node * self.num_windows + window]
    }

    /// Relative activity of `node` in all windows.
    pub fn node_profile(&self, node: usize) -> &[f64] {
        &self.values[node * self.num_windows..(node + 1) * self.num_windows]
    }

    /// Relative activity of all nodes within `window`.
    pub fn window_profile(&self, window: usize) -> Vec<f64> {
        (0..self.num_nodes).map(|n| self.get(n, window)).collect()
    }

    /// The whole `num_nodes × num_windows` row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DynamicsError;
    use crate::time_series::{to_expression, ExpressionNorm, TimeSeries};

    /// Two nodes over six time points.
    fn series() -> TimeSeries {
        #[rustfmt::skip]
        let data = vec![
            1, 0,
            1, 1,
            0, 1,
            0, 1,
            1, 1,
            0, 0,
        ];
        TimeSeries::from_raw(2, 6, data)
    }

    #[test]
    fn window_normalisation() {
        let expression = to_expression(&series(), 2, ExpressionNorm::Window).unwrap();
        assert_eq!(2, expression.num_nodes());
        assert_eq!(3, expression.num_windows());
        // Window 0: node 0 twice, node 1 once.
        assert_eq!(&[2.0 / 3.0, 0.0, 0.5], expression.node_profile(0));
        assert_eq!(&[1.0 / 3.0, 1.0, 0.5], expression.node_profile(1));
        for w in 0..3 {
            let sum: f64 = expression.window_profile(w).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn total_normalisation_and_incomplete_window() {
        let expression = to_expression(&series(), 4, ExpressionNorm::Total).unwrap();
        // A single window of rows 0..4; the last two rows are dropped.
        assert_eq!(1, expression.num_windows());
        assert_eq!(2.0 / 7.0, expression.get(0, 0));
        assert_eq!(3.0 / 7.0, expression.get(1, 0));
    }

    #[test]
    fn windows_of_three_and_inactive_window() {
        let expression = to_expression(&series(), 3, ExpressionNorm::Window).unwrap();
        assert_eq!(vec![0.5, 0.5], expression.window_profile(0));
        assert_eq!(vec![1.0 / 3.0, 2.0 / 3.0], expression.window_profile(1));
        let quiet = TimeSeries::from_raw(2, 2, vec![0; 4]);
        let expression = to_expression(&quiet, 1, ExpressionNorm::Window).unwrap();
        assert!(expression.as_slice().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn zero_window_is_rejected() {
        assert_eq!(
            Err(DynamicsError::InvalidWindow { size: 0 }),
            to_expression(&series(), 0, ExpressionNorm::Total)
        );
    }
}
