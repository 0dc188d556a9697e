//! Parameters of a repeated simulation experiment.
//!
//! A `SimulationConfig` describes the same experiment as one job of the batch runner:
//! how many random initial states are followed (`repeats`), for how many time points
//! each (`steps`), and the window over which node activity is aggregated.

use crate::error::DynamicsResult;
use crate::time_series::{stitch_series, to_expression, Expression, ExpressionNorm, TimeSeries};
use crate::PredecessorGraph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Configuration of a stitched simulation and its expression summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of time points recorded per initial state.
    pub steps: usize,
    /// Number of distinct random initial states.
    pub repeats: usize,
    /// Number of time points aggregated into one expression window.
    pub window: usize,
    /// Normalisation of the expression windows.
    pub norm: ExpressionNorm,
    /// Seed of the random generator. `None` draws a seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            repeats: 10,
            window: 5,
            norm: ExpressionNorm::Window,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Use a fixed `seed`, making the experiment reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// The random generator described by `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Simulate `repeats` distinct random initial states of `graph` for `steps` time points.
    pub fn run_series(&self, graph: &PredecessorGraph) -> DynamicsResult<TimeSeries> {
        info!(
            steps = self.steps,
            repeats = self.repeats,
            seed = ?self.seed,
            "simulation_start"
        );
        stitch_series(graph, self.repeats, self.steps, &mut self.rng())
    }

    /// Simulate the stitched series and aggregate it into windows of `window` time points.
    pub fn run_expression(&self, graph: &PredecessorGraph) -> DynamicsResult<Expression> {
        let series = self.run_series(graph)?;
        to_expression(&series, self.window, self.norm)
    }
}
