//! Result types handed to downstream consumers.

use serde::Serialize;

use crate::errors::ShapeError;
use crate::simulation::aggregate;
use crate::state::{CompartmentCounts, Snapshot};

/// Day-indexed compartment counts for one replicate; entry 0 is day 0, so a
/// run of `num_days` days yields `num_days + 1` entries.
pub type Trajectory = Vec<CompartmentCounts>;

/// Ensemble mean per day in [S, I, E, R] order.
pub type MeanTrajectory = Vec<[f64; 4]>;

/// Output of a single stochastic replicate.
#[derive(Debug, Clone, Serialize)]
pub struct ReplicateResult {
    /// Seed this replicate's private RNG was created from
    pub seed: u64,
    /// Per-day compartment counts
    pub trajectory: Trajectory,
    /// Per-day node compartments, recorded only for the selected replicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<Vec<Snapshot>>,
}

/// Results of every replicate, in replicate-index order.
#[derive(Debug, Clone, Serialize)]
pub struct EnsembleResult {
    /// Base seed the per-replicate seeds were derived from
    pub base_seed: u64,
    /// One entry per replicate
    pub replicates: Vec<ReplicateResult>,
}

impl EnsembleResult {
    /// Number of replicates in the ensemble.
    pub fn num_replicates(&self) -> usize {
        self.replicates.len()
    }

    /// Arithmetic mean of all replicate trajectories.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the trajectories disagree on length; the
    /// orchestrator makes that unreachable.
    pub fn mean_trajectory(&self) -> Result<MeanTrajectory, ShapeError> {
        aggregate::mean_trajectory(&self.replicates)
    }
}
