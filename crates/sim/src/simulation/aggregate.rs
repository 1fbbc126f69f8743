//! Ensemble reduction.

use crate::errors::ShapeError;
use crate::simulation::results::{MeanTrajectory, ReplicateResult};

/// Reduce an ensemble of trajectories to their arithmetic mean.
///
/// Each day/compartment cell of the result is the mean of that cell across
/// all replicates. An empty slice yields an empty mean.
///
/// # Errors
///
/// Returns [`ShapeError`] if any trajectory disagrees with the first on
/// length. The orchestrator runs every replicate for the same number of
/// days, so this is a defensive check only.
pub fn mean_trajectory(replicates: &[ReplicateResult]) -> Result<MeanTrajectory, ShapeError> {
    let Some(first) = replicates.first() else {
        return Ok(Vec::new());
    };
    let days = first.trajectory.len();

    for (index, replicate) in replicates.iter().enumerate() {
        if replicate.trajectory.len() != days {
            return Err(ShapeError {
                replicate: index,
                expected: days,
                found: replicate.trajectory.len(),
            });
        }
    }

    let mut mean = vec![[0.0f64; 4]; days];
    for replicate in replicates {
        for (day, counts) in replicate.trajectory.iter().enumerate() {
            for (slot, &value) in counts.as_array().iter().enumerate() {
                mean[day][slot] += value as f64;
            }
        }
    }
    let scale = replicates.len() as f64;
    for day in &mut mean {
        for cell in day {
            *cell /= scale;
        }
    }
    Ok(mean)
}
