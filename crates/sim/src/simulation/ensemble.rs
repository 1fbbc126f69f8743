//! Replicate orchestration.
//!
//! An [`Ensemble`] owns one immutable contact graph plus validated
//! parameters and runs many independent replicates over it. Replicates
//! share the graph read-only and otherwise hold no mutable state in
//! common, so they execute on parallel workers with nothing to
//! synchronize beyond the final collection into an [`EnsembleResult`].

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::errors::SimulationError;
use crate::network::ContactGraph;
use crate::simulation::engine::Replicate;
use crate::simulation::results::{EnsembleResult, ReplicateResult};
use crate::simulation::Configuration;

/// One experiment: a built contact graph plus the full parameter set.
#[derive(Debug, Clone)]
pub struct Ensemble {
    graph: ContactGraph,
    config: Configuration,
}

impl Ensemble {
    /// Validate `config` and build the contact graph.
    ///
    /// The graph RNG is seeded from the configured base seed, so the whole
    /// experiment (topology included) reproduces from one number.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` for parameters outside their domains
    /// or a `ConstructionError` if the graph cannot be built.
    pub fn new(config: Configuration) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut rng = match config.run.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        let graph = ContactGraph::power_law_cluster(
            config.network.total_units,
            config.network.average_contacts,
            config.network.clustering,
            &mut rng,
        )?;
        Ok(Self { graph, config })
    }

    /// Wrap an already-built graph.
    ///
    /// The seeding constraint is validated against the graph's actual node
    /// count rather than the configured `total_units`.
    pub fn with_graph(graph: ContactGraph, config: Configuration) -> Result<Self, SimulationError> {
        config.transition.validate()?;
        config.seeding.validate(graph.node_count())?;
        config.run.validate()?;
        Ok(Self { graph, config })
    }

    /// The shared contact graph.
    pub fn graph(&self) -> &ContactGraph {
        &self.graph
    }

    /// The full parameter set.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Run all replicates.
    pub fn run(&self) -> Result<EnsembleResult, SimulationError> {
        self.run_with(|_| {})
    }

    /// Run all replicates, invoking `observer` with the replicate index as
    /// each one completes (out of order under parallel execution).
    pub fn run_with<F>(&self, observer: F) -> Result<EnsembleResult, SimulationError>
    where
        F: Fn(usize) + Sync,
    {
        let base_seed = match self.config.run.seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };

        // One pre-drawn seed per replicate: parallel workers never touch a
        // shared random stream, and the whole ensemble reproduces from
        // `base_seed` alone.
        let mut master = Xoshiro256PlusPlus::seed_from_u64(base_seed);
        let seeds: Vec<u64> = (0..self.config.run.num_simulations)
            .map(|_| master.random())
            .collect();

        let replicates: Result<Vec<ReplicateResult>, SimulationError> = seeds
            .par_iter()
            .enumerate()
            .map(|(index, &seed)| {
                let record = self.config.run.snapshot_replicate == Some(index);
                let result = Replicate::new(
                    &self.graph,
                    self.config.transition,
                    self.config.seeding,
                    seed,
                )?
                .run(self.config.run.num_days, record);
                observer(index);
                result
            })
            .collect();

        Ok(EnsembleResult {
            base_seed,
            replicates: replicates?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{NetworkConfig, RunConfig, SeedPolicy, SeedingConfig, TransitionConfig};

    fn configuration(seed: u64) -> Configuration {
        Configuration {
            network: NetworkConfig::new(60, 3, 0.2),
            transition: TransitionConfig::new(0.1, 2, 4),
            seeding: SeedingConfig::new(2, SeedPolicy::WithReplacement),
            run: RunConfig::new(8, 30, Some(seed)),
        }
    }

    #[test]
    fn test_runs_requested_replicate_count() {
        let ensemble = Ensemble::new(configuration(9)).unwrap();
        let result = ensemble.run().unwrap();

        assert_eq!(result.num_replicates(), 8);
        assert_eq!(result.base_seed, 9);
        for replicate in &result.replicates {
            assert_eq!(replicate.trajectory.len(), 31);
        }
    }

    #[test]
    fn test_reproducible_from_base_seed() {
        let a = Ensemble::new(configuration(42)).unwrap().run().unwrap();
        let b = Ensemble::new(configuration(42)).unwrap().run().unwrap();

        for (left, right) in a.replicates.iter().zip(&b.replicates) {
            assert_eq!(left.seed, right.seed);
            assert_eq!(left.trajectory, right.trajectory);
        }
    }

    #[test]
    fn test_replicates_draw_independent_seeds() {
        let result = Ensemble::new(configuration(7)).unwrap().run().unwrap();
        let mut seeds: Vec<u64> = result.replicates.iter().map(|r| r.seed).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), result.num_replicates());
    }

    #[test]
    fn test_snapshots_only_for_selected_replicate() {
        let mut config = configuration(11);
        config.run.snapshot_replicate = Some(3);

        let result = Ensemble::new(config).unwrap().run().unwrap();
        for (index, replicate) in result.replicates.iter().enumerate() {
            assert_eq!(replicate.snapshots.is_some(), index == 3);
        }
    }

    #[test]
    fn test_with_graph_validates_against_actual_node_count() {
        let graph = ContactGraph::complete(3);
        let mut config = configuration(1);
        config.seeding.initial_exposed = 4;

        assert!(Ensemble::with_graph(graph, config).is_err());
    }

    #[test]
    fn test_observer_sees_every_replicate() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let ensemble = Ensemble::new(configuration(5)).unwrap();
        let completed = AtomicUsize::new(0);
        ensemble
            .run_with(|_| {
                completed.fetch_add(1, Ordering::Relaxed);
            })
            .unwrap();

        assert_eq!(completed.load(Ordering::Relaxed), 8);
    }
}
