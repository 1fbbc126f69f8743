//! Daily SEIR transition engine.
//!
//! This module provides the per-day stochastic sweep and the [`Replicate`]
//! that drives it day by day over a shared contact graph with a private
//! node-state arena.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::errors::{SimulationError, StateError};
use crate::network::ContactGraph;
use crate::simulation::results::ReplicateResult;
use crate::simulation::{SeedPolicy, SeedingConfig, TransitionConfig};
use crate::state::{Compartment, CompartmentCounts, CountDelta, StateStore};

/// A single stochastic replicate.
///
/// Owns a private [`StateStore`] and RNG while borrowing the contact graph
/// immutably, so independently seeded replicates can run on parallel
/// workers without synchronization.
#[derive(Debug)]
pub struct Replicate<'g> {
    graph: &'g ContactGraph,
    transition: TransitionConfig,
    store: StateStore,
    counts: CompartmentCounts,
    day: usize,
    seed: u64,
    rng: Xoshiro256PlusPlus,
}

impl<'g> Replicate<'g> {
    /// Create a freshly seeded replicate.
    ///
    /// Every node starts susceptible; `seeding.initial_exposed` draws are
    /// then marked exposed according to the seed policy, and the day-0
    /// counts are tallied from the resulting store.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`](crate::errors::ConfigurationError)
    /// if the transition or seeding parameters leave their domains.
    pub fn new(
        graph: &'g ContactGraph,
        transition: TransitionConfig,
        seeding: SeedingConfig,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        transition.validate()?;
        seeding.validate(graph.node_count())?;

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut store = StateStore::new(graph.node_count());
        for node in draw_seed_nodes(graph.node_count(), &seeding, &mut rng) {
            // Under WithReplacement the same node can be drawn twice; the
            // second draw finds it already exposed and is a no-op.
            if store.compartment(node) == Compartment::S {
                store.expose(node)?;
            }
        }
        let counts = store.census();

        Ok(Self {
            graph,
            transition,
            store,
            counts,
            day: 0,
            seed,
            rng,
        })
    }

    /// The current simulated day (0 before any step).
    pub fn day(&self) -> usize {
        self.day
    }

    /// The current day's compartment counts.
    pub fn counts(&self) -> CompartmentCounts {
        self.counts
    }

    /// Read-only access to the node-state arena.
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Seed this replicate's RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance all nodes by one day.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if an internal bookkeeping invariant breaks;
    /// fatal, never retried.
    pub fn step(&mut self) -> Result<CompartmentCounts, StateError> {
        self.counts = advance_day(
            self.graph,
            &mut self.store,
            self.counts,
            &self.transition,
            &mut self.rng,
        )?;
        self.day += 1;
        Ok(self.counts)
    }

    /// Run for `num_days` days.
    ///
    /// Returns the full trajectory (day 0 first, `num_days + 1` entries)
    /// and, when `record_snapshots` is set, one node-compartment snapshot
    /// per day.
    pub fn run(
        mut self,
        num_days: usize,
        record_snapshots: bool,
    ) -> Result<ReplicateResult, SimulationError> {
        let mut trajectory = Vec::with_capacity(num_days + 1);
        trajectory.push(self.counts);

        let mut snapshots = record_snapshots.then(|| {
            let mut days = Vec::with_capacity(num_days + 1);
            days.push(self.store.snapshot());
            days
        });

        for _ in 0..num_days {
            let counts = self.step()?;
            trajectory.push(counts);
            if let Some(days) = snapshots.as_mut() {
                days.push(self.store.snapshot());
            }
        }

        Ok(ReplicateResult {
            seed: self.seed,
            trajectory,
            snapshots,
        })
    }
}

/// Pick the node ids to mark exposed on day 0.
fn draw_seed_nodes<R: Rng + ?Sized>(
    population: usize,
    seeding: &SeedingConfig,
    rng: &mut R,
) -> Vec<usize> {
    if seeding.initial_exposed == 0 {
        return Vec::new();
    }
    match seeding.policy {
        SeedPolicy::WithReplacement => (0..seeding.initial_exposed)
            .map(|_| rng.random_range(0..population))
            .collect(),
        SeedPolicy::WithoutReplacement => {
            rand::seq::index::sample(rng, population, seeding.initial_exposed)
                .into_iter()
                .collect()
        }
    }
}

/// Advance every node by one day against a frozen prior-day snapshot.
///
/// All decisions read the snapshot, never same-day updates, so the result
/// is independent of node iteration order:
///
/// - S: count prior-day infectious neighbors `m`, then one Bernoulli trial
///   with success probability `1 - exp(-transmission * m)`. Every
///   susceptible node consumes exactly one uniform draw per day, keeping
///   the stream layout independent of neighborhood state.
/// - E: the dwell advances with the day; the node turns infectious the day
///   its total time in E reaches the latent period.
/// - I: recovery threshold checked against the prior-day dwell; below it,
///   the dwell advances instead.
/// - R: absorbing.
///
/// The day's counts are the previous counts plus the accumulated unit
/// deltas, cross-checked to still sum to the population.
pub fn advance_day<R: Rng + ?Sized>(
    graph: &ContactGraph,
    store: &mut StateStore,
    counts: CompartmentCounts,
    transition: &TransitionConfig,
    rng: &mut R,
) -> Result<CompartmentCounts, StateError> {
    let frozen = store.snapshot();
    let prior = frozen.compartments();
    let mut delta = CountDelta::default();

    for node in 0..store.len() {
        match prior[node] {
            Compartment::S => {
                let infectious = graph
                    .neighbors(node)
                    .iter()
                    .filter(|&&neighbor| prior[neighbor].is_infectious())
                    .count();
                let pressure = 1.0 - (-transition.transmission * infectious as f64).exp();
                if rng.random::<f64>() < pressure {
                    store.expose(node)?;
                    delta.record(Compartment::S, Compartment::E);
                }
            }
            Compartment::E => {
                if store.node(node).exposed_dwell() + 1 >= transition.latent_period {
                    store.begin_infectious(node)?;
                    delta.record(Compartment::E, Compartment::I);
                } else {
                    store.tick_exposed(node)?;
                }
            }
            Compartment::I => {
                if store.node(node).infectious_dwell() >= transition.infectious_period {
                    store.recover(node)?;
                    delta.record(Compartment::I, Compartment::R);
                } else {
                    store.tick_infectious(node)?;
                }
            }
            Compartment::R => {}
        }
    }

    let next = counts.apply(&delta)?;
    if next.total() != store.len() as u64 {
        return Err(StateError::CountMismatch {
            sum: next.total(),
            population: store.len() as u64,
        });
    }
    Ok(next)
}
