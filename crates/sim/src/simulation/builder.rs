//! Builder pattern for creating ensembles.
//!
//! Provides a fluent API for configuring an experiment with sensible
//! defaults and comprehensive validation.

use crate::errors::{ConfigurationError, SimulationError};
use crate::simulation::{
    Configuration, Ensemble, NetworkConfig, RunConfig, SeedPolicy, SeedingConfig, TransitionConfig,
};

/// Builder for constructing [`Ensemble`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use epinet_sim::simulation::SimulationBuilder;
///
/// let ensemble = SimulationBuilder::new()
///     .population(500)
///     .contacts(4)
///     .clustering(0.3)
///     .transmission(0.05)
///     .latent_period(3)
///     .infectious_period(7)
///     .initial_exposed(5)
///     .simulations(20)
///     .days(90)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = ensemble.run().unwrap();
/// assert_eq!(result.num_replicates(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    population: Option<usize>,
    contacts: Option<usize>,
    days: Option<usize>,

    // Optional parameters with defaults
    clustering: f64,
    transmission: f64,
    latent_period: u32,
    infectious_period: u32,
    initial_exposed: usize,
    seed_policy: SeedPolicy,
    simulations: usize,
    seed: Option<u64>,
    snapshot_replicate: Option<usize>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            population: None,
            contacts: None,
            days: None,
            clustering: 0.0,
            transmission: 0.0,
            latent_period: 0,
            infectious_period: 0,
            initial_exposed: 0,
            seed_policy: SeedPolicy::default(),
            simulations: 1,
            seed: None,
            snapshot_replicate: None,
        }
    }

    /// Set the population size (required).
    pub fn population(mut self, total_units: usize) -> Self {
        self.population = Some(total_units);
        self
    }

    /// Set the attachment width of the contact network (required).
    pub fn contacts(mut self, average_contacts: usize) -> Self {
        self.contacts = Some(average_contacts);
        self
    }

    /// Set the number of days each replicate runs (required).
    pub fn days(mut self, num_days: usize) -> Self {
        self.days = Some(num_days);
        self
    }

    /// Set the triangle-closing probability (default: 0.0).
    pub fn clustering(mut self, probability: f64) -> Self {
        self.clustering = probability;
        self
    }

    /// Set the pairwise transmission probability (default: 0.0).
    pub fn transmission(mut self, probability: f64) -> Self {
        self.transmission = probability;
        self
    }

    /// Set the latent period in days (default: 0).
    pub fn latent_period(mut self, days: u32) -> Self {
        self.latent_period = days;
        self
    }

    /// Set the infectious period in days (default: 0).
    pub fn infectious_period(mut self, days: u32) -> Self {
        self.infectious_period = days;
        self
    }

    /// Set the number of units exposed on day 0 (default: 0).
    pub fn initial_exposed(mut self, units: usize) -> Self {
        self.initial_exposed = units;
        self
    }

    /// Set the duplicate handling for seed draws (default: with replacement).
    pub fn seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Set the number of replicates (default: 1).
    pub fn simulations(mut self, count: usize) -> Self {
        self.simulations = count;
        self
    }

    /// Set the base RNG seed (default: entropy).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Record per-day node snapshots for the given replicate.
    pub fn record_snapshots(mut self, replicate: usize) -> Self {
        self.snapshot_replicate = Some(replicate);
        self
    }

    /// Validate the configuration and build the contact graph.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` for missing or out-of-domain
    /// parameters, or a `ConstructionError` if the network cannot be built.
    pub fn build(self) -> Result<Ensemble, SimulationError> {
        let total_units = self
            .population
            .ok_or(ConfigurationError::MissingParameter("population"))?;
        let average_contacts = self
            .contacts
            .ok_or(ConfigurationError::MissingParameter("contacts"))?;
        let num_days = self
            .days
            .ok_or(ConfigurationError::MissingParameter("days"))?;

        let config = Configuration {
            network: NetworkConfig::new(total_units, average_contacts, self.clustering),
            transition: TransitionConfig::new(
                self.transmission,
                self.latent_period,
                self.infectious_period,
            ),
            seeding: SeedingConfig::new(self.initial_exposed, self.seed_policy),
            run: RunConfig {
                num_simulations: self.simulations,
                num_days,
                seed: self.seed,
                snapshot_replicate: self.snapshot_replicate,
            },
        };

        Ensemble::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
            .population(50)
            .contacts(3)
            .days(10)
            .seed(1)
    }

    #[test]
    fn test_build_with_defaults() {
        let ensemble = builder().build().unwrap();
        let config = ensemble.configuration();

        assert_eq!(config.network.total_units, 50);
        assert_eq!(config.run.num_simulations, 1);
        assert_eq!(config.seeding.policy, SeedPolicy::WithReplacement);
        assert_eq!(ensemble.graph().node_count(), 50);
    }

    #[test]
    fn test_missing_population_rejected() {
        let err = SimulationBuilder::new()
            .contacts(3)
            .days(10)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Configuration(ConfigurationError::MissingParameter("population"))
        ));
    }

    #[test]
    fn test_missing_days_rejected() {
        let err = SimulationBuilder::new()
            .population(50)
            .contacts(3)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Configuration(ConfigurationError::MissingParameter("days"))
        ));
    }

    #[test]
    fn test_out_of_domain_probability_rejected() {
        let err = builder().transmission(1.5).build().unwrap_err();
        assert!(matches!(err, SimulationError::Configuration(_)));
    }

    #[test]
    fn test_incompatible_network_rejected() {
        let err = SimulationBuilder::new()
            .population(4)
            .contacts(4)
            .days(10)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimulationError::Construction(_)));
    }

    #[test]
    fn test_built_ensemble_runs() {
        let result = builder()
            .transmission(0.2)
            .latent_period(2)
            .infectious_period(3)
            .initial_exposed(2)
            .simulations(3)
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(result.num_replicates(), 3);
        assert!(result
            .replicates
            .iter()
            .all(|replicate| replicate.trajectory.len() == 11));
    }
}
