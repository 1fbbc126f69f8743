//! Simulation parameters and configuration.
//!
//! This module provides parameter structures for configuring the contact
//! network, the daily transition rule, initial seeding, and ensemble
//! execution, together with their domain validation.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// How the initially exposed nodes are drawn.
///
/// The historical behavior draws one node id per seed slot independently, so
/// the same node can be picked more than once and fewer than the requested
/// number of distinct nodes end up exposed. `WithoutReplacement` guarantees
/// distinct nodes instead. The choice is explicit configuration rather than
/// an implementation accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Independent draw per seed slot; duplicates permitted.
    #[default]
    WithReplacement,
    /// Distinct node ids for every seed slot.
    WithoutReplacement,
}

/// Contact network shape parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Population size N
    pub total_units: usize,
    /// Attachment width: edges each new node brings during growth
    pub average_contacts: usize,
    /// Triangle-closing probability p
    pub clustering: f64,
}

impl NetworkConfig {
    /// Create a new network configuration.
    pub fn new(total_units: usize, average_contacts: usize, clustering: f64) -> Self {
        Self {
            total_units,
            average_contacts,
            clustering,
        }
    }

    /// Check all parameters against their documented domains.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.total_units == 0 {
            return Err(ConfigurationError::EmptyPopulation);
        }
        if self.average_contacts == 0 {
            return Err(ConfigurationError::ZeroContacts);
        }
        probability("clustering_probability", self.clustering)
    }
}

/// Per-day SEIR transition parameters.
///
/// Periods are unsigned day counts, so the "negative period" failure mode is
/// unrepresentable by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Pairwise transmission probability per infectious contact per day
    pub transmission: f64,
    /// Latent period in days: time spent in E before turning infectious
    pub latent_period: u32,
    /// Infectious period in days: dwell threshold for recovery
    pub infectious_period: u32,
}

impl TransitionConfig {
    /// Create a new transition configuration.
    pub fn new(transmission: f64, latent_period: u32, infectious_period: u32) -> Self {
        Self {
            transmission,
            latent_period,
            infectious_period,
        }
    }

    /// Check all parameters against their documented domains.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        probability("transmission_probability", self.transmission)
    }
}

/// Initial-exposed seeding parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// Number of units marked exposed on day 0
    pub initial_exposed: usize,
    /// Duplicate handling for the seed draws
    pub policy: SeedPolicy,
}

impl SeedingConfig {
    /// Create a new seeding configuration.
    pub fn new(initial_exposed: usize, policy: SeedPolicy) -> Self {
        Self {
            initial_exposed,
            policy,
        }
    }

    /// Check the seed count against the population size.
    pub fn validate(&self, population: usize) -> Result<(), ConfigurationError> {
        if self.initial_exposed > population {
            return Err(ConfigurationError::SeedCountExceedsPopulation {
                requested: self.initial_exposed,
                population,
            });
        }
        Ok(())
    }
}

/// Ensemble execution parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of independent replicates
    pub num_simulations: usize,
    /// Days to simulate per replicate; trajectories hold `num_days + 1` entries
    pub num_days: usize,
    /// Base RNG seed; per-replicate seeds derive from it. `None` seeds from
    /// entropy, sacrificing reproducibility.
    pub seed: Option<u64>,
    /// Replicate whose per-day snapshots are retained for visualization
    pub snapshot_replicate: Option<usize>,
}

impl RunConfig {
    /// Create a new run configuration.
    pub fn new(num_simulations: usize, num_days: usize, seed: Option<u64>) -> Self {
        Self {
            num_simulations,
            num_days,
            seed,
            snapshot_replicate: None,
        }
    }

    /// Check all parameters against their documented domains.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.num_simulations == 0 {
            return Err(ConfigurationError::ZeroSimulations);
        }
        Ok(())
    }
}

/// Complete parameter set for one experiment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Configuration {
    /// Contact network shape
    pub network: NetworkConfig,
    /// Daily transition rule
    pub transition: TransitionConfig,
    /// Day-0 seeding
    pub seeding: SeedingConfig,
    /// Ensemble execution
    pub run: RunConfig,
}

impl Configuration {
    /// Check every section against its documented domain.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.network.validate()?;
        self.transition.validate()?;
        self.seeding.validate(self.network.total_units)?;
        self.run.validate()
    }
}

fn probability(name: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidProbability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration() -> Configuration {
        Configuration {
            network: NetworkConfig::new(100, 4, 0.3),
            transition: TransitionConfig::new(0.05, 3, 7),
            seeding: SeedingConfig::new(5, SeedPolicy::default()),
            run: RunConfig::new(10, 60, Some(42)),
        }
    }

    #[test]
    fn test_valid_configuration() {
        configuration().validate().unwrap();
    }

    #[test]
    fn test_empty_population_rejected() {
        let mut config = configuration();
        config.network.total_units = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigurationError::EmptyPopulation
        );
    }

    #[test]
    fn test_zero_contacts_rejected() {
        let mut config = configuration();
        config.network.average_contacts = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigurationError::ZeroContacts
        );
    }

    #[test]
    fn test_probability_domains() {
        let mut config = configuration();
        config.network.clustering = 1.2;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigurationError::InvalidProbability {
                name: "clustering_probability",
                ..
            }
        ));

        let mut config = configuration();
        config.transition.transmission = -0.1;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigurationError::InvalidProbability {
                name: "transmission_probability",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_seed_count_rejected() {
        let mut config = configuration();
        config.seeding.initial_exposed = 101;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigurationError::SeedCountExceedsPopulation {
                requested: 101,
                population: 100
            }
        );
    }

    #[test]
    fn test_seed_count_equal_to_population_allowed() {
        let mut config = configuration();
        config.seeding.initial_exposed = 100;
        config.validate().unwrap();
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let mut config = configuration();
        config.run.num_simulations = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigurationError::ZeroSimulations
        );
    }

    #[test]
    fn test_default_seed_policy_is_with_replacement() {
        assert_eq!(SeedPolicy::default(), SeedPolicy::WithReplacement);
    }
}
