use thiserror::Error;

use crate::state::Compartment;

/// A parameter outside its documented domain.
///
/// Raised before any simulation work begins and never retried: retrying a
/// stochastic process does not repair a caller bug.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Missing required parameter
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// Population size must be at least one
    #[error("total units must be greater than zero")]
    EmptyPopulation,

    /// Attachment width must be at least one
    #[error("average contacts must be greater than zero")]
    ZeroContacts,

    /// At least one replicate must run
    #[error("number of simulations must be greater than zero")]
    ZeroSimulations,

    /// A probability parameter left [0, 1]
    #[error("invalid probability for {name}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability { name: &'static str, value: f64 },

    /// More seed nodes requested than the population holds
    #[error("{requested} seeded-exposed units exceed the population of {population}")]
    SeedCountExceedsPopulation { requested: usize, population: usize },
}

/// The graph builder cannot satisfy the requested size/degree combination.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// Attachment width incompatible with the population size
    #[error("attachment width {width} must be at least 1 and below the population of {population}")]
    AttachmentWidth { width: usize, population: usize },

    /// Triangle-closing probability left [0, 1]
    #[error("invalid clustering probability: {0} (must be between 0.0 and 1.0)")]
    InvalidClustering(f64),
}

/// An internal invariant was violated.
///
/// Fatal: signals an implementation defect, not a runtime condition to
/// recover from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// Compartment counts stopped summing to the population size
    #[error("compartment counts sum to {sum} but the population is {population}")]
    CountMismatch { sum: u64, population: u64 },

    /// A transition was requested out of the S -> E -> I -> R order
    #[error("node {node} cannot enter {to} from {from}")]
    IllegalTransition {
        node: usize,
        from: Compartment,
        to: Compartment,
    },

    /// A dwell counter was advanced for a compartment the node does not occupy
    #[error("dwell counter advanced for node {node} outside {compartment}")]
    DwellOutsideCompartment { node: usize, compartment: Compartment },

    /// A count slot would drop below zero
    #[error("count for {compartment} would drop below zero")]
    NegativeCount { compartment: Compartment },
}

/// The aggregator received trajectories of unequal length.
///
/// Defensive check; unreachable when every replicate ran the same number of
/// days, as the orchestrator guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("trajectory length mismatch: replicate {replicate} has {found} entries, expected {expected}")]
pub struct ShapeError {
    pub replicate: usize,
    pub expected: usize,
    pub found: usize,
}

/// Umbrella error for call sites that can fail in more than one way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
