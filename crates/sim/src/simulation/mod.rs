//! Simulation engine, replicate orchestration, and ensemble aggregation.
//!
//! Re-exports
//!
//! The most commonly used simulation types are re-exported here for
//! convenience so consumers can import them from `epinet_sim::simulation`.
//!
//! - `Replicate`: one stochastic run advancing day by day over the shared
//!   contact graph.
//! - `Ensemble`: orchestrates many independent replicates and collects
//!   their results.
//! - `SimulationBuilder`: fluent builder for constructing `Ensemble`
//!   instances with sensible defaults and validation.

pub mod aggregate;
pub mod builder;
pub mod engine;
pub mod ensemble;
pub mod parameters;
pub mod results;

pub use aggregate::mean_trajectory;
pub use builder::SimulationBuilder;
pub use engine::{advance_day, Replicate};
pub use ensemble::Ensemble;
pub use parameters::{
    Configuration, NetworkConfig, RunConfig, SeedPolicy, SeedingConfig, TransitionConfig,
};
pub use results::{EnsembleResult, MeanTrajectory, ReplicateResult, Trajectory};
