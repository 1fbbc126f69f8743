//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for network SEIR epidemic
//! simulation. It includes modules for building the contact network,
//! tracking per-node compartment state, advancing the stochastic daily
//! transition rule, and orchestrating ensembles of independent replicates.

pub mod errors;
pub mod network;
pub mod prelude;
pub mod simulation;
pub mod state;

pub use network::ContactGraph;
pub use state::{Compartment, CompartmentCounts};
