//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types in the epinet library.
//!
//! # Example
//!
//! ```
//! use epinet_sim::prelude::*;
//!
//! let ensemble = SimulationBuilder::new()
//!     .population(100)
//!     .contacts(3)
//!     .days(30)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! ```

pub use crate::errors;
pub use crate::network::ContactGraph;
pub use crate::simulation::{
    Configuration, Ensemble, EnsembleResult, Replicate, ReplicateResult, SeedPolicy,
    SimulationBuilder, Trajectory,
};
pub use crate::state::{Compartment, CompartmentCounts, Snapshot, StateStore};
