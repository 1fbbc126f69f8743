//! Per-node compartment state and population bookkeeping.
//!
//! This module provides the compartment label type, the per-day count
//! vector, and the mutable per-replicate store of node states.

pub mod compartment;
pub mod counts;
pub mod store;

pub use compartment::Compartment;
pub use counts::{CompartmentCounts, CountDelta};
pub use store::{NodeState, Snapshot, StateStore};
