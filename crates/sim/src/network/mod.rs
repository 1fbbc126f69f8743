//! Contact network construction and queries.
//!
//! The graph is built once per experiment and shared read-only across all
//! replicates; only node state ever mutates during a simulation.

pub mod graph;
pub mod powerlaw;

pub use graph::ContactGraph;
