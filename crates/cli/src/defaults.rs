//! Default parameter values for the epinet CLI.

/// Population size N
pub const TOTAL_UNITS: usize = 1000;

/// Edges each new unit brings during network growth
pub const AVERAGE_CONTACTS: usize = 4;

/// Triangle-closing probability
pub const CLUSTERING: f64 = 0.3;

/// Pairwise transmission probability per infectious contact per day
pub const TRANSMISSION: f64 = 0.05;

/// Latent period in days
pub const LATENT_PERIOD: u32 = 3;

/// Infectious period in days
pub const INFECTIOUS_PERIOD: u32 = 7;

/// Units marked exposed on day 0
pub const INITIAL_EXPOSED: usize = 5;

/// Number of independent replicates
pub const NUM_SIMULATIONS: usize = 50;

/// Days simulated per replicate
pub const NUM_DAYS: usize = 120;
