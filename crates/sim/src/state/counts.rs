//! Population tallies over the four compartments.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::errors::StateError;
use crate::state::Compartment;

/// Per-day population tally, indexed in the fixed [S, I, E, R] order.
///
/// The four entries always sum to the total population N; [`apply`] verifies
/// that no slot goes negative when a day's transition deltas land.
///
/// [`apply`]: CompartmentCounts::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompartmentCounts([u64; 4]);

impl CompartmentCounts {
    /// Create counts from the individual compartment totals.
    pub const fn new(susceptible: u64, infectious: u64, exposed: u64, recovered: u64) -> Self {
        Self([susceptible, infectious, exposed, recovered])
    }

    /// Create counts from an [S, I, E, R] array.
    pub const fn from_array(counts: [u64; 4]) -> Self {
        Self(counts)
    }

    /// Counts for a population of `n` units, all susceptible.
    pub const fn all_susceptible(n: u64) -> Self {
        Self([n, 0, 0, 0])
    }

    /// Get the tally for one compartment.
    #[inline]
    pub const fn get(&self, compartment: Compartment) -> u64 {
        self.0[compartment.to_index() as usize]
    }

    /// The counts as an [S, I, E, R] array.
    #[inline]
    pub const fn as_array(&self) -> [u64; 4] {
        self.0
    }

    /// Total population covered by the tally.
    #[inline]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Apply a day's accumulated transition deltas, producing the next day's
    /// counts.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NegativeCount`] if any slot would drop below
    /// zero, which indicates an engine defect.
    pub fn apply(&self, delta: &CountDelta) -> Result<Self, StateError> {
        let mut next = [0u64; 4];
        for compartment in Compartment::ALL {
            let slot = compartment.to_index() as usize;
            let value = self.0[slot] as i64 + delta.0[slot];
            if value < 0 {
                return Err(StateError::NegativeCount { compartment });
            }
            next[slot] = value as u64;
        }
        Ok(Self(next))
    }
}

impl Index<Compartment> for CompartmentCounts {
    type Output = u64;

    fn index(&self, compartment: Compartment) -> &u64 {
        &self.0[compartment.to_index() as usize]
    }
}

/// Accumulator of signed unit deltas from a single day's transitions.
///
/// Each individual transition contributes -1 to the compartment it leaves
/// and +1 to the compartment it enters, so the accumulated vector always
/// sums to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountDelta([i64; 4]);

impl CountDelta {
    /// Record one node moving between compartments.
    #[inline]
    pub fn record(&mut self, from: Compartment, to: Compartment) {
        self.0[from.to_index() as usize] -= 1;
        self.0[to.to_index() as usize] += 1;
    }

    /// The deltas as an [S, I, E, R] array.
    #[inline]
    pub const fn as_array(&self) -> [i64; 4] {
        self.0
    }
}
