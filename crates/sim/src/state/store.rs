//! Mutable per-replicate store of node states.

use serde::Serialize;

use crate::errors::StateError;
use crate::state::{Compartment, CompartmentCounts};

/// Per-node SEIR record: compartment label plus dwell counters.
///
/// A dwell counter is nonzero only while the node occupies the matching
/// compartment; the transition methods on [`StateStore`] keep that
/// consistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeState {
    compartment: Compartment,
    exposed_dwell: u32,
    infectious_dwell: u32,
}

impl NodeState {
    /// The compartment this node currently occupies.
    pub const fn compartment(&self) -> Compartment {
        self.compartment
    }

    /// Consecutive days spent in E so far.
    pub const fn exposed_dwell(&self) -> u32 {
        self.exposed_dwell
    }

    /// Consecutive days spent in I so far.
    pub const fn infectious_dwell(&self) -> u32 {
        self.infectious_dwell
    }
}

/// Mutable arena of node states, one per replicate.
///
/// Every replicate owns a private store while the contact graph is shared
/// read-only beside it. All writes go through the transition methods, which
/// refuse any move that is not a single forward step along S -> E -> I -> R
/// and clear dwell counters on every compartment change.
#[derive(Debug, Clone)]
pub struct StateStore {
    nodes: Vec<NodeState>,
}

impl StateStore {
    /// Create a store with every node susceptible.
    pub fn new(population: usize) -> Self {
        Self {
            nodes: vec![NodeState::default(); population],
        }
    }

    /// Number of nodes in the store.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a specific node's state.
    pub fn get(&self, node: usize) -> Option<&NodeState> {
        self.nodes.get(node)
    }

    /// The state of node `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn node(&self, node: usize) -> &NodeState {
        &self.nodes[node]
    }

    /// The compartment node `node` currently occupies.
    pub fn compartment(&self, node: usize) -> Compartment {
        self.nodes[node].compartment
    }

    /// Iterate all node states in id order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeState> {
        self.nodes.iter()
    }

    /// Return every node to S with cleared dwell counters.
    pub fn reset(&mut self) {
        self.nodes.fill(NodeState::default());
    }

    /// Move a susceptible node to E with a fresh dwell counter.
    pub fn expose(&mut self, node: usize) -> Result<(), StateError> {
        self.transition(node, Compartment::S, Compartment::E)
    }

    /// Move an exposed node to I with a fresh dwell counter.
    pub fn begin_infectious(&mut self, node: usize) -> Result<(), StateError> {
        self.transition(node, Compartment::E, Compartment::I)
    }

    /// Move an infectious node to the absorbing R compartment.
    pub fn recover(&mut self, node: usize) -> Result<(), StateError> {
        self.transition(node, Compartment::I, Compartment::R)
    }

    /// Advance the E dwell counter of node `node` by one day.
    pub fn tick_exposed(&mut self, node: usize) -> Result<(), StateError> {
        let state = &mut self.nodes[node];
        if state.compartment != Compartment::E {
            return Err(StateError::DwellOutsideCompartment {
                node,
                compartment: Compartment::E,
            });
        }
        state.exposed_dwell += 1;
        Ok(())
    }

    /// Advance the I dwell counter of node `node` by one day.
    pub fn tick_infectious(&mut self, node: usize) -> Result<(), StateError> {
        let state = &mut self.nodes[node];
        if state.compartment != Compartment::I {
            return Err(StateError::DwellOutsideCompartment {
                node,
                compartment: Compartment::I,
            });
        }
        state.infectious_dwell += 1;
        Ok(())
    }

    /// Produce a read-only copy of every node's compartment.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.nodes.iter().map(|state| state.compartment).collect())
    }

    /// Tally the current compartment occupancy.
    pub fn census(&self) -> CompartmentCounts {
        let mut counts = [0u64; 4];
        for state in &self.nodes {
            counts[state.compartment.to_index() as usize] += 1;
        }
        CompartmentCounts::from_array(counts)
    }

    fn transition(
        &mut self,
        node: usize,
        from: Compartment,
        to: Compartment,
    ) -> Result<(), StateError> {
        let state = &mut self.nodes[node];
        if state.compartment != from {
            return Err(StateError::IllegalTransition {
                node,
                from: state.compartment,
                to,
            });
        }
        // Dwell counters belong to the occupied compartment only.
        state.compartment = to;
        state.exposed_dwell = 0;
        state.infectious_dwell = 0;
        Ok(())
    }
}

/// Read-only copy of every node's compartment at one simulated day, indexed
/// by node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot(Vec<Compartment>);

impl Snapshot {
    /// The compartment of node `node`, if it exists.
    pub fn get(&self, node: usize) -> Option<Compartment> {
        self.0.get(node).copied()
    }

    /// Number of nodes captured.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All compartments as a slice indexed by node id.
    pub fn compartments(&self) -> &[Compartment] {
        &self.0
    }
}
