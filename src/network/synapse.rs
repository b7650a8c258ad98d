//! Module implementing the synapses between neurons.

use serde::{Deserialize, Serialize};

/// A directed synapse owned by its presynaptic neuron.
/// The target is the position of the postsynaptic neuron in the network; its validity is checked at the network level.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Synapse {
    /// Index of the postsynaptic neuron
    target: usize,
    /// Increment added to the postsynaptic potential when the source fires
    weight: u16,
}

impl Synapse {
    pub fn new(target: usize, weight: u16) -> Self {
        Synapse { target, weight }
    }

    /// Returns the index of the postsynaptic neuron.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the weight of the synapse.
    pub fn weight(&self) -> u16 {
        self.weight
    }
}
