//! Network (with neurons and synapses) structure and utilities.
//!
//! - [`neuron`]: the integrate/fire/refractory state machine of a single neuron
//! - [`synapse`]: the weighted connections between neurons
//! - [`sampler`]: random neurons and synapses for a network of fixed size
//! - [`layout`]: the placement of the neurons on a display surface
//! - [`input`]: the external input drawn by the neurons at each tick
//! - [`network`]: the network itself and its per-tick update
pub mod input;
pub mod layout;
pub mod network;
pub mod neuron;
pub mod sampler;
pub mod synapse;

pub use network::{Network, NeuronView, UpdateMode};
