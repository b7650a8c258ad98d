//! This module provides a neuron sampler that draws random neurons and synapses for a network of fixed size.
//!
//! # Examples
//!
//! ```rust
//! use rusty_lif::config::NetworkConfig;
//! use rusty_lif::network::sampler::NeuronSampler;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sampler = NeuronSampler::build(&NetworkConfig::with_grid(4, 4)).unwrap();
//! let neuron = sampler.sample(&mut rng);
//!
//! assert!((50..150).contains(&neuron.threshold()));
//! assert!(neuron.synapses().iter().all(|synapse| synapse.target() < 16));
//! ```

use rand_distr::{Distribution, Uniform};
use rand::Rng;

use super::neuron::Neuron;
use super::synapse::Synapse;
use crate::config::NetworkConfig;
use crate::error::SNNError;

#[derive(Debug, Clone)]
pub struct NeuronSampler {
    /// the number of neurons in the network, i.e., the number of possible synapse targets
    num_neurons: usize,
    threshold_dist: Uniform<u16>,
    reset_dist: Uniform<u16>,
    decay_dist: Uniform<u16>,
    num_synapses_dist: Uniform<usize>,
    target_dist: Uniform<usize>,
    weight_dist: Uniform<u16>,
}

impl NeuronSampler {
    /// Create a neuron sampler from a configuration.
    /// The function returns an error if the configuration is invalid.
    pub fn build(config: &NetworkConfig) -> Result<Self, SNNError> {
        config.validate()?;

        Ok(NeuronSampler {
            num_neurons: config.num_neurons,
            threshold_dist: Uniform::new_inclusive(config.lim_thresholds.0, config.lim_thresholds.1),
            reset_dist: Uniform::new_inclusive(config.lim_resets.0, config.lim_resets.1),
            decay_dist: Uniform::new_inclusive(config.lim_decays.0, config.lim_decays.1),
            num_synapses_dist: Uniform::new_inclusive(config.lim_synapses.0, config.lim_synapses.1),
            target_dist: Uniform::new(0, config.num_neurons),
            weight_dist: Uniform::new_inclusive(config.lim_weights.0, config.lim_weights.1),
        })
    }

    pub fn num_neurons(&self) -> usize {
        self.num_neurons
    }

    /// Sample a resting neuron with its outgoing synapses.
    /// Every synapse targets a neuron in `0..num_neurons`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Neuron {
        let threshold = self.threshold_dist.sample(rng);
        let reset_potential = self.reset_dist.sample(rng);
        let potential_decay = self.decay_dist.sample(rng);
        let synapses = self.sample_synapses(rng);
        Neuron::new(threshold, reset_potential, potential_decay, synapses)
    }

    pub fn sample_synapses<R: Rng>(&self, rng: &mut R) -> Vec<Synapse> {
        let num_synapses = self.num_synapses_dist.sample(rng);
        (0..num_synapses)
            .map(|_| Synapse::new(self.target_dist.sample(rng), self.weight_dist.sample(rng)))
            .collect()
    }
}
