//! Network (with neurons and synapses) structure and its per-tick update.
use itertools::Itertools;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::input::InputSource;
use super::layout::{expand_idx, GridLayout, Layout};
use super::neuron::{Arithmetic, Dynamics, Neuron};
use super::sampler::NeuronSampler;
use super::synapse::Synapse;
use crate::config::NetworkConfig;
use crate::coords::Morton3D;
use crate::error::SNNError;
use crate::MIN_PARALLEL_NEURONS;

/// How spikes emitted during a tick reach their targets.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Neurons are visited in index order and a spike is delivered as soon as it is emitted.
    /// A neuron fired earlier in the tick can therefore push a neuron visited later over its threshold within the same tick,
    /// while a spike sent to a neuron visited earlier only matters from the next tick on.
    #[default]
    Cascade,
    /// All neurons decide against the potentials of the start of the tick, then all spikes are delivered.
    /// The outcome does not depend on the visiting order.
    TwoPhase,
}

impl FromStr for UpdateMode {
    type Err = SNNError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cascade" => Ok(UpdateMode::Cascade),
            "two_phase" | "two-phase" => Ok(UpdateMode::TwoPhase),
            _ => Err(SNNError::InvalidParameter(format!("Unknown update mode: {}", s))),
        }
    }
}

/// A read-only view of a neuron, i.e., what a renderer needs to draw it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NeuronView {
    pub potential: u16,
    pub threshold: u16,
    pub is_firing: bool,
    pub position: [f64; 2],
}

impl From<&Neuron> for NeuronView {
    fn from(neuron: &Neuron) -> Self {
        NeuronView {
            potential: neuron.potential(),
            threshold: neuron.threshold(),
            is_firing: neuron.is_firing(),
            position: neuron.position(),
        }
    }
}

/// A fixed-size spiking network. The network owns the neurons, which own their outgoing synapses.
/// Neuron indices are stable for the lifetime of the network.
#[derive(Debug, PartialEq, Clone)]
pub struct Network {
    neurons: Vec<Neuron>,
    dynamics: Dynamics,
    update_mode: UpdateMode,
    // Number of columns of the grid the neurons are laid out on.
    grid_width: usize,
    // Number of ticks elapsed since the creation of the network.
    ticks: u64,
}

impl Network {
    /// Create a random network of `size` neurons laid out on a `grid_width x grid_height` grid, with default parameters.
    /// Returns an error if the grid does not hold exactly `size` neurons.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_lif::network::Network;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let network = Network::initialize(12, 4, 3, &mut rng).unwrap();
    /// assert_eq!(network.num_neurons(), 12);
    ///
    /// assert!(Network::initialize(12, 5, 3, &mut rng).is_err());
    /// ```
    pub fn initialize<R: Rng>(
        size: usize,
        grid_width: usize,
        grid_height: usize,
        rng: &mut R,
    ) -> Result<Self, SNNError> {
        let config = NetworkConfig {
            num_neurons: size,
            grid_width,
            grid_height,
            ..NetworkConfig::default()
        };
        Self::build(&config, rng)
    }

    /// Create a random network from a configuration.
    /// Every neuron is sampled independently, then placed on the configured grid.
    pub fn build<R: Rng>(config: &NetworkConfig, rng: &mut R) -> Result<Self, SNNError> {
        let sampler = NeuronSampler::build(config)?;
        let layout = GridLayout::build(config.grid_width, config.grid_height, config.layout)?;

        if config.arithmetic == Arithmetic::Wrapping {
            log::warn!("Potentials wrap around modulo 2^16: a decay larger than the potential triggers a spike");
        }

        let neurons: Vec<Neuron> = (0..config.num_neurons).map(|_| sampler.sample(rng)).collect();
        let mut network = Network {
            neurons,
            dynamics: config.dynamics(),
            update_mode: config.update_mode,
            grid_width: config.grid_width,
            ticks: 0,
        };
        network.assign_positions(&layout);

        log::info!(
            "Network built with {} neurons and {} synapses ({:?} update)",
            network.num_neurons(),
            network.num_synapses(),
            network.update_mode
        );
        Ok(network)
    }

    /// Create a network from existing neurons, laid out on a single row.
    /// Returns an error if a synapse targets a neuron that does not exist.
    pub fn from_neurons(neurons: Vec<Neuron>, dynamics: Dynamics) -> Result<Self, SNNError> {
        let num_neurons = neurons.len();
        if let Some((source, synapse)) = neurons
            .iter()
            .enumerate()
            .flat_map(|(id, neuron)| neuron.synapses().iter().map(move |synapse| (id, synapse)))
            .find(|(_, synapse)| synapse.target() >= num_neurons)
        {
            return Err(SNNError::OutOfBounds(format!(
                "neuron {} has a synapse to neuron {} in a network of {} neurons",
                source,
                synapse.target(),
                num_neurons
            )));
        }

        Ok(Network {
            neurons,
            dynamics,
            update_mode: UpdateMode::default(),
            grid_width: num_neurons.max(1),
            ticks: 0,
        })
    }

    /// Select how spikes reach their targets.
    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    /// Place every neuron according to the layout policy.
    pub fn assign_positions<L: Layout>(&mut self, layout: &L) {
        self.neurons
            .iter_mut()
            .enumerate()
            .for_each(|(id, neuron)| neuron.set_position(layout.position(id)));
    }

    /// A reference to a specific neuron in the network.
    /// Returns `None` if the neuron is not found.
    pub fn neuron_ref(&self, neuron_id: usize) -> Option<&Neuron> {
        self.neurons.get(neuron_id)
    }

    /// An iterator over the neurons in the network.
    pub fn neurons_iter(&self) -> impl Iterator<Item = &Neuron> + '_ {
        self.neurons.iter()
    }

    /// The number of neurons in the network.
    pub fn num_neurons(&self) -> usize {
        self.neurons.len()
    }

    /// The number of synapses in the network.
    pub fn num_synapses(&self) -> usize {
        self.neurons.iter().map(|neuron| neuron.synapses().len()).sum()
    }

    pub fn dynamics(&self) -> Dynamics {
        self.dynamics
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// The number of ticks elapsed since the creation of the network.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The postsynaptic neuron of the `synapse_id`-th synapse of a neuron.
    /// Returns an error if the neuron, the synapse or its target does not exist.
    pub fn synapse_target(&self, neuron_id: usize, synapse_id: usize) -> Result<&Neuron, SNNError> {
        let neuron = self.neuron_ref(neuron_id).ok_or_else(|| {
            SNNError::OutOfBounds(format!(
                "neuron {} in a network of {} neurons",
                neuron_id,
                self.num_neurons()
            ))
        })?;
        let synapse = neuron.synapses().get(synapse_id).ok_or_else(|| {
            SNNError::OutOfBounds(format!(
                "synapse {} of neuron {} which has {} synapses",
                synapse_id,
                neuron_id,
                neuron.synapses().len()
            ))
        })?;
        self.neuron_ref(synapse.target()).ok_or_else(|| {
            SNNError::OutOfBounds(format!(
                "target {} of synapse {} of neuron {}",
                synapse.target(),
                synapse_id,
                neuron_id
            ))
        })
    }

    /// The IDs of the neurons which fired during the last tick.
    pub fn firing_ids(&self) -> Vec<usize> {
        self.neurons.iter().positions(|neuron| neuron.is_firing()).collect()
    }

    /// A read-only view of every neuron, in index order.
    pub fn snapshot(&self) -> Vec<NeuronView> {
        self.neurons.iter().map(NeuronView::from).collect()
    }

    /// The Morton index of the grid cell `(col, row, 0)` of a neuron.
    pub fn morton_index(&self, neuron_id: usize) -> Morton3D {
        let (row, col) = expand_idx(neuron_id, self.grid_width);
        Morton3D::new(col as u32, row as u32, 0)
    }

    /// The neuron IDs sorted along the Z-order curve of their grid cells.
    pub fn morton_order(&self) -> Vec<usize> {
        (0..self.num_neurons())
            .sorted_by_key(|&id| self.morton_index(id))
            .collect()
    }

    /// Advance the network by one tick and returns the number of neurons which fired.
    pub fn tick<I: InputSource>(&mut self, input: &mut I) -> usize {
        let num_spikes = match self.update_mode {
            UpdateMode::Cascade => self.tick_cascade(input),
            UpdateMode::TwoPhase => self.tick_two_phase(input),
        };
        self.ticks += 1;
        log::trace!("Tick {}: {} spikes", self.ticks, num_spikes);
        num_spikes
    }

    fn tick_cascade<I: InputSource>(&mut self, input: &mut I) -> usize {
        let dynamics = self.dynamics;
        let mut num_spikes = 0;

        for id in 0..self.neurons.len() {
            if !self.neurons[id].step(|| input.next_input(), &dynamics) {
                continue;
            }
            num_spikes += 1;

            // Deliver the spike right away, possibly to neurons not visited yet.
            for k in 0..self.neurons[id].synapses().len() {
                let synapse = self.neurons[id].synapses()[k];
                self.neurons[synapse.target()].receive(synapse.weight(), dynamics.arithmetic);
            }
        }

        num_spikes
    }

    fn tick_two_phase<I: InputSource>(&mut self, input: &mut I) -> usize {
        let dynamics = self.dynamics;

        // Inputs are drawn sequentially so that the result does not depend on the parallel schedule.
        let inputs: Vec<Option<u16>> = self
            .neurons
            .iter_mut()
            .map(|neuron| match neuron.cool_down() {
                true => None,
                false => Some(input.next_input()),
            })
            .collect();

        let fired: Vec<bool> = if self.neurons.len() >= MIN_PARALLEL_NEURONS {
            self.neurons
                .par_iter_mut()
                .zip(inputs.par_iter())
                .map(|(neuron, drawn)| drawn.map_or(false, |i| neuron.integrate(i, &dynamics)))
                .collect()
        } else {
            self.neurons
                .iter_mut()
                .zip(inputs.iter())
                .map(|(neuron, drawn)| drawn.map_or(false, |i| neuron.integrate(i, &dynamics)))
                .collect()
        };

        let spikes: Vec<Synapse> = self
            .neurons
            .iter()
            .zip(fired.iter())
            .filter(|(_, fired)| **fired)
            .flat_map(|(neuron, _)| neuron.synapses().iter().copied())
            .collect();
        for synapse in spikes {
            self.neurons[synapse.target()].receive(synapse.weight(), dynamics.arithmetic);
        }

        fired.into_iter().filter(|&fired| fired).count()
    }

    /// Run the network for the specified number of ticks and returns the total number of spikes.
    pub fn run<I: InputSource>(&mut self, num_ticks: u64, input: &mut I) -> usize {
        log::info!("Starting simulation of {} ticks...", num_ticks);

        let log_interval = (num_ticks / 10).max(1);
        let mut total_spikes = 0;
        for t in 1..=num_ticks {
            total_spikes += self.tick(input);
            if t % log_interval == 0 {
                log::debug!(
                    "Simulation progress: {:.0}% (Tick: {}/{}, {} spikes so far)",
                    100.0 * t as f64 / num_ticks as f64,
                    t,
                    num_ticks,
                    total_spikes
                );
            }
        }

        log::info!("Simulation completed with {} spikes!", total_spikes);
        total_spikes
    }
}
