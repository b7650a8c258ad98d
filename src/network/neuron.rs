//! Module implementing the leaky integrate-and-fire neurons.
//!
//! A neuron is either integrating or refractory. Each tick, an integrating neuron
//! 1. adds its external input to its potential,
//! 2. subtracts its decay,
//! 3. fires if the potential reached the threshold, in which case the potential snaps to the reset value
//!    and the neuron stays refractory for a fixed number of ticks.
//!
//! Propagation of a spike to the postsynaptic neurons is the responsibility of the network.

use serde::{Deserialize, Serialize};

use super::synapse::Synapse;
use crate::REFRACTORY_PERIOD;

/// The arithmetic used on (unsigned) potentials.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arithmetic {
    /// Potentials saturate at `u16::MAX` and the decay clamps at zero.
    #[default]
    Saturating,
    /// Potentials are computed modulo 2^16: a decay larger than the potential wraps to a large value.
    Wrapping,
}

impl Arithmetic {
    pub fn add(&self, a: u16, b: u16) -> u16 {
        match self {
            Arithmetic::Saturating => a.saturating_add(b),
            Arithmetic::Wrapping => a.wrapping_add(b),
        }
    }

    pub fn sub(&self, a: u16, b: u16) -> u16 {
        match self {
            Arithmetic::Saturating => a.saturating_sub(b),
            Arithmetic::Wrapping => a.wrapping_sub(b),
        }
    }
}

/// Network-wide parameters of the neuron dynamics.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Dynamics {
    /// Number of ticks a neuron ignores after firing
    pub refractory_period: u32,
    /// Arithmetic applied to potentials
    pub arithmetic: Arithmetic,
}

impl Default for Dynamics {
    fn default() -> Self {
        Dynamics {
            refractory_period: REFRACTORY_PERIOD,
            arithmetic: Arithmetic::default(),
        }
    }
}

/// The state of a neuron between two ticks.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NeuronState {
    /// The neuron accumulates input and may fire.
    Integrating,
    /// The neuron ignores everything for the remaining number of ticks.
    Refractory { remaining: u32 },
}

/// Represents a spiking neuron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Neuron {
    // The accumulated input.
    potential: u16,
    // The potential at which the neuron fires.
    threshold: u16,
    // The potential right after firing.
    reset_potential: u16,
    // The potential lost every integrating tick.
    potential_decay: u16,
    // The outgoing synapses.
    synapses: Vec<Synapse>,
    // The position used for display.
    position: [f64; 2],
    // Whether the neuron fired during the last tick.
    is_firing: bool,
    // The number of ticks before the neuron integrates again.
    refractory_timer: u32,
}

impl Neuron {
    /// Create a new resting neuron (zero potential, not refractory).
    pub fn new(threshold: u16, reset_potential: u16, potential_decay: u16, synapses: Vec<Synapse>) -> Self {
        Neuron {
            potential: 0,
            threshold,
            reset_potential,
            potential_decay,
            synapses,
            position: [0.0, 0.0],
            is_firing: false,
            refractory_timer: 0,
        }
    }

    pub fn potential(&self) -> u16 {
        self.potential
    }

    /// Overwrite the potential, e.g., to prepare an initial condition.
    pub fn set_potential(&mut self, potential: u16) {
        self.potential = potential;
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn reset_potential(&self) -> u16 {
        self.reset_potential
    }

    pub fn potential_decay(&self) -> u16 {
        self.potential_decay
    }

    /// Returns a slice of outgoing synapses of the neuron.
    pub fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    pub fn position(&self) -> [f64; 2] {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: [f64; 2]) {
        self.position = position;
    }

    /// Returns whether the neuron fired during the last tick.
    pub fn is_firing(&self) -> bool {
        self.is_firing
    }

    pub fn refractory_timer(&self) -> u32 {
        self.refractory_timer
    }

    pub fn state(&self) -> NeuronState {
        match self.refractory_timer {
            0 => NeuronState::Integrating,
            remaining => NeuronState::Refractory { remaining },
        }
    }

    /// Start a new tick: clear the firing flag and count down the refractory timer.
    /// Returns true if the neuron is refractory during this tick, in which case nothing else happens to it.
    pub fn cool_down(&mut self) -> bool {
        self.is_firing = false;
        if self.refractory_timer > 0 {
            self.refractory_timer -= 1;
            return true;
        }
        false
    }

    /// Integrate the external input, apply the decay and check the threshold.
    /// Returns true if the neuron fires; the caller is in charge of the propagation along the synapses.
    pub fn integrate(&mut self, input: u16, dynamics: &Dynamics) -> bool {
        let arithmetic = dynamics.arithmetic;
        self.potential = arithmetic.add(self.potential, input);
        self.potential = arithmetic.sub(self.potential, self.potential_decay);

        if self.potential >= self.threshold {
            self.is_firing = true;
            self.potential = self.reset_potential;
            self.refractory_timer = dynamics.refractory_period;
        }
        self.is_firing
    }

    /// Advance the neuron by one tick.
    /// The input is only drawn if the neuron is not refractory.
    pub fn step<F: FnOnce() -> u16>(&mut self, input: F, dynamics: &Dynamics) -> bool {
        if self.cool_down() {
            return false;
        }
        self.integrate(input(), dynamics)
    }

    /// Receive a spike through a synapse of the given weight.
    /// This happens regardless of the state of the neuron.
    pub fn receive(&mut self, weight: u16, arithmetic: Arithmetic) {
        self.potential = arithmetic.add(self.potential, weight);
    }
}
