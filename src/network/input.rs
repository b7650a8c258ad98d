//! External input drawn by integrating neurons at every tick.

use rand_distr::{Distribution, Uniform};
use rand::Rng;

use crate::MAX_INPUT;

/// A source of external input, queried once per integrating neuron and per tick, in neuron order.
pub trait InputSource {
    fn next_input(&mut self) -> u16;
}

/// Uniform random input in `0..=max_input`, drawn from an injected random number generator.
#[derive(Debug, Clone)]
pub struct RandomInput<R: Rng> {
    rng: R,
    dist: Uniform<u16>,
}

impl<R: Rng> RandomInput<R> {
    pub fn new(rng: R, max_input: u16) -> Self {
        RandomInput {
            rng,
            dist: Uniform::new_inclusive(0, max_input),
        }
    }

    /// Uniform random input in `0..=MAX_INPUT`.
    pub fn with_default_range(rng: R) -> Self {
        Self::new(rng, MAX_INPUT)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> InputSource for RandomInput<R> {
    fn next_input(&mut self) -> u16 {
        self.dist.sample(&mut self.rng)
    }
}

/// The same input at every draw.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ConstantInput(pub u16);

impl InputSource for ConstantInput {
    fn next_input(&mut self) -> u16 {
        self.0
    }
}
