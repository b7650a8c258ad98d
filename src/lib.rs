//! This crate provides a toy spiking neural network simulated in discrete time, together with a
//! 3D Morton (Z-order) coordinate codec for spatial indexing.
//!
//! # Creating Networks
//!
//! ## At Random
//!
//! ```rust
//! use rusty_lif::network::Network;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Create a random network with 192 neurons laid out on a 16x12 grid
//! let mut rng = StdRng::seed_from_u64(42);
//! let network = Network::initialize(192, 16, 12, &mut rng).unwrap();
//!
//! assert_eq!(network.num_neurons(), 192);
//! assert!(network.num_synapses() >= 192);
//! ```
//!
//! ## From a Configuration
//!
//! ```rust
//! use rusty_lif::config::NetworkConfig;
//! use rusty_lif::network::{Network, UpdateMode};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = NetworkConfig {
//!     update_mode: UpdateMode::TwoPhase,
//!     ..NetworkConfig::with_grid(8, 8)
//! };
//! let mut rng = StdRng::seed_from_u64(42);
//! let network = Network::build(&config, &mut rng).unwrap();
//! assert_eq!(network.update_mode(), UpdateMode::TwoPhase);
//! ```
//!
//! # Simulating Networks
//!
//! ```rust
//! use rusty_lif::network::Network;
//! use rusty_lif::network::input::RandomInput;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut network = Network::initialize(192, 16, 12, &mut rng).unwrap();
//! let mut input = RandomInput::with_default_range(rng);
//!
//! for _ in 0..100 {
//!     network.tick(&mut input);
//! }
//! let snapshot = network.snapshot();
//! assert_eq!(snapshot.len(), 192);
//! ```
//!
//! # Encoding Coordinates
//!
//! ```rust
//! use rusty_lif::coords::{decode_3d_named, encode_3d_named};
//!
//! let index = encode_3d_named(1, 2, 3, "morton").unwrap();
//! assert_eq!(decode_3d_named(index, "morton").unwrap(), (1, 2, 3));
//! assert!(encode_3d_named(1, 2, 3, "hilbert").is_err());
//! ```

pub mod config;
pub mod coords;
pub mod error;
pub mod network;

/// The number of ticks a neuron ignores after firing.
pub const REFRACTORY_PERIOD: u32 = 20;
/// The largest external input a neuron receives per tick.
pub const MAX_INPUT: u16 = 2;
/// Minimum number of neurons to consider parallel processing.
pub const MIN_PARALLEL_NEURONS: usize = 100;
