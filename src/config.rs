//! Configuration of a network: size, layout, sampling limits and dynamics.
//!
//! All limits are inclusive `(min, max)` pairs. The defaults reproduce the reference toy network:
//! 192 neurons on a 16x12 grid, thresholds in `[50, 149]`, reset potentials in `[0, 49]`,
//! decays in `[1, 5]`, one to three synapses per neuron with weights in `[1, 50]`.
//!
//! # Examples
//!
//! ```rust
//! use rusty_lif::config::NetworkConfig;
//!
//! let config = NetworkConfig::with_grid(4, 3);
//! assert_eq!(config.num_neurons, 12);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::SNNError;
use crate::network::layout::LayoutConfig;
use crate::network::network::UpdateMode;
use crate::network::neuron::{Arithmetic, Dynamics};
use crate::{MAX_INPUT, REFRACTORY_PERIOD};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// The number of neurons, must equal `grid_width * grid_height`
    pub num_neurons: usize,
    /// The number of columns of the layout grid
    pub grid_width: usize,
    /// The number of rows of the layout grid
    pub grid_height: usize,
    /// The minimum and maximum firing thresholds
    pub lim_thresholds: (u16, u16),
    /// The minimum and maximum reset potentials
    pub lim_resets: (u16, u16),
    /// The minimum and maximum potential decays
    pub lim_decays: (u16, u16),
    /// The minimum and maximum numbers of outgoing synapses per neuron
    pub lim_synapses: (usize, usize),
    /// The minimum and maximum synaptic weights
    pub lim_weights: (u16, u16),
    /// The largest external input drawn per tick
    pub max_input: u16,
    /// The number of ticks a neuron ignores after firing
    pub refractory_period: u32,
    pub arithmetic: Arithmetic,
    pub update_mode: UpdateMode,
    pub layout: LayoutConfig,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            num_neurons: 192,
            grid_width: 16,
            grid_height: 12,
            lim_thresholds: (50, 149),
            lim_resets: (0, 49),
            lim_decays: (1, 5),
            lim_synapses: (1, 3),
            lim_weights: (1, 50),
            max_input: MAX_INPUT,
            refractory_period: REFRACTORY_PERIOD,
            arithmetic: Arithmetic::default(),
            update_mode: UpdateMode::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl NetworkConfig {
    /// The default configuration on a `width x height` grid, with one neuron per cell.
    pub fn with_grid(width: usize, height: usize) -> Self {
        NetworkConfig {
            num_neurons: width * height,
            grid_width: width,
            grid_height: height,
            ..NetworkConfig::default()
        }
    }

    /// The dynamics shared by all neurons.
    pub fn dynamics(&self) -> Dynamics {
        Dynamics {
            refractory_period: self.refractory_period,
            arithmetic: self.arithmetic,
        }
    }

    /// Check the consistency of the configuration.
    /// Returns an error for a grid that does not match the number of neurons or for an empty sampling range.
    pub fn validate(&self) -> Result<(), SNNError> {
        if self.num_neurons == 0 {
            return Err(SNNError::InvalidParameter(
                "The network must contain at least one neuron".to_string(),
            ));
        }

        if self.grid_width.checked_mul(self.grid_height) != Some(self.num_neurons) {
            return Err(SNNError::InvalidGrid {
                size: self.num_neurons,
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        check_limits("thresholds", self.lim_thresholds)?;
        check_limits("reset potentials", self.lim_resets)?;
        check_limits("decays", self.lim_decays)?;
        check_limits("synapses", self.lim_synapses)?;
        check_limits("weights", self.lim_weights)?;

        Ok(())
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SNNError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their default value.
    /// The loaded configuration is validated.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SNNError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

fn check_limits<T: PartialOrd + std::fmt::Debug>(name: &str, lim: (T, T)) -> Result<(), SNNError> {
    if lim.0 > lim.1 {
        return Err(SNNError::InvalidParameter(format!(
            "The minimum {} must not exceed the maximum, got {:?}",
            name, lim
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(NetworkConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_invalid_grid() {
        let config = NetworkConfig {
            num_neurons: 10,
            grid_width: 3,
            grid_height: 3,
            ..NetworkConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(SNNError::InvalidGrid {
                size: 10,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_invalid_limits() {
        let config = NetworkConfig {
            lim_weights: (10, 1),
            ..NetworkConfig::default()
        };
        assert!(matches!(config.validate(), Err(SNNError::InvalidParameter(_))));

        let config = NetworkConfig {
            num_neurons: 0,
            grid_width: 0,
            grid_height: 0,
            ..NetworkConfig::default()
        };
        assert!(matches!(config.validate(), Err(SNNError::InvalidParameter(_))));
    }

    #[test]
    fn test_partial_json() {
        let config: NetworkConfig =
            serde_json::from_str(r#"{"num_neurons": 6, "grid_width": 3, "grid_height": 2, "arithmetic": "wrapping"}"#)
                .unwrap();
        assert_eq!(config.num_neurons, 6);
        assert_eq!(config.arithmetic, Arithmetic::Wrapping);
        assert_eq!(config.refractory_period, REFRACTORY_PERIOD);
        assert_eq!(config.update_mode, UpdateMode::Cascade);
        assert_eq!(config.layout, LayoutConfig::default());
    }
}
