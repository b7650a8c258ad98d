//! Error module for the Rusty LIF library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum SNNError {
    /// Error for a layout grid whose number of cells differs from the number of neurons.
    InvalidGrid {
        size: usize,
        width: usize,
        height: usize,
    },
    /// Error for a coordinate codec method that is not known to the library.
    UnknownMethod(String),
    /// Error for invalid parameters, e.g., an empty sampling range.
    InvalidParameter(String),
    /// Error for out of bounds access, e.g., a synapse targeting a neuron that does not exist.
    OutOfBounds(String),
    /// Error for I/O operations.
    IOError(String),
}

impl SNNError {
    /// Returns true for errors caused by an inconsistent configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SNNError::InvalidGrid { .. } | SNNError::UnknownMethod(_) | SNNError::InvalidParameter(_)
        )
    }
}

impl fmt::Display for SNNError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SNNError::InvalidGrid { size, width, height } => write!(
                f,
                "Invalid grid: {}x{} cells cannot hold {} neurons",
                width, height, size
            ),
            SNNError::UnknownMethod(e) => write!(f, "Unknown coordinate method: {}", e),
            SNNError::InvalidParameter(e) => write!(f, "Invalid parameters: {}", e),
            SNNError::OutOfBounds(e) => {
                write!(f, "Index out of bounds: {}", e)
            }
            SNNError::IOError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for SNNError {}

impl From<std::io::Error> for SNNError {
    fn from(e: std::io::Error) -> Self {
        SNNError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for SNNError {
    fn from(e: serde_json::Error) -> Self {
        SNNError::IOError(e.to_string())
    }
}
