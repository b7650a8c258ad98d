//! Placement of the neurons on a display surface.

use serde::{Deserialize, Serialize};

use crate::error::SNNError;

/// Flatten a (row, col) coordinate to a linear index.
pub fn flatten_idx(row: usize, col: usize, num_cols: usize) -> usize {
    row * num_cols + col
}

/// Expand a linear index into (row, col) coordinates.
pub fn expand_idx(index: usize, num_cols: usize) -> (usize, usize) {
    (index / num_cols, index % num_cols)
}

/// A policy mapping the index of a neuron to its position.
pub trait Layout {
    fn position(&self, index: usize) -> [f64; 2];
}

/// The size of the display surface and the margin around the grid.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
        }
    }
}

/// Neurons laid out row by row on a regular grid.
#[derive(Debug, PartialEq, Clone)]
pub struct GridLayout {
    num_cols: usize,
    num_rows: usize,
    surface: LayoutConfig,
}

impl GridLayout {
    /// Create a grid layout with the specified number of columns and rows.
    /// Returns an error if the grid is empty.
    pub fn build(num_cols: usize, num_rows: usize, surface: LayoutConfig) -> Result<Self, SNNError> {
        if num_cols == 0 || num_rows == 0 {
            return Err(SNNError::InvalidParameter(format!(
                "Grid dimensions must be positive, got {}x{}",
                num_cols, num_rows
            )));
        }
        Ok(GridLayout {
            num_cols,
            num_rows,
            surface,
        })
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the (row, col) cell of the neuron with the given index.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        expand_idx(index, self.num_cols)
    }
}

impl Layout for GridLayout {
    fn position(&self, index: usize) -> [f64; 2] {
        let (row, col) = self.cell(index);
        let cell_width = self.surface.width / self.num_cols as f64;
        let cell_height = self.surface.height / self.num_rows as f64;
        [
            col as f64 * cell_width + self.surface.margin,
            row as f64 * cell_height + self.surface.margin,
        ]
    }
}
