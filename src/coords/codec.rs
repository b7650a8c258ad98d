//! Encoding of coordinate triples into a single ordered index.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::bits::{compact, spread};
use crate::error::SNNError;

/// The interleaving strategy used to order coordinate triples.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Morton (Z-order) curve: bits interleaved as `x0 y0 z0 x1 y1 z1 ...`.
    #[default]
    Morton,
}

impl Method {
    /// Returns the canonical name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Morton => "morton",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Method {
    type Err = SNNError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morton" => Ok(Method::Morton),
            _ => Err(SNNError::UnknownMethod(s.to_string())),
        }
    }
}

/// Encode a coordinate triple into a single index.
/// Each component is truncated to its low 21 bits.
pub fn encode_3d(x: u32, y: u32, z: u32, method: Method) -> u64 {
    match method {
        Method::Morton => spread(x as u64) | (spread(y as u64) << 1) | (spread(z as u64) << 2),
    }
}

/// Decode an index back into its coordinate triple.
pub fn decode_3d(index: u64, method: Method) -> (u32, u32, u32) {
    match method {
        Method::Morton => (
            compact(index) as u32,
            compact(index >> 1) as u32,
            compact(index >> 2) as u32,
        ),
    }
}

/// Encode a coordinate triple with a method given by name, e.g., `"morton"`.
/// Returns an error if the method is unknown.
pub fn encode_3d_named(x: u32, y: u32, z: u32, method: &str) -> Result<u64, SNNError> {
    let method = method.parse::<Method>()?;
    Ok(encode_3d(x, y, z, method))
}

/// Decode an index with a method given by name, e.g., `"morton"`.
/// Returns an error if the method is unknown.
pub fn decode_3d_named(index: u64, method: &str) -> Result<(u32, u32, u32), SNNError> {
    let method = method.parse::<Method>()?;
    Ok(decode_3d(index, method))
}

/// A Morton index. Sorting these yields a Z-order traversal of the encoded coordinates.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Morton3D(pub u64);

impl Morton3D {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Morton3D(encode_3d(x, y, z, Method::Morton))
    }

    /// Returns the (truncated) coordinate triple of the index.
    pub fn coords(&self) -> (u32, u32, u32) {
        decode_3d(self.0, Method::Morton)
    }

    pub fn index(&self) -> u64 {
        self.0
    }
}

impl From<(u32, u32, u32)> for Morton3D {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Morton3D::new(x, y, z)
    }
}
