//! Spatial coordinate utilities.
//!
//! This module maps three-dimensional integer coordinates to a single ordered index and back:
//! - Bit spreading and compaction via the [`bits`] module
//! - Method dispatch and the Morton (Z-order) curve via the [`codec`] module
//!
//! # Examples
//!
//! ```rust
//! use rusty_lif::coords::{decode_3d, encode_3d, Method};
//!
//! let index = encode_3d(3, 5, 7, Method::Morton);
//! assert_eq!(decode_3d(index, Method::Morton), (3, 5, 7));
//! ```
pub mod bits;
pub mod codec;

pub use codec::{decode_3d, decode_3d_named, encode_3d, encode_3d_named, Method, Morton3D};

/// The number of bits kept from each coordinate component.
pub const COORD_BITS: u32 = 21;
/// The mask selecting the bits kept from each coordinate component.
pub const COORD_MASK: u64 = (1 << COORD_BITS) - 1;
