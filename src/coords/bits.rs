//! Bit spreading for three-way interleaving.

use super::COORD_MASK;

/// Spread the low 21 bits of `n` so that bit `i` lands on bit `3 * i`.
/// Higher bits of the input are discarded.
pub fn spread(n: u64) -> u64 {
    let mut n = n & COORD_MASK;
    n = (n | n << 32) & 0x1f00000000ffff;
    n = (n | n << 16) & 0x1f0000ff0000ff;
    n = (n | n << 8) & 0x100f00f00f00f00f;
    n = (n | n << 4) & 0x10c30c30c30c30c3;
    n = (n | n << 2) & 0x1249249249249249;
    n
}

/// Inverse of [`spread`]: gather every third bit of `n` (starting at bit 0) into a dense 21-bit value.
pub fn compact(n: u64) -> u64 {
    let mut n = n & 0x1249249249249249;
    n = (n ^ (n >> 2)) & 0x10c30c30c30c30c3;
    n = (n ^ (n >> 4)) & 0x100f00f00f00f00f;
    n = (n ^ (n >> 8)) & 0x1f0000ff0000ff;
    n = (n ^ (n >> 16)) & 0x1f00000000ffff;
    n = (n ^ (n >> 32)) & COORD_MASK;
    n
}
