use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rusty_lif::coords::bits::{compact, spread};
use rusty_lif::coords::{decode_3d, decode_3d_named, encode_3d, encode_3d_named, Method, COORD_MASK};
use rusty_lif::error::SNNError;

#[test]
fn test_roundtrip_random_coords() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let x = rng.gen_range(0..1 << 21);
        let y = rng.gen_range(0..1 << 21);
        let z = rng.gen_range(0..1 << 21);
        let index = encode_3d_named(x, y, z, "morton").unwrap();
        assert_eq!(decode_3d_named(index, "morton").unwrap(), (x, y, z));
    }
}

#[test]
fn test_truncation_random_coords() {
    let mut rng = StdRng::seed_from_u64(42);
    let mask = COORD_MASK as u32;
    for _ in 0..10_000 {
        let (x, y, z): (u32, u32, u32) = (rng.gen(), rng.gen(), rng.gen());
        let index = encode_3d(x, y, z, Method::Morton);
        assert_eq!(index, encode_3d(x & mask, y & mask, z & mask, Method::Morton));
        assert_eq!(decode_3d(index, Method::Morton), (x & mask, y & mask, z & mask));
    }
}

#[test]
fn test_compact_spread_random() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let n: u64 = rng.gen();
        assert_eq!(compact(spread(n)), n & COORD_MASK);
    }
}

#[test]
fn test_channel_offsets() {
    assert_eq!(encode_3d_named(1, 0, 0, "morton"), Ok(1));
    assert_eq!(encode_3d_named(0, 1, 0, "morton"), Ok(2));
    assert_eq!(encode_3d_named(0, 0, 1, "morton"), Ok(4));
    assert_eq!(encode_3d_named(5, 0, 0, "morton"), Ok(65));
    assert_eq!(encode_3d_named(0, 5, 0, "morton"), Ok(130));
    assert_eq!(encode_3d_named(0, 0, 5, "morton"), Ok(260));
}

#[test]
fn test_unknown_method() {
    assert_eq!(
        encode_3d_named(1, 2, 3, "zorder"),
        Err(SNNError::UnknownMethod("zorder".to_string()))
    );
    assert_eq!(
        decode_3d_named(42, "zorder"),
        Err(SNNError::UnknownMethod("zorder".to_string()))
    );
}
