//! Avalanche mixing functions shared by seeding and output stages.

/// The 64-bit golden ratio increment used by Weyl sequences and seeding.
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed expansion mix: xor-shift, multiply, xor-shift, multiply, xor-shift.
///
/// A bijection on `u64`, so distinct inputs always expand to distinct words.
#[inline]
pub fn seed_mix(mut x: u64) -> u64 {
    x ^= x >> 27;
    x = x.wrapping_mul(0x3C79_AC49_2BA7_B653);
    x ^= x >> 33;
    x = x.wrapping_mul(0x1C69_B3F7_4AC4_AE35);
    x ^ (x >> 27)
}

/// The SplitMix64 finaliser (Stafford's "Mix13" variant).
#[inline]
pub fn splitmix_finalise(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
