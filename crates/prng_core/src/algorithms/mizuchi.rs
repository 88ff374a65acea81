//! Two-word reversible permuted multiplicative generator.
//!
//! The state is a 64-bit LCG (`A`) whose increment is the second state word
//! (`B`, always odd). Each step's output is the new `A` passed through an
//! xor-shift-multiply permutation, in the spirit of PCG and SplitMix64.
//! Changing `B` selects one of 2^63 independent streams.
//!
//! Because the multiplier is odd it has a multiplicative inverse modulo 2^64,
//! so the transition is a bijection and can be run backwards exactly.

use rand::random;

use crate::algorithms::MIZUCHI_TAG;
use crate::error::Result;
use crate::generator::Generator;
use crate::mix::{seed_mix, GOLDEN_GAMMA};
use crate::serial;

/// LCG multiplier applied to state A on every forward step. Must be odd.
pub const MULTIPLIER: u64 = 0xF7C2_EBC0_8F67_F2B5;

/// Inverse of [`MULTIPLIER`] modulo 2^64, used by the backward step.
pub const MULTIPLIER_INVERSE: u64 = 0x0979_5DFF_8024_EB9D;

/// Odd constant applied between the two output xor-shifts.
const OUTPUT_MULTIPLIER: u64 = 0xAEF1_7502_108E_F2D9;

/// Reversible two-word generator (tag `MizR`).
///
/// Supports [`previous_word`](Generator::previous_word) and raw state access;
/// does not support [`skip`](Generator::skip).
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, MizuchiRandom};
///
/// let mut rng = MizuchiRandom::with_seed(1);
/// assert_eq!(rng.next_word(), 0xFB6C_A7BC_B871_D146);
///
/// // State B is always odd, whatever is written to it.
/// rng.set_state_b(10);
/// assert_eq!(rng.state_b(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MizuchiRandom {
    state_a: u64,
    state_b: u64,
}

impl MizuchiRandom {
    /// Creates a generator with both states drawn from OS-seeded entropy.
    pub fn new() -> Self {
        Self::from_states(random(), random())
    }

    /// Creates a generator whose states are expanded from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self {
            state_a: 0,
            state_b: 1,
        };
        rng.seed(seed);
        rng
    }

    /// Creates a generator from explicit states, used verbatim except that
    /// the low bit of `state_b` is forced to 1.
    pub fn from_states(state_a: u64, state_b: u64) -> Self {
        Self {
            state_a,
            state_b: state_b | 1,
        }
    }

    /// Returns state A.
    #[inline]
    pub fn state_a(&self) -> u64 {
        self.state_a
    }

    /// Returns state B (always odd).
    #[inline]
    pub fn state_b(&self) -> u64 {
        self.state_b
    }

    /// Sets state A verbatim.
    #[inline]
    pub fn set_state_a(&mut self, value: u64) {
        self.state_a = value;
    }

    /// Sets state B, forcing the low bit to 1.
    #[inline]
    pub fn set_state_b(&mut self, value: u64) {
        self.state_b = value | 1;
    }

    /// Sets both states at once, as [`from_states`](Self::from_states) does.
    pub fn set_state(&mut self, state_a: u64, state_b: u64) {
        self.state_a = state_a;
        self.state_b = state_b | 1;
    }

    #[inline]
    fn permute(z: u64) -> u64 {
        let z = (z ^ (z >> 23) ^ (z >> 47)).wrapping_mul(OUTPUT_MULTIPLIER);
        z ^ (z >> 25)
    }
}

impl Default for MizuchiRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for MizuchiRandom {
    fn tag(&self) -> &'static str {
        MIZUCHI_TAG
    }

    fn state_count(&self) -> usize {
        2
    }

    fn supports_read_access(&self) -> bool {
        true
    }

    fn supports_write_access(&self) -> bool {
        true
    }

    fn supports_previous(&self) -> bool {
        true
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.state_a = self
            .state_a
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.state_b);
        Self::permute(self.state_a)
    }

    #[inline]
    fn previous_word(&mut self) -> Result<u64> {
        let current = self.state_a;
        self.state_a = current
            .wrapping_sub(self.state_b)
            .wrapping_mul(MULTIPLIER_INVERSE);
        Ok(Self::permute(current))
    }

    fn seed(&mut self, seed: u64) {
        let base = seed.wrapping_add(GOLDEN_GAMMA);
        self.state_a = seed_mix(base);
        self.state_b = seed_mix(base.wrapping_add(GOLDEN_GAMMA)) | 1;
    }

    fn select_state(&self, selection: usize) -> Result<u64> {
        Ok(match selection {
            1 => self.state_b,
            _ => self.state_a,
        })
    }

    fn set_selected_state(&mut self, selection: usize, value: u64) -> Result<()> {
        match selection {
            1 => self.set_state_b(value),
            _ => self.state_a = value,
        }
        Ok(())
    }

    fn copy(&self) -> Box<dyn Generator> {
        Box::new(self.clone())
    }

    fn serialize_state(&self) -> String {
        serial::format_state(MIZUCHI_TAG, &[self.state_a, self.state_b])
    }

    fn deserialize_state(&mut self, data: &str) -> Result<()> {
        let [state_a, state_b] = serial::parse_state::<2>(data, MIZUCHI_TAG)?;
        self.set_state(state_a, state_b);
        Ok(())
    }
}
