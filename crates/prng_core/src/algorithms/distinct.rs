//! One-word Weyl-sequence generator with a SplitMix64 output stage.
//!
//! The state advances by the golden ratio increment, so it visits every
//! `u64` exactly once per period of 2^64 and each output is distinct.
//! Both directions and arbitrary jumps are single additions.

use rand::random;

use crate::algorithms::DISTINCT_TAG;
use crate::error::Result;
use crate::generator::Generator;
use crate::mix::{seed_mix, splitmix_finalise, GOLDEN_GAMMA};
use crate::serial;

/// Reversible, skippable one-word generator (tag `DisR`).
///
/// # Examples
///
/// ```rust
/// use prng_core::{DistinctRandom, Generator};
///
/// let mut rng = DistinctRandom::from_state(0);
/// let mut jumped = rng.clone();
///
/// for _ in 0..9 {
///     rng.next_word();
/// }
/// assert_eq!(jumped.skip(10).unwrap(), rng.next_word());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistinctRandom {
    state: u64,
}

impl DistinctRandom {
    /// Creates a generator with an OS-seeded state.
    pub fn new() -> Self {
        Self::from_state(random())
    }

    /// Creates a generator whose state is expanded from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed_mix(seed),
        }
    }

    /// Creates a generator from a verbatim state.
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Returns the state word.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for DistinctRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for DistinctRandom {
    fn tag(&self) -> &'static str {
        DISTINCT_TAG
    }

    fn state_count(&self) -> usize {
        1
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

    fn supports_skip(&self) -> bool {
        true
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        splitmix_finalise(self.state)
    }

    #[inline]
    fn previous_word(&mut self) -> Result<u64> {
        let current = self.state;
        self.state = current.wrapping_sub(GOLDEN_GAMMA);
        Ok(splitmix_finalise(current))
    }

    fn skip(&mut self, distance: u64) -> Result<u64> {
        self.state = self
            .state
            .wrapping_add(distance.wrapping_mul(GOLDEN_GAMMA));
        Ok(splitmix_finalise(self.state))
    }

    fn seed(&mut self, seed: u64) {
        self.state = seed_mix(seed);
    }

    fn select_state(&self, _selection: usize) -> Result<u64> {
        Ok(self.state)
    }

    fn set_selected_state(&mut self, _selection: usize, value: u64) -> Result<()> {
        self.state = value;
        Ok(())
    }

    fn copy(&self) -> Box<dyn Generator> {
        Box::new(self.clone())
    }

    fn serialize_state(&self) -> String {
        serial::format_state(DISTINCT_TAG, &[self.state])
    }

    fn deserialize_state(&mut self, data: &str) -> Result<()> {
        let [state] = serial::parse_state::<1>(data, DISTINCT_TAG)?;
        self.state = state;
        Ok(())
    }
}
