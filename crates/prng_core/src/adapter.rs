//! Bridge from [`Generator`] to the `rand` ecosystem.
//!
//! [`RandAdapter`] implements [`rand::RngCore`] on top of any generator, so
//! `rand` and `rand_distr` samplers can draw from a reversible, serialisable
//! stream. It is itself a [`Generator`] that delegates everything to the
//! wrapped one; only its serialised form differs, carrying a `W` in place of
//! the `#` sentinel so a registry knows to restore the wrapper as well.
//! Nested adapters add one `W` per layer (`WWMizR`...).

use rand::RngCore;

use crate::derived::GeneratorExt;
use crate::error::{GeneratorError, Result};
use crate::generator::Generator;
use crate::serial::SENTINEL;

/// Leading character of a serialised [`RandAdapter`].
pub const ADAPTER_SENTINEL: char = 'W';

/// A [`Generator`] usable wherever `rand` expects an [`RngCore`].
///
/// Wrap a borrowed generator (`RandAdapter::new(&mut rng)`) to hand it to a
/// `rand` API for a single call without giving up ownership.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, MizuchiRandom, RandAdapter};
/// use rand::Rng;
///
/// let mut adapter = RandAdapter::new(MizuchiRandom::with_seed(1));
/// let roll: u8 = adapter.gen_range(1..=6);
/// assert!((1..=6).contains(&roll));
///
/// assert!(adapter.serialize_state().starts_with("WMizR`"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandAdapter<G> {
    wrapped: G,
}

impl<G: Generator> RandAdapter<G> {
    /// Wraps `wrapped`.
    pub fn new(wrapped: G) -> Self {
        Self { wrapped }
    }

    /// Returns the wrapped generator.
    pub fn wrapped(&self) -> &G {
        &self.wrapped
    }

    /// Returns the wrapped generator mutably.
    pub fn wrapped_mut(&mut self) -> &mut G {
        &mut self.wrapped
    }

    /// Unwraps the adapter.
    pub fn into_inner(self) -> G {
        self.wrapped
    }

    /// Reseeds the wrapped generator.
    pub fn reset(&mut self, seed: u64) {
        self.wrapped.seed(seed);
    }
}

impl<G: Generator> Generator for RandAdapter<G> {
    fn tag(&self) -> &'static str {
        self.wrapped.tag()
    }

    fn state_count(&self) -> usize {
        self.wrapped.state_count()
    }

    fn supports_read_access(&self) -> bool {
        self.wrapped.supports_read_access()
    }

    fn supports_write_access(&self) -> bool {
        self.wrapped.supports_write_access()
    }

    fn supports_previous(&self) -> bool {
        self.wrapped.supports_previous()
    }

    fn supports_skip(&self) -> bool {
        self.wrapped.supports_skip()
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.wrapped.next_word()
    }

    fn previous_word(&mut self) -> Result<u64> {
        self.wrapped.previous_word()
    }

    fn skip(&mut self, distance: u64) -> Result<u64> {
        self.wrapped.skip(distance)
    }

    fn seed(&mut self, seed: u64) {
        self.wrapped.seed(seed);
    }

    fn select_state(&self, selection: usize) -> Result<u64> {
        self.wrapped.select_state(selection)
    }

    fn set_selected_state(&mut self, selection: usize, value: u64) -> Result<()> {
        self.wrapped.set_selected_state(selection, value)
    }

    fn set_states(&mut self, states: &[u64]) -> Result<()> {
        self.wrapped.set_states(states)
    }

    fn copy(&self) -> Box<dyn Generator> {
        Box::new(RandAdapter::new(self.wrapped.copy()))
    }

    fn serialize_state(&self) -> String {
        let inner = self.wrapped.serialize_state();
        match inner.strip_prefix(SENTINEL) {
            Some(rest) => format!("{}{}", ADAPTER_SENTINEL, rest),
            None if inner.starts_with(ADAPTER_SENTINEL) => {
                format!("{}{}", ADAPTER_SENTINEL, inner)
            }
            None => inner,
        }
    }

    /// Accepts both the adapter's own `W` form and a plain `#` state string
    /// for the wrapped algorithm. One `W` is consumed per adapter layer.
    fn deserialize_state(&mut self, data: &str) -> Result<()> {
        match data.strip_prefix(ADAPTER_SENTINEL) {
            Some(rest) if rest.starts_with(ADAPTER_SENTINEL) => self
                .wrapped
                .deserialize_state(rest)
                .map_err(|err| match err {
                    GeneratorError::MalformedState { reason, .. } => {
                        GeneratorError::malformed(data, reason)
                    }
                    other => other,
                }),
            Some(rest) => self
                .wrapped
                .deserialize_state(&format!("{}{}", SENTINEL, rest))
                .map_err(|err| match err {
                    GeneratorError::MalformedState { reason, .. } => {
                        GeneratorError::malformed(data, reason)
                    }
                    other => other,
                }),
            None => self.wrapped.deserialize_state(data),
        }
    }
}

impl<G: Generator> RngCore for RandAdapter<G> {
    /// Upper half of the next word; the high bits are the better mixed ones.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.wrapped.next_word() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.wrapped.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.wrapped.next_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
