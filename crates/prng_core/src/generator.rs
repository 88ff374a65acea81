//! The capability contract shared by every generator algorithm.
//!
//! [`Generator`] exposes the raw word stream, state introspection and the
//! tagged textual serialisation. Everything derived from the raw words
//! (bounded integers, floats, booleans, byte fills) lives in
//! [`GeneratorExt`](crate::GeneratorExt), which is implemented for every
//! generator automatically.
//!
//! ## Thread Safety
//!
//! Generators hold plain mutable state with no internal locking. A single
//! generator must not be mutated from several threads without external
//! synchronisation; share one within a thread through
//! [`SharedGenerator`](crate::SharedGenerator).

use std::fmt;

use crate::error::{GeneratorError, Result};

/// A deterministic pseudo-random generator over 64-bit state words.
///
/// Implementations must make [`next_word`](Generator::next_word) a pure
/// function of the current state: the same state always yields the same word
/// and the same successor state.
///
/// Optional capabilities (reversal, skipping, raw state access) have default
/// implementations returning [`GeneratorError::Unsupported`]; algorithms that
/// provide them override both the method and the matching `supports_*` flag.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, MizuchiRandom};
///
/// let mut rng = MizuchiRandom::with_seed(42);
/// let word = rng.next_word();
/// assert_eq!(rng.previous_word().unwrap(), word);
/// ```
pub trait Generator: fmt::Debug {
    /// Short identifier embedded in serialised state, unique per algorithm.
    fn tag(&self) -> &'static str;

    /// Number of `u64` words making up the state.
    fn state_count(&self) -> usize;

    /// Whether [`select_state`](Generator::select_state) is available.
    fn supports_read_access(&self) -> bool {
        false
    }

    /// Whether [`set_selected_state`](Generator::set_selected_state) is available.
    fn supports_write_access(&self) -> bool {
        false
    }

    /// Whether [`previous_word`](Generator::previous_word) is available.
    fn supports_previous(&self) -> bool {
        false
    }

    /// Whether [`skip`](Generator::skip) is available.
    fn supports_skip(&self) -> bool {
        false
    }

    /// Advances the state by exactly one step and returns a 64-bit word.
    fn next_word(&mut self) -> u64;

    /// Rewinds the state by one step, returning the word that the forward step
    /// into the current state produced.
    ///
    /// For reversible algorithms, `next_word` followed by `previous_word`
    /// restores the original state and returns the same word twice.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unsupported`] for algorithms whose transition
    /// is not a bijection.
    fn previous_word(&mut self) -> Result<u64> {
        Err(GeneratorError::Unsupported {
            tag: self.tag(),
            operation: "previous_word",
        })
    }

    /// Advances the state by `distance` steps at once, returning the word the
    /// last of those steps would have produced.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unsupported`] unless the algorithm can jump.
    fn skip(&mut self, distance: u64) -> Result<u64> {
        let _ = distance;
        Err(GeneratorError::Unsupported {
            tag: self.tag(),
            operation: "skip",
        })
    }

    /// Expands a single seed into the full state with a fixed mixing function.
    ///
    /// Every `u64` is a valid seed; equal seeds always produce equal states.
    fn seed(&mut self, seed: u64);

    /// Reads one state word verbatim.
    ///
    /// Selections past the last state word fall back to word 0 instead of
    /// failing.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unsupported`] for algorithms without read access.
    fn select_state(&self, selection: usize) -> Result<u64> {
        let _ = selection;
        Err(GeneratorError::Unsupported {
            tag: self.tag(),
            operation: "select_state",
        })
    }

    /// Writes one state word, subject to the algorithm's constraints (for
    /// example a word that must stay odd).
    ///
    /// Selections past the last state word fall back to word 0 instead of
    /// failing.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unsupported`] for algorithms without write access.
    fn set_selected_state(&mut self, selection: usize, value: u64) -> Result<()> {
        let _ = (selection, value);
        Err(GeneratorError::Unsupported {
            tag: self.tag(),
            operation: "set_selected_state",
        })
    }

    /// Writes every state word in order, cycling through `states` when it is
    /// shorter than the state. An empty slice leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unsupported`] for algorithms without write access.
    fn set_states(&mut self, states: &[u64]) -> Result<()> {
        if !self.supports_write_access() {
            return Err(GeneratorError::Unsupported {
                tag: self.tag(),
                operation: "set_states",
            });
        }
        if states.is_empty() {
            return Ok(());
        }
        for selection in 0..self.state_count() {
            self.set_selected_state(selection, states[selection % states.len()])?;
        }
        Ok(())
    }

    /// Returns an independent generator with identical state.
    ///
    /// Draws on the copy never affect `self`, and vice versa.
    fn copy(&self) -> Box<dyn Generator>;

    /// Serialises the state as `#TAG`HEX~HEX...``.
    fn serialize_state(&self) -> String;

    /// Replaces the state with the one encoded in `data`.
    ///
    /// The state is only modified when the whole string parses.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MalformedState`] when the tag does not match
    /// this algorithm or the state section is malformed.
    fn deserialize_state(&mut self, data: &str) -> Result<()>;
}

impl Clone for Box<dyn Generator> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

macro_rules! forward_generator {
    () => {
        fn tag(&self) -> &'static str {
            (**self).tag()
        }

        fn state_count(&self) -> usize {
            (**self).state_count()
        }

        fn supports_read_access(&self) -> bool {
            (**self).supports_read_access()
        }

        fn supports_write_access(&self) -> bool {
            (**self).supports_write_access()
        }

        fn supports_previous(&self) -> bool {
            (**self).supports_previous()
        }

        fn supports_skip(&self) -> bool {
            (**self).supports_skip()
        }

        #[inline]
        fn next_word(&mut self) -> u64 {
            (**self).next_word()
        }

        fn previous_word(&mut self) -> Result<u64> {
            (**self).previous_word()
        }

        fn skip(&mut self, distance: u64) -> Result<u64> {
            (**self).skip(distance)
        }

        fn seed(&mut self, seed: u64) {
            (**self).seed(seed)
        }

        fn select_state(&self, selection: usize) -> Result<u64> {
            (**self).select_state(selection)
        }

        fn set_selected_state(&mut self, selection: usize, value: u64) -> Result<()> {
            (**self).set_selected_state(selection, value)
        }

        fn set_states(&mut self, states: &[u64]) -> Result<()> {
            (**self).set_states(states)
        }

        fn copy(&self) -> Box<dyn Generator> {
            (**self).copy()
        }

        fn serialize_state(&self) -> String {
            (**self).serialize_state()
        }

        fn deserialize_state(&mut self, data: &str) -> Result<()> {
            (**self).deserialize_state(data)
        }
    };
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    forward_generator!();
}

impl<G: Generator + ?Sized> Generator for &mut G {
    forward_generator!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MizuchiRandom;

    /// Minimal generator exercising the default (unsupported) capabilities.
    #[derive(Debug)]
    struct CountingGenerator(u64);

    impl Generator for CountingGenerator {
        fn tag(&self) -> &'static str {
            "Cnt"
        }

        fn state_count(&self) -> usize {
            1
        }

        fn next_word(&mut self) -> u64 {
            self.0 = self.0.wrapping_add(1);
            self.0
        }

        fn seed(&mut self, seed: u64) {
            self.0 = seed;
        }

        fn copy(&self) -> Box<dyn Generator> {
            Box::new(CountingGenerator(self.0))
        }

        fn serialize_state(&self) -> String {
            crate::serial::format_state(self.tag(), &[self.0])
        }

        fn deserialize_state(&mut self, data: &str) -> Result<()> {
            let [state] = crate::serial::parse_state::<1>(data, self.tag())?;
            self.0 = state;
            Ok(())
        }
    }

    #[test]
    fn test_default_capabilities_are_unsupported() {
        let mut rng = CountingGenerator(0);
        assert!(!rng.supports_previous());
        assert!(!rng.supports_skip());
        assert!(!rng.supports_read_access());
        assert!(!rng.supports_write_access());

        assert_eq!(
            rng.previous_word(),
            Err(GeneratorError::Unsupported {
                tag: "Cnt",
                operation: "previous_word"
            })
        );
        assert!(rng.skip(10).is_err());
        assert!(rng.select_state(0).is_err());
        assert!(rng.set_selected_state(0, 5).is_err());
        assert!(rng.set_states(&[5]).is_err());
    }

    #[test]
    fn test_boxed_generator_forwards() {
        let mut boxed: Box<dyn Generator> = Box::new(MizuchiRandom::with_seed(7));
        let mut plain = MizuchiRandom::with_seed(7);

        assert_eq!(boxed.tag(), "MizR");
        assert_eq!(boxed.state_count(), 2);
        for _ in 0..16 {
            assert_eq!(boxed.next_word(), plain.next_word());
        }
        assert_eq!(boxed.serialize_state(), plain.serialize_state());
    }

    #[test]
    fn test_boxed_clone_is_independent() {
        let mut original: Box<dyn Generator> = Box::new(MizuchiRandom::with_seed(3));
        let mut cloned = original.clone();

        let first = cloned.next_word();
        assert_eq!(original.next_word(), first);

        cloned.next_word();
        cloned.next_word();
        assert_ne!(original.serialize_state(), cloned.serialize_state());
    }

    #[test]
    fn test_mut_reference_forwards() {
        let mut rng = MizuchiRandom::with_seed(11);
        let expected = rng.clone().next_word();

        fn draw<G: Generator>(mut g: G) -> u64 {
            g.next_word()
        }

        assert_eq!(draw(&mut rng), expected);
        // The borrow advanced the owner.
        assert_eq!(rng.previous_word().unwrap(), expected);
    }

    #[test]
    fn test_set_states_cycles_short_slices() {
        let mut rng = MizuchiRandom::from_states(0, 1);
        rng.set_states(&[6]).unwrap();
        assert_eq!(rng.select_state(0).unwrap(), 6);
        // State B is forced odd.
        assert_eq!(rng.select_state(1).unwrap(), 7);

        rng.set_states(&[]).unwrap();
        assert_eq!(rng.select_state(0).unwrap(), 6);
    }
}
