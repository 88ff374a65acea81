//! Single-threaded shared ownership of one generator.
//!
//! Several distributions (or other consumers) can draw from the same stream
//! by each holding a [`SharedGenerator`] handle. Draws through any handle
//! advance the one underlying state, so the interleaving of calls is what
//! decides which consumer sees which word.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::generator::Generator;

/// Cloneable handle to a generator shared within one thread.
///
/// Cloning the handle shares the state; use [`Generator::copy`] for an
/// independent generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, MizuchiRandom, SharedGenerator};
///
/// let mut first = SharedGenerator::new(MizuchiRandom::with_seed(1));
/// let mut second = first.clone();
///
/// let a = first.next_word();
/// let b = second.next_word();
///
/// let mut reference = MizuchiRandom::with_seed(1);
/// assert_eq!(a, reference.next_word());
/// assert_eq!(b, reference.next_word());
/// ```
#[derive(Debug, Clone)]
pub struct SharedGenerator {
    inner: Rc<RefCell<Box<dyn Generator>>>,
}

impl SharedGenerator {
    /// Takes ownership of `generator` behind a new shared handle.
    pub fn new(generator: impl Generator + 'static) -> Self {
        Self::from_boxed(Box::new(generator))
    }

    /// Takes ownership of an already boxed generator.
    pub fn from_boxed(generator: Box<dyn Generator>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(generator)),
        }
    }

    /// Number of live handles to the underlying generator.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Returns `true` if both handles draw from the same generator.
    pub fn shares_with(&self, other: &SharedGenerator) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

// Each method holds the borrow for a single call only, so re-entrant use
// from another handle never observes an outstanding borrow.
impl Generator for SharedGenerator {
    fn tag(&self) -> &'static str {
        self.inner.borrow().tag()
    }

    fn state_count(&self) -> usize {
        self.inner.borrow().state_count()
    }

    fn supports_read_access(&self) -> bool {
        self.inner.borrow().supports_read_access()
    }

    fn supports_write_access(&self) -> bool {
        self.inner.borrow().supports_write_access()
    }

    fn supports_previous(&self) -> bool {
        self.inner.borrow().supports_previous()
    }

    fn supports_skip(&self) -> bool {
        self.inner.borrow().supports_skip()
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.inner.borrow_mut().next_word()
    }

    fn previous_word(&mut self) -> Result<u64> {
        self.inner.borrow_mut().previous_word()
    }

    fn skip(&mut self, distance: u64) -> Result<u64> {
        self.inner.borrow_mut().skip(distance)
    }

    fn seed(&mut self, seed: u64) {
        self.inner.borrow_mut().seed(seed);
    }

    fn select_state(&self, selection: usize) -> Result<u64> {
        self.inner.borrow().select_state(selection)
    }

    fn set_selected_state(&mut self, selection: usize, value: u64) -> Result<()> {
        self.inner.borrow_mut().set_selected_state(selection, value)
    }

    fn set_states(&mut self, states: &[u64]) -> Result<()> {
        self.inner.borrow_mut().set_states(states)
    }

    /// Returns an independent generator, not another handle.
    fn copy(&self) -> Box<dyn Generator> {
        self.inner.borrow().copy()
    }

    fn serialize_state(&self) -> String {
        self.inner.borrow().serialize_state()
    }

    fn deserialize_state(&mut self, data: &str) -> Result<()> {
        self.inner.borrow_mut().deserialize_state(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{DistinctRandom, MizuchiRandom};
    use crate::derived::GeneratorExt;

    #[test]
    fn test_handles_interleave_one_stream() {
        let mut reference = DistinctRandom::with_seed(5);
        let mut a = SharedGenerator::new(DistinctRandom::with_seed(5));
        let mut b = a.clone();
        assert_eq!(a.handle_count(), 2);
        assert!(a.shares_with(&b));

        for i in 0..20 {
            let word = if i % 3 == 0 { b.next_word() } else { a.next_word() };
            assert_eq!(word, reference.next_word());
        }
        assert_eq!(a.serialize_state(), reference.serialize_state());
    }

    #[test]
    fn test_copy_detaches() {
        let shared = SharedGenerator::new(MizuchiRandom::with_seed(8));
        let mut detached = shared.copy();
        detached.next_word();
        assert_ne!(detached.serialize_state(), shared.serialize_state());
        assert_eq!(shared.handle_count(), 1);
    }

    #[test]
    fn test_state_writes_visible_through_all_handles() {
        let mut a = SharedGenerator::new(MizuchiRandom::from_states(1, 1));
        let b = a.clone();
        a.set_selected_state(1, 4).unwrap();
        assert_eq!(b.select_state(1).unwrap(), 5);
        a.deserialize_state("#MizR`7~9`").unwrap();
        assert_eq!(b.serialize_state(), "#MizR`7~9`");
        assert_eq!(b.tag(), "MizR");
    }

    #[test]
    fn test_derived_draws_through_handle() {
        let mut shared = SharedGenerator::new(MizuchiRandom::with_seed(3));
        let other = shared.clone();
        for _ in 0..100 {
            assert!(shared.next_u32_below(10) < 10);
        }
        assert!(!shared.shares_with(&SharedGenerator::new(MizuchiRandom::with_seed(3))));
        drop(other);
        assert_eq!(shared.handle_count(), 1);
    }
}
