//! Tag registry for polymorphic deserialisation.
//!
//! A [`TagRegistry`] maps each algorithm tag to a prototype generator.
//! Deserialising a state string is a double dispatch: the registry resolves
//! the concrete type from the tag, then a copy of the prototype parses its
//! own state section. Format knowledge therefore stays with each algorithm.
//!
//! ## Initialisation
//!
//! The registry is an explicit value, not process-wide state. Build it once
//! with [`TagRegistry::with_builtin`], register any extra algorithms, and
//! then share it by reference with every call site that deserialises.
//!
//! # Examples
//!
//! ```rust
//! use prng_core::{Generator, MizuchiRandom, TagRegistry};
//!
//! let registry = TagRegistry::with_builtin();
//!
//! let mut original = MizuchiRandom::with_seed(9);
//! let mut restored = registry.deserialize(&original.serialize_state()).unwrap();
//!
//! assert_eq!(restored.tag(), "MizR");
//! assert_eq!(restored.next_word(), original.next_word());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::adapter::{RandAdapter, ADAPTER_SENTINEL};
use crate::algorithms::{DistinctRandom, MizuchiRandom};
use crate::error::{GeneratorError, Result};
use crate::generator::Generator;
use crate::serial::{self, SENTINEL};

/// Mapping from algorithm tag to prototype generator.
#[derive(Default)]
pub struct TagRegistry {
    prototypes: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl TagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every algorithm shipped with this crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(Box::new(MizuchiRandom::from_states(1, 1)));
        registry.insert(Box::new(DistinctRandom::from_state(1)));
        registry
    }

    /// Registers `prototype` under its tag.
    ///
    /// Registration is idempotent per tag: when the tag is already present
    /// the existing prototype is kept and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidTag`] if the tag is empty, contains
    /// anything but ASCII letters and digits, or starts with the adapter
    /// sentinel `W`. Such tags could not round-trip through the format.
    pub fn register(&mut self, prototype: Box<dyn Generator>) -> Result<bool> {
        let tag = prototype.tag();
        if tag.is_empty()
            || !tag.bytes().all(|b| b.is_ascii_alphanumeric())
            || tag.starts_with(ADAPTER_SENTINEL)
        {
            return Err(GeneratorError::InvalidTag(tag.to_string()));
        }
        Ok(self.insert(prototype))
    }

    fn insert(&mut self, prototype: Box<dyn Generator>) -> bool {
        let tag = prototype.tag();
        if self.prototypes.contains_key(tag) {
            debug!(tag, "tag already registered, keeping existing prototype");
            return false;
        }
        debug!(tag, state_count = prototype.state_count(), "registered generator");
        self.prototypes.insert(tag, prototype);
        true
    }

    /// Returns `true` if a prototype is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.prototypes.contains_key(tag)
    }

    /// Returns the registered prototype for `tag`.
    pub fn prototype(&self, tag: &str) -> Option<&dyn Generator> {
        self.prototypes.get(tag).map(|p| p.as_ref())
    }

    /// Iterates over registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.prototypes.keys().copied()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Reconstructs a generator from its serialised state.
    ///
    /// Plain strings start with `#`. Strings starting with `W` were produced
    /// by a [`RandAdapter`] and come back wrapped in one adapter per leading
    /// `W`.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::UnknownTag`] if the tag has no prototype
    /// - [`GeneratorError::MalformedState`] if the string is not in the
    ///   state format or its state section does not parse
    pub fn deserialize(&self, data: &str) -> Result<Box<dyn Generator>> {
        let rest = data.trim_start_matches(ADAPTER_SENTINEL);
        let layers = data.len() - rest.len();
        if layers == 0 {
            return self.deserialize_tagged(data);
        }
        let mut generator = self.deserialize_tagged(&format!("{}{}", SENTINEL, rest))?;
        for _ in 0..layers {
            generator = Box::new(RandAdapter::new(generator));
        }
        Ok(generator)
    }

    fn deserialize_tagged(&self, data: &str) -> Result<Box<dyn Generator>> {
        let (tag, _) = serial::split_tag(data)?;
        let prototype = self.prototypes.get(tag).ok_or_else(|| {
            debug!(tag, "no generator registered for tag");
            GeneratorError::UnknownTag(tag.to_string())
        })?;
        let mut generator = prototype.copy();
        generator.deserialize_state(data).map_err(|err| {
            debug!(tag, error = %err, "rejected state string");
            err
        })?;
        Ok(generator)
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("tags", &self.prototypes.keys().collect::<Vec<_>>())
            .finish()
    }
}
