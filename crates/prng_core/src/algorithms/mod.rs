//! Concrete generator algorithms.
//!
//! - [`MizuchiRandom`] (`MizR`): two-word reversible permuted LCG
//! - [`DistinctRandom`] (`DisR`): one-word Weyl sequence, reversible and skippable
//!
//! Both are registered by [`TagRegistry::with_builtin`](crate::TagRegistry::with_builtin).

mod distinct;
mod mizuchi;

pub use distinct::DistinctRandom;
pub use mizuchi::{MizuchiRandom, MULTIPLIER, MULTIPLIER_INVERSE};

/// Serialisation tag of [`MizuchiRandom`].
pub const MIZUCHI_TAG: &str = "MizR";

/// Serialisation tag of [`DistinctRandom`].
pub const DISTINCT_TAG: &str = "DisR";
