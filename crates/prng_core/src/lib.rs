//! # prng_core: Reversible Pseudo-Random Generators
//!
//! ## Layer 1 (Foundation) Role
//!
//! prng_core is the bottom layer of the workspace, providing:
//! - The generator capability contract (`Generator`)
//! - Derived draws shared by every algorithm: bounded integers, floats,
//!   booleans, byte fills and shuffles (`GeneratorExt`)
//! - Concrete algorithms: `MizuchiRandom` (`MizR`) and `DistinctRandom` (`DisR`)
//! - Tagged textual state serialisation (`serial`) and polymorphic
//!   restoration through a `TagRegistry`
//! - Shared single-threaded handles (`SharedGenerator`)
//! - Interop with the `rand` ecosystem (`RandAdapter`)
//! - Error types: `GeneratorError` (`error`)
//!
//! ## Minimal Dependencies
//!
//! - thiserror: Error types
//! - tracing: Debug-level events for registration and rejected state strings
//! - rand: OS entropy for unseeded construction and the `RngCore` adapter
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::{Generator, GeneratorExt, MizuchiRandom, TagRegistry};
//!
//! let mut rng = MizuchiRandom::with_seed(1);
//!
//! // Derived draws
//! let die = rng.next_u32_between(1, 7);
//! assert!((1..7).contains(&die));
//! let unit = rng.next_exclusive_f64();
//! assert!(unit > 0.0 && unit < 1.0);
//!
//! // Rewind
//! let word = rng.next_word();
//! assert_eq!(rng.previous_word().unwrap(), word);
//!
//! // Save and restore through the registry
//! let registry = TagRegistry::with_builtin();
//! let mut restored = registry.deserialize(&rng.serialize_state()).unwrap();
//! assert_eq!(restored.next_word(), rng.next_word());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod adapter;
pub mod algorithms;
pub mod derived;
pub mod error;
pub mod generator;
pub mod mix;
pub mod registry;
pub mod serial;
pub mod shared;

pub use adapter::RandAdapter;
pub use algorithms::{DistinctRandom, MizuchiRandom};
pub use derived::GeneratorExt;
pub use error::{GeneratorError, Result};
pub use generator::Generator;
pub use registry::TagRegistry;
pub use shared::SharedGenerator;
