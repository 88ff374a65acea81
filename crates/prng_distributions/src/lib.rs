//! # prng_distributions: Distributions over Reversible Generators
//!
//! ## Layer 2 (Models) Role
//!
//! prng_distributions builds on prng_core, providing:
//! - The distribution contract: sampling, closed-form statistics and
//!   parameter introspection by index (`Distribution`)
//! - `Binomial`, `Beta` and `Kumaraswamy`
//! - Injectable validity predicates and samplers (`strategy`)
//! - Special functions for the closed forms (`special`)
//! - Error types: `DistributionError` (`error`)
//!
//! ## Generators
//!
//! Each distribution owns its generator `G`. Pass `&mut rng` to borrow one
//! for a while, or a [`SharedGenerator`](prng_core::SharedGenerator) handle
//! to let several distributions draw from one interleaved stream.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::{MizuchiRandom, SharedGenerator};
//! use prng_distributions::{Beta, Binomial, Distribution};
//!
//! let shared = SharedGenerator::new(MizuchiRandom::with_seed(1));
//! let mut trials = Binomial::new(shared.clone(), 0.25, 8).unwrap();
//! let mut shape = Beta::new(shared, 2.0, 5.0).unwrap();
//!
//! let successes = trials.sample();
//! let fraction = shape.sample();
//! assert!(successes <= 8.0);
//! assert!((0.0..=1.0).contains(&fraction));
//!
//! assert!(trials.median().is_err());
//! assert_eq!(shape.parameter_name(1), Some("beta"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod beta;
pub mod binomial;
pub mod error;
pub mod kumaraswamy;
pub mod special;
pub mod strategy;
pub mod traits;

pub use beta::Beta;
pub use binomial::Binomial;
pub use error::{DistributionError, Result};
pub use kumaraswamy::Kumaraswamy;
pub use strategy::{BernoulliTrials, BinomialStrategy, GammaRatio, InverseCdf, ShapeStrategy};
pub use traits::Distribution;
