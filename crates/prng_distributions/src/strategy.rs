//! Validity predicates and samplers injected into distributions.
//!
//! Every distribution is generic over a strategy type that decides which
//! parameter values are acceptable and how a value is drawn from a
//! generator. Constructors and setters consult the installed strategy, so a
//! custom strategy can tighten validation or swap the sampling algorithm
//! without touching the distribution type.
//!
//! The default strategies:
//! - [`BernoulliTrials`]: Binomial by counting successes over `beta` trials
//! - [`GammaRatio`]: Beta via `rand_distr`'s gamma-ratio sampler
//! - [`InverseCdf`]: Kumaraswamy by inverting its closed-form CDF

use prng_core::{Generator, GeneratorExt, RandAdapter};
use rand_distr::Distribution as _;
use tracing::warn;

/// Strategy for distributions with a probability `alpha` and a trial count
/// `beta`.
pub trait BinomialStrategy {
    /// Whether `alpha` may be stored.
    fn is_valid_alpha(&self, alpha: f64) -> bool;

    /// Whether `beta` may be stored.
    fn is_valid_beta(&self, beta: u32) -> bool;

    /// Human-readable description of the accepted `alpha` values.
    fn alpha_constraint(&self) -> &'static str {
        "accepted by the sampling strategy"
    }

    /// Human-readable description of the accepted `beta` values.
    fn beta_constraint(&self) -> &'static str {
        "accepted by the sampling strategy"
    }

    /// Draws one value for validated parameters.
    fn sample<G: Generator + ?Sized>(&self, generator: &mut G, alpha: f64, beta: u32) -> u32;
}

/// Strategy for distributions with two real shape parameters.
pub trait ShapeStrategy {
    /// Whether `alpha` may be stored.
    fn is_valid_alpha(&self, alpha: f64) -> bool;

    /// Whether `beta` may be stored.
    fn is_valid_beta(&self, beta: f64) -> bool;

    /// Human-readable description of the accepted `alpha` values.
    fn alpha_constraint(&self) -> &'static str {
        "accepted by the sampling strategy"
    }

    /// Human-readable description of the accepted `beta` values.
    fn beta_constraint(&self) -> &'static str {
        "accepted by the sampling strategy"
    }

    /// Draws one value for validated parameters.
    fn sample<G: Generator + ?Sized>(&self, generator: &mut G, alpha: f64, beta: f64) -> f64;
}

/// Finite and strictly positive.
#[inline]
fn is_positive_shape(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Counts `next_f64() < alpha` over `beta` independent trials.
///
/// Consumes exactly `beta` words per sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BernoulliTrials;

impl BinomialStrategy for BernoulliTrials {
    fn is_valid_alpha(&self, alpha: f64) -> bool {
        (0.0..=1.0).contains(&alpha)
    }

    fn is_valid_beta(&self, _beta: u32) -> bool {
        true
    }

    fn alpha_constraint(&self) -> &'static str {
        "within [0, 1]"
    }

    fn beta_constraint(&self) -> &'static str {
        "a non-negative whole number"
    }

    fn sample<G: Generator + ?Sized>(&self, generator: &mut G, alpha: f64, beta: u32) -> u32 {
        let mut successes = 0;
        for _ in 0..beta {
            if generator.next_f64() < alpha {
                successes += 1;
            }
        }
        successes
    }
}

/// Beta sampling delegated to [`rand_distr::Beta`].
///
/// The generator is borrowed through a [`RandAdapter`] for the duration of
/// one draw. The number of words consumed varies with the rejection steps
/// but is fixed by the generator state. Shapes the sampler cannot use give
/// NaN without consuming words, and log a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GammaRatio;

impl ShapeStrategy for GammaRatio {
    fn is_valid_alpha(&self, alpha: f64) -> bool {
        is_positive_shape(alpha)
    }

    fn is_valid_beta(&self, beta: f64) -> bool {
        is_positive_shape(beta)
    }

    fn alpha_constraint(&self) -> &'static str {
        "finite and > 0"
    }

    fn beta_constraint(&self) -> &'static str {
        "finite and > 0"
    }

    fn sample<G: Generator + ?Sized>(&self, generator: &mut G, alpha: f64, beta: f64) -> f64 {
        match rand_distr::Beta::new(alpha, beta) {
            Ok(distribution) => distribution.sample(&mut RandAdapter::new(generator)),
            // Only reachable when a wrapping strategy admits non-positive shapes.
            Err(err) => {
                warn!(alpha, beta, error = %err, "Beta sampler rejected shapes; returning NaN");
                f64::NAN
            }
        }
    }
}

/// Kumaraswamy sampling by the inverse CDF
/// `x = (1 - (1 - u)^(1/beta))^(1/alpha)`.
///
/// `u` comes from [`GeneratorExt::next_exclusive_f64`], so exactly one word
/// is consumed per sample and the transform never sees 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InverseCdf;

impl ShapeStrategy for InverseCdf {
    fn is_valid_alpha(&self, alpha: f64) -> bool {
        is_positive_shape(alpha)
    }

    fn is_valid_beta(&self, beta: f64) -> bool {
        is_positive_shape(beta)
    }

    fn alpha_constraint(&self) -> &'static str {
        "finite and > 0"
    }

    fn beta_constraint(&self) -> &'static str {
        "finite and > 0"
    }

    fn sample<G: Generator + ?Sized>(&self, generator: &mut G, alpha: f64, beta: f64) -> f64 {
        let u = generator.next_exclusive_f64();
        // 1 - (1 - u)^(1/beta), evaluated without cancellation for small u
        let inner = -((-u).ln_1p() / beta).exp_m1();
        inner.powf(alpha.recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_core::{DistinctRandom, MizuchiRandom};

    /// Returns the same word forever.
    #[derive(Debug, Clone)]
    struct Fixed(u64);
    impl Generator for Fixed {
        fn tag(&self) -> &'static str {
            "Fix"
        }
        fn state_count(&self) -> usize {
            1
        }
        fn next_word(&mut self) -> u64 {
            self.0
        }
        fn seed(&mut self, seed: u64) {
            self.0 = seed;
        }
        fn copy(&self) -> Box<dyn Generator> {
            Box::new(self.clone())
        }
        fn serialize_state(&self) -> String {
            prng_core::serial::format_state("Fix", &[self.0])
        }
        fn deserialize_state(&mut self, data: &str) -> prng_core::Result<()> {
            let [w] = prng_core::serial::parse_state::<1>(data, "Fix")?;
            self.0 = w;
            Ok(())
        }
    }

    #[test]
    fn test_bernoulli_trials_validation() {
        let s = BernoulliTrials;
        assert!(s.is_valid_alpha(0.0));
        assert!(s.is_valid_alpha(1.0));
        assert!(!s.is_valid_alpha(1.5));
        assert!(!s.is_valid_alpha(-0.1));
        assert!(!s.is_valid_alpha(f64::NAN));
        assert!(s.is_valid_beta(0));
    }

    #[test]
    fn test_bernoulli_trials_consumes_beta_words() {
        let mut rng = DistinctRandom::from_state(5);
        let mut reference = rng.clone();
        BernoulliTrials.sample(&mut rng, 0.3, 17);
        reference.skip(17).unwrap();
        assert_eq!(rng, reference);
    }

    #[test]
    fn test_bernoulli_trials_extremes() {
        let mut rng = MizuchiRandom::with_seed(2);
        assert_eq!(BernoulliTrials.sample(&mut rng, 0.0, 50), 0);
        assert_eq!(BernoulliTrials.sample(&mut rng, 1.0, 50), 50);
        assert_eq!(BernoulliTrials.sample(&mut rng, 0.7, 0), 0);
    }

    #[test]
    fn test_shape_validation() {
        assert!(GammaRatio.is_valid_alpha(1e-9));
        assert!(InverseCdf.is_valid_beta(300.0));
        for value in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(!GammaRatio.is_valid_alpha(value));
            assert!(!GammaRatio.is_valid_beta(value));
            assert!(!InverseCdf.is_valid_alpha(value));
            assert!(!InverseCdf.is_valid_beta(value));
        }
    }

    #[test]
    fn test_inverse_cdf_uses_one_word() {
        let mut rng = DistinctRandom::from_state(99);
        let mut reference = rng.clone();
        let x = InverseCdf.sample(&mut rng, 2.0, 2.5);
        assert!(x > 0.0 && x < 1.0);
        reference.next_word();
        assert_eq!(rng, reference);
    }

    #[test]
    fn test_inverse_cdf_is_monotone_in_u() {
        // A larger u maps to a larger x.
        let low = InverseCdf.sample(&mut Fixed(0x10), 2.0, 2.5);
        let mid = InverseCdf.sample(&mut Fixed(0x8000_0000_0000_0001), 2.0, 2.5);
        let high = InverseCdf.sample(&mut Fixed(u64::MAX), 2.0, 2.5);
        assert!(low < mid && mid < high, "{} {} {}", low, mid, high);
        assert!(low > 0.0 && high < 1.0);
    }

    #[test]
    fn test_inverse_cdf_at_half_is_median() {
        // The word 1 maps to exactly u = 0.5.
        assert_eq!(Fixed(1).next_exclusive_f64(), 0.5);

        let (alpha, beta) = (2.0f64, 2.5f64);
        let x = InverseCdf.sample(&mut Fixed(1), alpha, beta);
        let median = (1.0 - 0.5f64.powf(beta.recip())).powf(alpha.recip());
        assert_relative_eq!(x, median, epsilon = 1e-15);
        assert_relative_eq!(x, 0.492_078_974_1, epsilon = 1e-9);
    }

    #[test]
    fn test_gamma_ratio_in_unit_interval() {
        let mut rng = MizuchiRandom::with_seed(13);
        for &(a, b) in &[(0.2, 0.3), (2.0, 2.5), (50.0, 0.5)] {
            for _ in 0..1000 {
                let x = GammaRatio.sample(&mut rng, a, b);
                assert!((0.0..=1.0).contains(&x), "Beta({}, {}) gave {}", a, b, x);
            }
        }
    }

    #[test]
    fn test_gamma_ratio_unusable_shapes_give_nan() {
        let mut rng = MizuchiRandom::with_seed(14);
        let before = rng.clone();
        assert!(GammaRatio.sample(&mut rng, 0.0, 2.5).is_nan());
        assert!(GammaRatio.sample(&mut rng, 2.0, -1.0).is_nan());
        assert_eq!(rng, before);
    }

    #[test]
    fn test_same_state_same_sample() {
        let mut a = MizuchiRandom::with_seed(40);
        let mut b = a.clone();
        assert_eq!(GammaRatio.sample(&mut a, 2.0, 2.5), GammaRatio.sample(&mut b, 2.0, 2.5));
        assert_eq!(a, b);
    }
}
