//! Binomial distribution: successes over a fixed number of trials.
//!
//! `alpha` is the per-trial success probability and `beta` the number of
//! trials. Defaults are `alpha = 0.5`, `beta = 1`.

use prng_core::Generator;

use crate::error::{ensure_valid, DistributionError, Result};
use crate::strategy::{BernoulliTrials, BinomialStrategy};
use crate::traits::Distribution;

/// Default success probability.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Default number of trials.
pub const DEFAULT_BETA: u32 = 1;

const NAME: &str = "Binomial";
const PARAMETER_NAMES: [&str; 2] = ["alpha", "beta"];

/// Binomial distribution over a generator `G`, sampled by strategy `S`.
///
/// # Examples
///
/// ```rust
/// use prng_core::MizuchiRandom;
/// use prng_distributions::{Binomial, Distribution};
///
/// let mut coin = Binomial::new(MizuchiRandom::with_seed(1), 0.5, 10).unwrap();
/// assert_eq!(coin.mean().unwrap(), 5.0);
///
/// let heads = coin.next_u32();
/// assert!(heads <= coin.steps());
///
/// assert!(Binomial::new(MizuchiRandom::with_seed(1), 1.5, 10).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Binomial<G, S = BernoulliTrials> {
    generator: G,
    alpha: f64,
    beta: u32,
    strategy: S,
}

impl<G: Generator> Binomial<G, BernoulliTrials> {
    /// Creates a Binomial(alpha, beta) with the default strategy.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] unless `alpha` is in [0, 1].
    pub fn new(generator: G, alpha: f64, beta: u32) -> Result<Self> {
        Self::with_strategy(generator, alpha, beta, BernoulliTrials)
    }

    /// Creates a Binomial with the default parameters.
    pub fn with_defaults(generator: G) -> Self {
        Self {
            generator,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            strategy: BernoulliTrials,
        }
    }
}

impl<G: Generator, S: BinomialStrategy> Binomial<G, S> {
    /// Creates a Binomial(alpha, beta) validated and sampled by `strategy`.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] if the strategy rejects either
    /// parameter.
    pub fn with_strategy(generator: G, alpha: f64, beta: u32, strategy: S) -> Result<Self> {
        ensure_valid(
            strategy.is_valid_alpha(alpha),
            "alpha",
            alpha,
            strategy.alpha_constraint(),
        )?;
        ensure_valid(
            strategy.is_valid_beta(beta),
            "beta",
            f64::from(beta),
            strategy.beta_constraint(),
        )?;
        Ok(Self {
            generator,
            alpha,
            beta,
            strategy,
        })
    }

    /// Success probability per trial.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of trials.
    #[inline]
    pub fn beta(&self) -> u32 {
        self.beta
    }

    /// Number of trials; the same value as [`beta`](Self::beta).
    #[inline]
    pub fn steps(&self) -> u32 {
        self.beta
    }

    /// Sets the success probability.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] if the strategy rejects `alpha`;
    /// the previous value is kept.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        ensure_valid(
            self.strategy.is_valid_alpha(alpha),
            "alpha",
            alpha,
            self.strategy.alpha_constraint(),
        )?;
        self.alpha = alpha;
        Ok(())
    }

    /// Sets the number of trials.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] if the strategy rejects `beta`;
    /// the previous value is kept.
    pub fn set_beta(&mut self, beta: u32) -> Result<()> {
        ensure_valid(
            self.strategy.is_valid_beta(beta),
            "beta",
            f64::from(beta),
            self.strategy.beta_constraint(),
        )?;
        self.beta = beta;
        Ok(())
    }

    /// Draws a number of successes.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.strategy
            .sample(&mut self.generator, self.alpha, self.beta)
    }

    /// The generator samples are drawn from.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The generator samples are drawn from, mutably.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// The installed strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Releases the generator.
    pub fn into_generator(self) -> G {
        self.generator
    }
}

/// Converts an introspected value to a trial count: finite, non-negative,
/// whole and representable.
fn trial_count(value: f64) -> Option<u32> {
    let whole = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
    (whole && value <= f64::from(u32::MAX)).then_some(value as u32)
}

impl<G: Generator, S: BinomialStrategy> Distribution for Binomial<G, S> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        f64::from(self.beta)
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.alpha * f64::from(self.beta))
    }

    fn median(&self) -> Result<f64> {
        Err(DistributionError::UnsupportedStatistic {
            statistic: "median",
            distribution: NAME,
        })
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.alpha * (1.0 - self.alpha) * f64::from(self.beta))
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Ok(vec![(self.alpha * (f64::from(self.beta) + 1.0)).floor()])
    }

    fn sample(&mut self) -> f64 {
        f64::from(self.next_u32())
    }

    fn parameter_count(&self) -> usize {
        PARAMETER_NAMES.len()
    }

    fn parameter_name(&self, index: usize) -> Option<&'static str> {
        PARAMETER_NAMES.get(index).copied()
    }

    fn parameter_value(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.alpha),
            1 => Ok(f64::from(self.beta)),
            _ => Err(DistributionError::UnknownParameter {
                index,
                distribution: NAME,
            }),
        }
    }

    fn set_parameter_value(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.set_alpha(value),
            1 => match trial_count(value) {
                Some(beta) => self.set_beta(beta),
                None => ensure_valid(false, "beta", value, "a non-negative whole number"),
            },
            _ => Err(DistributionError::UnknownParameter {
                index,
                distribution: NAME,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_core::{DistinctRandom, MizuchiRandom};

    /// Caps the trial count and always reports full success.
    #[derive(Debug, Clone, Copy)]
    struct AtMostTen;

    impl BinomialStrategy for AtMostTen {
        fn is_valid_alpha(&self, alpha: f64) -> bool {
            (0.0..=1.0).contains(&alpha)
        }

        fn is_valid_beta(&self, beta: u32) -> bool {
            beta <= 10
        }

        fn sample<G: Generator + ?Sized>(&self, _generator: &mut G, _alpha: f64, beta: u32) -> u32 {
            beta
        }
    }

    #[test]
    fn test_defaults() {
        let b = Binomial::with_defaults(MizuchiRandom::with_seed(1));
        assert_eq!(b.alpha(), DEFAULT_ALPHA);
        assert_eq!(b.beta(), DEFAULT_BETA);
        assert_eq!(b.steps(), 1);
    }

    #[test]
    fn test_invalid_alpha_constructs_nothing() {
        let err = Binomial::new(MizuchiRandom::with_seed(1), 1.5, 4).unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidParameter {
                name: "alpha",
                value: 1.5,
                constraint: "within [0, 1]"
            }
        );
        assert!(Binomial::new(MizuchiRandom::with_seed(1), -0.01, 4).is_err());
        assert!(Binomial::new(MizuchiRandom::with_seed(1), f64::NAN, 4).is_err());
    }

    #[test]
    fn test_closed_form_statistics() {
        let b = Binomial::new(DistinctRandom::with_seed(0), 0.3, 20).unwrap();
        assert_eq!(b.minimum(), 0.0);
        assert_eq!(b.maximum(), 20.0);
        assert_relative_eq!(b.mean().unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(b.variance().unwrap(), 4.2, epsilon = 1e-12);
        assert_eq!(b.mode().unwrap(), vec![6.0]);
        assert_eq!(
            b.median(),
            Err(DistributionError::UnsupportedStatistic {
                statistic: "median",
                distribution: "Binomial"
            })
        );
    }

    #[test]
    fn test_setters_keep_prior_state_on_rejection() {
        let mut b = Binomial::new(MizuchiRandom::with_seed(1), 0.25, 8).unwrap();
        assert!(b.set_alpha(2.0).is_err());
        assert_eq!(b.alpha(), 0.25);

        b.set_alpha(0.75).unwrap();
        b.set_beta(3).unwrap();
        assert_eq!((b.alpha(), b.beta()), (0.75, 3));
    }

    #[test]
    fn test_parameter_introspection() {
        let mut b = Binomial::new(MizuchiRandom::with_seed(1), 0.5, 4).unwrap();
        assert_eq!(b.parameter_count(), 2);
        assert_eq!(b.parameter_name(0), Some("alpha"));
        assert_eq!(b.parameter_name(1), Some("beta"));
        assert_eq!(b.parameter_name(2), None);
        assert_eq!(b.parameter_value(1).unwrap(), 4.0);
        assert!(matches!(
            b.parameter_value(2),
            Err(DistributionError::UnknownParameter { index: 2, .. })
        ));

        b.set_parameter_value(1, 12.0).unwrap();
        assert_eq!(b.steps(), 12);
        b.set_parameter_value(0, 0.1).unwrap();
        assert_eq!(b.alpha(), 0.1);

        for bad in [-1.0, 2.5, f64::INFINITY, 1e12] {
            assert!(b.set_parameter_value(1, bad).is_err(), "{}", bad);
        }
        assert_eq!(b.steps(), 12);
        assert!(b.set_parameter_value(5, 1.0).is_err());
    }

    #[test]
    fn test_samples_within_support() {
        let mut b = Binomial::new(MizuchiRandom::with_seed(3), 0.4, 7).unwrap();
        for _ in 0..1000 {
            let x = b.sample();
            assert!(x >= b.minimum() && x <= b.maximum());
            assert_eq!(x.fract(), 0.0);
        }
    }

    #[test]
    fn test_custom_strategy_drives_validation_and_sampling() {
        let mut b = Binomial::with_strategy(MizuchiRandom::with_seed(1), 0.5, 10, AtMostTen).unwrap();
        assert_eq!(b.next_u32(), 10);
        assert!(b.set_beta(11).is_err());
        assert_eq!(b.beta(), 10);
        assert!(b.set_parameter_value(1, 11.0).is_err());

        let err = Binomial::with_strategy(MizuchiRandom::with_seed(1), 0.5, 11, AtMostTen).unwrap_err();
        assert!(matches!(
            err,
            DistributionError::InvalidParameter { name: "beta", constraint, .. }
                if constraint == "accepted by the sampling strategy"
        ));
    }

    #[test]
    fn test_same_state_same_sample() {
        let mut a = Binomial::new(DistinctRandom::with_seed(9), 0.5, 30).unwrap();
        let mut b = a.clone();
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
        assert_eq!(a.into_generator(), b.generator().clone());
    }
}
