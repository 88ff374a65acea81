//! Kumaraswamy distribution on [0, 1].
//!
//! Shaped like a Beta distribution but with a closed-form CDF
//! `F(x) = 1 - (1 - x^alpha)^beta`, which makes inverse-transform sampling
//! and the median exact.

use prng_core::Generator;

use crate::error::{ensure_valid, DistributionError, Result};
use crate::special::beta_fn;
use crate::strategy::{InverseCdf, ShapeStrategy};
use crate::traits::Distribution;

const NAME: &str = "Kumaraswamy";
const PARAMETER_NAMES: [&str; 2] = ["alpha", "beta"];

/// Kumaraswamy(alpha, beta) over a generator `G`, sampled by strategy `S`.
///
/// # Examples
///
/// ```rust
/// use prng_core::MizuchiRandom;
/// use prng_distributions::{Distribution, Kumaraswamy};
///
/// let mut k = Kumaraswamy::new(MizuchiRandom::with_seed(5), 2.0, 2.5).unwrap();
/// let median = k.median().unwrap();
/// assert!(median > 0.0 && median < 1.0);
///
/// let x = k.sample();
/// assert!(x > 0.0 && x < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Kumaraswamy<G, S = InverseCdf> {
    generator: G,
    alpha: f64,
    beta: f64,
    strategy: S,
}

impl<G: Generator> Kumaraswamy<G, InverseCdf> {
    /// Creates a Kumaraswamy(alpha, beta) with the default strategy.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] unless both shapes are finite
    /// and positive.
    pub fn new(generator: G, alpha: f64, beta: f64) -> Result<Self> {
        Self::with_strategy(generator, alpha, beta, InverseCdf)
    }
}

impl<G: Generator, S: ShapeStrategy> Kumaraswamy<G, S> {
    /// Creates a Kumaraswamy(alpha, beta) validated and sampled by `strategy`.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] if the strategy rejects either
    /// shape.
    pub fn with_strategy(generator: G, alpha: f64, beta: f64, strategy: S) -> Result<Self> {
        ensure_valid(
            strategy.is_valid_alpha(alpha),
            "alpha",
            alpha,
            strategy.alpha_constraint(),
        )?;
        ensure_valid(
            strategy.is_valid_beta(beta),
            "beta",
            beta,
            strategy.beta_constraint(),
        )?;
        Ok(Self {
            generator,
            alpha,
            beta,
            strategy,
        })
    }

    /// First shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Sets the first shape parameter; the previous value is kept on error.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] if the strategy rejects `alpha`.
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

    /// Sets the second shape parameter; the previous value is kept on error.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] if the strategy rejects `beta`.
    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        ensure_valid(
            self.strategy.is_valid_beta(beta),
            "beta",
            beta,
            self.strategy.beta_constraint(),
        )?;
        self.beta = beta;
        Ok(())
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

    /// Raw moment E[X^n] = beta * B(1 + n/alpha, beta).
    fn raw_moment(&self, n: f64) -> f64 {
        self.beta * beta_fn(1.0 + n / self.alpha, self.beta)
    }
}

impl<G: Generator, S: ShapeStrategy> Distribution for Kumaraswamy<G, S> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        1.0
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.raw_moment(1.0))
    }

    fn median(&self) -> Result<f64> {
        Ok((1.0 - 2f64.powf(-self.beta.recip())).powf(self.alpha.recip()))
    }

    fn variance(&self) -> Result<f64> {
        let mean = self.raw_moment(1.0);
        Ok(self.raw_moment(2.0) - mean * mean)
    }

    /// Kumaraswamy(1, 1) is uniform and has no distinguished mode.
    fn mode(&self) -> Result<Vec<f64>> {
        let (a, b) = (self.alpha, self.beta);
        if a == 1.0 && b == 1.0 {
            Err(DistributionError::UnsupportedStatistic {
                statistic: "mode",
                distribution: NAME,
            })
        } else if a >= 1.0 && b >= 1.0 {
            Ok(vec![((a - 1.0) / (a * b - 1.0)).powf(a.recip())])
        } else if a < 1.0 && b < 1.0 {
            Ok(vec![0.0, 1.0])
        } else if a < 1.0 {
            Ok(vec![0.0])
        } else {
            Ok(vec![1.0])
        }
    }

    fn sample(&mut self) -> f64 {
        self.strategy
            .sample(&mut self.generator, self.alpha, self.beta)
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
            1 => Ok(self.beta),
            _ => Err(DistributionError::UnknownParameter {
                index,
                distribution: NAME,
            }),
        }
    }

    fn set_parameter_value(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.set_alpha(value),
            1 => self.set_beta(value),
            _ => Err(DistributionError::UnknownParameter {
                index,
                distribution: NAME,
            }),
        }
    }
}
