//! The contract shared by every distribution.

use crate::error::Result;

/// A parameterised distribution drawing from an owned or shared generator.
///
/// Statistics without a closed form return
/// [`DistributionError::UnsupportedStatistic`](crate::DistributionError::UnsupportedStatistic)
/// rather than an approximation.
///
/// The trait is object safe, so heterogeneous distributions can be held as
/// `Box<dyn Distribution>`.
pub trait Distribution {
    /// Display name, used in error messages.
    fn name(&self) -> &'static str;

    /// Smallest value a sample can take.
    fn minimum(&self) -> f64;

    /// Largest value a sample can take.
    fn maximum(&self) -> f64;

    /// Expected value.
    fn mean(&self) -> Result<f64>;

    /// Median.
    fn median(&self) -> Result<f64>;

    /// Variance.
    fn variance(&self) -> Result<f64>;

    /// All modes, in ascending order.
    fn mode(&self) -> Result<Vec<f64>>;

    /// Draws one value, advancing the generator.
    fn sample(&mut self) -> f64;

    /// Number of parameters exposed for introspection.
    fn parameter_count(&self) -> usize;

    /// Name of the parameter at `index`, or `None` past the end.
    fn parameter_name(&self, index: usize) -> Option<&'static str>;

    /// Current value of the parameter at `index`.
    ///
    /// # Errors
    ///
    /// [`DistributionError::UnknownParameter`](crate::DistributionError::UnknownParameter)
    /// past the end.
    fn parameter_value(&self, index: usize) -> Result<f64>;

    /// Replaces the parameter at `index`, validated by the installed strategy.
    /// Nothing changes on error.
    ///
    /// # Errors
    ///
    /// [`DistributionError::UnknownParameter`](crate::DistributionError::UnknownParameter)
    /// past the end, or
    /// [`DistributionError::InvalidParameter`](crate::DistributionError::InvalidParameter)
    /// for a rejected value.
    fn set_parameter_value(&mut self, index: usize, value: f64) -> Result<()>;
}
