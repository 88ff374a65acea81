//! Error types for distribution construction and statistics.
//!
//! This module provides:
//! - `DistributionError`: rejected parameters, unsupported statistics and
//!   unknown parameter indices

use thiserror::Error;
use tracing::debug;

/// Distribution errors.
///
/// # Variants
/// - `InvalidParameter`: A constructor or setter was given a value its
///   strategy rejects; nothing was stored
/// - `UnsupportedStatistic`: The statistic has no closed form for this
///   distribution
/// - `UnknownParameter`: Introspection by an index past the parameter list
///
/// # Examples
/// ```
/// use prng_distributions::DistributionError;
///
/// let err = DistributionError::UnsupportedStatistic {
///     statistic: "median",
///     distribution: "Binomial",
/// };
/// assert_eq!(err.to_string(), "median is not supported by Binomial");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// Parameter value rejected by the validity predicate.
    #[error("Invalid {name} = {value}: must be {constraint}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Description of the accepted values
        constraint: &'static str,
    },

    /// Statistic not available for this distribution.
    #[error("{statistic} is not supported by {distribution}")]
    UnsupportedStatistic {
        /// Name of the requested statistic
        statistic: &'static str,
        /// Name of the distribution
        distribution: &'static str,
    },

    /// Parameter index out of range.
    #[error("{distribution} has no parameter at index {index}")]
    UnknownParameter {
        /// The requested index
        index: usize,
        /// Name of the distribution
        distribution: &'static str,
    },
}

/// Result type for distribution operations.
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Fails with [`DistributionError::InvalidParameter`] unless `valid`.
pub(crate) fn ensure_valid(
    valid: bool,
    name: &'static str,
    value: f64,
    constraint: &'static str,
) -> Result<()> {
    if valid {
        return Ok(());
    }
    debug!(parameter = name, value, constraint, "rejected distribution parameter");
    Err(DistributionError::InvalidParameter {
        name,
        value,
        constraint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = DistributionError::InvalidParameter {
            name: "alpha",
            value: 1.5,
            constraint: "within [0, 1]",
        };
        assert_eq!(err.to_string(), "Invalid alpha = 1.5: must be within [0, 1]");
    }

    #[test]
    fn test_unknown_parameter_display() {
        let err = DistributionError::UnknownParameter {
            index: 4,
            distribution: "Beta",
        };
        assert_eq!(err.to_string(), "Beta has no parameter at index 4");
    }

    #[test]
    fn test_ensure_valid() {
        assert!(ensure_valid(true, "beta", 2.0, "positive").is_ok());
        assert_eq!(
            ensure_valid(false, "beta", 0.0, "positive"),
            Err(DistributionError::InvalidParameter {
                name: "beta",
                value: 0.0,
                constraint: "positive"
            })
        );
    }
}
