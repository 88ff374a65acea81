//! CLI error types

use prng_core::GeneratorError;
use prng_distributions::DistributionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_convert() {
        let err: CliError = GeneratorError::UnknownTag("Xyz".to_string()).into();
        assert!(matches!(err, CliError::Generator(_)));
        assert!(err.to_string().contains("Xyz"));

        let err: CliError = DistributionError::UnknownParameter {
            index: 3,
            distribution: "Beta",
        }
        .into();
        assert!(err.to_string().starts_with("Distribution error"));
    }
}
