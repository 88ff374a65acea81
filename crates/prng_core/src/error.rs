//! Error types for generator operations.
//!
//! This module provides:
//! - `GeneratorError`: Errors from state (de)serialisation, registry lookups
//!   and capability checks
//! - `Result`: Crate-level result alias

use thiserror::Error;

/// Categorised generator errors.
///
/// Every failure is local and synchronous; no operation in this crate has a
/// transient failure mode, so callers never need to retry.
///
/// # Variants
/// - `MalformedState`: A serialised state string could not be parsed
/// - `UnknownTag`: No prototype is registered for the tag
/// - `InvalidTag`: A tag cannot be embedded in the serialised format
/// - `Unsupported`: The algorithm lacks the requested capability
///
/// # Examples
/// ```
/// use prng_core::GeneratorError;
///
/// let err = GeneratorError::UnknownTag("XyzR".to_string());
/// assert_eq!(format!("{}", err), "No generator registered for tag 'XyzR'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The serialised state could not be parsed.
    #[error("Malformed state string '{input}': {reason}")]
    MalformedState {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No prototype is registered for the tag.
    #[error("No generator registered for tag '{0}'")]
    UnknownTag(String),

    /// The tag is empty or contains a delimiter character.
    #[error("Invalid tag '{0}': tags must be non-empty alphanumeric text not starting with 'W'")]
    InvalidTag(String),

    /// The algorithm does not support the operation.
    #[error("Generator '{tag}' does not support {operation}")]
    Unsupported {
        /// Tag of the generator that was asked.
        tag: &'static str,
        /// Name of the unsupported operation.
        operation: &'static str,
    },
}

impl GeneratorError {
    /// Shorthand for a [`GeneratorError::MalformedState`].
    pub fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedState {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout `prng_core`.
pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeneratorError::malformed("#MizR`zz~1`", "non-hex digit");
        assert_eq!(
            err.to_string(),
            "Malformed state string '#MizR`zz~1`': non-hex digit"
        );

        let err = GeneratorError::Unsupported {
            tag: "MizR",
            operation: "skip",
        };
        assert!(err.to_string().contains("does not support skip"));

        let err = GeneratorError::InvalidTag("a~b".to_string());
        assert!(err.to_string().contains("a~b"));
    }
}
