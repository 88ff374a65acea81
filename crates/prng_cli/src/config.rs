//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use prng_core::{DistinctRandom, Generator, MizuchiRandom};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Largest `default_count` accepted by validation.
pub const MAX_COUNT: usize = 1_000_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Unknown algorithm: {0}. Must be one of: mizuchi (MizR), distinct (DisR)")]
    UnknownAlgorithm(String),

    #[error("Invalid seed: {0}. Must be a decimal or 0x-prefixed hexadecimal u64")]
    InvalidSeed(String),

    #[error("Invalid count: {0}. Must be between 1 and 1000000")]
    InvalidCount(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Generator algorithms selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Mizuchi,
    Distinct,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Accepts the algorithm name or its serialisation tag, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mizuchi" | "mizr" => Ok(Algorithm::Mizuchi),
            "distinct" | "disr" => Ok(Algorithm::Distinct),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Algorithm {
    /// Creates a generator, seeded when `seed` is given and from OS entropy
    /// otherwise.
    pub fn create(&self, seed: Option<u64>) -> Box<dyn Generator> {
        match (self, seed) {
            (Algorithm::Mizuchi, Some(seed)) => Box::new(MizuchiRandom::with_seed(seed)),
            (Algorithm::Mizuchi, None) => Box::new(MizuchiRandom::new()),
            (Algorithm::Distinct, Some(seed)) => Box::new(DistinctRandom::with_seed(seed)),
            (Algorithm::Distinct, None) => Box::new(DistinctRandom::new()),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Mizuchi => write!(f, "mizuchi"),
            Algorithm::Distinct => write!(f, "distinct"),
        }
    }
}

/// Parses a seed given in decimal or as `0x`-prefixed hexadecimal.
pub fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrngConfig {
    /// Seed for new generators; OS entropy when absent. The file accepts a
    /// TOML integer or a string in any form [`parse_seed`] accepts.
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: Option<u64>,
    /// Algorithm for new generators
    #[serde(deserialize_with = "deserialize_algorithm")]
    pub algorithm: Algorithm,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Number of values drawn when a command is not given a count
    pub default_count: usize,
}

/// A seed as written in the config file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedValue {
    Number(u64),
    Text(String),
}

fn deserialize_seed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match SeedValue::deserialize(deserializer)? {
        SeedValue::Number(seed) => Ok(Some(seed)),
        SeedValue::Text(text) => parse_seed(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<Algorithm, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Algorithm::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for PrngConfig {
    fn default() -> Self {
        Self {
            seed: None,
            algorithm: Algorithm::Mizuchi,
            log_level: LogLevel::Warn,
            default_count: 10,
        }
    }
}

impl PrngConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: PrngConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `PRNG_*` environment variables over the current values
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(seed) = std::env::var("PRNG_SEED") {
            self.seed = Some(parse_seed(&seed)?);
        }
        if let Ok(algorithm) = std::env::var("PRNG_ALGORITHM") {
            self.algorithm = Algorithm::from_str(&algorithm)?;
        }
        if let Ok(log_level) = std::env::var("PRNG_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = &cli.seed {
            self.seed = Some(parse_seed(seed)?);
        }
        if let Some(algorithm) = &cli.algorithm {
            self.algorithm = Algorithm::from_str(algorithm)?;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_count == 0 || self.default_count > MAX_COUNT {
            return Err(ConfigError::InvalidCount(self.default_count));
        }
        Ok(())
    }

    /// Creates a generator from the configured algorithm and seed.
    pub fn create_generator(&self) -> Box<dyn Generator> {
        self.algorithm.create(self.seed)
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<String>,
    /// Algorithm override
    pub algorithm: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PrngConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        PrngConfig::from_file(config_path)?
    } else {
        PrngConfig::default()
    };

    config.merge_with_env()?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = PrngConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.algorithm, Algorithm::Mizuchi);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.default_count, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!(Algorithm::from_str("mizuchi").unwrap(), Algorithm::Mizuchi);
        assert_eq!(Algorithm::from_str("MizR").unwrap(), Algorithm::Mizuchi);
        assert_eq!(Algorithm::from_str("Distinct").unwrap(), Algorithm::Distinct);
        assert_eq!(Algorithm::from_str("disr").unwrap(), Algorithm::Distinct);

        assert!(Algorithm::from_str("xoshiro").is_err());
    }

    #[test]
    fn test_algorithm_create() {
        let rng = Algorithm::Mizuchi.create(Some(1));
        assert_eq!(rng.serialize_state(), MizuchiRandom::with_seed(1).serialize_state());
        assert_eq!(Algorithm::Distinct.create(None).tag(), "DisR");
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed(" 0xFF ").unwrap(), 255);
        assert_eq!(parse_seed("0X10").unwrap(), 16);
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);

        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("0x").is_err());
        assert!(parse_seed("seed").is_err());
    }

    #[test]
    fn test_validate_count() {
        let mut config = PrngConfig::default();
        config.default_count = 0;
        assert!(config.validate().is_err());

        config.default_count = MAX_COUNT;
        assert!(config.validate().is_ok());

        config.default_count = MAX_COUNT + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = PrngConfig::default();
        let cli = CliArgs {
            seed: Some("0x2A".to_string()),
            algorithm: Some("distinct".to_string()),
            log_level: Some("debug".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.algorithm, Algorithm::Distinct);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_args_merge_rejects_bad_values() {
        let mut config = PrngConfig::default();
        let cli = CliArgs {
            algorithm: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.merge_with_cli(&cli),
            Err(ConfigError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            seed = 7
            algorithm = "DisR"
            log_level = "info"
            default_count = 25
        "#;

        let config: PrngConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.algorithm, Algorithm::Distinct);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_count, 25);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: PrngConfig = toml::from_str("default_count = 3").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.seed, None);
        assert_eq!(config.algorithm, Algorithm::Mizuchi);
        assert_eq!(config.default_count, 3);
    }

    #[test]
    fn test_toml_seed_accepts_cli_forms() {
        let config: PrngConfig = toml::from_str(r#"seed = "0xFFFFFFFFFFFFFFFF""#).unwrap();
        assert_eq!(config.seed, Some(u64::MAX));

        let config: PrngConfig = toml::from_str(r#"seed = "18446744073709551615""#).unwrap();
        assert_eq!(config.seed, Some(u64::MAX));

        let config: PrngConfig = toml::from_str(r#"seed = "0x2A""#).unwrap();
        assert_eq!(config.seed, Some(42));

        assert!(toml::from_str::<PrngConfig>(r#"seed = "0xZZ""#).is_err());
        assert!(toml::from_str::<PrngConfig>("seed = -1").is_err());
    }

    #[test]
    fn test_toml_rejects_unknown_algorithm() {
        assert!(toml::from_str::<PrngConfig>(r#"algorithm = "lcg""#).is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("prng_cli_config_{}.toml", std::process::id()));
        std::fs::write(&path, "seed = 99\ndefault_count = 4\n").unwrap();
        let config = PrngConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.default_count, 4);

        assert!(matches!(
            PrngConfig::from_file(&path),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_build_config_cli_overrides_defaults() {
        // Clear any environment variables that might interfere
        std::env::remove_var("PRNG_SEED");
        std::env::remove_var("PRNG_ALGORITHM");
        std::env::remove_var("PRNG_LOG_LEVEL");

        let config = build_config(&CliArgs::default()).unwrap();
        assert_eq!(config, PrngConfig::default());

        let cli = CliArgs {
            seed: Some("5".to_string()),
            ..Default::default()
        };
        assert_eq!(build_config(&cli).unwrap().seed, Some(5));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidCount(0);
        assert!(err.to_string().contains("Invalid count"));

        let err = ConfigError::UnknownAlgorithm("bad".to_string());
        assert!(err.to_string().contains("Unknown algorithm"));

        let err = ConfigError::InvalidSeed("bad".to_string());
        assert!(err.to_string().contains("Invalid seed"));
    }

    proptest! {
        #[test]
        fn prop_seed_formats_agree(seed in any::<u64>()) {
            prop_assert_eq!(parse_seed(&seed.to_string()).unwrap(), seed);
            prop_assert_eq!(parse_seed(&format!("{:#x}", seed)).unwrap(), seed);
        }
    }
}
