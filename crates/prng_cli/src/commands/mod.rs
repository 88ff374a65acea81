//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build their
//! output as lines so the formatting can be tested without a terminal.

pub mod draw;
pub mod inspect;
pub mod replay;
pub mod sample;

use prng_core::{Generator, TagRegistry};
use tracing::{debug, info};

use crate::config::{PrngConfig, MAX_COUNT};
use crate::{CliError, Result};

/// Resumes from a serialised `state` when given, otherwise creates a
/// generator from the configured algorithm and seed.
pub fn open_generator(
    config: &PrngConfig,
    registry: &TagRegistry,
    state: Option<&str>,
) -> Result<Box<dyn Generator>> {
    match state {
        Some(state) => {
            let generator = registry.deserialize(state)?;
            debug!(tag = generator.tag(), "resumed generator from state string");
            Ok(generator)
        }
        None => {
            info!(algorithm = %config.algorithm, seed = ?config.seed, "creating generator");
            Ok(config.create_generator())
        }
    }
}

/// Resolves an optional count against the configured default.
pub fn resolve_count(config: &PrngConfig, count: Option<usize>) -> Result<usize> {
    let count = count.unwrap_or(config.default_count);
    if count == 0 || count > MAX_COUNT {
        return Err(CliError::InvalidArgument(format!(
            "count must be between 1 and {}, got {}",
            MAX_COUNT, count
        )));
    }
    Ok(count)
}

/// Formats a word as fixed-width upper-case hexadecimal.
pub fn format_word(word: u64) -> String {
    format!("0x{:016X}", word)
}

/// Prints each line to standard output.
pub fn emit(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
