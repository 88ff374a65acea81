//! Replay command implementation
//!
//! Moves a serialised state forward or backward and prints the words
//! passed on the way, followed by the resulting state.

use prng_core::{Generator, TagRegistry};
use tracing::info;

use super::{emit, format_word};
use crate::config::MAX_COUNT;
use crate::{CliError, Result};

/// Run the replay command
pub fn run(registry: &TagRegistry, state: &str, steps: i64, jump: bool) -> Result<()> {
    let lines = render(registry, state, steps, jump)?;
    emit(&lines);
    Ok(())
}

/// Steps the generator restored from `state`.
///
/// Positive `steps` draw forward, negative `steps` rewind with
/// `previous_word`. With `jump` the generator skips ahead in one move and
/// only the last word is printed.
pub fn render(registry: &TagRegistry, state: &str, steps: i64, jump: bool) -> Result<Vec<String>> {
    let mut generator = registry.deserialize(state)?;
    info!(tag = generator.tag(), steps, jump, "replaying state");

    let mut lines = Vec::new();
    if jump {
        if steps < 0 {
            return Err(CliError::InvalidArgument(format!(
                "jumps only move forward, got {} steps",
                steps
            )));
        }
        if steps > 0 {
            lines.push(format_word(generator.skip(steps.unsigned_abs())?));
        }
    } else {
        let distance = usize::try_from(steps.unsigned_abs()).unwrap_or(usize::MAX);
        if distance > MAX_COUNT {
            return Err(CliError::InvalidArgument(format!(
                "at most {} steps can be printed, got {}; use --jump to skip ahead",
                MAX_COUNT, steps
            )));
        }
        for _ in 0..distance {
            let word = if steps > 0 {
                generator.next_word()
            } else {
                generator.previous_word()?
            };
            lines.push(format_word(word));
        }
    }

    lines.push(format!("state: {}", generator.serialize_state()));
    Ok(lines)
}
