//! Inspect command implementation
//!
//! Decodes a serialised state through the registry and describes it
//! without consuming the state.

use prng_core::adapter::ADAPTER_SENTINEL;
use prng_core::{Generator, TagRegistry};

use super::{emit, format_word};
use crate::Result;

/// Run the inspect command
pub fn run(registry: &TagRegistry, state: &str) -> Result<()> {
    let lines = render(registry, state)?;
    emit(&lines);
    Ok(())
}

fn capabilities(generator: &dyn Generator) -> String {
    let flags = [
        ("read", generator.supports_read_access()),
        ("write", generator.supports_write_access()),
        ("previous", generator.supports_previous()),
        ("skip", generator.supports_skip()),
    ];
    let enabled: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();
    if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(", ")
    }
}

/// Describes the generator `state` restores to.
///
/// The next and previous words are computed on copies, so the reported
/// state is the one given.
pub fn render(registry: &TagRegistry, state: &str) -> Result<Vec<String>> {
    let generator = registry.deserialize(state)?;

    let mut lines = vec![
        format!("tag: {}", generator.tag()),
        format!(
            "adapter: {}",
            if state.starts_with(ADAPTER_SENTINEL) { "yes" } else { "no" }
        ),
        format!("state words: {}", generator.state_count()),
        format!("capabilities: {}", capabilities(generator.as_ref())),
    ];

    if generator.supports_read_access() {
        for i in 0..generator.state_count() {
            lines.push(format!("state[{}]: {}", i, format_word(generator.select_state(i)?)));
        }
    }

    lines.push(format!("next: {}", format_word(generator.copy().next_word())));
    if generator.supports_previous() {
        let previous = generator.copy().previous_word()?;
        lines.push(format!("previous: {}", format_word(previous)));
    }
    lines.push(format!("canonical: {}", generator.serialize_state()));
    Ok(lines)
}
