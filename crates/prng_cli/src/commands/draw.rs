//! Draw command implementation
//!
//! Prints raw words or derived values from a new or resumed generator.

use prng_core::{Generator, GeneratorExt, TagRegistry};
use tracing::info;

use super::{emit, format_word, open_generator, resolve_count};
use crate::config::PrngConfig;
use crate::{CliError, Result};

/// Default `[inner, outer)` range for `int` draws.
const DEFAULT_RANGE: (i64, i64) = (0, 100);

/// Run the draw command
#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &PrngConfig,
    registry: &TagRegistry,
    kind: &str,
    count: Option<usize>,
    inner: Option<i64>,
    outer: Option<i64>,
    state: Option<&str>,
    print_state: bool,
) -> Result<()> {
    let count = resolve_count(config, count)?;
    let mut generator = open_generator(config, registry, state)?;
    info!(kind, count, tag = generator.tag(), "drawing values");

    let mut lines = render(generator.as_mut(), kind, count, inner, outer)?;
    if print_state {
        lines.push(format!("state: {}", generator.serialize_state()));
    }
    emit(&lines);
    Ok(())
}

/// Kind of value printed by the draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Word,
    Int { inner: i64, outer: i64 },
    F64,
    InclusiveF64,
    ExclusiveF64,
    ExclusiveF32,
    Bool,
}

impl Kind {
    fn parse(kind: &str, inner: Option<i64>, outer: Option<i64>) -> Result<Self> {
        Ok(match kind {
            "word" => Kind::Word,
            "int" => Kind::Int {
                inner: inner.unwrap_or(DEFAULT_RANGE.0),
                outer: outer.unwrap_or(DEFAULT_RANGE.1),
            },
            "f64" => Kind::F64,
            "inclusive-f64" => Kind::InclusiveF64,
            "exclusive-f64" => Kind::ExclusiveF64,
            "exclusive-f32" => Kind::ExclusiveF32,
            "bool" => Kind::Bool,
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "Unknown kind: {}. Supported: word, int, f64, inclusive-f64, exclusive-f64, exclusive-f32, bool",
                    other
                )));
            }
        })
    }

    fn draw(self, generator: &mut dyn Generator) -> String {
        match self {
            Kind::Word => format_word(generator.next_word()),
            Kind::Int { inner, outer } => generator.next_i64_between(inner, outer).to_string(),
            Kind::F64 => generator.next_f64().to_string(),
            Kind::InclusiveF64 => generator.next_inclusive_f64().to_string(),
            Kind::ExclusiveF64 => generator.next_exclusive_f64().to_string(),
            Kind::ExclusiveF32 => generator.next_exclusive_f32().to_string(),
            Kind::Bool => generator.next_bool().to_string(),
        }
    }
}

/// Draws `count` values of `kind`, one per line.
///
/// Kinds: `word`, `int` (between `inner` inclusive and `outer` exclusive),
/// `f64`, `inclusive-f64`, `exclusive-f64`, `exclusive-f32`, `bool`.
pub fn render(
    generator: &mut dyn Generator,
    kind: &str,
    count: usize,
    inner: Option<i64>,
    outer: Option<i64>,
) -> Result<Vec<String>> {
    let kind = Kind::parse(kind, inner, outer)?;
    Ok((0..count).map(|_| kind.draw(generator)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_core::MizuchiRandom;

    #[test]
    fn test_words_match_generator() {
        let mut rng = MizuchiRandom::with_seed(1);
        let lines = render(&mut rng, "word", 2, None, None).unwrap();
        assert_eq!(lines, vec!["0xFB6CA7BCB871D146", "0x07C79A48A1A236B5"]);
    }

    #[test]
    fn test_int_range() {
        let mut rng = MizuchiRandom::with_seed(2);
        let lines = render(&mut rng, "int", 500, Some(-3), Some(3)).unwrap();
        for line in &lines {
            let v: i64 = line.parse().unwrap();
            assert!((-3..3).contains(&v));
        }

        // Inverted bounds are swapped.
        let lines = render(&mut rng, "int", 500, Some(3), Some(-3)).unwrap();
        for line in &lines {
            let v: i64 = line.parse().unwrap();
            assert!((-3..3).contains(&v));
        }
    }

    #[test]
    fn test_float_kinds() {
        let mut rng = MizuchiRandom::with_seed(3);
        for kind in ["f64", "inclusive-f64", "exclusive-f64", "exclusive-f32"] {
            for line in render(&mut rng, kind, 100, None, None).unwrap() {
                let v: f64 = line.parse().unwrap();
                assert!((0.0..=1.0).contains(&v), "{} gave {}", kind, v);
            }
        }
    }

    #[test]
    fn test_bool_kind() {
        let mut rng = MizuchiRandom::with_seed(4);
        let lines = render(&mut rng, "bool", 50, None, None).unwrap();
        assert!(lines.iter().all(|l| l == "true" || l == "false"));
    }

    #[test]
    fn test_unknown_kind() {
        let mut rng = MizuchiRandom::with_seed(5);
        let before = rng.clone();
        assert!(matches!(
            render(&mut rng, "gaussian", 1, None, None),
            Err(CliError::InvalidArgument(_))
        ));
        assert_eq!(rng, before);
    }
}
