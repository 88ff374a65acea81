//! Sample command implementation
//!
//! Draws from a distribution and reports its parameters and statistics.

use prng_core::{Generator, TagRegistry};
use prng_distributions::{Beta, Binomial, Distribution, DistributionError, Kumaraswamy};
use tracing::info;

use super::{emit, open_generator, resolve_count};
use crate::config::PrngConfig;
use crate::{CliError, Result};

/// Run the sample command
pub fn run(
    config: &PrngConfig,
    registry: &TagRegistry,
    distribution: &str,
    alpha: Option<f64>,
    beta: Option<f64>,
    count: Option<usize>,
    state: Option<&str>,
) -> Result<()> {
    let count = resolve_count(config, count)?;
    let generator = open_generator(config, registry, state)?;
    info!(distribution, count, tag = generator.tag(), "sampling distribution");

    let lines = render(generator, distribution, alpha, beta, count)?;
    emit(&lines);
    Ok(())
}

/// Builds the named distribution over `generator`.
///
/// Binomial falls back to its default parameters; the shape distributions
/// need both shapes.
fn build(
    generator: Box<dyn Generator>,
    distribution: &str,
    alpha: Option<f64>,
    beta: Option<f64>,
) -> Result<Box<dyn Distribution>> {
    let shapes = || match (alpha, beta) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(CliError::InvalidArgument(format!(
            "{} requires both --alpha and --beta",
            distribution
        ))),
    };

    match distribution.to_lowercase().as_str() {
        "binomial" => {
            let mut d = Binomial::with_defaults(generator);
            if let Some(a) = alpha {
                d.set_parameter_value(0, a)?;
            }
            if let Some(b) = beta {
                d.set_parameter_value(1, b)?;
            }
            Ok(Box::new(d))
        }
        "beta" => {
            let (a, b) = shapes()?;
            Ok(Box::new(Beta::new(generator, a, b)?))
        }
        "kumaraswamy" => {
            let (a, b) = shapes()?;
            Ok(Box::new(Kumaraswamy::new(generator, a, b)?))
        }
        other => Err(CliError::InvalidArgument(format!(
            "Unknown distribution: {}. Supported: binomial, beta, kumaraswamy",
            other
        ))),
    }
}

fn statistic(label: &str, value: prng_distributions::Result<String>) -> Result<String> {
    match value {
        Ok(v) => Ok(format!("{}: {}", label, v)),
        Err(DistributionError::UnsupportedStatistic { .. }) => {
            Ok(format!("{}: not supported", label))
        }
        Err(e) => Err(e.into()),
    }
}

/// Samples `count` values and appends the distribution's statistics.
pub fn render(
    generator: Box<dyn Generator>,
    distribution: &str,
    alpha: Option<f64>,
    beta: Option<f64>,
    count: usize,
) -> Result<Vec<String>> {
    let mut d = build(generator, distribution, alpha, beta)?;

    let parameters = (0..d.parameter_count())
        .filter_map(|i| {
            let name = d.parameter_name(i)?;
            d.parameter_value(i).ok().map(|v| format!("{}={}", name, v))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = Vec::with_capacity(count + 6);
    lines.push(format!(
        "{}({}) on [{}, {}]",
        d.name(),
        parameters,
        d.minimum(),
        d.maximum()
    ));
    lines.extend((0..count).map(|_| d.sample().to_string()));

    lines.push(statistic("mean", d.mean().map(|v| v.to_string()))?);
    lines.push(statistic("variance", d.variance().map(|v| v.to_string()))?);
    lines.push(statistic("median", d.median().map(|v| v.to_string()))?);
    lines.push(statistic(
        "mode",
        d.mode().map(|modes| {
            modes
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }),
    )?);
    Ok(lines)
}
