//! prng - Command Line Front End for the Reversible PRNG Toolkit
//!
//! # Commands
//!
//! - `prng draw` - Draw raw words or derived values
//! - `prng sample <distribution>` - Sample a distribution and report its statistics
//! - `prng inspect <state>` - Decode a serialised state string
//! - `prng replay <state> <steps>` - Step a serialised state forward or backward
//!
//! # Architecture
//!
//! As the service layer, this crate sits on top of `prng_core` (Layer 1)
//! and `prng_distributions` (Layer 2). Output goes to standard output and
//! diagnostics to standard error.

use clap::{Parser, Subcommand};
use prng_core::TagRegistry;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs as ConfigCliArgs};

/// Reversible PRNG toolkit CLI
#[derive(Parser, Debug)]
#[command(name = "prng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging unless a level is given)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for new generators (decimal or 0x-prefixed hexadecimal)
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Algorithm for new generators (mizuchi, distinct, or a tag)
    #[arg(long, global = true)]
    algorithm: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw raw words or derived values
    Draw {
        /// Value kind (word, int, f64, inclusive-f64, exclusive-f64, exclusive-f32, bool)
        #[arg(short, long, default_value = "word")]
        kind: String,

        /// Number of values to draw
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Inclusive bound for `int` draws
        #[arg(long, allow_hyphen_values = true)]
        inner: Option<i64>,

        /// Exclusive bound for `int` draws
        #[arg(long, allow_hyphen_values = true)]
        outer: Option<i64>,

        /// Resume from a serialised state instead of seeding
        #[arg(short, long)]
        state: Option<String>,

        /// Print the state reached after drawing
        #[arg(long)]
        print_state: bool,
    },

    /// Sample a distribution and report its statistics
    Sample {
        /// Distribution (binomial, beta, kumaraswamy)
        distribution: String,

        /// First parameter (probability for binomial, shape otherwise)
        #[arg(short, long, allow_hyphen_values = true)]
        alpha: Option<f64>,

        /// Second parameter (trial count for binomial, shape otherwise)
        #[arg(short, long, allow_hyphen_values = true)]
        beta: Option<f64>,

        /// Number of samples
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Resume from a serialised state instead of seeding
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Decode a serialised state string
    Inspect {
        /// State string, e.g. #MizR`1~2`
        state: String,
    },

    /// Step a serialised state forward (positive) or backward (negative)
    Replay {
        /// State string to start from
        state: String,

        /// Number of steps
        #[arg(allow_hyphen_values = true)]
        steps: i64,

        /// Skip ahead in one move, printing only the last word
        #[arg(short, long)]
        jump: bool,
    },
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        let log_level = match (&cli.log_level, cli.verbose) {
            (None, true) => Some("debug".to_string()),
            (level, _) => level.clone(),
        };
        ConfigCliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed.clone(),
            algorithm: cli.algorithm.clone(),
            log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        algorithm = %config.algorithm,
        seed = ?config.seed,
        log_level = %config.log_level,
        default_count = config.default_count,
        "Configuration loaded"
    );

    let registry = TagRegistry::with_builtin();

    match cli.command {
        Commands::Draw {
            kind,
            count,
            inner,
            outer,
            state,
            print_state,
        } => commands::draw::run(
            &config,
            &registry,
            &kind,
            count,
            inner,
            outer,
            state.as_deref(),
            print_state,
        )?,
        Commands::Sample {
            distribution,
            alpha,
            beta,
            count,
            state,
        } => commands::sample::run(
            &config,
            &registry,
            &distribution,
            alpha,
            beta,
            count,
            state.as_deref(),
        )?,
        Commands::Inspect { state } => commands::inspect::run(&registry, &state)?,
        Commands::Replay { state, steps, jump } => {
            commands::replay::run(&registry, &state, steps, jump)?
        }
    }

    Ok(())
}
