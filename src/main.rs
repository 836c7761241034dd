//! CLI entry point for tpower.
//!
//! Computes exhaustive or simulated one-sample t-test power over the
//! reference tumor-length data or user-supplied observations.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tpower::compute::types::{HypothesisType, PowerEstimator, PowerSettings, SdConvention};
use tpower::compute::{min_sample_size, power_curve, simulate_power};
use tpower::data::{REFERENCE_ALPHA, REFERENCE_MU0, TUMOR_LENGTHS, TUMOR_LENGTHS_EXTENDED};
use tpower::error::TpowerErr;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tpower")]
#[command(about = "Power of a one-sample t-test by exhaustive subsampling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exhaustive power estimate at one subsample size
    Estimate {
        /// Subsample size
        #[arg(short, long = "size")]
        n: usize,

        #[command(flatten)]
        test: TestArgs,
    },
    /// Exhaustive power over a range of subsample sizes
    Curve {
        /// Smallest subsample size
        #[arg(long, default_value_t = 1)]
        from: usize,

        /// Largest subsample size (defaults to the population size)
        #[arg(long)]
        to: Option<usize>,

        /// Print the curve as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        test: TestArgs,
    },
    /// Monte Carlo power estimate from random subsamples
    Simulate {
        /// Subsample size
        #[arg(short, long = "size")]
        n: usize,

        /// Number of random subsamples to draw
        #[arg(short, long, default_value_t = 10_000)]
        draws: u64,

        /// Seed for the random number generator
        #[arg(short, long, default_value_t = 24601)]
        seed: u64,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        test: TestArgs,
    },
    /// Smallest subsample size reaching a target power
    MinN {
        /// Target power in (0, 1]
        #[arg(short, long)]
        target: f64,

        #[command(flatten)]
        test: TestArgs,
    },
}

#[derive(Args)]
struct TestArgs {
    /// Comma-separated observations; defaults to the reference tumor lengths
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    data: Vec<f64>,

    /// Use the 20-subject reference dataset instead of the 10-subject one
    #[arg(long)]
    extended: bool,

    /// Null-hypothesis mean
    #[arg(long, env = "TPOWER_MU0", default_value_t = REFERENCE_MU0, allow_hyphen_values = true)]
    mu0: f64,

    /// Significance level
    #[arg(long, env = "TPOWER_ALPHA", default_value_t = REFERENCE_ALPHA)]
    alpha: f64,

    /// Direction of the alternative hypothesis
    #[arg(long, value_enum, default_value_t = Alternative::Less)]
    alternative: Alternative,

    /// Divide the subsample standard deviation by n - 1 instead of n
    #[arg(long)]
    sample_sd: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Alternative {
    Less,
    Greater,
    TwoSided,
}

impl TestArgs {
    fn population(&self) -> Vec<f64> {
        if !self.data.is_empty() {
            self.data.clone()
        } else if self.extended {
            TUMOR_LENGTHS_EXTENDED.to_vec()
        } else {
            TUMOR_LENGTHS.to_vec()
        }
    }

    fn settings(&self) -> Result<PowerSettings, TpowerErr> {
        let hypothesis_type = match self.alternative {
            Alternative::Less => HypothesisType::TrtLess,
            Alternative::Greater => HypothesisType::TrtGreater,
            Alternative::TwoSided => HypothesisType::NotEqual,
        };
        let sd_convention = if self.sample_sd {
            SdConvention::Sample
        } else {
            SdConvention::Population
        };
        Ok(PowerSettings::new(self.mu0, self.alpha)?
            .with_hypothesis_type(hypothesis_type)
            .with_sd_convention(sd_convention))
    }
}

fn main() -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        );
    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate { n, test } => {
            let population = test.population();
            let settings = test.settings()?;
            debug!(?settings, population_size = population.len(), "estimating power");
            let tally = PowerEstimator::new(&population, n, &settings)?.tally();
            println!(
                "{:.6} ({} of {} subsamples rejected)",
                tally.power(),
                tally.rejections,
                tally.evaluated
            );
        }
        Commands::Curve {
            from,
            to,
            json,
            test,
        } => {
            let population = test.population();
            let settings = test.settings()?;
            let to = to.unwrap_or(population.len());
            if from > to {
                bail!("--from ({from}) must not exceed --to ({to})");
            }
            info!(from, to, population_size = population.len(), "computing power curve");
            let curve = power_curve(&population, from..=to, &settings)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&curve)?);
            } else {
                println!("{:>4}  {:>8}", "n", "power");
                for point in &curve {
                    println!("{:>4}  {:>8.6}", point.n, point.power);
                }
            }
        }
        Commands::Simulate {
            n,
            draws,
            seed,
            json,
            test,
        } => {
            let population = test.population();
            let settings = test.settings()?;
            let tally = simulate_power(&population, n, draws, seed, &settings)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tally)?);
            } else {
                println!(
                    "{:.6} ({} of {} draws rejected)",
                    tally.power(),
                    tally.rejections,
                    tally.evaluated
                );
            }
        }
        Commands::MinN { target, test } => {
            let population = test.population();
            let settings = test.settings()?;
            match min_sample_size(&population, target, &settings)? {
                Some(n) => println!("{n}"),
                None => {
                    info!(target, "no subsample size reaches the target power");
                    println!("none");
                }
            }
        }
    }

    Ok(())
}
