use clap::{Args, ValueEnum};
use epinet_sim::simulation::{
    Configuration, NetworkConfig, RunConfig, SeedPolicy, SeedingConfig, TransitionConfig,
};

use crate::defaults;

/// Simulation parameters shared by the `run` and `validate` subcommands.
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Population size (number of units)
    #[arg(short = 'n', long, default_value_t = defaults::TOTAL_UNITS)]
    pub total_units: usize,

    /// Edges each new unit brings during network growth
    #[arg(short = 'k', long, default_value_t = defaults::AVERAGE_CONTACTS)]
    pub average_contacts: usize,

    /// Triangle-closing probability of the network builder (0.0-1.0)
    #[arg(short = 'p', long, default_value_t = defaults::CLUSTERING)]
    pub clustering: f64,

    /// Pairwise transmission probability per infectious contact per day
    #[arg(short = 'b', long, default_value_t = defaults::TRANSMISSION)]
    pub transmission: f64,

    /// Latent period in days (time spent exposed before turning infectious)
    #[arg(long, default_value_t = defaults::LATENT_PERIOD)]
    pub latent_period: u32,

    /// Infectious period in days (dwell threshold for recovery)
    #[arg(long, default_value_t = defaults::INFECTIOUS_PERIOD)]
    pub infectious_period: u32,

    /// Units marked exposed on day 0
    #[arg(short = 'e', long, default_value_t = defaults::INITIAL_EXPOSED)]
    pub initial_exposed: usize,

    /// Duplicate handling for the day-0 seed draws
    #[arg(long, value_enum, default_value_t = SeedDraws::WithReplacement)]
    pub seed_draws: SeedDraws,

    /// Number of independent replicates
    #[arg(short = 's', long, default_value_t = defaults::NUM_SIMULATIONS)]
    pub simulations: usize,

    /// Days to simulate per replicate
    #[arg(short = 'd', long, default_value_t = defaults::NUM_DAYS)]
    pub days: usize,

    /// Random seed (default: entropy; set one for reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimArgs {
    /// Assemble the core configuration from the parsed flags.
    pub fn configuration(&self) -> Configuration {
        Configuration {
            network: NetworkConfig::new(self.total_units, self.average_contacts, self.clustering),
            transition: TransitionConfig::new(
                self.transmission,
                self.latent_period,
                self.infectious_period,
            ),
            seeding: SeedingConfig::new(self.initial_exposed, self.seed_draws.into()),
            run: RunConfig::new(self.simulations, self.days, self.seed),
        }
    }
}

/// CLI surface for the core seed policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedDraws {
    /// Independent draw per seed slot; duplicates permitted
    WithReplacement,
    /// Distinct unit ids for every seed slot
    WithoutReplacement,
}

impl From<SeedDraws> for SeedPolicy {
    fn from(draws: SeedDraws) -> Self {
        match draws {
            SeedDraws::WithReplacement => SeedPolicy::WithReplacement,
            SeedDraws::WithoutReplacement => SeedPolicy::WithoutReplacement,
        }
    }
}

/// Output format for the `run` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table of the mean trajectory
    Table,
    /// CSV of the mean trajectory
    Csv,
    /// Full JSON report
    Json,
}

/// Arguments of the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: SimArgs,

    /// Output format written to stdout
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Record per-day node snapshots of replicate 0 (JSON output only)
    #[arg(long)]
    pub snapshots: bool,

    /// Show progress bar
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub progress: bool,
}
