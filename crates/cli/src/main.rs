mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{RunArgs, SimArgs};
use commands::{run, validate};

/// Epinet: a network SEIR epidemic simulator
///
/// Simulates epidemic spread over a fixed contact network, unit by unit,
/// across many independent stochastic replicates, and reports ensemble
/// statistics.
#[derive(Parser, Debug)]
#[command(name = "epinet")]
#[command(author, version, about = "Simulates SEIR epidemics on contact networks", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel replicates
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an ensemble and print the aggregated results.
    ///
    /// Executes every replicate day by day over one shared contact network.
    Run(Box<RunArgs>),

    /// Validate a parameter set without running it.
    ///
    /// Checks every parameter domain and builds the contact network once.
    Validate(Box<SimArgs>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => {
            run::run_ensemble(&args)?;
        }
        Commands::Validate(args) => {
            validate::validate_parameters(&args)?;
        }
    }

    Ok(())
}
