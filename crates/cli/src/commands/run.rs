use anyhow::{Context, Result};
use epinet_sim::simulation::{Configuration, Ensemble, ReplicateResult};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::args::{OutputFormat, RunArgs};
use crate::printing::{print_configuration, print_mean_table, print_network_summary};

#[derive(Serialize)]
struct JsonReport<'a> {
    configuration: &'a Configuration,
    base_seed: u64,
    mean: &'a [[f64; 4]],
    #[serde(skip_serializing_if = "Option::is_none")]
    replicates: Option<&'a [ReplicateResult]>,
}

pub fn run_ensemble(args: &RunArgs) -> Result<()> {
    let mut config = args.params.configuration();
    if args.snapshots {
        config.run.snapshot_replicate = Some(0);
    }

    let ensemble = Ensemble::new(config).context("Failed to configure the ensemble")?;

    // Banners only for the human-readable format; csv/json stdout stays
    // machine-parseable.
    let banner = args.format == OutputFormat::Table;
    if banner {
        println!("🦠 Epinet - Running Ensemble");
        println!("============================================");
        print_configuration(ensemble.configuration());
        print_network_summary(ensemble.graph());
        println!();
    }

    // indicatif draws on stderr, so the bar is safe for every format.
    let bar = if args.progress {
        let bar = ProgressBar::new(config.run.num_simulations as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let results = ensemble
        .run_with(|_| {
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        })
        .context("Simulation failed")?;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let mean = results
        .mean_trajectory()
        .context("Failed to aggregate trajectories")?;

    match args.format {
        OutputFormat::Table => {
            print_mean_table(&mean);
            println!("\n✓ Ran {} replicates (base seed {})", results.num_replicates(), results.base_seed);
        }
        OutputFormat::Csv => {
            println!("day,susceptible,infectious,exposed,recovered");
            for (day, cells) in mean.iter().enumerate() {
                println!("{day},{},{},{},{}", cells[0], cells[1], cells[2], cells[3]);
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                configuration: ensemble.configuration(),
                base_seed: results.base_seed,
                mean: &mean,
                replicates: args.snapshots.then_some(results.replicates.as_slice()),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
