use anyhow::{Context, Result};
use epinet_sim::simulation::Ensemble;

use crate::args::SimArgs;
use crate::printing::{print_configuration, print_network_summary};

/// Check a parameter set (including graph feasibility) without running.
pub fn validate_parameters(args: &SimArgs) -> Result<()> {
    println!("🦠 Epinet - Validating Configuration");
    println!("============================================");

    let config = args.configuration();
    // Builds the contact network, so incompatible size/degree combinations
    // surface here as well.
    let ensemble = Ensemble::new(config).context("Invalid configuration")?;

    print_configuration(ensemble.configuration());
    print_network_summary(ensemble.graph());
    println!("\n✓ Configuration valid");

    Ok(())
}
