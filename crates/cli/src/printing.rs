use epinet_sim::network::ContactGraph;
use epinet_sim::simulation::{Configuration, MeanTrajectory, SeedPolicy};

pub fn print_configuration(config: &Configuration) {
    println!("\n📋 Simulation Configuration");
    println!(
        "  • Population: {} units [-n, --total-units]",
        config.network.total_units
    );
    println!(
        "  • Attachment width: {} [-k, --average-contacts]",
        config.network.average_contacts
    );
    println!(
        "  • Clustering: {} [-p, --clustering]",
        config.network.clustering
    );

    println!("\n🦠 Transition Parameters");
    println!(
        "  • Transmission probability: {} [-b, --transmission]",
        config.transition.transmission
    );
    println!(
        "  • Latent period: {} days [--latent-period]",
        config.transition.latent_period
    );
    println!(
        "  • Infectious period: {} days [--infectious-period]",
        config.transition.infectious_period
    );

    println!("\n🌱 Seeding");
    println!(
        "  • Initial exposed: {} units [-e, --initial-exposed]",
        config.seeding.initial_exposed
    );
    let policy = match config.seeding.policy {
        SeedPolicy::WithReplacement => "with replacement",
        SeedPolicy::WithoutReplacement => "without replacement",
    };
    println!("  • Seed draws: {policy} [--seed-draws]");

    println!("\n🎲 Execution");
    println!(
        "  • Replicates: {} [-s, --simulations]",
        config.run.num_simulations
    );
    println!("  • Days: {} [-d, --days]", config.run.num_days);
    if let Some(seed) = config.run.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
}

pub fn print_network_summary(graph: &ContactGraph) {
    println!("\n🕸  Contact Network");
    println!("  • Nodes: {}", graph.node_count());
    println!("  • Edges: {}", graph.edge_count());
    println!("  • Mean degree: {:.2}", graph.mean_degree());
}

pub fn print_mean_table(mean: &MeanTrajectory) {
    println!("\n📈 Mean trajectory ({} days)", mean.len().saturating_sub(1));
    println!("{:>5}  {:>10}  {:>10}  {:>10}  {:>10}", "day", "S", "I", "E", "R");
    for (day, cells) in mean.iter().enumerate() {
        println!(
            "{:>5}  {:>10.1}  {:>10.1}  {:>10.1}  {:>10.1}",
            day, cells[0], cells[1], cells[2], cells[3]
        );
    }
}
