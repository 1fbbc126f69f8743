//! Power-law contact network construction.
//!
//! Growth with preferential attachment and probabilistic triangle closing
//! (the Holme-Kim construction): each new node attaches `m` edges, favoring
//! high-degree targets, and each edge after the first closes a triangle with
//! the configured probability when a free neighbor slot exists. The result
//! has a heavy-tailed degree distribution with tunable clustering.

use rand::Rng;

use crate::errors::ConstructionError;
use crate::network::ContactGraph;

impl ContactGraph {
    /// Build a power-law cluster graph over `nodes` nodes.
    ///
    /// `attachment` is the number of edges each new node brings;
    /// `clustering` is the probability that an edge closes a triangle with a
    /// neighbor of the previous target instead of attaching preferentially.
    /// Construction is deterministic for a fixed `rng` state.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::AttachmentWidth`] if `attachment` is
    /// zero or not smaller than `nodes`, and
    /// [`ConstructionError::InvalidClustering`] if `clustering` leaves
    /// [0, 1].
    pub fn power_law_cluster<R: Rng + ?Sized>(
        nodes: usize,
        attachment: usize,
        clustering: f64,
        rng: &mut R,
    ) -> Result<Self, ConstructionError> {
        if attachment == 0 || attachment >= nodes {
            return Err(ConstructionError::AttachmentWidth {
                width: attachment,
                population: nodes,
            });
        }
        if !(0.0..=1.0).contains(&clustering) {
            return Err(ConstructionError::InvalidClustering(clustering));
        }

        let mut graph = Self::with_nodes(nodes);
        // One entry per edge endpoint: sampling uniformly from this list is
        // sampling proportionally to degree.
        let mut repeated_nodes: Vec<usize> = (0..attachment).collect();

        for source in attachment..nodes {
            let mut targets = preferential_targets(&repeated_nodes, attachment, rng);

            // First edge always attaches preferentially.
            let mut target = targets.pop().expect("attachment width is nonzero");
            graph.add_edge(source, target);
            repeated_nodes.push(target);

            let mut formed = 1;
            while formed < attachment {
                if rng.random::<f64>() < clustering {
                    // Try to close a triangle through the latest partner.
                    let candidates: Vec<usize> = graph
                        .neighbors(target)
                        .iter()
                        .copied()
                        .filter(|&nbr| nbr != source && !graph.contains_edge(source, nbr))
                        .collect();
                    if !candidates.is_empty() {
                        let neighbor = candidates[rng.random_range(0..candidates.len())];
                        graph.add_edge(source, neighbor);
                        repeated_nodes.push(neighbor);
                        formed += 1;
                        continue;
                    }
                }
                // No triangle available (or the clustering coin said no):
                // fall back to preferential attachment.
                target = targets.pop().expect("one pre-drawn target per edge");
                graph.add_edge(source, target);
                repeated_nodes.push(target);
                formed += 1;
            }

            repeated_nodes.extend(std::iter::repeat(source).take(attachment));
        }

        Ok(graph)
    }
}

/// Draw `count` distinct targets from the endpoint list.
///
/// Uniform draws over `repeated` weight each node by its multiplicity, i.e.
/// by degree. Order of insertion is preserved so construction stays
/// deterministic for a fixed RNG.
fn preferential_targets<R: Rng + ?Sized>(
    repeated: &[usize],
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut targets = Vec::with_capacity(count);
    while targets.len() < count {
        let pick = repeated[rng.random_range(0..repeated.len())];
        if !targets.contains(&pick) {
            targets.push(pick);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;

    fn build(nodes: usize, attachment: usize, clustering: f64, seed: u64) -> ContactGraph {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        ContactGraph::power_law_cluster(nodes, attachment, clustering, &mut rng).unwrap()
    }

    #[test]
    fn test_rejects_incompatible_attachment() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);

        let err = ContactGraph::power_law_cluster(10, 0, 0.1, &mut rng).unwrap_err();
        assert!(matches!(err, ConstructionError::AttachmentWidth { .. }));

        let err = ContactGraph::power_law_cluster(10, 10, 0.1, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::AttachmentWidth {
                width: 10,
                population: 10
            }
        );
    }

    #[test]
    fn test_rejects_invalid_clustering() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let err = ContactGraph::power_law_cluster(10, 2, 1.5, &mut rng).unwrap_err();
        assert_eq!(err, ConstructionError::InvalidClustering(1.5));
    }

    #[test]
    fn test_simple_graph_invariants() {
        let graph = build(200, 3, 0.4, 7);

        assert_eq!(graph.node_count(), 200);
        for node in 0..graph.node_count() {
            let neighbors = graph.neighbors(node);
            // No self-loops.
            assert!(!neighbors.contains(&node));
            // No duplicate entries.
            for (i, &a) in neighbors.iter().enumerate() {
                assert!(!neighbors[i + 1..].contains(&a));
                // Symmetry.
                assert!(graph.neighbors(a).contains(&node));
            }
        }
    }

    #[test]
    fn test_every_grown_node_attaches() {
        let attachment = 4;
        let graph = build(100, attachment, 0.2, 11);

        // Nodes added during growth bring up to `attachment` edges each and
        // at least one; total edges are bounded accordingly.
        assert!(graph.edge_count() <= (100 - attachment) * attachment);
        for node in attachment..graph.node_count() {
            assert!(graph.degree(node) >= 1);
        }
        // The early nodes accumulate attachments from the rest.
        assert!((0..attachment).any(|node| graph.degree(node) > attachment));
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = build(150, 3, 0.5, 42);
        let b = build(150, 3, 0.5, 42);
        assert_eq!(a, b);

        let c = build(150, 3, 0.5, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_degree_distribution_is_heavy_tailed() {
        let graph = build(2000, 2, 0.3, 5);

        let max_degree = (0..graph.node_count())
            .map(|node| graph.degree(node))
            .max()
            .unwrap();
        // Preferential attachment concentrates degree on a few hubs.
        assert!(
            max_degree as f64 > 4.0 * graph.mean_degree(),
            "max degree {max_degree} not heavy-tailed vs mean {}",
            graph.mean_degree()
        );
    }
}
