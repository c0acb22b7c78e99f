//! Random connected graph generator for cycle challenges.
//!
//! 1. Seed a ring `0-1-...-(n-1)-0` so the graph is connected and Hamiltonian.
//! 2. Add random edges until `floor(n(n-1)/2 · density)` edges exist.
//! 3. Pair up odd-degree vertices with new edges so that, when possible,
//!    every degree is even and an Eulerian circuit exists.
//!
//! Every edge gets a uniformly random weight in `[MIN_WEIGHT, MAX_WEIGHT]`.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::graph::model::{
    Graph, GraphBuilder, VertexId, Weight, MAX_WEIGHT, MIN_VERTICES, MIN_WEIGHT,
};

/// Builds random challenge graphs from a caller-supplied random source.
#[derive(Debug, Clone)]
pub struct GraphGenerator<R: Rng> {
    rng: R,
}

impl GraphGenerator<StdRng> {
    /// Deterministic generator; the same seed yields the same graphs.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> GraphGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a connected graph with `vertex_count` vertices and roughly
    /// `density` of all possible edges.
    ///
    /// # Errors
    /// [`Error::TooFewVertices`] when `vertex_count < 3`, and
    /// [`Error::InvalidDensity`] when `density` is not a finite value in `[0, 1]`.
    pub fn generate(&mut self, vertex_count: usize, density: f64) -> Result<Graph> {
        if vertex_count < MIN_VERTICES {
            return Err(Error::TooFewVertices {
                count: vertex_count,
                min: MIN_VERTICES,
            });
        }
        if !density.is_finite() || !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }

        let mut builder = GraphBuilder::new(vertex_count)?;

        for i in 0..vertex_count {
            let weight = self.random_weight();
            builder.add_edge(i, (i + 1) % vertex_count, weight)?;
        }

        let max_edges = vertex_count * (vertex_count - 1) / 2;
        let target = ((max_edges as f64) * density).floor() as usize;
        while builder.edge_count() < target {
            let u = self.rng.gen_range(0..vertex_count);
            let v = self.rng.gen_range(0..vertex_count);
            if u != v && !builder.has_edge(u, v) {
                let weight = self.random_weight();
                builder.add_edge(u, v, weight)?;
            }
        }

        self.even_out_degrees(&mut builder)?;

        let graph = builder.build();
        debug!(
            "generated graph: {} vertices, {} edges (target {}), odd vertices {:?}",
            graph.vertex_count(),
            graph.edge_count(),
            target,
            graph.odd_vertices()
        );
        Ok(graph)
    }

    fn random_weight(&mut self) -> Weight {
        self.rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT)
    }

    /// Join the first unconnected pair of odd-degree vertices, repeatedly, for
    /// at most `2n` rounds. Gives up when the odd vertices already form a clique.
    fn even_out_degrees(&mut self, builder: &mut GraphBuilder) -> Result<()> {
        let n = builder.vertex_count();
        for _ in 0..2 * n {
            let odd: Vec<VertexId> = (0..n).filter(|&v| builder.degree(v) % 2 != 0).collect();
            if odd.is_empty() {
                return Ok(());
            }

            let pair = odd.iter().enumerate().find_map(|(i, &u)| {
                odd[i + 1..]
                    .iter()
                    .find(|&&v| !builder.has_edge(u, v))
                    .map(|&v| (u, v))
            });

            match pair {
                Some((u, v)) => {
                    let weight = self.random_weight();
                    builder.add_edge(u, v, weight)?;
                }
                None => {
                    warn!(
                        "could not make the graph Eulerian: odd-degree vertices {:?} form a clique",
                        odd
                    );
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reachable_from_zero(g: &Graph) -> usize {
        let mut seen = vec![false; g.vertex_count()];
        let mut stack = vec![0];
        seen[0] = true;
        while let Some(u) = stack.pop() {
            for v in g.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    stack.push(v);
                }
            }
        }
        seen.iter().filter(|&&s| s).count()
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut generator = GraphGenerator::from_seed(1);
        assert!(matches!(
            generator.generate(2, 0.5),
            Err(Error::TooFewVertices { count: 2, .. })
        ));
        assert!(matches!(generator.generate(5, 1.5), Err(Error::InvalidDensity(_))));
        assert!(matches!(generator.generate(5, f64::NAN), Err(Error::InvalidDensity(_))));
    }

    #[test]
    fn test_zero_density_keeps_the_ring() {
        let g = GraphGenerator::from_seed(7).generate(6, 0.0).unwrap();
        for i in 0..6 {
            assert!(g.has_edge(i, (i + 1) % 6));
        }
        // The ring is already even, so nothing is added.
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn test_full_density_is_complete() {
        let g = GraphGenerator::from_seed(3).generate(5, 1.0).unwrap();
        assert_eq!(g.edge_count(), 10);
        assert!(g.odd_vertices().is_empty());
    }

    #[test]
    fn test_odd_clique_is_left_alone() {
        // K4 has every vertex odd and every pair connected.
        let g = GraphGenerator::from_seed(11).generate(4, 1.0).unwrap();
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.odd_vertices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = GraphGenerator::from_seed(42).generate(8, 0.6).unwrap();
        let b = GraphGenerator::from_seed(42).generate(8, 0.6).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn generated_graphs_hold_their_invariants(
            seed in any::<u64>(),
            n in 3usize..=12,
            density in 0.0f64..=1.0,
        ) {
            let g = GraphGenerator::from_seed(seed).generate(n, density).unwrap();

            let mut entries = 0;
            for u in 0..n {
                prop_assert!(!g.has_edge(u, u));
                for v in 0..n {
                    prop_assert_eq!(g.weight(u, v), g.weight(v, u));
                    if let Some(w) = g.weight(u, v) {
                        prop_assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&w));
                        entries += 1;
                    }
                }
            }
            prop_assert_eq!(entries / 2, g.edge_count());
            prop_assert_eq!(reachable_from_zero(&g), n);
            prop_assert!(g.is_connected());

            let target = (n * (n - 1) / 2) as f64 * density;
            prop_assert!(g.edge_count() as f64 >= target.floor());
        }
    }
}
