//! Bounded brute-force search for a light Hamiltonian cycle (Traveling Salesperson).
//!
//! The search starts from the first cycle the Hamiltonian backtracking finds, then walks
//! the vertex permutations in lexicographic order, stopping after `permutation_cap` of them.
//! Every permutation whose consecutive vertices (and last-to-first) are adjacent is a
//! candidate tour; the lightest one wins, with ties going to the earlier find.
//!
//! The cap bounds latency, not accuracy: with the default of 120 the enumeration is
//! complete for up to 5 vertices (5! = 120). Beyond that the answer is the best of the
//! cycles seen so far and may not be the global optimum.
//!
//! # Example
//! ```
//! use graph_cycles::graph::Graph;
//! use graph_cycles::solver::tsp::TspSearch;
//!
//! // Complete graph on 4 vertices; [0,2,1,3,0] is the light tour.
//! let g = Graph::from_edges(
//!     4,
//!     &[(0, 1, 3), (1, 2, 2), (2, 3, 3), (3, 0, 2), (0, 2, 2), (1, 3, 2)],
//! )
//! .unwrap();
//!
//! let tour = TspSearch::default().solve(&g).unwrap();
//! assert_eq!(tour.weight, 8);
//! assert_eq!(tour.path, vec![0, 2, 1, 3, 0]);
//! ```
use log::trace;

use crate::graph::{Graph, VertexId, Weight};
use crate::solver::hamiltonian::find_hamiltonian_cycle;
use crate::solver::permutations::Permutations;

/// Number of permutations examined by default.
pub const DEFAULT_PERMUTATION_CAP: usize = 120;

/// A closed tour and its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Closed walk: the first vertex is repeated at the end.
    pub path: Vec<VertexId>,
    pub weight: Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TspSearch {
    permutation_cap: usize,
}

impl Default for TspSearch {
    fn default() -> Self {
        Self::new(DEFAULT_PERMUTATION_CAP)
    }
}

impl TspSearch {
    pub fn new(permutation_cap: usize) -> Self {
        Self { permutation_cap }
    }

    pub fn permutation_cap(&self) -> usize {
        self.permutation_cap
    }

    /// Lightest tour found, or `None` if the graph has no Hamiltonian cycle.
    pub fn solve(&self, graph: &Graph) -> Option<Tour> {
        let baseline = find_hamiltonian_cycle(graph)?;
        let weight = graph.walk_weight(&baseline)?;
        let mut best = Tour {
            path: baseline,
            weight,
        };

        let mut examined = 0usize;
        let mut valid = 0usize;
        for perm in Permutations::new(graph.vertex_count()).take(self.permutation_cap) {
            examined += 1;
            let Some(&head) = perm.first() else {
                continue;
            };
            let mut cycle = perm;
            cycle.push(head);

            if let Some(weight) = graph.walk_weight(&cycle) {
                valid += 1;
                if weight < best.weight {
                    best = Tour {
                        path: cycle,
                        weight,
                    };
                }
            }
        }

        trace!(
            "tsp search: {} permutations examined, {} valid tours, best weight {}",
            examined,
            valid,
            best.weight
        );
        Some(best)
    }
}
