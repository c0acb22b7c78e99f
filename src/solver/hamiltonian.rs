//! Backtracking search for Hamiltonian cycles in a [`Graph`].
//!
//! A Hamiltonian cycle is a sequence of vertices v0..v_{n-1} with an edge between consecutive
//! vertices, plus an edge from v_{n-1} back to v0, visiting all vertices exactly once.
//!
//! The search fixes vertex 0 as the start: any Hamiltonian cycle can be rotated to begin
//! there, so no cycle is lost. Neighbors are tried in ascending id order, so results are
//! deterministic for a given graph.
//!
//! # Example
//! ```
//! use graph_cycles::graph::Graph;
//! use graph_cycles::solver::hamiltonian::find_hamiltonian_cycle;
//!
//! // A 4-node ring: edges (0-1, 1-2, 2-3, 3-0).
//! let g = Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
//!
//! // The walk is closed: vertex 0 is repeated at the end.
//! assert_eq!(find_hamiltonian_cycle(&g), Some(vec![0, 1, 2, 3, 0]));
//! ```
use log::trace;

use crate::graph::{Graph, VertexId};

/// First Hamiltonian cycle found by depth-first backtracking from vertex 0,
/// returned as a closed walk (`[0, .., 0]`), or `None` once the search space
/// of simple paths from vertex 0 is exhausted.
///
/// The search keeps an explicit stack of `(path position, next candidate)`
/// cursors instead of recursing.
pub fn find_hamiltonian_cycle(graph: &Graph) -> Option<Vec<VertexId>> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n + 1);
    // cursors[i] is the smallest id not yet tried as the successor of path[i].
    let mut cursors = Vec::with_capacity(n);
    let mut expanded = 0usize;

    path.push(0);
    cursors.push(0);
    visited[0] = true;

    while let Some(&current) = path.last() {
        if path.len() == n {
            if graph.has_edge(current, 0) {
                trace!("hamiltonian search: cycle found after {} expansions", expanded);
                path.push(0);
                return Some(path);
            }
            backtrack(&mut path, &mut cursors, &mut visited);
            continue;
        }

        let depth = path.len() - 1;
        let next = (cursors[depth]..n).find(|&c| !visited[c] && graph.has_edge(current, c));
        match next {
            Some(c) => {
                expanded += 1;
                cursors[depth] = c + 1;
                visited[c] = true;
                path.push(c);
                cursors.push(0);
            }
            None => backtrack(&mut path, &mut cursors, &mut visited),
        }
    }

    trace!("hamiltonian search: exhausted after {} expansions", expanded);
    None
}

fn backtrack(path: &mut Vec<VertexId>, cursors: &mut Vec<usize>, visited: &mut [bool]) {
    if let Some(v) = path.pop() {
        visited[v] = false;
    }
    cursors.pop();
}

/// Every Hamiltonian cycle once, by brute force over orderings of `1..n` behind
/// vertex 0. Each cycle is open, starts at 0, and keeps the orientation whose second
/// vertex is smaller than its last; the list comes out sorted.
#[cfg(test)]
pub(crate) fn hamiltonian_cycles(graph: &Graph) -> Vec<Vec<VertexId>> {
    use crate::solver::Permutations;

    let n = graph.vertex_count();
    Permutations::new(n - 1)
        .map(|rest| {
            std::iter::once(0)
                .chain(rest.into_iter().map(|v| v + 1))
                .collect::<Vec<_>>()
        })
        .filter(|order| order[1] < order[n - 1])
        .filter(|order| {
            order.windows(2).all(|s| graph.has_edge(s[0], s[1])) && graph.has_edge(order[n - 1], 0)
        })
        .collect()
}
