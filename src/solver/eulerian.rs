//! # Eulerian Circuits (Hierholzer's Algorithm)
//!
//! An **Eulerian circuit** is a closed walk that traverses every edge exactly once.
//! A connected undirected graph has one iff every vertex has even degree; generated
//! challenge graphs are always connected, so the degree test alone decides feasibility.
//!
//! ## Hierholzer's procedure
//! 1. Build a mutable adjacency list in which every undirected edge appears once in each
//!    endpoint's list.
//! 2. Start a stack at vertex 0. While the stack is non-empty, look at its top vertex:
//!    - if it still has an unused edge, take the last one, delete the matching reverse
//!      entry from the neighbor's list, and push the neighbor;
//!    - otherwise pop the vertex into the output circuit.
//! 3. The output is the circuit in reverse traversal order.
//!
//! Complexity: O(V + E·d) with d the largest degree, from the reverse-entry deletion.
//!
//! ## Example
//! ```rust
//! use graph_cycles::graph::Graph;
//! use graph_cycles::solver::eulerian::{find_eulerian_circuit, has_eulerian_circuit};
//!
//! // A square with both diagonals is 3-regular, so no circuit exists...
//! let k4 = Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 1), (1, 3, 1)]).unwrap();
//! assert!(!has_eulerian_circuit(&k4));
//! assert_eq!(find_eulerian_circuit(&k4), None);
//!
//! // ...while the bare square has one.
//! let square = Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
//! let circuit = find_eulerian_circuit(&square).unwrap();
//! assert_eq!(circuit.len(), square.edge_count() + 1);
//! assert_eq!(circuit.first(), circuit.last());
//! ```

use log::trace;

use crate::graph::{Graph, VertexId};

/// Every vertex has even degree (adjacency-matrix row sums).
pub fn has_eulerian_circuit(graph: &Graph) -> bool {
    (0..graph.vertex_count()).all(|v| graph.degree(v) % 2 == 0)
}

/// Eulerian circuit starting and ending at vertex 0, or `None` when the degree
/// test fails or the traversal could not reach every edge.
pub fn find_eulerian_circuit(graph: &Graph) -> Option<Vec<VertexId>> {
    if !has_eulerian_circuit(graph) || graph.edge_count() == 0 {
        return None;
    }

    let mut adj: Vec<Vec<VertexId>> = vec![Vec::new(); graph.vertex_count()];
    for edge in graph.edges() {
        adj[edge.u].push(edge.v);
        adj[edge.v].push(edge.u);
    }

    let mut circuit = Vec::with_capacity(graph.edge_count() + 1);
    let mut stack = vec![0];

    while let Some(&v) = stack.last() {
        match adj[v].pop() {
            Some(u) => {
                // use ONE matching reverse entry
                if let Some(index) = adj[u].iter().position(|&w| w == v) {
                    adj[u].remove(index);
                }
                stack.push(u);
            }
            None => {
                stack.pop();
                circuit.push(v);
            }
        }
    }

    circuit.reverse();

    // A disconnected edge set leaves some edges untouched.
    if circuit.len() != graph.edge_count() + 1 {
        trace!(
            "hierholzer: circuit covers {} of {} edges",
            circuit.len().saturating_sub(1),
            graph.edge_count()
        );
        return None;
    }
    Some(circuit)
}
