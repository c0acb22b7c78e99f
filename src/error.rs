//! Error types for graph construction, configuration and challenge play.
//!
//! Three families live here:
//! - [`Error`]: construction and configuration faults. These are returned by
//!   fallible constructors and never arise from ordinary learner input.
//! - [`Rejection`]: a learner move (or a check request) that was refused.
//!   Rejections are walk-local and never change session state.
//! - [`Failure`]: the reason a judged walk did not satisfy its challenge. A
//!   failure travels inside a [`Verdict`](crate::validator::Verdict).

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Result type alias for fallible construction and configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction and configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A graph (or generated graph) needs at least `min` vertices.
    #[error("a graph needs at least {min} vertices, got {count}")]
    TooFewVertices {
        /// Requested vertex count.
        count: usize,
        /// Smallest accepted vertex count.
        min: usize,
    },

    /// Edge density must be a finite value in `[0, 1]`.
    #[error("edge density must lie in [0, 1], got {0}")]
    InvalidDensity(f64),

    /// A vertex id does not name a vertex of the graph.
    #[error("vertex {vertex} is out of range for a graph with {count} vertices")]
    VertexOutOfRange {
        /// Offending id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        count: usize,
    },

    /// Self loops are not part of a simple graph.
    #[error("self loop on vertex {0}")]
    SelfLoop(VertexId),

    /// At most one edge may join an unordered pair.
    #[error("edge {0}-{1} already exists")]
    DuplicateEdge(VertexId, VertexId),

    /// Edge weights live in `[1, 9]`.
    #[error("edge weight {0} is outside [1, 9]")]
    WeightOutOfRange(Weight),

    /// A mode name that is not one of `hamiltonian`, `eulerian`, `tsp`.
    #[error("unknown challenge mode '{0}'")]
    UnknownMode(String),

    /// A configuration value failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A refused learner action. State is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No challenge mode has been selected yet.
    #[error("Select a challenge first!")]
    NoChallenge,

    /// The attempt has already been judged; reset or undo before moving again.
    #[error("This attempt is finished - start a new one!")]
    AttemptFinished,

    /// The selected id does not name a vertex of the current graph.
    #[error("Vertex {0} does not exist in this graph!")]
    VertexOutOfRange(VertexId),

    /// The selected vertex is not adjacent to the end of the walk.
    #[error("No edge exists between these vertices!")]
    NoEdge {
        /// Current end of the walk.
        from: VertexId,
        /// Selected vertex.
        to: VertexId,
    },

    /// Closing the cycle before three distinct vertices were visited.
    #[error("Cannot close cycle yet - need to visit more vertices!")]
    CycleTooShort,

    /// Revisiting a vertex outside Eulerian mode.
    #[error("Cannot revisit vertices in Hamiltonian cycles!")]
    Revisit(VertexId),
}

/// Why a judged walk failed its challenge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Fewer than three distinct vertices plus the closing repeat.
    #[error("A cycle must have at least 3 vertices!")]
    TooShort,

    /// The walk does not end where it started.
    #[error("Path must return to starting vertex!")]
    NotClosed,

    /// Two consecutive vertices of the walk are not joined by an edge.
    #[error("No edge exists between {from} and {to}!")]
    NotAnEdge {
        /// Step origin.
        from: VertexId,
        /// Step target.
        to: VertexId,
    },

    /// The walk does not visit every vertex exactly once.
    #[error("Invalid Hamiltonian cycle - must visit each vertex exactly once!")]
    NotHamiltonian {
        /// Distinct vertices visited.
        visited: usize,
        /// Vertices in the graph.
        required: usize,
    },

    /// An edge was traversed more than once.
    #[error("Invalid Eulerian cycle - edge {0}-{1} was traversed more than once!")]
    RepeatedEdge(VertexId, VertexId),

    /// Some edges were never traversed.
    #[error("Invalid Eulerian cycle - must traverse each edge exactly once ({used} of {total} used)!")]
    MissingEdges {
        /// Distinct edges used.
        used: usize,
        /// Edges in the graph.
        total: usize,
    },

    /// A valid tour that is heavier than the best one known.
    #[error("Your path weight is {weight}, but a better path with weight {best} exists. Try again!")]
    Suboptimal {
        /// Weight of the submitted tour.
        weight: Weight,
        /// Weight of the best tour found by the search.
        best: Weight,
    },

    /// Auto-completion found no Hamiltonian cycle.
    #[error("No Hamiltonian cycle exists in this graph.")]
    NoHamiltonianCycle,

    /// Auto-completion refused because some vertices have odd degree.
    #[error("No Eulerian cycle possible (odd degree vertices exist: {vertices:?}).")]
    OddDegree {
        /// Vertices with odd degree.
        vertices: Vec<VertexId>,
    },

    /// Degrees are even but no circuit covering every edge was found.
    #[error("Could not find Eulerian cycle.")]
    NoEulerianCircuit,
}
