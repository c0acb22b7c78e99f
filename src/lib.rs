//! Graph-cycle engine for interactive Hamiltonian, Eulerian and TSP challenges.
//!
//! - [`graph`]: the weighted undirected graph and its random generator.
//! - [`solver`]: Hamiltonian backtracking, Hierholzer circuits, bounded TSP search.
//! - [`path`]: the walk a learner builds one vertex at a time.
//! - [`validator`]: judging a finished walk against its mode.
//! - [`session`]: the controller tying the pieces to learner events and the idle timer.

pub mod config;
pub mod error;
pub mod graph;
pub mod mode;
pub mod path;
pub mod session;
pub mod solver;
pub mod timer;
pub mod validator;

pub use config::SessionConfig;
pub use error::{Error, Failure, Rejection, Result};
pub use graph::{Edge, Graph, Vertex, VertexId, Weight};
pub use mode::Mode;
pub use session::{Selection, Session};
pub use validator::Verdict;
