pub mod generator;
pub mod model;

pub use generator::GraphGenerator;
pub use model::{Edge, EdgeKey, Graph, GraphBuilder, Vertex, VertexId, Weight};
pub use model::{MAX_WEIGHT, MIN_VERTICES, MIN_WEIGHT};
