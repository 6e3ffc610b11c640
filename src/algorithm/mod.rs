pub mod traits;
pub mod dijkstra;

pub use traits::{DistanceMap, ShortestPathAlgorithm};
