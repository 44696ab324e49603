//! # netimpact
//!
//! Structural robustness metrics for undirected networks: total path length,
//! average shortest path, degree distribution, and the impact of removing
//! random node subsets, estimated by parallel Monte-Carlo trials.
//!
//! ```rust
//! use netimpact_core::{average_shortest_path, total_path_length, Graph};
//!
//! let g = Graph::from_parts(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
//! assert_eq!(total_path_length(&g), 8);
//! assert!((average_shortest_path(&g).unwrap() - 4.0 / 3.0).abs() < 1e-12);
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod io;

// Re-export commonly used types
pub use engine::degree::{degree_distribution, DegreeDistribution};
pub use engine::dispatch::{partition_trials, run_impact_trials, GraphSource, ImpactConfig};
pub use engine::errors::NetError;
pub use engine::graph::{Graph, GraphBuilder, NodeId};
pub use engine::impact::{impact, impact_by_name};
pub use engine::sampler::{NodeSampler, SamplingMethod};
pub use engine::traversal::{
    average_shortest_path, frontier_levels, single_source_path_sum, total_path_length, PathSum,
};
pub use io::{GraphFile, GraphReader};
