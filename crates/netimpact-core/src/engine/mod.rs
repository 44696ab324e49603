//! The analysis engine for undirected networks.
//!
//! This module provides:
//! - **errors**: Error types for analysis failures
//! - **graph**: Immutable adjacency model and induced-subgraph reduction
//! - **traversal**: Breadth-first frontier expansion and path-length metrics
//! - **degree**: Degree distribution histogram
//! - **impact**: Normalized path length after node removal
//! - **sampler**: Random and pseudo-random node subset sampling
//! - **dispatch**: Parallel Monte-Carlo trial dispatch

pub mod degree;
pub mod dispatch;
pub mod errors;
pub mod graph;
pub mod impact;
pub mod sampler;
pub mod traversal;
