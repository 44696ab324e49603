//! Breadth-first frontier expansion and the path-length metrics built on it.
//!
//! Every metric here expands frontiers level by level from a single origin:
//! the nodes first discovered at depth `d` are exactly those at hop distance
//! `d`, so `Σ d · |frontier_d|` is the sum of distances to every reachable node.
//!
//! - [`total_path_length`]: distance sum over all ordered reachable pairs
//!   (each unordered pair counted twice)
//! - [`average_shortest_path`]: mean of per-source average distance; only
//!   defined on connected graphs
//!
//! Cost is O(V + E) per source, O(V · (V + E)) for the whole graph.

use std::mem;

use crate::engine::errors::NetError;
use crate::engine::graph::{Graph, NodeId};

/// Result of expanding every frontier from one origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathSum {
    /// Sum of hop distances from the origin to every reachable node.
    pub sum: u64,
    /// Number of nodes reached, excluding the origin.
    pub reached: usize,
}

/// Reusable traversal buffers.
///
/// Visited marks are generation-stamped so consecutive sources over the same
/// graph do not pay for clearing them.
struct FrontierWalker {
    marks: Vec<u32>,
    generation: u32,
    frontier: Vec<NodeId>,
    next: Vec<NodeId>,
}

impl FrontierWalker {
    fn new(node_count: usize) -> Self {
        Self {
            marks: vec![0; node_count],
            generation: 0,
            frontier: Vec::new(),
            next: Vec::new(),
        }
    }

    /// Expands frontiers from `origin`, calling `on_level(depth, frontier)`
    /// once per non-empty level.
    fn walk<F>(&mut self, graph: &Graph, origin: NodeId, mut on_level: F) -> PathSum
    where
        F: FnMut(u64, &[NodeId]),
    {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.marks.iter_mut().for_each(|m| *m = 0);
            self.generation = 1;
        }

        let Self {
            marks,
            generation,
            frontier,
            next,
        } = self;
        let stamp = *generation;

        marks[origin.index()] = stamp;
        frontier.clear();
        for &n in graph.neighbors(origin) {
            if marks[n.index()] != stamp {
                marks[n.index()] = stamp;
                frontier.push(n);
            }
        }

        let mut result = PathSum::default();
        let mut depth = 1u64;
        while !frontier.is_empty() {
            on_level(depth, frontier);
            result.sum += depth * frontier.len() as u64;
            result.reached += frontier.len();

            next.clear();
            for &m in frontier.iter() {
                for &v in graph.neighbors(m) {
                    if marks[v.index()] != stamp {
                        marks[v.index()] = stamp;
                        next.push(v);
                    }
                }
            }
            mem::swap(frontier, next);
            depth += 1;
        }
        result
    }
}

/// Distance sum and reach count from a single origin.
///
/// # Panics
///
/// Panics if `origin` was not issued by `graph`.
pub fn single_source_path_sum(graph: &Graph, origin: NodeId) -> PathSum {
    FrontierWalker::new(graph.node_count()).walk(graph, origin, |_, _| {})
}

/// The nodes discovered at each depth from `origin`; element `d - 1` holds
/// the nodes at distance `d`.
pub fn frontier_levels(graph: &Graph, origin: NodeId) -> Vec<Vec<NodeId>> {
    let mut levels = Vec::new();
    FrontierWalker::new(graph.node_count()).walk(graph, origin, |_, frontier| {
        levels.push(frontier.to_vec());
    });
    levels
}

/// Sum of shortest-path hop counts over all ordered reachable pairs.
///
/// Unreachable pairs contribute nothing. Each unordered pair is counted once
/// per direction, so the result is even for any simple graph.
pub fn total_path_length(graph: &Graph) -> u64 {
    let mut walker = FrontierWalker::new(graph.node_count());
    let mut total = 0u64;
    for origin in graph.node_ids() {
        #[cfg(feature = "tracing")]
        tracing::debug!("searching from node: {}", graph.name(origin));

        let PathSum { sum, .. } = walker.walk(graph, origin, |_depth, _frontier| {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                "  at depth = {}, discovered: {:?}",
                _depth,
                _frontier.iter().map(|&n| graph.name(n)).collect::<Vec<_>>()
            );
        });

        #[cfg(feature = "tracing")]
        tracing::debug!("  sum of node path distances = {}", sum);
        total += sum;
    }
    total
}

/// Mean over all sources of the source's average hop distance to every other node.
///
/// Fails with [`NetError::Disconnected`] as soon as a source does not reach
/// every other node, and with [`NetError::Degenerate`] for graphs with fewer
/// than two nodes.
pub fn average_shortest_path(graph: &Graph) -> Result<f64, NetError> {
    let n = graph.node_count();
    if n < 2 {
        return Err(NetError::Degenerate(format!(
            "average shortest path needs at least two nodes, graph has {}",
            n
        )));
    }

    let mut walker = FrontierWalker::new(n);
    let mut per_source_total = 0.0;
    for origin in graph.node_ids() {
        let PathSum { sum, reached } = walker.walk(graph, origin, |_, _| {});
        if reached != n - 1 {
            return Err(NetError::Disconnected {
                origin: graph.name(origin).to_string(),
                reached,
                expected: n - 1,
            });
        }
        per_source_total += sum as f64 / reached as f64;
    }
    Ok(per_source_total / n as f64)
}
