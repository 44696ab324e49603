//! Impact of removing a node subset.
//!
//! The impact of removing `m` of `n` nodes is the total path length of the
//! surviving induced subgraph divided by `(n - m)(n - m - 1)`, the number of
//! ordered pairs among survivors. Pairs the removal disconnects contribute
//! zero, so fragmentation lowers the score rather than failing.

use rustc_hash::FxHashSet;

use crate::engine::errors::NetError;
use crate::engine::graph::{Graph, NodeId};
use crate::engine::traversal::total_path_length;

/// Impact of removing `disabled` from `graph`.
///
/// Duplicate ids count once. Ids `graph` did not issue are rejected with
/// [`NetError::InvalidNodeId`]. At least two nodes must survive, otherwise
/// [`NetError::DegenerateRemoval`] is returned.
pub fn impact(graph: &Graph, disabled: &[NodeId]) -> Result<f64, NetError> {
    let n = graph.node_count();
    if let Some(&stray) = disabled.iter().find(|id| id.index() >= n) {
        return Err(NetError::InvalidNodeId {
            id: stray.0,
            nodes: n,
        });
    }

    let removed: FxHashSet<NodeId> = disabled.iter().copied().collect();
    let m = removed.len();
    if m + 2 > n {
        return Err(NetError::DegenerateRemoval {
            removed: m,
            nodes: n,
        });
    }

    let reduced = graph.reduce_ids(|id| !removed.contains(&id));
    let raw = total_path_length(&reduced);
    let survivors = (n - m) as f64;
    Ok(raw as f64 / (survivors * (survivors - 1.0)))
}

/// [`impact`] addressed by node name; unknown names are reported before any work.
pub fn impact_by_name<S: AsRef<str>>(graph: &Graph, disabled: &[S]) -> Result<f64, NetError> {
    let ids = graph.resolve(disabled)?;
    impact(graph, &ids)
}
