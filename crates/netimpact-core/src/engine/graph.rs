//! # Undirected network graph
//!
//! This module implements the immutable adjacency model every metric runs on.
//!
//! ## Key Components
//!
//! - **NodeId**: dense index of a node in insertion order
//! - **Graph**: ordered node identifiers plus symmetric neighbor sets
//! - **GraphBuilder**: incremental construction used by the readers
//!
//! ## Design
//!
//! - Identifiers are interned once as `Arc<str>`; reduced graphs share them
//! - Adjacency lists are sorted and deduplicated, so `has_edge` is a binary search
//!   and reduction keeps neighbor order without re-sorting
//! - A graph is never mutated after `build()`. Removing nodes produces a new
//!   graph through [`Graph::reduce`], leaving the source reusable across trials
//!
//! ## Example
//!
//! ```rust
//! use netimpact_core::engine::graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::default();
//! builder.add_edge("a", "b");
//! builder.add_edge("b", "c");
//! let graph = builder.build();
//!
//! let without_b = graph.disable(&["b"]).unwrap();
//! assert_eq!(without_b.edge_count(), 0);
//! ```

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::engine::errors::NetError;

/// Maximum neighbor count stored inline before spilling to the heap.
const INLINE_NEIGHBORS: usize = 8;

type Neighbors = SmallVec<[NodeId; INLINE_NEIGHBORS]>;

/// A unique identifier for a node within one [`Graph`].
///
/// Ids are dense indices in node order. A reduced graph renumbers its nodes,
/// so an id is only meaningful for the graph that issued it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An undirected, unweighted graph with string node identifiers.
///
/// Invariants:
/// - `b ∈ neighbors(a) ⇔ a ∈ neighbors(b)`
/// - no self-loops
/// - every node name is unique
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<Arc<str>>,
    index: FxHashMap<Arc<str>, NodeId>,
    adjacency: Vec<Neighbors>,
}

impl Graph {
    /// Strict constructor from declared nodes and an edge list.
    ///
    /// Fails with [`NetError::DuplicateNode`] when a node is declared twice and
    /// with [`NetError::InvalidNode`] when an edge mentions undeclared nodes.
    pub fn from_parts<N, E, A, B>(nodes: N, edges: E) -> Result<Self, NetError>
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut builder = GraphBuilder::default();
        for name in nodes {
            let name = name.as_ref();
            if builder.contains(name) {
                return Err(NetError::DuplicateNode(name.to_string()));
            }
            builder.add_node(name);
        }

        let mut unknown = Vec::new();
        for (a, b) in edges {
            let (a, b) = (a.as_ref(), b.as_ref());
            for end in [a, b] {
                if !builder.contains(end) {
                    unknown.push(end.to_string());
                }
            }
            if builder.contains(a) && builder.contains(b) {
                builder.add_edge(a, b);
            }
        }
        if !unknown.is_empty() {
            return Err(NetError::invalid_nodes(unknown));
        }
        Ok(builder.build())
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Node identifiers in graph order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|n| &**n)
    }

    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.names.len() as u32).map(NodeId)
    }

    /// Name of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Sorted neighbors of `id`.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id.index()]
    }

    /// Neighbor names of the node called `name`, or `None` if it is absent.
    pub fn neighbor_names<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let id = self.node_id(name)?;
        Some(self.neighbors(id).iter().map(move |&n| self.name(n)))
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency[id.index()].len()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(a.index())
            .is_some_and(|n| n.binary_search(&b).is_ok())
    }

    /// Each undirected edge once, as `(a, b)` with `a < b`, sorted.
    pub fn edge_list(&self) -> Vec<(&str, &str)> {
        let mut edges: Vec<(&str, &str)> = self
            .node_ids()
            .flat_map(move |a| {
                self.neighbors(a).iter().filter_map(move |&b| {
                    let (an, bn) = (self.name(a), self.name(b));
                    (an < bn).then_some((an, bn))
                })
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Resolves names to ids, reporting every unknown name at once.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<NodeId>, NetError> {
        let mut ids = Vec::with_capacity(names.len());
        let mut unknown = Vec::new();
        for name in names {
            match self.node_id(name.as_ref()) {
                Some(id) => ids.push(id),
                None => unknown.push(name.as_ref().to_string()),
            }
        }
        if unknown.is_empty() {
            Ok(ids)
        } else {
            Err(NetError::invalid_nodes(unknown))
        }
    }

    /// Induced subgraph of the nodes whose name satisfies `keep`.
    pub fn reduce<F>(&self, keep: F) -> Graph
    where
        F: Fn(&str) -> bool,
    {
        self.reduce_ids(|id| keep(self.name(id)))
    }

    /// Induced subgraph of the nodes whose id satisfies `keep`.
    ///
    /// Surviving nodes keep their relative order and are renumbered densely.
    pub fn reduce_ids<F>(&self, keep: F) -> Graph
    where
        F: Fn(NodeId) -> bool,
    {
        let mut remap: Vec<Option<NodeId>> = Vec::with_capacity(self.names.len());
        let mut names = Vec::new();
        for id in self.node_ids() {
            if keep(id) {
                remap.push(Some(NodeId(names.len() as u32)));
                names.push(Arc::clone(&self.names[id.index()]));
            } else {
                remap.push(None);
            }
        }

        // Remapping is monotone, so filtered lists stay sorted.
        let adjacency: Vec<Neighbors> = self
            .adjacency
            .iter()
            .zip(&remap)
            .filter(|(_, kept)| kept.is_some())
            .map(|(neighbors, _)| neighbors.iter().filter_map(|n| remap[n.index()]).collect())
            .collect();

        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (Arc::clone(n), NodeId(i as u32)))
            .collect();

        Graph {
            names,
            index,
            adjacency,
        }
    }

    /// Keeps only the named nodes.
    pub fn enable<S: AsRef<str>>(&self, enabled: &[S]) -> Result<Graph, NetError> {
        let ids: FxHashSet<NodeId> = self.resolve(enabled)?.into_iter().collect();
        Ok(self.reduce_ids(|id| ids.contains(&id)))
    }

    /// Removes the named nodes.
    pub fn disable<S: AsRef<str>>(&self, disabled: &[S]) -> Result<Graph, NetError> {
        let ids: FxHashSet<NodeId> = self.resolve(disabled)?.into_iter().collect();
        Ok(self.reduce_ids(|id| !ids.contains(&id)))
    }
}

impl PartialEq for Graph {
    /// Graphs are equal when they list the same nodes in the same order with
    /// the same neighbor sets.
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.adjacency == other.adjacency
    }
}

impl Eq for Graph {}

/// Incremental [`Graph`] construction.
///
/// Edges implicitly declare missing endpoints. Duplicate edges collapse and
/// self-loops are dropped.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    names: Vec<Arc<str>>,
    index: FxHashMap<Arc<str>, NodeId>,
    adjacency: Vec<Neighbors>,
    self_loops: usize,
}

impl GraphBuilder {
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            names: Vec::with_capacity(nodes),
            index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            adjacency: Vec::with_capacity(nodes),
            self_loops: 0,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declares a node, returning its id. Declaring an existing node is a no-op.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        let name: Arc<str> = Arc::from(name);
        self.index.insert(Arc::clone(&name), id);
        self.names.push(name);
        self.adjacency.push(Neighbors::new());
        id
    }

    /// Adds the undirected edge `a - b`.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        if a == b {
            self.self_loops += 1;
            return;
        }
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
    }

    pub fn build(mut self) -> Graph {
        for neighbors in &mut self.adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        if self.self_loops > 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!("dropped {} self-loop(s) while building graph", self.self_loops);
        }

        Graph {
            names: self.names,
            index: self.index,
            adjacency: self.adjacency,
        }
    }
}
