//! Error types for netimpact analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, reducing, or measuring a network.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// All public APIs return `Result<T, NetError>`; library code does not panic
/// on user input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NetError {
    /// One or more node identifiers are not present in the graph.
    ///
    /// Names are reported sorted and deduplicated so the message is stable.
    #[error("non-existent node(s): {}", .0.join(", "))]
    InvalidNode(Vec<String>),

    /// A [`NodeId`](crate::engine::graph::NodeId) that the graph never issued.
    #[error("node id {id} is out of range for a graph of {nodes} nodes")]
    InvalidNodeId { id: u32, nodes: usize },

    /// A node identifier was declared more than once.
    #[error("duplicate node '{0}'")]
    DuplicateNode(String),

    /// A metric that is only defined on connected graphs met a source that
    /// cannot reach every other node.
    #[error("graph is disconnected: node '{origin}' reaches {reached} of {expected} other nodes")]
    Disconnected {
        origin: String,
        reached: usize,
        expected: usize,
    },

    /// The graph has too few nodes for the requested metric.
    #[error("degenerate graph: {0}")]
    Degenerate(String),

    /// Removing `removed` of `nodes` nodes leaves no ordered pair to normalize by.
    #[error("cannot remove {removed} of {nodes} nodes: at least two nodes must survive")]
    DegenerateRemoval { removed: usize, nodes: usize },

    /// Invalid sampler or dispatcher configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The trial worker pool could not be created.
    #[error("worker error: {0}")]
    Worker(String),

    /// Syntax error while reading a graph description.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Bad entry in an enable/disable node list; `position` is one-based.
    #[error("node list entry {position}: {message}")]
    NodeList { position: usize, message: String },

    /// A well-formed document that does not describe a graph.
    #[error("malformed graph description: {0}")]
    Malformed(String),

    /// Malformed JSON graph description.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed GraphML document.
    #[error("graphml error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Failure reading a graph file.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NetError {
    /// Builds an [`NetError::InvalidNode`] from any collection of names,
    /// sorting and deduplicating them.
    pub fn invalid_nodes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        NetError::InvalidNode(names)
    }
}
