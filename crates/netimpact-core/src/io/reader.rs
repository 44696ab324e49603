//! Graph readers.
//!
//! - [`EdgeListReader`]: one edge per line, `a b` or `a,b`; a lone token
//!   declares an isolated node; `#` starts a comment
//! - [`JsonGraphReader`]: `{"nodes": [...], "edges": [[a, b], ...]}`
//! - [`GraphMlReader`]: `<node id>` and `<edge source target>` children of the
//!   first `<graph>` element
//!
//! [`GraphFile`] picks a reader from the file extension and doubles as a
//! [`GraphSource`], so every trial worker re-reads the file independently.

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::dispatch::GraphSource;
use crate::engine::errors::NetError;
use crate::engine::graph::{Graph, GraphBuilder};

/// Parses a textual graph description into a [`Graph`].
pub trait GraphReader {
    fn read_str(&self, input: &str) -> Result<Graph, NetError>;

    fn read_path(&self, path: &Path) -> Result<Graph, NetError> {
        let text = fs::read_to_string(path).map_err(|source| NetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_str(&text)
    }
}

/// Whitespace- or comma-separated edge list.
///
/// Node order is order of first appearance.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListReader;

impl GraphReader for EdgeListReader {
    fn read_str(&self, input: &str) -> Result<Graph, NetError> {
        let mut builder = GraphBuilder::default();
        for (lineno, raw) in input.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default();
            let tokens: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .collect();
            match tokens.as_slice() {
                [] => {}
                [node] => {
                    builder.add_node(node);
                }
                [a, b] => builder.add_edge(a, b),
                _ => {
                    return Err(NetError::Parse {
                        line: lineno + 1,
                        message: format!(
                            "expected 'a b' or a single node, found {} fields",
                            tokens.len()
                        ),
                    })
                }
            }
        }
        Ok(builder.build())
    }
}

/// Strict JSON reader: every edge endpoint must be declared in `nodes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGraphReader;

impl GraphReader for JsonGraphReader {
    fn read_str(&self, input: &str) -> Result<Graph, NetError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let malformed = |what: &str| NetError::Malformed(format!("json graph: {}", what));
        let as_name = |v: &serde_json::Value| v.as_str().map(str::to_string);

        let nodes = value
            .get("nodes")
            .and_then(|n| n.as_array())
            .ok_or_else(|| malformed("missing 'nodes' array"))?
            .iter()
            .map(|n| as_name(n).ok_or_else(|| malformed("node names must be strings")))
            .collect::<Result<Vec<_>, _>>()?;

        let edges = match value.get("edges").and_then(|e| e.as_array()) {
            Some(list) => list
                .iter()
                .map(|e| match e.as_array().map(Vec::as_slice) {
                    Some([a, b]) => as_name(a)
                        .zip(as_name(b))
                        .ok_or_else(|| malformed("edge endpoints must be strings")),
                    _ => Err(malformed("edges must be [a, b] pairs")),
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Graph::from_parts(&nodes, edges)
    }
}

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

/// Strict GraphML reader.
///
/// Nodes keep document order. Edges are undirected regardless of the
/// `edgedefault` attribute, and data keys are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphMlReader;

impl GraphMlReader {
    fn is_element(node: &roxmltree::Node<'_, '_>, name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == name
            && matches!(node.tag_name().namespace(), None | Some(GRAPHML_NS))
    }

    fn required<'a>(
        doc: &roxmltree::Document<'_>,
        node: &roxmltree::Node<'a, '_>,
        attr: &str,
    ) -> Result<&'a str, NetError> {
        node.attribute(attr).ok_or_else(|| NetError::Parse {
            line: doc.text_pos_at(node.range().start).row as usize,
            message: format!("<{}> is missing the '{}' attribute", node.tag_name().name(), attr),
        })
    }
}

impl GraphReader for GraphMlReader {
    fn read_str(&self, input: &str) -> Result<Graph, NetError> {
        let doc = roxmltree::Document::parse(input)?;
        let graph = doc
            .root_element()
            .children()
            .find(|n| Self::is_element(n, "graph"))
            .ok_or_else(|| NetError::Malformed("graphml document has no <graph> element".into()))?;

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for child in graph.children() {
            if Self::is_element(&child, "node") {
                nodes.push(Self::required(&doc, &child, "id")?);
            } else if Self::is_element(&child, "edge") {
                let source = Self::required(&doc, &child, "source")?;
                let target = Self::required(&doc, &child, "target")?;
                edges.push((source, target));
            }
        }

        Graph::from_parts(nodes, edges)
    }
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    EdgeList,
    Json,
    GraphMl,
}

impl GraphFormat {
    /// `.json` is JSON, `.graphml` and `.xml` are GraphML; everything else is
    /// read as an edge list.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => GraphFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("graphml") || ext.eq_ignore_ascii_case("xml") => {
                GraphFormat::GraphMl
            }
            _ => GraphFormat::EdgeList,
        }
    }
}

/// A graph stored on disk.
#[derive(Debug, Clone)]
pub struct GraphFile {
    path: PathBuf,
    format: GraphFormat,
}

impl GraphFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = GraphFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> GraphFormat {
        self.format
    }

    pub fn read(&self) -> Result<Graph, NetError> {
        match self.format {
            GraphFormat::EdgeList => EdgeListReader.read_path(&self.path),
            GraphFormat::Json => JsonGraphReader.read_path(&self.path),
            GraphFormat::GraphMl => GraphMlReader.read_path(&self.path),
        }
    }
}

impl GraphSource for GraphFile {
    fn load(&self) -> Result<Graph, NetError> {
        self.read()
    }
}
