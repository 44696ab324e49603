//! Graph input: file readers and node list parsing.

pub mod node_list;
pub mod reader;

pub use node_list::{parse_fantasi_nodes, split_node_list};
pub use reader::{
    EdgeListReader, GraphFile, GraphFormat, GraphMlReader, GraphReader, JsonGraphReader,
};
