//! Shared graph fixtures for the netimpact integration and property tests.

use netimpact_core::Graph;

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("n{i}")).collect()
}

fn from_index_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
    let names = numbered(n);
    let pairs: Vec<(String, String)> = edges
        .into_iter()
        .map(|(a, b)| (names[a].clone(), names[b].clone()))
        .collect();
    Graph::from_parts(&names, pairs).expect("fixture edges reference declared nodes")
}

/// The three-node path a - b - c.
pub fn path_abc() -> Graph {
    Graph::from_parts(["a", "b", "c"], [("a", "b"), ("b", "c")])
        .expect("fixture edges reference declared nodes")
}

/// Path on `n` nodes `n0 - n1 - ... - n{n-1}`.
pub fn path(n: usize) -> Graph {
    from_index_edges(n, (1..n).map(|i| (i - 1, i)))
}

/// Cycle on `n >= 3` nodes.
pub fn cycle(n: usize) -> Graph {
    from_index_edges(n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// Star with `leaves` leaves around hub `n0`.
pub fn star(leaves: usize) -> Graph {
    from_index_edges(leaves + 1, (1..=leaves).map(|i| (0, i)))
}

/// Complete graph on `n` nodes.
pub fn complete(n: usize) -> Graph {
    from_index_edges(
        n,
        (0..n).flat_map(|i| ((i + 1)..n).map(move |j| (i, j))),
    )
}

/// Two disjoint edges: `a - b` and `c - d`.
pub fn two_components() -> Graph {
    Graph::from_parts(["a", "b", "c", "d"], [("a", "b"), ("c", "d")])
        .expect("fixture edges reference declared nodes")
}

/// Graph on `n` nodes built from arbitrary index pairs; pairs are reduced
/// modulo `n`, self-loops are dropped.
pub fn from_pairs(n: usize, pairs: &[(usize, usize)]) -> Graph {
    let edges: Vec<(usize, usize)> = pairs
        .iter()
        .map(|&(a, b)| (a % n, b % n))
        .filter(|(a, b)| a != b)
        .collect();
    from_index_edges(n, edges)
}

/// Writes `graph` as an edge list that [`netimpact_core::io::EdgeListReader`]
/// reads back into an equal graph.
pub fn to_edge_list(graph: &Graph) -> String {
    let mut out = String::new();
    for name in graph.nodes() {
        out.push_str(name);
        out.push('\n');
    }
    for (a, b) in graph.edge_list() {
        out.push_str(a);
        out.push(' ');
        out.push_str(b);
        out.push('\n');
    }
    out
}
