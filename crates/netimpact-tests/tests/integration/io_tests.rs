//! Reading graphs from disk and converting node lists.

use std::io::Write;

use netimpact_core::io::{parse_fantasi_nodes, split_node_list, EdgeListReader, GraphFormat};
use netimpact_core::{
    run_impact_trials, total_path_length, GraphFile, GraphReader, ImpactConfig, NetError,
};
use netimpact_tests::{cycle, to_edge_list};
use tempfile::NamedTempFile;

#[test]
fn edge_list_file_round_trips_a_graph() {
    let g = cycle(7);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(to_edge_list(&g).as_bytes()).unwrap();

    let source = GraphFile::new(file.path());
    assert_eq!(source.format(), GraphFormat::EdgeList);
    assert_eq!(source.read().unwrap(), g);
}

#[test]
fn workers_can_share_a_graph_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(to_edge_list(&cycle(9)).as_bytes()).unwrap();

    let config = ImpactConfig::new(2, 8).with_workers(2).with_seed(12);
    let scores = run_impact_trials(&GraphFile::new(file.path()), &config).unwrap();
    assert_eq!(scores.len(), 8);
}

#[test]
fn json_file_with_explicit_format() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"nodes": ["a", "b", "c"], "edges": [["a", "b"], ["b", "c"]]}}"#
    )
    .unwrap();

    let source = GraphFile::new(file.path()).with_format(GraphFormat::Json);
    assert_eq!(total_path_length(&source.read().unwrap()), 8);
}

#[test]
fn self_loops_in_edge_lists_are_dropped() {
    let g = EdgeListReader.read_str("a a\na b\n").unwrap();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.degree(g.node_id("a").unwrap()), 1);
}

#[test]
fn missing_files_report_their_path() {
    let err = GraphFile::new("/no/such/graph.txt").read().unwrap_err();
    assert!(matches!(err, NetError::Io { .. }));
    assert!(err.to_string().contains("/no/such/graph.txt"));
}

#[test]
fn fantasi_lists_become_padded_names() {
    let tokens = split_node_list("0, 4 11");
    assert_eq!(tokens, vec!["0", "4", "11"]);
    assert_eq!(
        parse_fantasi_nodes(&tokens).unwrap(),
        vec!["000001", "000005", "000012"]
    );
    assert!(matches!(
        parse_fantasi_nodes(&["3", "x"]),
        Err(NetError::NodeList { position: 2, .. })
    ));
}

#[test]
fn graphml_file_feeds_impact_trials() {
    let mut file = tempfile::Builder::new().suffix(".graphml").tempfile().unwrap();
    writeln!(
        file,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns"><graph edgedefault="undirected">"#
    )
    .unwrap();
    for i in 1..=6 {
        writeln!(file, r#"<node id="{:06}"/>"#, i).unwrap();
    }
    for i in 1..=6 {
        writeln!(file, r#"<edge source="{:06}" target="{:06}"/>"#, i, i % 6 + 1).unwrap();
    }
    writeln!(file, "</graph></graphml>").unwrap();

    let source = GraphFile::new(file.path());
    assert_eq!(source.format(), GraphFormat::GraphMl);
    assert_eq!(source.read().unwrap(), cycle_named_like_fantasi());

    let config = ImpactConfig::new(1, 4).with_workers(2).with_seed(1);
    let scores = run_impact_trials(&source, &config).unwrap();
    // Removing one node of a 6-cycle leaves a 5-path: 40 / (5 * 4).
    assert!(scores.iter().all(|s| (s - 2.0).abs() < 1e-12));
}

fn cycle_named_like_fantasi() -> netimpact_core::Graph {
    let names: Vec<String> = (1..=6).map(|i| format!("{:06}", i)).collect();
    let edges: Vec<(String, String)> = (0..6)
        .map(|i| (names[i].clone(), names[(i + 1) % 6].clone()))
        .collect();
    netimpact_core::Graph::from_parts(&names, edges).unwrap()
}
