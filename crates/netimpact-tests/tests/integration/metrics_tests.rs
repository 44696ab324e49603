//! Path length, average shortest path and degree distribution on known graphs.

use netimpact_core::{
    average_shortest_path, degree_distribution, frontier_levels, single_source_path_sum,
    total_path_length, NetError,
};
use netimpact_tests::{complete, cycle, path, path_abc, star, two_components};

#[test]
fn path_graph_total_and_average() {
    let g = path_abc();
    assert_eq!(total_path_length(&g), 8);
    assert!((average_shortest_path(&g).unwrap() - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn longer_paths_follow_the_closed_form() {
    // n (n^2 - 1) / 3
    for n in 2..12u64 {
        assert_eq!(total_path_length(&path(n as usize)), n * (n * n - 1) / 3);
    }
}

#[test]
fn odd_cycles_follow_the_closed_form() {
    // n (n^2 - 1) / 4
    for n in [3u64, 5, 7, 9, 11] {
        assert_eq!(total_path_length(&cycle(n as usize)), n * (n * n - 1) / 4);
    }
}

#[test]
fn star_metrics() {
    let k = 4;
    let g = star(k);
    assert_eq!(total_path_length(&g), 2 * (k * k) as u64);
    let expected = 2.0 * k as f64 / (k as f64 + 1.0);
    assert!((average_shortest_path(&g).unwrap() - expected).abs() < 1e-12);

    let dist = degree_distribution(&g);
    assert_eq!(dist.count(1), 4);
    assert_eq!(dist.count(4), 1);
    assert_eq!(dist.total(), 5);
}

#[test]
fn complete_graph_average_is_one() {
    let g = complete(7);
    assert_eq!(total_path_length(&g), 7 * 6);
    assert!((average_shortest_path(&g).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn total_is_the_sum_of_single_sources() {
    let g = cycle(8);
    let summed: u64 = g
        .node_ids()
        .map(|id| single_source_path_sum(&g, id).sum)
        .sum();
    assert_eq!(summed, total_path_length(&g));
}

#[test]
fn frontier_levels_of_a_path() {
    let g = path(4);
    let origin = g.node_id("n0").unwrap();
    let levels = frontier_levels(&g, origin);
    let names: Vec<Vec<&str>> = levels
        .iter()
        .map(|level| level.iter().map(|&id| g.name(id)).collect())
        .collect();
    assert_eq!(names, vec![vec!["n1"], vec!["n2"], vec!["n3"]]);
}

#[test]
fn disconnected_graphs_still_have_a_total() {
    let g = two_components();
    assert_eq!(total_path_length(&g), 4);
    match average_shortest_path(&g) {
        Err(NetError::Disconnected {
            reached, expected, ..
        }) => {
            assert_eq!(reached, 1);
            assert_eq!(expected, 3);
        }
        other => panic!("expected a disconnected error, got {:?}", other),
    }
}

#[test]
fn path_distribution_matches_degrees() {
    let dist = degree_distribution(&path_abc());
    assert_eq!(dist.iter().collect::<Vec<_>>(), vec![(1, 2), (2, 1)]);
    assert_eq!(dist.dense(), vec![(0, 0), (1, 2), (2, 1)]);
}
