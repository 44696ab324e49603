//! Node removal, impact scores and Monte-Carlo trial dispatch.

use netimpact_core::{
    impact, impact_by_name, run_impact_trials, total_path_length, Graph, ImpactConfig, NetError,
    NodeSampler, SamplingMethod,
};
use netimpact_tests::{complete, cycle, path_abc, star};

#[test]
fn reduce_with_everything_kept_is_identity() {
    let g = cycle(9);
    assert_eq!(g.reduce(|_| true), g);
    assert_eq!(g.enable(&g.nodes().collect::<Vec<_>>()).unwrap(), g);
}

#[test]
fn reduce_is_symmetric_and_induced() {
    let g = complete(6).disable(&["n1", "n4"]).unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 6);
    for a in g.node_ids() {
        for &b in g.neighbors(a) {
            assert!(g.neighbors(b).contains(&a));
        }
    }
}

#[test]
fn removing_the_middle_of_a_path_scores_zero() {
    assert_eq!(impact_by_name(&path_abc(), &["b"]).unwrap(), 0.0);
}

#[test]
fn removing_a_star_hub_scores_zero() {
    let g = star(5);
    assert_eq!(impact_by_name(&g, &["n0"]).unwrap(), 0.0);
}

#[test]
fn impact_matches_the_manual_formula() {
    let g = cycle(10);
    let removed = ["n0", "n5"];
    let reduced = g.disable(&removed).unwrap();
    let expected = total_path_length(&reduced) as f64 / (8.0 * 7.0);
    assert!((impact_by_name(&g, &removed).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn impact_rejects_unknown_and_excessive_removals() {
    let g = path_abc();
    assert!(matches!(
        impact_by_name(&g, &["x"]),
        Err(NetError::InvalidNode(_))
    ));
    let all: Vec<_> = g.node_ids().collect();
    assert!(matches!(
        impact(&g, &all),
        Err(NetError::DegenerateRemoval { .. })
    ));
}

#[test]
fn random_trials_return_the_requested_count() {
    let g = cycle(12);
    let config = ImpactConfig::new(1, 10).with_workers(3);
    let scores = run_impact_trials(&g, &config).unwrap();
    assert_eq!(scores.len(), 10);
    // Removing any single node of a cycle leaves a path of 11 nodes.
    let expected = (11.0 * (121.0 - 1.0) / 3.0) / (11.0 * 10.0);
    for s in scores {
        assert!((s - expected).abs() < 1e-12);
    }
}

#[test]
fn pseudo_trials_are_rotations_of_one_draw() {
    let n = 13;
    let mut sampler = NodeSampler::seeded(SamplingMethod::Pseudo, n, 3, 8).unwrap();
    let first: Vec<usize> = sampler.next_subset().iter().map(|id| id.index()).collect();
    for _ in 0..20 {
        let next: Vec<usize> = sampler.next_subset().iter().map(|id| id.index()).collect();
        let shift = (next[0] + n - first[0]) % n;
        let rotated: Vec<usize> = first.iter().map(|&i| (i + shift) % n).collect();
        assert_eq!(next, rotated);
    }
}

#[test]
fn seeded_dispatch_is_reproducible_across_methods() {
    let g: Graph = cycle(20);
    for method in [SamplingMethod::Random, SamplingMethod::Pseudo] {
        let config = ImpactConfig::new(3, 17)
            .with_workers(4)
            .with_method(method)
            .with_seed(99);
        let a = run_impact_trials(&g, &config).unwrap();
        let b = run_impact_trials(&g, &config).unwrap();
        assert_eq!(a.len(), 17);
        assert_eq!(a, b);
    }
}

#[test]
fn more_workers_than_trials_is_fine() {
    let config = ImpactConfig::new(1, 2).with_workers(6).with_seed(4);
    assert_eq!(run_impact_trials(&cycle(6), &config).unwrap().len(), 2);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ImpactConfig =
        serde_json::from_str(r#"{"trials": 40, "method": "psuedo", "seed": 3}"#).unwrap();
    assert_eq!(config.trials, 40);
    assert_eq!(config.node_count, 1);
    assert_eq!(config.workers, 1);
    assert_eq!(config.method, SamplingMethod::Pseudo);
    assert_eq!(config.seed, Some(3));
}

#[test]
fn ids_issued_by_a_larger_graph_are_rejected() {
    let big = cycle(10);
    let small = path_abc();
    let foreign = big.node_id("n7").unwrap();
    assert!(matches!(
        impact(&small, &[foreign]),
        Err(NetError::InvalidNodeId { id: 7, nodes: 3 })
    ));
}
