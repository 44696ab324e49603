//! Degree distribution of a graph.

use std::collections::BTreeMap;

use crate::engine::graph::Graph;

/// Histogram mapping degree to the number of nodes with that degree.
///
/// Only non-empty buckets are stored; counts always sum to the node count of
/// the graph the histogram was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DegreeDistribution {
    buckets: BTreeMap<usize, usize>,
}

impl DegreeDistribution {
    /// Number of nodes with exactly `degree` neighbors.
    pub fn count(&self, degree: usize) -> usize {
        self.buckets.get(&degree).copied().unwrap_or(0)
    }

    pub fn max_degree(&self) -> Option<usize> {
        self.buckets.keys().next_back().copied()
    }

    pub fn total(&self) -> usize {
        self.buckets.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Non-empty buckets in ascending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.buckets.iter().map(|(&d, &c)| (d, c))
    }

    /// Every degree from 0 to the maximum, including empty buckets.
    pub fn dense(&self) -> Vec<(usize, usize)> {
        match self.max_degree() {
            Some(max) => (0..=max).map(|d| (d, self.count(d))).collect(),
            None => Vec::new(),
        }
    }

    /// Mean degree, or 0 for an empty graph.
    pub fn mean(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: usize = self.iter().map(|(d, c)| d * c).sum();
        weighted as f64 / total as f64
    }
}

impl FromIterator<usize> for DegreeDistribution {
    fn from_iter<I: IntoIterator<Item = usize>>(degrees: I) -> Self {
        let mut buckets = BTreeMap::new();
        for d in degrees {
            *buckets.entry(d).or_insert(0) += 1;
        }
        Self { buckets }
    }
}

/// Computes the degree histogram of `graph` in O(V).
pub fn degree_distribution(graph: &Graph) -> DegreeDistribution {
    graph.node_ids().map(|n| graph.degree(n)).collect()
}
