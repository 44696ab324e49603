//! Node subset sampling for Monte-Carlo removal trials.
//!
//! Two strategies produce an unbounded sequence of `m`-sized subsets of a
//! graph's `n` nodes:
//!
//! - **Random**: every subset is drawn uniformly and independently.
//! - **Pseudo**: one subset is drawn up front; every call rotates all of its
//!   indices by a fresh shift in `[1, n - 1]` modulo `n`. Consecutive subsets
//!   are correlated through that shared rotation, and for small `n` the
//!   sequence revisits earlier subsets.
//!
//! A sampler cannot be rewound; build a new one (with the same seed) to replay.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::engine::errors::NetError;
use crate::engine::graph::NodeId;

/// Subset sampling strategy, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SamplingMethod {
    /// Independent uniform draws.
    #[default]
    Random,
    /// Cyclic shifts of one initial draw.
    #[cfg_attr(feature = "serde", serde(alias = "psuedo"))]
    Pseudo,
}

impl FromStr for SamplingMethod {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(SamplingMethod::Random),
            // "psuedo" is the spelling older tooling emits
            "pseudo" | "psuedo" => Ok(SamplingMethod::Pseudo),
            other => Err(NetError::Config(format!(
                "unknown sampling method '{}', expected 'random' or 'pseudo'",
                other
            ))),
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SamplingMethod::Random => "random",
            SamplingMethod::Pseudo => "pseudo",
        })
    }
}

/// Infinite source of `m`-sized node subsets.
#[derive(Debug, Clone)]
pub struct NodeSampler<R = StdRng> {
    method: SamplingMethod,
    node_count: usize,
    sample_size: usize,
    rng: R,
    /// Rotating index set for [`SamplingMethod::Pseudo`]; unused otherwise.
    indices: Vec<usize>,
    current: Vec<NodeId>,
}

impl NodeSampler<StdRng> {
    /// A sampler whose sequence is fully determined by `seed`.
    pub fn seeded(
        method: SamplingMethod,
        node_count: usize,
        sample_size: usize,
        seed: u64,
    ) -> Result<Self, NetError> {
        Self::new(method, node_count, sample_size, StdRng::seed_from_u64(seed))
    }

    /// A sampler seeded from operating-system entropy.
    pub fn from_entropy(
        method: SamplingMethod,
        node_count: usize,
        sample_size: usize,
    ) -> Result<Self, NetError> {
        Self::new(method, node_count, sample_size, StdRng::from_entropy())
    }
}

impl<R: Rng> NodeSampler<R> {
    /// Builds a sampler over node ids `0..node_count`.
    ///
    /// Requires `sample_size < node_count`.
    pub fn new(
        method: SamplingMethod,
        node_count: usize,
        sample_size: usize,
        mut rng: R,
    ) -> Result<Self, NetError> {
        if sample_size >= node_count {
            return Err(NetError::Config(format!(
                "sample size {} must be smaller than the node count {}",
                sample_size, node_count
            )));
        }
        if node_count > u32::MAX as usize {
            return Err(NetError::Config(format!(
                "node count {} exceeds the addressable range",
                node_count
            )));
        }

        let indices = match method {
            SamplingMethod::Random => Vec::new(),
            SamplingMethod::Pseudo => index::sample(&mut rng, node_count, sample_size).into_vec(),
        };

        Ok(Self {
            method,
            node_count,
            sample_size,
            rng,
            indices,
            current: Vec::with_capacity(sample_size),
        })
    }

    pub fn method(&self) -> SamplingMethod {
        self.method
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Draws the next subset. The slice is valid until the next call.
    pub fn next_subset(&mut self) -> &[NodeId] {
        self.current.clear();
        match self.method {
            SamplingMethod::Random => {
                let drawn = index::sample(&mut self.rng, self.node_count, self.sample_size);
                self.current
                    .extend(drawn.into_iter().map(|i| NodeId(i as u32)));
            }
            SamplingMethod::Pseudo => {
                // node_count >= 2 here: sample_size < node_count, and an
                // empty subset needs no shift.
                if !self.indices.is_empty() {
                    let shift = self.rng.gen_range(1..self.node_count);
                    for i in &mut self.indices {
                        *i = (*i + shift) % self.node_count;
                    }
                }
                self.current
                    .extend(self.indices.iter().map(|&i| NodeId(i as u32)));
            }
        }
        &self.current
    }
}
