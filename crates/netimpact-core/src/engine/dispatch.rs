//! Parallel Monte-Carlo dispatch of impact trials.
//!
//! A requested number of trials is split across a fixed number of workers.
//! Each worker loads its own [`Graph`] from a shared [`GraphSource`], builds
//! its own [`NodeSampler`], and runs its partition of trials sequentially.
//! Results are concatenated in worker order.
//!
//! ## Architecture
//!
//! - **Partitioning**: the first `W - 1` workers take `⌊trials / W⌋` trials,
//!   the last worker takes the remainder
//! - **Isolation**: no state is shared between workers except the read-only
//!   source; every reduced graph is owned by the trial that built it
//! - **Ordering**: results follow partition index regardless of completion order
//! - **Failure**: the first worker error aborts the whole dispatch
//!
//! ## Feature gating
//!
//! Parallel dispatch is behind the `parallel` feature flag. When disabled,
//! partitions run sequentially in the same order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::errors::NetError;
use crate::engine::graph::Graph;
use crate::engine::impact::impact;
use crate::engine::sampler::{NodeSampler, SamplingMethod};

/// Anything a worker can obtain its own graph from.
pub trait GraphSource: Sync {
    fn load(&self) -> Result<Graph, NetError>;
}

impl GraphSource for Graph {
    fn load(&self) -> Result<Graph, NetError> {
        Ok(self.clone())
    }
}

/// Parameters of one impact run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpactConfig {
    /// Nodes removed per trial (`m`).
    pub node_count: usize,
    /// Total number of trials.
    pub trials: usize,
    /// Number of parallel workers (`W`).
    pub workers: usize,
    pub method: SamplingMethod,
    /// Base seed; worker `i` is seeded with `seed + i`. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            node_count: 1,
            trials: 10,
            workers: 1,
            method: SamplingMethod::Random,
            seed: None,
        }
    }
}

impl ImpactConfig {
    pub fn new(node_count: usize, trials: usize) -> Self {
        Self {
            node_count,
            trials,
            ..Self::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_method(mut self, method: SamplingMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), NetError> {
        if self.workers == 0 {
            return Err(NetError::Config("worker count must be at least 1".into()));
        }
        Ok(())
    }

    /// Seed for worker `worker`, if the run is seeded.
    fn worker_seed(&self, worker: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(worker as u64))
    }
}

/// Splits `trials` across `workers`: `⌊trials / workers⌋` each, with the
/// remainder added to the last worker.
///
/// Zero workers is a [`NetError::Config`] error.
pub fn partition_trials(trials: usize, workers: usize) -> Result<Vec<usize>, NetError> {
    if workers == 0 {
        return Err(NetError::Config("worker count must be at least 1".into()));
    }
    let base = trials / workers;
    let mut parts = vec![base; workers];
    parts[workers - 1] = trials - base * (workers - 1);
    Ok(parts)
}

/// Runs one worker's partition: load, sample, measure.
fn run_partition<S>(
    source: &S,
    config: &ImpactConfig,
    worker: usize,
    trials: usize,
) -> Result<Vec<f64>, NetError>
where
    S: GraphSource + ?Sized,
{
    if trials == 0 {
        return Ok(Vec::new());
    }

    let graph = source.load()?;
    let n = graph.node_count();
    let mut sampler = match config.worker_seed(worker) {
        Some(seed) => NodeSampler::seeded(config.method, n, config.node_count, seed)?,
        None => NodeSampler::from_entropy(config.method, n, config.node_count)?,
    };

    let mut results = Vec::with_capacity(trials);
    for _ in 0..trials {
        let disabled = sampler.next_subset();
        results.push(impact(&graph, disabled)?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("worker {} finished {} trial(s)", worker, trials);

    Ok(results)
}

/// Runs `config.trials` impact trials and returns their scores in worker order.
#[cfg(feature = "parallel")]
pub fn run_impact_trials<S>(source: &S, config: &ImpactConfig) -> Result<Vec<f64>, NetError>
where
    S: GraphSource + ?Sized,
{
    config.validate()?;
    let partitions = partition_trials(config.trials, config.workers)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "dispatching {} {} trial(s) removing {} node(s) across {} worker(s): {:?}",
        config.trials,
        config.method,
        config.node_count,
        config.workers,
        partitions
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .map_err(|e| NetError::Worker(e.to_string()))?;

    let per_worker: Vec<Vec<f64>> = pool.install(|| {
        partitions
            .par_iter()
            .enumerate()
            .map(|(worker, &trials)| run_partition(source, config, worker, trials))
            .collect::<Result<Vec<_>, NetError>>()
    })?;

    Ok(per_worker.into_iter().flatten().collect())
}

/// Sequential fallback for trial dispatch.
#[cfg(not(feature = "parallel"))]
pub fn run_impact_trials<S>(source: &S, config: &ImpactConfig) -> Result<Vec<f64>, NetError>
where
    S: GraphSource + ?Sized,
{
    config.validate()?;
    let partitions = partition_trials(config.trials, config.workers)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "running {} {} trial(s) sequentially as {} partition(s): {:?}",
        config.trials,
        config.method,
        config.workers,
        partitions
    );

    let mut results = Vec::with_capacity(config.trials);
    for (worker, &trials) in partitions.iter().enumerate() {
        results.extend(run_partition(source, config, worker, trials)?);
    }
    Ok(results)
}
