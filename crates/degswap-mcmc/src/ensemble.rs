use degswap_core::errors::SwapError;
use degswap_core::{entropy_seed, RngHandle};
use degswap_graph::EdgeList;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::determinism::chain_seed;
use crate::kernel::{sample_uniform, sample_weighted, UniformSwapResult, WeightedSwapResult};
use crate::rules::{UniformRule, WeightedRule};

/// Independent chains started from one graph, in chain-index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble<T> {
    /// Seed every chain seed was derived from.
    pub master_seed: u64,
    /// One result per chain.
    pub chains: Vec<T>,
}

fn resolve_master(master_seed: Option<u64>) -> Result<u64, SwapError> {
    match master_seed {
        Some(seed) => Ok(seed),
        None => entropy_seed(),
    }
}

/// Runs `chains` uniform chains in parallel.
///
/// Chain `k` owns a clone of `edges` and an engine seeded with
/// [`chain_seed`]`(master, k)`, so results do not depend on scheduling.
#[instrument(name = "mcmc.uniform_ensemble", err, skip(edges, rule), fields(edges = edges.len()))]
pub fn run_uniform_ensemble(
    edges: &EdgeList,
    steps: usize,
    rule: &UniformRule,
    chains: usize,
    master_seed: Option<u64>,
) -> Result<Ensemble<UniformSwapResult>, SwapError> {
    let master_seed = resolve_master(master_seed)?;
    let results = (0..chains)
        .into_par_iter()
        .map(|index| -> Result<UniformSwapResult, SwapError> {
            let mut rng = RngHandle::from_seed(chain_seed(master_seed, index));
            let (sampled, tally) = sample_uniform(edges.clone(), steps, rule, &mut rng)?;
            let (from, to) = sampled.into_parts();
            Ok(UniformSwapResult {
                from,
                to,
                seed: rng.seed(),
                tally,
            })
        })
        .collect::<Result<Vec<_>, SwapError>>()?;
    info!(master_seed, chains = results.len(), "uniform ensemble completed");
    Ok(Ensemble {
        master_seed,
        chains: results,
    })
}

/// Runs `chains` weighted chains in parallel, sharing the weight matrix and
/// structural zeros read-only.
#[instrument(name = "mcmc.weighted_ensemble", err, skip(edges, rule), fields(edges = edges.len()))]
pub fn run_weighted_ensemble(
    edges: &EdgeList,
    steps: usize,
    rule: &WeightedRule<'_>,
    chains: usize,
    master_seed: Option<u64>,
) -> Result<Ensemble<WeightedSwapResult>, SwapError> {
    let master_seed = resolve_master(master_seed)?;
    rule.weights().ensure_covers(edges)?;
    let results = (0..chains)
        .into_par_iter()
        .map(|index| -> Result<WeightedSwapResult, SwapError> {
            let mut rng = RngHandle::from_seed(chain_seed(master_seed, index));
            let (sampled, tally, diagnostics) =
                sample_weighted(edges.clone(), steps, rule, &mut rng)?;
            let (from, to) = sampled.into_parts();
            Ok(WeightedSwapResult {
                from,
                to,
                seed: rng.seed(),
                tally,
                diagnostics,
            })
        })
        .collect::<Result<Vec<_>, SwapError>>()?;
    info!(master_seed, chains = results.len(), "weighted ensemble completed");
    Ok(Ensemble {
        master_seed,
        chains: results,
    })
}
