use degswap_core::errors::{ErrorInfo, SwapError};
use degswap_core::{RngHandle, SwapDraws, VertexId};
use degswap_graph::{EdgeList, ForbiddenPairs, WeightMatrix};
use serde::{Deserialize, Serialize};
use tracing::{debug, field, instrument, Span};

use crate::diagnostics::{ChainTally, Diagnostics};
use crate::rules::{AcceptanceRule, UniformRule, WeightedRule};
use crate::step::{propose_and_attempt, StepOutcome};

/// Final state of a uniform chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformSwapResult {
    /// Tails after the last step, in input order.
    pub from: Vec<VertexId>,
    /// Heads, unchanged from the input.
    pub to: Vec<VertexId>,
    /// Seed the chain's engine was built from.
    pub seed: u64,
    /// Outcome counts over all steps.
    pub tally: ChainTally,
}

/// Final state and per-step diagnostics of a weighted chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSwapResult {
    /// Tails after the last step, in input order.
    pub from: Vec<VertexId>,
    /// Heads, unchanged from the input.
    pub to: Vec<VertexId>,
    /// Seed the chain's engine was built from.
    pub seed: u64,
    /// Outcome counts over all steps.
    pub tally: ChainTally,
    /// One entry per attempted step.
    pub diagnostics: Diagnostics,
}

/// Runs exactly `steps` proposals against `edges`, reporting every outcome
/// to `observe`.
///
/// Each step draws two positions; only steps reaching the acceptance stage
/// draw a uniform. An error aborts the chain and should be treated as a
/// failure of the whole call.
pub fn run_chain<R, D, F>(
    edges: &mut EdgeList,
    steps: usize,
    rule: &R,
    draws: &mut D,
    mut observe: F,
) -> Result<ChainTally, SwapError>
where
    R: AcceptanceRule + ?Sized,
    D: SwapDraws + ?Sized,
    F: FnMut(&StepOutcome),
{
    if steps > 0 && edges.is_empty() {
        return Err(SwapError::Input(
            ErrorInfo::new("empty-edge-list", "cannot draw edges from an empty list")
                .with_context("steps", steps.to_string()),
        ));
    }
    let mut tally = ChainTally::default();
    for _ in 0..steps {
        let outcome = propose_and_attempt(edges, rule, draws)?;
        tally.record(&outcome);
        observe(&outcome);
    }
    Ok(tally)
}

/// Runs a uniform chain on an already validated edge list.
pub fn sample_uniform(
    mut edges: EdgeList,
    steps: usize,
    rule: &UniformRule,
    rng: &mut RngHandle,
) -> Result<(EdgeList, ChainTally), SwapError> {
    let tally = run_chain(&mut edges, steps, rule, rng, |_| {})?;
    Ok((edges, tally))
}

/// Runs a weighted chain on an already validated edge list, collecting
/// per-step diagnostics.
pub fn sample_weighted(
    mut edges: EdgeList,
    steps: usize,
    rule: &WeightedRule<'_>,
    rng: &mut RngHandle,
) -> Result<(EdgeList, ChainTally, Diagnostics), SwapError> {
    rule.weights().ensure_covers(&edges)?;
    let mut diagnostics = Diagnostics::with_capacity(steps);
    let tally = run_chain(&mut edges, steps, rule, rng, |outcome| {
        diagnostics.push(outcome)
    })?;
    Ok((edges, tally, diagnostics))
}

/// Uniform checkerboard swap chain.
///
/// Takes ownership of the tail and head sequences and returns the sampled
/// sequences. `swap_p` must be strictly below one for aperiodicity; this is
/// not enforced, values of one or more only log a warning. `seed = None`
/// draws a fresh seed from the operating system, reported in the result.
#[instrument(
    name = "mcmc.swap_uniform",
    err,
    skip(tails, heads),
    fields(edges = tails.len(), rng_seed = field::Empty)
)]
pub fn swap_uniform(
    tails: Vec<VertexId>,
    heads: Vec<VertexId>,
    steps: usize,
    swap_p: f64,
    seed: Option<u64>,
) -> Result<UniformSwapResult, SwapError> {
    let edges = EdgeList::new(tails, heads)?;
    let rule = UniformRule::new(swap_p)?;
    let mut rng = RngHandle::seeded(seed)?;
    Span::current().record("rng_seed", rng.seed());

    let (edges, tally) = sample_uniform(edges, steps, &rule, &mut rng)?;
    debug!(
        accepted = tally.accepted,
        rejected = tally.rejected,
        infeasible = tally.not_checkerboard + tally.same_edge,
        "uniform chain completed"
    );
    let (from, to) = edges.into_parts();
    Ok(UniformSwapResult {
        from,
        to,
        seed: rng.seed(),
        tally,
    })
}

/// Weighted checkerboard swap chain with structural zeros.
///
/// Swaps are vetoed when a replacement edge is listed in
/// `zero_tails`/`zero_heads` and otherwise accepted with probability
/// `w(a,d) w(c,b) / (w(a,b) w(c,d))`. The weight matrix must cover every
/// edge endpoint; this and all other input checks run before the first step.
#[instrument(
    name = "mcmc.swap_weighted",
    err,
    skip(tails, heads, weights, zero_tails, zero_heads),
    fields(
        edges = tails.len(),
        zeros = zero_tails.len(),
        rng_seed = field::Empty
    )
)]
pub fn swap_weighted(
    tails: Vec<VertexId>,
    heads: Vec<VertexId>,
    steps: usize,
    weights: &WeightMatrix,
    zero_tails: &[VertexId],
    zero_heads: &[VertexId],
    seed: Option<u64>,
) -> Result<WeightedSwapResult, SwapError> {
    let edges = EdgeList::new(tails, heads)?;
    let forbidden = ForbiddenPairs::from_parallel(zero_tails, zero_heads)?;
    let rule = WeightedRule::new(weights, &forbidden);
    let mut rng = RngHandle::seeded(seed)?;
    Span::current().record("rng_seed", rng.seed());

    let (edges, tally, diagnostics) = sample_weighted(edges, steps, &rule, &mut rng)?;
    debug!(
        accepted = tally.accepted,
        rejected = tally.rejected,
        vetoed = tally.structural_zero,
        "weighted chain completed"
    );
    let (from, to) = edges.into_parts();
    Ok(WeightedSwapResult {
        from,
        to,
        seed: rng.seed(),
        tally,
        diagnostics,
    })
}
