#![deny(missing_docs)]

//! Checkerboard swap chains over directed graphs with fixed degree
//! sequences.
//!
//! A chain repeatedly picks two edge positions `i`, `j` holding `(a,b)` and
//! `(c,d)`, and replaces them with `(c,b)` and `(a,d)` by exchanging their
//! tails, provided neither replacement already exists. The uniform chain
//! accepts such a move with a fixed probability `swap_p < 1`; the weighted
//! chain vetoes structural zeros and accepts with the Metropolis ratio
//! `w(a,d) w(c,b) / (w(a,b) w(c,d))`.
//!
//! ```no_run
//! use degswap_mcmc::swap_uniform;
//!
//! let result = swap_uniform(vec![0, 2], vec![1, 3], 100, 0.5, Some(7)).unwrap();
//! assert_eq!(result.to, vec![1, 3]);
//! ```

/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation for ensembles.
pub mod determinism;
/// Per-step diagnostics and outcome tallies.
pub mod diagnostics;
/// Independent chains run in parallel.
pub mod ensemble;
/// Chain driver and public entry points.
pub mod kernel;
/// Run manifest serialization helpers.
pub mod manifest;
/// CSV export of diagnostics.
pub mod metrics;
/// Acceptance rules shared by the chain variants.
pub mod rules;
/// The single swap step.
pub mod step;

pub use config::{ChainConfig, OutputConfig};
pub use diagnostics::{ChainTally, Diagnostics};
pub use ensemble::{run_uniform_ensemble, run_weighted_ensemble, Ensemble};
pub use kernel::{
    run_chain, sample_uniform, sample_weighted, swap_uniform, swap_weighted, UniformSwapResult,
    WeightedSwapResult,
};
pub use manifest::{ChainRecord, ChainVariant, RunManifest};
pub use rules::{weight_ratio, AcceptanceRule, UniformRule, WeightedRule};
pub use step::{attempt_swap, propose_and_attempt, StepOutcome};
