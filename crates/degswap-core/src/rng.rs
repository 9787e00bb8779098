//! Seeded random engine and seed-derivation helpers.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

use crate::errors::{ErrorInfo, SwapError};

/// Sentinel used by host environments to request a fresh entropy seed.
pub const HOST_ENTROPY_SENTINEL: f64 = -1.0;

/// Largest host seed that survives the round trip through an `f64`.
const MAX_EXACT_HOST_SEED: f64 = 9_007_199_254_740_992.0;

/// Source of the two kinds of draws a swap step consumes.
///
/// The chain driver only ever talks to randomness through this trait, which
/// keeps the draw order explicit: two edge positions per step, then one unit
/// draw if and only if the step reaches the acceptance stage.
pub trait SwapDraws {
    /// Returns a position uniformly distributed in `[0, m)`. `m` is never zero.
    fn next_edge_index(&mut self, m: usize) -> usize;

    /// Returns a real uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Random engine owned by exactly one chain.
///
/// The handle is a thin wrapper around `StdRng` that remembers the seed it was
/// built from, so callers that asked for an entropy seed can persist it and
/// replay the run later. Substreams for independent chains are derived by
/// hashing `(master_seed, substream_id)` with SipHash-1-3 configured with
/// fixed zero keys; see [`derive_substream_seed`].
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
    seed: u64,
}

impl RngHandle {
    /// Creates a new RNG handle from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a handle from an optional seed, drawing one from the operating
    /// system when `None` is supplied.
    pub fn seeded(seed: Option<u64>) -> Result<Self, SwapError> {
        let seed = match seed {
            Some(seed) => seed,
            None => entropy_seed()?,
        };
        Ok(Self::from_seed(seed))
    }

    /// Seed the handle was constructed from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SwapDraws for RngHandle {
    fn next_edge_index(&mut self, m: usize) -> usize {
        self.rng.gen_range(0..m)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Draws a fresh seed from the operating system entropy source.
pub fn entropy_seed() -> Result<u64, SwapError> {
    let mut bytes = [0u8; 8];
    OsRng.try_fill_bytes(&mut bytes).map_err(|err| {
        SwapError::Rng(
            ErrorInfo::new("entropy-unavailable", err.to_string())
                .with_hint("pass an explicit seed instead"),
        )
    })?;
    Ok(u64::from_le_bytes(bytes))
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}

/// Converts a seed received from a numeric host environment.
///
/// `-1` means "draw from entropy" and maps to `None`. Any other value must be
/// a non-negative integer that an `f64` represents exactly.
pub fn seed_from_host(value: f64) -> Result<Option<u64>, SwapError> {
    if value == HOST_ENTROPY_SENTINEL {
        return Ok(None);
    }
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_EXACT_HOST_SEED {
        return Err(SwapError::Rng(
            ErrorInfo::new(
                "invalid-host-seed",
                "seed must be -1 or a non-negative integer",
            )
            .with_context("seed", value.to_string()),
        ));
    }
    Ok(Some(value as u64))
}
