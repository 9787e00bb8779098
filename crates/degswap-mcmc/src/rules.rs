use degswap_core::errors::{ErrorInfo, SwapError};
use degswap_graph::{ForbiddenPairs, SwapCorners, WeightMatrix};
use tracing::warn;

/// Decides whether a structurally valid checkerboard may be swapped, and
/// with which probability.
///
/// The chain driver is generic over this trait, so the uniform and the
/// weighted chains share one step and one loop.
pub trait AcceptanceRule {
    /// Returns `true` when a replacement edge is a structural zero.
    fn forbids(&self, corners: &SwapCorners) -> bool;

    /// Probability of accepting the swap. Values above one always accept.
    fn acceptance(&self, corners: &SwapCorners) -> Result<f64, SwapError>;
}

/// Fixed acceptance probability for every valid checkerboard.
///
/// `swap_p` must stay strictly below one for the chain to be aperiodic. This
/// is a caller contract: larger values only produce a warning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRule {
    swap_p: f64,
}

impl UniformRule {
    /// Validates `swap_p`, rejecting negative and non-finite values.
    pub fn new(swap_p: f64) -> Result<Self, SwapError> {
        if !swap_p.is_finite() || swap_p < 0.0 {
            return Err(SwapError::Input(
                ErrorInfo::new(
                    "invalid-swap-probability",
                    "swap_p must be a finite, non-negative probability",
                )
                .with_context("swap_p", swap_p.to_string()),
            ));
        }
        if swap_p >= 1.0 {
            warn!(
                swap_p,
                "swap_p >= 1 makes the chain periodic; samples may not mix"
            );
        }
        Ok(Self { swap_p })
    }

    /// Base acceptance probability.
    pub fn swap_p(&self) -> f64 {
        self.swap_p
    }
}

impl AcceptanceRule for UniformRule {
    fn forbids(&self, _corners: &SwapCorners) -> bool {
        false
    }

    fn acceptance(&self, _corners: &SwapCorners) -> Result<f64, SwapError> {
        Ok(self.swap_p)
    }
}

/// Metropolis rule targeting a distribution proportional to the product of
/// edge weights, with structural zeros vetoed outright.
#[derive(Debug, Clone, Copy)]
pub struct WeightedRule<'a> {
    weights: &'a WeightMatrix,
    forbidden: &'a ForbiddenPairs,
}

impl<'a> WeightedRule<'a> {
    /// Borrows the shared read-only inputs of a weighted chain.
    pub fn new(weights: &'a WeightMatrix, forbidden: &'a ForbiddenPairs) -> Self {
        Self { weights, forbidden }
    }

    /// Weight matrix consulted for acceptance ratios.
    pub fn weights(&self) -> &'a WeightMatrix {
        self.weights
    }

    /// Structural zeros consulted for vetoes.
    pub fn forbidden(&self) -> &'a ForbiddenPairs {
        self.forbidden
    }
}

impl AcceptanceRule for WeightedRule<'_> {
    fn forbids(&self, corners: &SwapCorners) -> bool {
        self.forbidden.contains(corners.new_i) || self.forbidden.contains(corners.new_j)
    }

    fn acceptance(&self, corners: &SwapCorners) -> Result<f64, SwapError> {
        weight_ratio(self.weights, corners)
    }
}

/// `w(a,d) * w(c,b) / (w(a,b) * w(c,d))` for the corners of a checkerboard.
///
/// A zero weight among the current edges with a non-zero proposal yields `0`.
/// Zero weights on both sides mean the current edges already carry zero
/// weight, which no valid state can, and are reported as
/// `degenerate-weights`. Zero tests run on the individual weights, so tiny or
/// huge finite weights never look degenerate.
pub fn weight_ratio(weights: &WeightMatrix, corners: &SwapCorners) -> Result<f64, SwapError> {
    let w_ab = weights.weight(corners.old_i)?;
    let w_cd = weights.weight(corners.old_j)?;
    let w_ad = weights.weight(corners.new_j)?;
    let w_cb = weights.weight(corners.new_i)?;
    let current_zero = w_ab == 0.0 || w_cd == 0.0;
    let proposed_zero = w_ad == 0.0 || w_cb == 0.0;
    if current_zero {
        if proposed_zero {
            return Err(SwapError::Weights(
                ErrorInfo::new(
                    "degenerate-weights",
                    "acceptance ratio is 0/0: current and proposed edges all weigh zero",
                )
                .with_context("old_i", corners.old_i)
                .with_context("old_j", corners.old_j)
                .with_context("new_i", corners.new_i)
                .with_context("new_j", corners.new_j),
            ));
        }
        return Ok(0.0);
    }
    if proposed_zero {
        return Ok(0.0);
    }
    let ratio = (w_ad / w_ab) * (w_cb / w_cd);
    if ratio.is_finite() && ratio > 0.0 {
        return Ok(ratio);
    }
    // One quotient over- or underflowed; the log form keeps the exponents apart.
    Ok((w_ad.ln() - w_ab.ln() + w_cb.ln() - w_cd.ln()).exp())
}
