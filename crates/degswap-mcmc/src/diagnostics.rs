use serde::{Deserialize, Serialize};

use crate::step::StepOutcome;

/// Columnar per-step record of a weighted chain, one entry per attempted
/// step, in the layout host environments expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Both draws hit the same position.
    pub same_edge: Vec<bool>,
    /// Checkerboard test reached and passed.
    pub is_checkerboard: Vec<bool>,
    /// Structural-zero test reached and passed.
    pub is_not_struct_zeros: Vec<bool>,
    /// Acceptance draw reached.
    pub can_swap: Vec<bool>,
    /// Swap applied.
    pub did_swap: Vec<bool>,
    /// Acceptance probability, `None` when the draw was not reached.
    pub swap_p: Vec<Option<f64>>,
}

impl Diagnostics {
    /// Creates empty columns sized for `steps` entries.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            same_edge: Vec::with_capacity(steps),
            is_checkerboard: Vec::with_capacity(steps),
            is_not_struct_zeros: Vec::with_capacity(steps),
            can_swap: Vec::with_capacity(steps),
            did_swap: Vec::with_capacity(steps),
            swap_p: Vec::with_capacity(steps),
        }
    }

    /// Appends one step.
    pub fn push(&mut self, outcome: &StepOutcome) {
        self.same_edge.push(outcome.same_edge());
        self.is_checkerboard.push(outcome.is_checkerboard());
        self.is_not_struct_zeros.push(outcome.is_not_struct_zeros());
        self.can_swap.push(outcome.can_swap());
        self.did_swap.push(outcome.did_swap());
        self.swap_p.push(outcome.accept_p());
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.same_edge.len()
    }

    /// Returns `true` when no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.same_edge.is_empty()
    }

    /// Reconstructs the outcome of step `k`.
    pub fn outcome(&self, k: usize) -> Option<StepOutcome> {
        if *self.same_edge.get(k)? {
            return Some(StepOutcome::SameEdge);
        }
        if !*self.is_checkerboard.get(k)? {
            return Some(StepOutcome::NotCheckerboard);
        }
        if !*self.is_not_struct_zeros.get(k)? {
            return Some(StepOutcome::StructuralZero);
        }
        let accept_p = (*self.swap_p.get(k)?)?;
        if *self.did_swap.get(k)? {
            Some(StepOutcome::Accepted { accept_p })
        } else {
            Some(StepOutcome::Rejected { accept_p })
        }
    }
}

impl<'a> FromIterator<&'a StepOutcome> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = &'a StepOutcome>>(iter: T) -> Self {
        let mut diagnostics = Diagnostics::default();
        for outcome in iter {
            diagnostics.push(outcome);
        }
        diagnostics
    }
}

/// Counts of each step outcome over a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTally {
    /// Steps attempted.
    pub steps: usize,
    /// Self-pair no-ops.
    pub same_edge: usize,
    /// Failed checkerboard tests.
    pub not_checkerboard: usize,
    /// Structural-zero vetoes.
    pub structural_zero: usize,
    /// Accepted swaps.
    pub accepted: usize,
    /// Eligible swaps that lost the draw.
    pub rejected: usize,
}

impl ChainTally {
    /// Adds one step.
    pub fn record(&mut self, outcome: &StepOutcome) {
        self.steps += 1;
        match outcome {
            StepOutcome::SameEdge => self.same_edge += 1,
            StepOutcome::NotCheckerboard => self.not_checkerboard += 1,
            StepOutcome::StructuralZero => self.structural_zero += 1,
            StepOutcome::Accepted { .. } => self.accepted += 1,
            StepOutcome::Rejected { .. } => self.rejected += 1,
        }
    }

    /// Fraction of eligible steps that were accepted, `0` when none were.
    pub fn acceptance_rate(&self) -> f64 {
        let eligible = self.accepted + self.rejected;
        if eligible == 0 {
            0.0
        } else {
            self.accepted as f64 / eligible as f64
        }
    }
}
