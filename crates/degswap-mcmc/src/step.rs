use degswap_core::errors::SwapError;
use degswap_core::SwapDraws;
use degswap_graph::EdgeList;
use serde::{Deserialize, Serialize};

use crate::rules::AcceptanceRule;

/// Why a single proposal did or did not change the graph.
///
/// The variants are mutually exclusive and listed in the order the tests run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum StepOutcome {
    /// Both draws picked the same position.
    SameEdge,
    /// A replacement edge already exists.
    NotCheckerboard,
    /// A replacement edge is a structural zero.
    StructuralZero,
    /// The swap was applied.
    Accepted {
        /// Acceptance probability compared against the uniform draw.
        accept_p: f64,
    },
    /// The swap was eligible but lost the draw.
    Rejected {
        /// Acceptance probability compared against the uniform draw.
        accept_p: f64,
    },
}

impl StepOutcome {
    /// Both positions were equal.
    pub fn same_edge(&self) -> bool {
        matches!(self, StepOutcome::SameEdge)
    }

    /// The checkerboard test was reached and passed.
    pub fn is_checkerboard(&self) -> bool {
        !matches!(self, StepOutcome::SameEdge | StepOutcome::NotCheckerboard)
    }

    /// The structural-zero test was reached and passed.
    pub fn is_not_struct_zeros(&self) -> bool {
        self.can_swap()
    }

    /// The step reached the acceptance draw.
    pub fn can_swap(&self) -> bool {
        matches!(
            self,
            StepOutcome::Accepted { .. } | StepOutcome::Rejected { .. }
        )
    }

    /// The swap was applied.
    pub fn did_swap(&self) -> bool {
        matches!(self, StepOutcome::Accepted { .. })
    }

    /// Acceptance probability, present only when [`Self::can_swap`] holds.
    pub fn accept_p(&self) -> Option<f64> {
        match self {
            StepOutcome::Accepted { accept_p } | StepOutcome::Rejected { accept_p } => {
                Some(*accept_p)
            }
            _ => None,
        }
    }
}

/// Attempts to swap the tails at positions `i` and `j`.
///
/// A uniform is drawn from `draws` only once the checkerboard and
/// structural-zero tests have passed. On acceptance the list and its index
/// change together through [`EdgeList::exchange_tails`].
pub fn attempt_swap<R, D>(
    edges: &mut EdgeList,
    rule: &R,
    i: usize,
    j: usize,
    draws: &mut D,
) -> Result<StepOutcome, SwapError>
where
    R: AcceptanceRule + ?Sized,
    D: SwapDraws + ?Sized,
{
    if i == j {
        return Ok(StepOutcome::SameEdge);
    }
    let corners = edges.corners(i, j)?;
    if !edges.is_checkerboard(&corners) {
        return Ok(StepOutcome::NotCheckerboard);
    }
    if rule.forbids(&corners) {
        return Ok(StepOutcome::StructuralZero);
    }
    let accept_p = rule.acceptance(&corners)?;
    let u = draws.next_unit();
    if u < accept_p {
        edges.exchange_tails(i, j)?;
        Ok(StepOutcome::Accepted { accept_p })
    } else {
        Ok(StepOutcome::Rejected { accept_p })
    }
}

/// Draws two positions and attempts a swap between them.
///
/// `edges` must be non-empty; the chain driver checks this up front.
pub fn propose_and_attempt<R, D>(
    edges: &mut EdgeList,
    rule: &R,
    draws: &mut D,
) -> Result<StepOutcome, SwapError>
where
    R: AcceptanceRule + ?Sized,
    D: SwapDraws + ?Sized,
{
    let m = edges.len();
    let i = draws.next_edge_index(m);
    let j = draws.next_edge_index(m);
    attempt_swap(edges, rule, i, j, draws)
}
