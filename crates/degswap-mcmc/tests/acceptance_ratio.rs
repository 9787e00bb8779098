mod common;

use common::{square_weights, ScriptedDraws};
use degswap_core::Edge;
use degswap_graph::{EdgeList, ForbiddenPairs, WeightMatrix};
use degswap_mcmc::{attempt_swap, swap_weighted, weight_ratio, StepOutcome, WeightedRule};

fn square() -> EdgeList {
    EdgeList::new(vec![0, 2], vec![1, 3]).unwrap()
}

#[test]
fn ratio_matches_product_of_weights() {
    let weights = square_weights(2.0, 2.0, 1.0, 1.0);
    let corners = square().corners(0, 1).unwrap();
    assert_eq!(weight_ratio(&weights, &corners).unwrap(), 0.25);
}

#[test]
fn draw_below_ratio_accepts() {
    let weights = square_weights(2.0, 2.0, 1.0, 1.0);
    let zeros = ForbiddenPairs::empty();
    let rule = WeightedRule::new(&weights, &zeros);
    let mut edges = square();
    let mut draws = ScriptedDraws::new(&[], &[0.2]);

    let outcome = attempt_swap(&mut edges, &rule, 0, 1, &mut draws).unwrap();

    assert_eq!(outcome, StepOutcome::Accepted { accept_p: 0.25 });
    assert_eq!(edges.edge(0), Some(Edge::new(2, 1)));
    assert_eq!(edges.edge(1), Some(Edge::new(0, 3)));
}

#[test]
fn draw_at_or_above_ratio_rejects() {
    let weights = square_weights(2.0, 2.0, 1.0, 1.0);
    let zeros = ForbiddenPairs::empty();
    let rule = WeightedRule::new(&weights, &zeros);
    let mut edges = square();
    let mut draws = ScriptedDraws::new(&[], &[0.25]);

    let outcome = attempt_swap(&mut edges, &rule, 0, 1, &mut draws).unwrap();

    assert_eq!(outcome, StepOutcome::Rejected { accept_p: 0.25 });
    assert_eq!(edges, square());
}

#[test]
fn ratio_above_one_always_accepts() {
    let weights = square_weights(1.0, 1.0, 4.0, 2.0);
    let zeros = ForbiddenPairs::empty();
    let rule = WeightedRule::new(&weights, &zeros);
    let mut edges = square();
    let mut draws = ScriptedDraws::new(&[], &[0.999_999]);

    let outcome = attempt_swap(&mut edges, &rule, 0, 1, &mut draws).unwrap();

    assert_eq!(outcome, StepOutcome::Accepted { accept_p: 8.0 });
    assert_eq!(draws.units_drawn, 1);
}

#[test]
fn zero_weight_target_is_never_accepted() {
    let weights = square_weights(1.0, 1.0, 0.0, 3.0);
    let zeros = ForbiddenPairs::empty();
    let rule = WeightedRule::new(&weights, &zeros);
    let mut edges = square();
    let mut draws = ScriptedDraws::new(&[], &[0.0]);

    let outcome = attempt_swap(&mut edges, &rule, 0, 1, &mut draws).unwrap();

    assert_eq!(outcome, StepOutcome::Rejected { accept_p: 0.0 });
}

#[test]
fn degenerate_ratio_aborts_the_step() {
    let weights = square_weights(0.0, 1.0, 0.0, 1.0);
    let zeros = ForbiddenPairs::empty();
    let rule = WeightedRule::new(&weights, &zeros);
    let mut edges = square();
    let mut draws = ScriptedDraws::new(&[], &[]);

    let err = attempt_swap(&mut edges, &rule, 0, 1, &mut draws).unwrap_err();

    assert_eq!(err.code(), "degenerate-weights");
    assert_eq!(edges, square());
}

#[test]
fn extreme_but_equal_weights_accept_with_probability_one() {
    for value in [1e-200, 1e200] {
        let weights = WeightMatrix::new(4, 4, vec![value; 16]).unwrap();
        let corners = square().corners(0, 1).unwrap();
        assert_eq!(weight_ratio(&weights, &corners).unwrap(), 1.0);

        let result = swap_weighted(vec![0, 2], vec![1, 3], 64, &weights, &[], &[], Some(3))
            .unwrap();
        let reached: Vec<f64> = result.diagnostics.swap_p.iter().flatten().copied().collect();
        assert!(!reached.is_empty());
        assert!(reached.iter().all(|p| *p == 1.0), "{reached:?}");
        assert_eq!(result.tally.rejected, 0);
    }
}
