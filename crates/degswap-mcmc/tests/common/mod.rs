#![allow(dead_code)]

use std::collections::VecDeque;

use degswap_core::SwapDraws;
use degswap_graph::WeightMatrix;

/// Replays fixed draws so a test can force exact positions and uniforms.
#[derive(Debug, Default)]
pub struct ScriptedDraws {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
    pub units_drawn: usize,
}

impl ScriptedDraws {
    pub fn new(indices: &[usize], units: &[f64]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            units: units.iter().copied().collect(),
            units_drawn: 0,
        }
    }
}

impl SwapDraws for ScriptedDraws {
    fn next_edge_index(&mut self, m: usize) -> usize {
        let index = self.indices.pop_front().expect("script ran out of indices");
        assert!(index < m, "scripted index {index} outside 0..{m}");
        index
    }

    fn next_unit(&mut self) -> f64 {
        self.units_drawn += 1;
        self.units.pop_front().expect("script ran out of uniforms")
    }
}

/// 4x4 matrix of ones with the four cells of the `{(0,1),(2,3)}` square set.
pub fn square_weights(w01: f64, w23: f64, w03: f64, w21: f64) -> WeightMatrix {
    let mut rows = vec![vec![1.0; 4]; 4];
    rows[0][1] = w01;
    rows[2][3] = w23;
    rows[0][3] = w03;
    rows[2][1] = w21;
    WeightMatrix::from_rows(rows).expect("valid weights")
}
