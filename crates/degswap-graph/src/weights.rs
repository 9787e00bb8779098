use degswap_core::errors::{ErrorInfo, SwapError};
use degswap_core::Edge;

use crate::edge_list::EdgeList;

/// Dense, read-only edge-weight matrix indexed as `w[tail][head]`.
///
/// Values are stored row-major. Every entry is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl WeightMatrix {
    /// Builds a matrix from row-major values.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, SwapError> {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            SwapError::Weights(
                ErrorInfo::new("weights-too-large", "matrix dimensions overflow")
                    .with_context("rows", rows.to_string())
                    .with_context("cols", cols.to_string()),
            )
        })?;
        if values.len() != expected {
            return Err(SwapError::Weights(
                ErrorInfo::new("weights-shape", "value count does not match rows x cols")
                    .with_context("rows", rows.to_string())
                    .with_context("cols", cols.to_string())
                    .with_context("values", values.len().to_string()),
            ));
        }
        if let Some(offset) = values.iter().position(|w| !w.is_finite() || *w < 0.0) {
            let row = offset / cols;
            let col = offset % cols;
            return Err(SwapError::Weights(
                ErrorInfo::new("invalid-weight", "weights must be finite and non-negative")
                    .with_context("row", row.to_string())
                    .with_context("col", col.to_string())
                    .with_context("value", values[offset].to_string()),
            ));
        }
        Ok(Self { rows, cols, values })
    }

    /// Builds a matrix from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SwapError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(SwapError::Weights(
                ErrorInfo::new("ragged-weights", "every weight row must have the same length")
                    .with_context("row", bad.to_string())
                    .with_context("expected", cols.to_string())
                    .with_context("found", rows[bad].len().to_string()),
            ));
        }
        let row_count = rows.len();
        Self::new(row_count, cols, rows.into_iter().flatten().collect())
    }

    /// Number of rows (tail vertices covered).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (head vertices covered).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Weight of the cell addressed by `edge`, if it lies inside the matrix.
    pub fn get(&self, edge: Edge) -> Option<f64> {
        let row = edge.tail as usize;
        let col = edge.head as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    /// Weight of `edge`, failing if the cell is outside the matrix.
    pub fn weight(&self, edge: Edge) -> Result<f64, SwapError> {
        self.get(edge).ok_or_else(|| {
            SwapError::Weights(
                ErrorInfo::new("weights-out-of-range", "edge lies outside the weight matrix")
                    .with_context("edge", edge.to_string())
                    .with_context("rows", self.rows.to_string())
                    .with_context("cols", self.cols.to_string()),
            )
        })
    }

    /// Checks that every corner a swap could touch lies inside the matrix.
    ///
    /// Swaps only recombine existing tails with existing heads, so covering
    /// every tail as a row and every head as a column is sufficient.
    pub fn ensure_covers(&self, edges: &EdgeList) -> Result<(), SwapError> {
        for (position, edge) in edges.iter().enumerate() {
            if edge.tail as usize >= self.rows || edge.head as usize >= self.cols {
                return Err(SwapError::Weights(
                    ErrorInfo::new(
                        "weights-out-of-range",
                        "weight matrix does not cover every edge endpoint",
                    )
                    .with_context("position", position.to_string())
                    .with_context("edge", edge.to_string())
                    .with_context("rows", self.rows.to_string())
                    .with_context("cols", self.cols.to_string()),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_row_major() {
        let w = WeightMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(w.get(Edge::new(1, 0)), Some(4.0));
        assert_eq!(w.get(Edge::new(0, 2)), Some(3.0));
        assert_eq!(w.get(Edge::new(2, 0)), None);
        assert_eq!(w.get(Edge::new(0, 3)), None);
    }

    #[test]
    fn rejects_negative_and_non_finite_weights() {
        let err = WeightMatrix::new(1, 2, vec![1.0, -0.5]).unwrap_err();
        assert_eq!(err.code(), "invalid-weight");
        assert_eq!(err.info().context.get("col"), Some(&"1".to_string()));
        let err = WeightMatrix::new(1, 1, vec![f64::NAN]).unwrap_err();
        assert_eq!(err.code(), "invalid-weight");
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = WeightMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err.code(), "ragged-weights");
    }

    #[test]
    fn coverage_checks_every_endpoint() {
        let w = WeightMatrix::new(2, 2, vec![1.0; 4]).unwrap();
        let ok = EdgeList::new(vec![0, 1], vec![1, 0]).unwrap();
        assert!(w.ensure_covers(&ok).is_ok());
        let bad = EdgeList::new(vec![0, 1], vec![1, 2]).unwrap();
        let err = w.ensure_covers(&bad).unwrap_err();
        assert_eq!(err.code(), "weights-out-of-range");
        assert_eq!(err.info().context.get("position"), Some(&"1".to_string()));
    }
}
