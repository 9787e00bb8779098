use std::collections::HashMap;

use degswap_core::errors::{ErrorInfo, SwapError};
use degswap_core::{Edge, VertexId};

use crate::index::EdgeIndex;

/// The four cells of the 2x2 submatrix induced by two edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCorners {
    /// Edge currently stored at position `i`, `(a, b)`.
    pub old_i: Edge,
    /// Edge currently stored at position `j`, `(c, d)`.
    pub old_j: Edge,
    /// Edge position `i` would hold after the exchange, `(c, b)`.
    pub new_i: Edge,
    /// Edge position `j` would hold after the exchange, `(a, d)`.
    pub new_j: Edge,
}

/// Ordered edge list kept in lock-step with its membership index.
///
/// Heads never move. The only mutation is [`EdgeList::exchange_tails`], which
/// updates the list and the index together, so `index == set(list)` holds
/// between any two calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    tails: Vec<VertexId>,
    heads: Vec<VertexId>,
    index: EdgeIndex,
}

impl EdgeList {
    /// Takes ownership of parallel tail and head sequences.
    ///
    /// Fails when the lengths differ or when the same pair occurs twice.
    pub fn new(tails: Vec<VertexId>, heads: Vec<VertexId>) -> Result<Self, SwapError> {
        if tails.len() != heads.len() {
            return Err(SwapError::Input(
                ErrorInfo::new("length-mismatch", "edge tails and heads must have equal length")
                    .with_context("tails", tails.len().to_string())
                    .with_context("heads", heads.len().to_string()),
            ));
        }
        let mut index = EdgeIndex::with_capacity(tails.len());
        let mut first_seen: HashMap<Edge, usize> = HashMap::with_capacity(tails.len());
        for (position, (&tail, &head)) in tails.iter().zip(&heads).enumerate() {
            let edge = Edge::new(tail, head);
            if let Some(&earlier) = first_seen.get(&edge) {
                return Err(SwapError::Input(
                    ErrorInfo::new("duplicate-edge", "edge list contains a repeated pair")
                        .with_context("edge", edge.to_string())
                        .with_context("first", earlier.to_string())
                        .with_context("second", position.to_string())
                        .with_hint("the sampler only handles simple directed graphs"),
                ));
            }
            first_seen.insert(edge, position);
            index.insert(edge);
        }
        Ok(Self {
            tails,
            heads,
            index,
        })
    }

    /// Builds a list from edges in position order.
    pub fn from_edges<I>(edges: I) -> Result<Self, SwapError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let (tails, heads) = edges.into_iter().map(|e| (e.tail, e.head)).unzip();
        Self::new(tails, heads)
    }

    /// Number of edges `m`.
    pub fn len(&self) -> usize {
        self.tails.len()
    }

    /// Returns `true` for an edge-free graph.
    pub fn is_empty(&self) -> bool {
        self.tails.is_empty()
    }

    /// Edge stored at `position`.
    pub fn edge(&self, position: usize) -> Option<Edge> {
        let tail = *self.tails.get(position)?;
        let head = *self.heads.get(position)?;
        Some(Edge::new(tail, head))
    }

    /// Membership query answered by the index.
    pub fn contains(&self, edge: Edge) -> bool {
        self.index.contains(edge)
    }

    /// Read-only view of the membership index.
    pub fn index(&self) -> &EdgeIndex {
        &self.index
    }

    /// Tail sequence in position order.
    pub fn tails(&self) -> &[VertexId] {
        &self.tails
    }

    /// Head sequence in position order.
    pub fn heads(&self) -> &[VertexId] {
        &self.heads
    }

    /// Iterates edges in position order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.tails
            .iter()
            .zip(&self.heads)
            .map(|(&tail, &head)| Edge::new(tail, head))
    }

    /// Releases the tail and head sequences to the caller.
    pub fn into_parts(self) -> (Vec<VertexId>, Vec<VertexId>) {
        (self.tails, self.heads)
    }

    /// Reads the checkerboard corners for positions `i` and `j`.
    pub fn corners(&self, i: usize, j: usize) -> Result<SwapCorners, SwapError> {
        let old_i = self.edge(i).ok_or_else(|| out_of_range(i, self.len()))?;
        let old_j = self.edge(j).ok_or_else(|| out_of_range(j, self.len()))?;
        Ok(SwapCorners {
            old_i,
            old_j,
            new_i: Edge::new(old_j.tail, old_i.head),
            new_j: Edge::new(old_i.tail, old_j.head),
        })
    }

    /// Returns `true` when neither replacement edge exists yet, i.e. the
    /// off-diagonal cells of the induced 2x2 submatrix are empty.
    pub fn is_checkerboard(&self, corners: &SwapCorners) -> bool {
        !self.index.contains(corners.new_i) && !self.index.contains(corners.new_j)
    }

    /// Exchanges the tails stored at `i` and `j`, updating the index in the
    /// same call.
    ///
    /// The exchange is refused, leaving the list untouched, when `i == j` or
    /// when it would create a repeated pair.
    pub fn exchange_tails(&mut self, i: usize, j: usize) -> Result<SwapCorners, SwapError> {
        if i == j {
            return Err(SwapError::Input(
                ErrorInfo::new("invalid-exchange", "an edge cannot exchange with itself")
                    .with_context("position", i.to_string()),
            ));
        }
        let corners = self.corners(i, j)?;
        if !self.is_checkerboard(&corners) {
            return Err(SwapError::Input(
                ErrorInfo::new("invalid-exchange", "exchange would create a repeated pair")
                    .with_context("i", i.to_string())
                    .with_context("j", j.to_string()),
            ));
        }
        self.index.insert(corners.new_i);
        self.index.insert(corners.new_j);
        self.index.remove(corners.old_i);
        self.index.remove(corners.old_j);
        self.tails.swap(i, j);
        Ok(corners)
    }
}

fn out_of_range(position: usize, len: usize) -> SwapError {
    SwapError::Input(
        ErrorInfo::new("position-out-of-range", "edge position outside the list")
            .with_context("position", position.to_string())
            .with_context("len", len.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> EdgeList {
        EdgeList::new(vec![0, 2], vec![1, 3]).unwrap()
    }

    #[test]
    fn corners_follow_tail_exchange_convention() {
        let list = square();
        let corners = list.corners(0, 1).unwrap();
        assert_eq!(corners.new_i, Edge::new(2, 1));
        assert_eq!(corners.new_j, Edge::new(0, 3));
        assert!(list.is_checkerboard(&corners));
    }

    #[test]
    fn exchange_keeps_index_in_step() {
        let mut list = square();
        list.exchange_tails(0, 1).unwrap();
        assert_eq!(list.tails(), &[2, 0]);
        assert_eq!(list.heads(), &[1, 3]);
        assert!(list.contains(Edge::new(2, 1)));
        assert!(list.contains(Edge::new(0, 3)));
        assert!(!list.contains(Edge::new(0, 1)));
        assert_eq!(list.index().len(), list.len());
    }

    #[test]
    fn refused_exchange_leaves_state_untouched() {
        let mut list = EdgeList::new(vec![0, 2, 2], vec![1, 3, 1]).unwrap();
        let before = list.clone();
        let err = list.exchange_tails(0, 1).unwrap_err();
        assert_eq!(err.code(), "invalid-exchange");
        assert_eq!(list, before);
        assert_eq!(list.exchange_tails(1, 1).unwrap_err().code(), "invalid-exchange");
        assert_eq!(list, before);
    }

    #[test]
    fn duplicates_are_rejected_with_positions() {
        let err = EdgeList::new(vec![0, 1, 0], vec![1, 1, 1]).unwrap_err();
        assert_eq!(err.code(), "duplicate-edge");
        assert_eq!(err.info().context.get("first"), Some(&"0".to_string()));
        assert_eq!(err.info().context.get("second"), Some(&"2".to_string()));
    }

    #[test]
    fn corners_report_out_of_range_positions() {
        let err = square().corners(0, 5).unwrap_err();
        assert_eq!(err.code(), "position-out-of-range");
    }
}
