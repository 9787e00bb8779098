use std::collections::HashSet;

use degswap_core::errors::{ErrorInfo, SwapError};
use degswap_core::{Edge, VertexId};

/// Hash-backed membership index over the edges currently present.
///
/// Only [`crate::EdgeList`] mutates an index during a chain, so the set never
/// drifts away from the list it mirrors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeIndex {
    edges: HashSet<Edge>,
}

impl EdgeIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with room for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` when the edge is present.
    pub fn contains(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }

    /// Inserts an edge. Returns `false` if it was already present.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// Removes an edge. Returns `false` if it was absent.
    pub fn remove(&mut self, edge: Edge) -> bool {
        self.edges.remove(&edge)
    }

    /// Number of distinct edges in the index.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge is indexed.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the indexed edges in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }
}

impl FromIterator<Edge> for EdgeIndex {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

/// Immutable set of structural zeros: pairs that may never become edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForbiddenPairs {
    pairs: HashSet<Edge>,
}

impl ForbiddenPairs {
    /// Returns an empty set, which vetoes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set from parallel tail and head sequences.
    ///
    /// Repeated pairs collapse into one entry. The sequences only have to
    /// match each other in length; they are unrelated to the edge count.
    pub fn from_parallel(tails: &[VertexId], heads: &[VertexId]) -> Result<Self, SwapError> {
        if tails.len() != heads.len() {
            return Err(SwapError::Input(
                ErrorInfo::new(
                    "length-mismatch",
                    "forbidden tails and heads must have equal length",
                )
                .with_context("tails", tails.len().to_string())
                .with_context("heads", heads.len().to_string()),
            ));
        }
        Ok(tails
            .iter()
            .zip(heads)
            .map(|(&tail, &head)| Edge::new(tail, head))
            .collect())
    }

    /// Returns `true` when the pair is a structural zero.
    pub fn contains(&self, edge: Edge) -> bool {
        self.pairs.contains(&edge)
    }

    /// Number of distinct forbidden pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if nothing is forbidden.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the forbidden pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.pairs.iter().copied()
    }
}

impl FromIterator<Edge> for ForbiddenPairs {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
