use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw vertex identifier. Tails index weight-matrix rows, heads index columns.
pub type VertexId = u32;

/// Directed edge `(tail, head)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Originating vertex.
    pub tail: VertexId,
    /// Terminating vertex.
    pub head: VertexId,
}

impl Edge {
    /// Creates an edge from its endpoints.
    pub const fn new(tail: VertexId, head: VertexId) -> Self {
        Self { tail, head }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((tail, head): (VertexId, VertexId)) -> Self {
        Self { tail, head }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}->{})", self.tail, self.head)
    }
}
