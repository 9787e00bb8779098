use std::collections::BTreeMap;

use degswap_core::VertexId;
use serde::{Deserialize, Serialize};

use crate::edge_list::EdgeList;

/// Out- and in-degree tallies of an edge list (the row and column sums of
/// its adjacency matrix).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeSequences {
    /// Number of edges leaving each tail vertex.
    pub out_degrees: BTreeMap<VertexId, usize>,
    /// Number of edges entering each head vertex.
    pub in_degrees: BTreeMap<VertexId, usize>,
}

/// Tallies the degree sequences of `edges`.
pub fn degree_sequences(edges: &EdgeList) -> DegreeSequences {
    let mut degrees = DegreeSequences::default();
    for edge in edges.iter() {
        *degrees.out_degrees.entry(edge.tail).or_insert(0) += 1;
        *degrees.in_degrees.entry(edge.head).or_insert(0) += 1;
    }
    degrees
}
