use degswap_core::errors::{ErrorInfo, SwapError};
use degswap_core::VertexId;
use serde::{Deserialize, Serialize};

use crate::edge_list::EdgeList;
use crate::index::ForbiddenPairs;
use crate::weights::WeightMatrix;

/// On-disk edge (or structural zero) list: parallel `from`/`to` arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairListFile {
    /// Tail of every pair.
    pub from: Vec<VertexId>,
    /// Head of every pair.
    pub to: Vec<VertexId>,
}

/// On-disk weight matrix as nested rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsFile {
    /// `rows[tail][head]`.
    pub rows: Vec<Vec<f64>>,
}

/// Parses an edge list from JSON and validates it.
pub fn edges_from_json(json: &str) -> Result<EdgeList, SwapError> {
    let file: PairListFile = parse(json, "edges")?;
    EdgeList::new(file.from, file.to)
}

/// Serializes an edge list to pretty JSON.
pub fn edges_to_json(edges: &EdgeList) -> Result<String, SwapError> {
    let file = PairListFile {
        from: edges.tails().to_vec(),
        to: edges.heads().to_vec(),
    };
    serde_json::to_string_pretty(&file)
        .map_err(|err| SwapError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Parses structural zeros from JSON.
pub fn forbidden_from_json(json: &str) -> Result<ForbiddenPairs, SwapError> {
    let file: PairListFile = parse(json, "zeros")?;
    ForbiddenPairs::from_parallel(&file.from, &file.to)
}

/// Parses a weight matrix from JSON.
pub fn weights_from_json(json: &str) -> Result<WeightMatrix, SwapError> {
    let file: WeightsFile = parse(json, "weights")?;
    WeightMatrix::from_rows(file.rows)
}

fn parse<T: for<'de> Deserialize<'de>>(json: &str, what: &str) -> Result<T, SwapError> {
    serde_json::from_str(json).map_err(|err| {
        SwapError::Serde(
            ErrorInfo::new("deserialize-json", err.to_string()).with_context("payload", what),
        )
    })
}
