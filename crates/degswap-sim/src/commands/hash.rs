use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use degswap_graph::{canonical_hash, degree_sequences, DegreeSequences};
use serde::Serialize;

use super::read_edges;

#[derive(Args, Debug)]
pub struct HashArgs {
    /// JSON edge list `{"from": [..], "to": [..]}`.
    #[arg(long)]
    pub edges: PathBuf,
}

/// Identity of an edge set up to ordering, plus its degree sequences.
#[derive(Debug, Serialize)]
pub struct HashReport {
    pub hash: String,
    pub edges: usize,
    pub degrees: DegreeSequences,
}

pub fn run(args: &HashArgs) -> Result<HashReport, Box<dyn Error>> {
    let edges = read_edges(&args.edges)?;
    Ok(HashReport {
        hash: canonical_hash(&edges),
        edges: edges.len(),
        degrees: degree_sequences(&edges),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reordered_edges_share_a_hash() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        fs::write(&first, r#"{"from": [0, 2, 1], "to": [1, 3, 0]}"#).unwrap();
        fs::write(&second, r#"{"from": [1, 0, 2], "to": [0, 1, 3]}"#).unwrap();

        let a = run(&HashArgs { edges: first }).unwrap();
        let b = run(&HashArgs { edges: second }).unwrap();

        assert_eq!(a.hash, b.hash);
        assert_eq!(a.edges, 3);
        assert_eq!(a.degrees, b.degrees);
        assert_eq!(a.degrees.out_degrees.get(&0), Some(&1));
    }
}
