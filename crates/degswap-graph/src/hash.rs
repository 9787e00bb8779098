use sha2::{Digest, Sha256};

use crate::edge_list::EdgeList;

/// Hash of the edge *set*: insensitive to the order edges are stored in.
///
/// Two lists realising the same graph share this hash even if their
/// positions were permuted by a chain.
pub fn canonical_hash(edges: &EdgeList) -> String {
    let mut sorted: Vec<_> = edges.iter().collect();
    sorted.sort();
    let mut hasher = Sha256::new();
    hasher.update(b"edge-set");
    hasher.update((sorted.len() as u64).to_le_bytes());
    for edge in sorted {
        hasher.update(edge.tail.to_le_bytes());
        hasher.update(edge.head.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Hash of the positional tail and head sequences exactly as returned to
/// callers. Run manifests record it per chain so reruns can be compared.
pub fn sequence_hash(edges: &EdgeList) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"edge-sequence");
    update_slice(edges.tails(), &mut hasher);
    update_slice(edges.heads(), &mut hasher);
    format!("{:x}", hasher.finalize())
}

fn update_slice(values: &[u32], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_le_bytes());
    }
}
