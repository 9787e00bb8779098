#![deny(missing_docs)]

//! Edge storage for the checkerboard swap chain.
//!
//! [`EdgeList`] owns the positional tail/head sequences together with the
//! [`EdgeIndex`] that answers membership queries in constant time. The
//! read-only inputs of the weighted chain, [`ForbiddenPairs`] and
//! [`WeightMatrix`], live here as well, along with hashing and JSON helpers.

mod degrees;
mod edge_list;
mod hash;
mod index;
mod serialization;
mod weights;

pub use degrees::{degree_sequences, DegreeSequences};
pub use edge_list::{EdgeList, SwapCorners};
pub use hash::{canonical_hash, sequence_hash};
pub use index::{EdgeIndex, ForbiddenPairs};
pub use serialization::{
    edges_from_json, edges_to_json, forbidden_from_json, weights_from_json, PairListFile,
    WeightsFile,
};
pub use weights::WeightMatrix;
