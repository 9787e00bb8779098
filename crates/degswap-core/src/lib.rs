#![deny(missing_docs)]

//! Core types, structured errors and seeded randomness shared by the degswap
//! crates.
//!
//! Every fallible operation in the workspace returns [`SwapError`]. Each
//! chain owns one [`RngHandle`] for its whole lifetime.

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, SwapError};
pub use rng::{derive_substream_seed, entropy_seed, seed_from_host, RngHandle, SwapDraws};
pub use types::{Edge, VertexId};
