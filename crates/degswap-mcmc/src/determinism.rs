use degswap_core::derive_substream_seed;

/// Derives the seed of chain `chain_index` within an ensemble.
pub fn chain_seed(master_seed: u64, chain_index: usize) -> u64 {
    derive_substream_seed(master_seed, chain_index as u64)
}
