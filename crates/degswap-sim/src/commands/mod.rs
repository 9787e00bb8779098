pub mod hash;
pub mod uniform;
pub mod weighted;

use std::error::Error;
use std::fs;
use std::path::Path;

use degswap_core::VertexId;
use degswap_graph::{canonical_hash, edges_from_json, sequence_hash, EdgeList};
use degswap_mcmc::{ChainConfig, ChainRecord, ChainTally, RunManifest};
use serde::Serialize;
use serde_json::{json, Value};

/// Loads the chain configuration, falling back to defaults, and applies a
/// command-line seed override.
pub(crate) fn load_config(
    path: Option<&Path>,
    seed: Option<u64>,
) -> Result<ChainConfig, Box<dyn Error>> {
    let mut config = match path {
        Some(path) => ChainConfig::load(path)?,
        None => ChainConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

pub(crate) fn read_edges(path: &Path) -> Result<EdgeList, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    Ok(edges_from_json(&json)?)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub(crate) fn chain_record(
    seed: u64,
    from: &[VertexId],
    to: &[VertexId],
    tally: ChainTally,
) -> Result<ChainRecord, Box<dyn Error>> {
    let sampled = EdgeList::new(from.to_vec(), to.to_vec())?;
    Ok(ChainRecord {
        seed,
        graph_hash: canonical_hash(&sampled),
        sequence_hash: sequence_hash(&sampled),
        tally,
    })
}

/// Summary printed to stdout after a sampling run.
pub fn run_summary(manifest: &RunManifest, out: &Path) -> Value {
    let chains: Vec<Value> = manifest
        .chains
        .iter()
        .map(|chain| {
            json!({
                "seed": chain.seed,
                "graph_hash": chain.graph_hash,
                "sequence_hash": chain.sequence_hash,
                "accepted": chain.tally.accepted,
                "acceptance_rate": chain.tally.acceptance_rate(),
            })
        })
        .collect();
    json!({
        "variant": manifest.variant,
        "steps": manifest.config.steps,
        "master_seed": manifest.master_seed,
        "input_hash": manifest.input_hash,
        "out": out.display().to_string(),
        "chains": chains,
    })
}
