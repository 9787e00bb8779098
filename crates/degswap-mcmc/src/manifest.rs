use std::fs;
use std::path::{Path, PathBuf};

use degswap_core::errors::{ErrorInfo, SwapError};
use serde::{Deserialize, Serialize};

use crate::config::ChainConfig;
use crate::diagnostics::ChainTally;

/// Which chain produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainVariant {
    /// Fixed acceptance probability.
    Uniform,
    /// Weight-ratio acceptance with structural zeros.
    Weighted,
}

/// Per-chain entry of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    /// Seed of the chain's engine.
    pub seed: u64,
    /// Canonical hash of the sampled edge set.
    pub graph_hash: String,
    /// Positional hash of the returned tails and heads. Reruns with the same
    /// seed must reproduce it.
    pub sequence_hash: String,
    /// Outcome counts.
    pub tally: ChainTally,
}

/// Structured manifest describing a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Chain variant.
    pub variant: ChainVariant,
    /// Chain parameters, with the seed as configured.
    pub config: ChainConfig,
    /// Master seed the chain seeds were derived from.
    pub master_seed: u64,
    /// Canonical hash of the input edge set.
    pub input_hash: String,
    /// One record per chain, in chain-index order.
    pub chains: Vec<ChainRecord>,
    /// Result file relative to the run directory.
    pub result_file: PathBuf,
    /// Diagnostics file relative to the run directory, weighted runs only.
    pub diagnostics_file: Option<PathBuf>,
}

fn io_failure(code: &str, path: &Path, err: impl std::fmt::Display) -> SwapError {
    SwapError::Serde(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}

impl RunManifest {
    /// Saves the manifest as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), SwapError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| io_failure("manifest-mkdir", dir, err))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| io_failure("manifest-serialize", path, err))?;
        fs::write(path, json).map_err(|err| io_failure("manifest-write", path, err))
    }

    /// Reads a manifest previously written by [`RunManifest::write`].
    pub fn load(path: &Path) -> Result<Self, SwapError> {
        let json =
            fs::read_to_string(path).map_err(|err| io_failure("manifest-read", path, err))?;
        serde_json::from_str(&json).map_err(|err| io_failure("manifest-parse", path, err))
    }
}
