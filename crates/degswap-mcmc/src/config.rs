use std::fs;
use std::path::{Path, PathBuf};

use degswap_core::errors::{ErrorInfo, SwapError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Number of swap attempts per chain.
    pub steps: usize,
    /// Base acceptance probability of the uniform chain. Ignored by the
    /// weighted chain. Keep it strictly below one.
    #[serde(default = "default_swap_p")]
    pub swap_p: f64,
    /// Master seed. `None` draws one from the operating system and records it
    /// in the manifest.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of independent chains started from the input graph.
    #[serde(default = "default_chains")]
    pub chains: usize,
    /// Output file layout.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_swap_p() -> f64 {
    0.5
}

fn default_chains() -> usize {
    1
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            steps: 1_000,
            swap_p: default_swap_p(),
            seed: None,
            chains: default_chains(),
            output: OutputConfig::default(),
        }
    }
}

impl ChainConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SwapError> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|err| SwapError::Serde(ErrorInfo::new("config-parse", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, SwapError> {
        let yaml = fs::read_to_string(path).map_err(|err| {
            SwapError::Serde(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&yaml).map_err(|err| match err {
            SwapError::Serde(info) => {
                SwapError::Serde(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<(), SwapError> {
        if self.chains == 0 {
            return Err(SwapError::Input(
                ErrorInfo::new("no-chains", "at least one chain is required")
                    .with_hint("set `chains: 1` or omit the key"),
            ));
        }
        Ok(())
    }
}

/// Output directory layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Sampled edge lists and tallies, relative to the run directory.
    #[serde(default = "default_result_filename")]
    pub result_file: PathBuf,
    /// Per-step diagnostics of weighted chains.
    #[serde(default = "default_diagnostics_filename")]
    pub diagnostics_file: PathBuf,
    /// Run manifest.
    #[serde(default = "default_manifest_filename")]
    pub manifest_file: PathBuf,
}

fn default_result_filename() -> PathBuf {
    PathBuf::from("result.json")
}

fn default_diagnostics_filename() -> PathBuf {
    PathBuf::from("diagnostics.csv")
}

fn default_manifest_filename() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            result_file: default_result_filename(),
            diagnostics_file: default_diagnostics_filename(),
            manifest_file: default_manifest_filename(),
        }
    }
}
