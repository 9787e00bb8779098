use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use degswap_graph::{canonical_hash, forbidden_from_json, weights_from_json, ForbiddenPairs};
use degswap_mcmc::metrics::write_diagnostics_csv;
use degswap_mcmc::{run_weighted_ensemble, ChainVariant, Diagnostics, RunManifest, WeightedRule};
use tracing::info;

use super::{chain_record, load_config, read_edges, write_json};

#[derive(Args, Debug)]
pub struct WeightedArgs {
    /// JSON edge list `{"from": [..], "to": [..]}`.
    #[arg(long)]
    pub edges: PathBuf,
    /// JSON weight matrix `{"rows": [[..], ..]}` indexed `rows[tail][head]`.
    #[arg(long)]
    pub weights: PathBuf,
    /// JSON structural zeros `{"from": [..], "to": [..]}`.
    #[arg(long)]
    pub zeros: Option<PathBuf>,
    /// YAML chain configuration; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed overriding the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output directory for run artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

fn read_zeros(path: Option<&Path>) -> Result<ForbiddenPairs, Box<dyn Error>> {
    match path {
        Some(path) => Ok(forbidden_from_json(&fs::read_to_string(path)?)?),
        None => Ok(ForbiddenPairs::empty()),
    }
}

pub fn run(args: &WeightedArgs) -> Result<RunManifest, Box<dyn Error>> {
    let config = load_config(args.config.as_deref(), args.seed)?;
    let edges = read_edges(&args.edges)?;
    let weights = weights_from_json(&fs::read_to_string(&args.weights)?)?;
    let zeros = read_zeros(args.zeros.as_deref())?;
    let rule = WeightedRule::new(&weights, &zeros);
    fs::create_dir_all(&args.out)?;

    let ensemble = run_weighted_ensemble(&edges, config.steps, &rule, config.chains, config.seed)?;
    write_json(&args.out.join(&config.output.result_file), &ensemble)?;
    let columns: Vec<&Diagnostics> = ensemble.chains.iter().map(|c| &c.diagnostics).collect();
    write_diagnostics_csv(args.out.join(&config.output.diagnostics_file), &columns)?;

    let chains = ensemble
        .chains
        .iter()
        .map(|chain| chain_record(chain.seed, &chain.from, &chain.to, chain.tally))
        .collect::<Result<Vec<_>, _>>()?;
    let manifest = RunManifest {
        variant: ChainVariant::Weighted,
        master_seed: ensemble.master_seed,
        input_hash: canonical_hash(&edges),
        chains,
        result_file: config.output.result_file.clone(),
        diagnostics_file: Some(config.output.diagnostics_file.clone()),
        config,
    };
    manifest.write(&args.out.join(&manifest.config.output.manifest_file))?;
    info!(out = %args.out.display(), zeros = zeros.len(), "weighted run written");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_inputs(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
        let edges = dir.join("edges.json");
        fs::write(&edges, r#"{"from": [0, 2], "to": [1, 3]}"#).unwrap();
        let weights = dir.join("weights.json");
        fs::write(
            &weights,
            r#"{"rows": [[1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1]]}"#,
        )
        .unwrap();
        let zeros = dir.join("zeros.json");
        fs::write(&zeros, r#"{"from": [2], "to": [1]}"#).unwrap();
        (edges, weights, zeros)
    }

    #[test]
    fn vetoed_run_keeps_the_input_graph() {
        let dir = tempdir().unwrap();
        let (edges, weights, zeros) = write_inputs(dir.path());
        let args = WeightedArgs {
            edges,
            weights,
            zeros: Some(zeros),
            config: None,
            seed: Some(10),
            out: dir.path().join("run"),
        };

        let manifest = run(&args).unwrap();

        assert_eq!(manifest.chains.len(), 1);
        assert_eq!(manifest.chains[0].graph_hash, manifest.input_hash);
        assert_eq!(manifest.chains[0].tally.accepted, 0);
        let csv = fs::read_to_string(args.out.join("diagnostics.csv")).unwrap();
        assert_eq!(csv.lines().count(), 1 + manifest.config.steps);
    }

    #[test]
    fn missing_zero_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let (edges, weights, _) = write_inputs(dir.path());
        let args = WeightedArgs {
            edges,
            weights,
            zeros: Some(dir.path().join("absent.json")),
            config: None,
            seed: Some(10),
            out: dir.path().join("run"),
        };
        assert!(run(&args).is_err());
    }
}
