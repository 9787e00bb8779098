use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use degswap_graph::canonical_hash;
use degswap_mcmc::{run_uniform_ensemble, ChainVariant, RunManifest, UniformRule};
use tracing::info;

use super::{chain_record, load_config, read_edges, write_json};

#[derive(Args, Debug)]
pub struct UniformArgs {
    /// JSON edge list `{"from": [..], "to": [..]}`.
    #[arg(long)]
    pub edges: PathBuf,
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

pub fn run(args: &UniformArgs) -> Result<RunManifest, Box<dyn Error>> {
    let config = load_config(args.config.as_deref(), args.seed)?;
    let edges = read_edges(&args.edges)?;
    let rule = UniformRule::new(config.swap_p)?;
    fs::create_dir_all(&args.out)?;

    let ensemble = run_uniform_ensemble(&edges, config.steps, &rule, config.chains, config.seed)?;
    write_json(&args.out.join(&config.output.result_file), &ensemble)?;

    let chains = ensemble
        .chains
        .iter()
        .map(|chain| chain_record(chain.seed, &chain.from, &chain.to, chain.tally))
        .collect::<Result<Vec<_>, _>>()?;
    let manifest = RunManifest {
        variant: ChainVariant::Uniform,
        master_seed: ensemble.master_seed,
        input_hash: canonical_hash(&edges),
        chains,
        result_file: config.output.result_file.clone(),
        diagnostics_file: None,
        config,
    };
    manifest.write(&args.out.join(&manifest.config.output.manifest_file))?;
    info!(out = %args.out.display(), "uniform run written");
    Ok(manifest)
}
