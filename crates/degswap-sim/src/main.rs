use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    hash::{self, HashArgs},
    uniform::{self, UniformArgs},
    weighted::{self, WeightedArgs},
};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "degswap-sim",
    about = "Degree-preserving checkerboard swap sampler CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run uniform swap chains from an edge list.
    Uniform(UniformArgs),
    /// Run weighted swap chains with structural zeros.
    Weighted(WeightedArgs),
    /// Print the canonical hash and degree sequences of an edge list.
    Hash(HashArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging()?;
    let cli = Cli::parse();
    let summary = match cli.command {
        Command::Uniform(args) => {
            let manifest = uniform::run(&args)?;
            commands::run_summary(&manifest, &args.out)
        }
        Command::Weighted(args) => {
            let manifest = weighted::run(&args)?;
            commands::run_summary(&manifest, &args.out)
        }
        Command::Hash(args) => serde_json::to_value(hash::run(&args)?)?,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
