use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use datagen::config::{DEFAULT_ALT_OUTPUT_DIR, DEFAULT_OUTPUT_DIR};
use datagen::{RunConfig, Seed, DEFAULT_SIZES};

/// Writes random i32 datasets, plus a shuffled copy of each.
#[derive(Parser)]
#[command(name = "datagen", version)]
struct Cli {
    /// Directory for values in generation order
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Directory for the shuffled copies
    #[arg(long, default_value = DEFAULT_ALT_OUTPUT_DIR)]
    alt_output_dir: PathBuf,

    /// Comma-separated dataset sizes; defaults to the standard list
    #[arg(long, value_delimiter = ',', value_parser = parse_size)]
    sizes: Vec<usize>,

    /// Seed for a reproducible run; OS entropy otherwise
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_size(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(0) => Err("size must be positive".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = RunConfig {
        sizes: if cli.sizes.is_empty() {
            DEFAULT_SIZES.to_vec()
        } else {
            cli.sizes
        },
        output_dir: cli.output_dir,
        alt_output_dir: cli.alt_output_dir,
        seed: cli.seed.map_or(Seed::Entropy, Seed::Fixed),
    };

    info!("gen integers for {} datasets..", config.sizes.len());
    let reports = datagen::run(&config).context("dataset generation failed")?;
    info!(
        "done. {} files in {} and {}",
        reports.len() * 2,
        config.output_dir.display(),
        config.alt_output_dir.display()
    );

    Ok(())
}
