use std::path::PathBuf;

use log::{debug, info};
use rand::Rng;

use crate::config::RunConfig;
use crate::error::Result;
use crate::output::{ensure_dir, write_values};
use crate::sample;

/// Files written for one configured size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReport {
    pub size: usize,
    pub primary: PathBuf,
    pub alt: PathBuf,
}

/// Runs the whole generation sequence with a random source seeded from `config.seed`.
pub fn run(config: &RunConfig) -> Result<Vec<DatasetReport>> {
    let mut rng = config.seed.rng();
    run_with(config, &mut rng)
}

/// Like [`run`] but draws from a caller-supplied random source.
///
/// Stops at the first filesystem error. Files already written by earlier
/// sizes are left in place.
pub fn run_with<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<Vec<DatasetReport>> {
    ensure_dir(&config.output_dir)?;
    ensure_dir(&config.alt_output_dir)?;

    let mut reports = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let values = sample::generate(rng, size);

        let primary = config.primary_path(size);
        debug!("writing {}", primary.display());
        write_values(&primary, &values)?;

        let permuted = sample::shuffled(rng, &values);

        let alt = config.alt_path(size);
        debug!("writing {}", alt.display());
        write_values(&alt, &permuted)?;

        info!("wrote {} integers to {} and {}", size, primary.display(), alt.display());
        reports.push(DatasetReport { size, primary, alt });
    }

    Ok(reports)
}
