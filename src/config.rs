use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Dataset sizes written by a default run, smallest first.
pub const DEFAULT_SIZES: [usize; 12] = [
    10, 50, 100, 500, 1000, 2000, 3000, 5000, 8000, 10000, 20000, 50000,
];

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_ALT_OUTPUT_DIR: &str = "output_alt";

/// Where the random source gets its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// OS entropy; differs on every run.
    #[default]
    Entropy,
    /// Fixed seed; identical config and seed give identical files.
    Fixed(u64),
}

impl Seed {
    pub fn rng(self) -> StdRng {
        match self {
            Seed::Entropy => StdRng::from_entropy(),
            Seed::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sizes: Vec<usize>,
    pub output_dir: PathBuf,
    pub alt_output_dir: PathBuf,
    pub seed: Seed,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            alt_output_dir: PathBuf::from(DEFAULT_ALT_OUTPUT_DIR),
            seed: Seed::Entropy,
        }
    }
}

impl RunConfig {
    /// Default sizes and seeding, with both output directories placed under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        RunConfig {
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            alt_output_dir: root.join(DEFAULT_ALT_OUTPUT_DIR),
            ..RunConfig::default()
        }
    }

    pub fn primary_path(&self, size: usize) -> PathBuf {
        self.output_dir.join(file_name(size))
    }

    pub fn alt_path(&self, size: usize) -> PathBuf {
        self.alt_output_dir.join(file_name(size))
    }
}

pub fn file_name(size: usize) -> String {
    format!("{}_file.txt", size)
}
