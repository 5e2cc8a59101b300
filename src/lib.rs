//! Synthetic integer dataset generator.
//!
//! For every configured size N this writes N random `i32` values in
//! generation order to a primary directory and a shuffled copy of the same
//! values to a secondary directory, both as `<N>_file.txt`.

pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod sample;

pub use config::{RunConfig, Seed, DEFAULT_SIZES};
pub use error::{GenError, Result};
pub use generator::{run, DatasetReport};
