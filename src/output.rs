use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{GenError, Result};

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| GenError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes one decimal value per line, truncating any existing file.
pub fn write_values(path: &Path, values: &[i32]) -> Result<()> {
    write_lines(path, values).map_err(|source| GenError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_lines(path: &Path, values: &[i32]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()
}
