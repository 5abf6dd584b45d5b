use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};

pub const TRAIN_FILE_NAME: &str = "train.bin";
pub const VALIDATION_FILE_NAME: &str = "val.bin";

/// Write the corpus records, in order, as one UTF-8 file.
pub fn write_corpus(path: &Path, records: &[String]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, records.concat()).map_err(|e| {
        AppError::IoError(format!("Failed to write corpus {}: {}", path.display(), e))
    })
}

/// Read a UTF-8 text file, dropping byte sequences that are not valid UTF-8.
/// Line endings come back as `\n`.
pub fn read_text_ignoring_errors(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    let text = bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid())
        .collect::<String>();
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Read every file and join the contents with `"\n"`.
pub fn read_joined<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let parts = paths
        .iter()
        .map(|path| read_text_ignoring_errors(path.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("\n"))
}

/// Write token ids as raw little-endian `u16` values.
pub fn write_token_file(path: &Path, tokens: &[u16]) -> Result<()> {
    ensure_parent_dir(path)?;
    let bytes: Vec<u8> = tokens.iter().flat_map(|token| token.to_le_bytes()).collect();
    fs::write(path, bytes).map_err(|e| {
        AppError::IoError(format!("Failed to write tokens {}: {}", path.display(), e))
    })
}

/// Paths of the train and validation arrays inside `out_dir`.
pub fn token_file_paths(out_dir: &Path) -> (PathBuf, PathBuf) {
    (out_dir.join(TRAIN_FILE_NAME), out_dir.join(VALIDATION_FILE_NAME))
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
