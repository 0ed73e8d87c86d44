// src/utils/io.rs
use std::path::{Path, PathBuf};

/// Load variables from a `.env` file in the working directory, if there is one.
///
/// Runs before the logger exists, so the outcome is returned for the caller to log.
pub fn load_env_file() -> Result<Option<PathBuf>, dotenvy::Error> {
    load_env_file_from(Path::new(".env"))
}

pub fn load_env_file_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    if !path.exists() {
        return Ok(None);
    }
    dotenvy::from_path(path)?;
    Ok(Some(path.to_path_buf()))
}
