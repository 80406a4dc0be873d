//! `.env` file loading.

use std::path::{Path, PathBuf};

/// Loads each file in order into the process environment.
///
/// Missing files are skipped. Any other failure (unreadable or malformed file) is
/// returned so the caller can report it once logging is up.
pub fn load_env_files(files: &[&Path]) -> Vec<(PathBuf, dotenvy::Error)> {
    files
        .iter()
        .filter_map(|file| match dotenvy::from_path(file) {
            Err(e) if !e.not_found() => Some((file.to_path_buf(), e)),
            _ => None,
        })
        .collect()
}
