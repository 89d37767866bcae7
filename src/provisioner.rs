//! Folder provisioning for entries.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Returns true if `path` exists and is a directory.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Creates `path` and any missing parents unless it already exists.
///
/// # Errors
/// * `Error::IoError` if the directory cannot be created
pub fn ensure<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if exists(path) {
        debug!("Directory already exists: {}", path.display());
        return Ok(());
    }
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path).map_err(Error::IoError)
}

/// Removes a folder created by `ensure`, together with anything inside it.
pub fn remove<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Removing directory: {}", path.display());
    fs::remove_dir_all(path).map_err(Error::IoError)
}
