//! Copies the UTF-16LE template into an entry folder.

use crate::encoding::{read_utf16le, write_utf16le};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Copies the template at `source` to `dest_folder/new_name`.
///
/// The text is decoded and re-encoded as UTF-16LE, so a template that is not
/// valid UTF-16LE is rejected instead of being copied.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written copy
///
/// # Errors
/// * `Error::CopyError` if the template cannot be read or decoded, or the copy
///   cannot be written
pub fn copy_template<S, D>(source: S, dest_folder: D, new_name: &str) -> Result<PathBuf>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source = source.as_ref();
    let destination = dest_folder.as_ref().join(new_name);
    debug!(
        "Copying template {} to {}",
        source.display(),
        destination.display()
    );

    let copy_error = |err: Error| Error::CopyError {
        template: source.display().to_string(),
        destination: destination.display().to_string(),
        reason: err.to_string(),
    };

    let content = read_utf16le(source).map_err(copy_error)?;
    write_utf16le(&destination, &content).map_err(copy_error)?;

    println!("File copied to {}", destination.display());
    Ok(destination)
}
