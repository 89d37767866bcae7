//! In-place placeholder replacement in UTF-16LE files.

use crate::encoding::{read_utf16le, write_utf16le};
use crate::error::Result;
use log::debug;
use std::path::Path;

/// Replaces every occurrence of `token` in the file with `value`.
///
/// Matching is a plain substring search, left to right and non-overlapping.
/// The file is read and written back as UTF-16LE.
pub fn replace_token<P: AsRef<Path>>(file_path: P, token: &str, value: &str) -> Result<()> {
    let file_path = file_path.as_ref();
    let content = read_utf16le(file_path)?;
    let count = content.matches(token).count();
    debug!(
        "Replacing {count} occurrence(s) of {token} in {}",
        file_path.display()
    );
    write_utf16le(file_path, &content.replace(token, value))
}

/// Applies `replacements` in order, each against the file's current content.
pub fn replace_tokens<P: AsRef<Path>>(
    file_path: P,
    replacements: &[(&str, &str)],
) -> Result<()> {
    let file_path = file_path.as_ref();
    for (token, value) in replacements {
        replace_token(file_path, token, value)?;
    }
    Ok(())
}
