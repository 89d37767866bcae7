//! UTF-16LE text I/O.
//!
//! Templates and the configuration files provisioned from them are stored as
//! little-endian UTF-16 without any BOM handling: a leading U+FEFF is kept as
//! ordinary text, so whatever was in the template lands in the copy unchanged.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Decodes little-endian UTF-16 bytes into a string.
///
/// # Errors
/// * Returns the reason as a string if the byte count is odd or the data
///   contains an unpaired surrogate
pub fn decode_utf16le(bytes: &[u8]) -> std::result::Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!("odd number of bytes ({})", bytes.len()));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| e.to_string())
}

/// Encodes a string as little-endian UTF-16 bytes.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Reads the full content of a UTF-16LE text file.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::EncodingError` if the content is not valid UTF-16LE
pub fn read_utf16le<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    decode_utf16le(&bytes).map_err(|reason| Error::EncodingError {
        path: path.display().to_string(),
        reason,
    })
}

/// Writes `text` to `path` as UTF-16LE, replacing any existing content.
pub fn write_utf16le<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    fs::write(path, encode_utf16le(text)).map_err(Error::IoError)
}
