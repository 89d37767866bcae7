//! Error handling for the appbox application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for appbox operations.
///
/// This enum represents all possible errors that can occur while provisioning.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised while reading the CSV entry list
    #[error("CSV error: {0}.")]
    CsvError(#[from] csv::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents text that is not valid UTF-16LE
    #[error("Encoding error in '{path}': {reason}.")]
    EncodingError { path: String, reason: String },

    /// Represents a failure to copy the template into an entry folder
    #[error("Failed to copy '{template}' to '{destination}': {reason}.")]
    CopyError {
        template: String,
        destination: String,
        reason: String,
    },
}

/// Convenience type alias for Results with appbox's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
