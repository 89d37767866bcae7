//! appbox provisions per-app configuration folders from a CSV list.
//! For every named entry it creates a folder under a base directory, copies a
//! UTF-16LE template into it and fills in the entry's placeholders.

/// Command-line interface module for the appbox application
pub mod cli;

/// Configuration handling (JSON or YAML file plus command-line overrides)
pub mod config;

/// Common constants: placeholder tokens, CSV columns, configuration file names
pub mod constants;

/// Template copying into entry folders
pub mod copier;

/// UTF-16LE text encoding used by templates and provisioned files
pub mod encoding;

/// Error types and handling for the appbox application
pub mod error;

/// Logger initialisation
pub mod logger;

/// Core provisioning orchestration
pub mod processor;

/// Folder existence checks and creation
pub mod provisioner;

/// CSV entry list reading
pub mod reader;

/// In-place placeholder replacement
pub mod rewriter;
