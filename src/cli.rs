//! Command-line interface implementation for appbox.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for appbox.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "appbox: provision app folders from a CSV list",
    long_about = None
)]
pub struct Args {
    /// Configuration file (JSON or YAML) with inputPath, baseDirectory and templatePath
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CSV file listing the entries to provision
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory under which entry folders are created
    #[arg(short, long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// UTF-16LE template copied into every new entry folder
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
