//! Configuration handling for appbox.
//! Paths can come from a JSON or YAML configuration file and from command-line
//! flags; flags take precedence over file values.

use crate::cli::Args;
use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Paths as they appear in a configuration file, every key optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub input_path: Option<PathBuf>,
    pub base_directory: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
}

/// Fully resolved paths passed to the processor.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file listing the entries
    pub input_path: PathBuf,
    /// Root under which entry folders are created
    pub base_directory: PathBuf,
    /// UTF-16LE template copied into each new folder
    pub template_path: PathBuf,
}

impl ConfigFile {
    /// Returns a copy where every value set in `overrides` replaces ours.
    pub fn merge(self, overrides: ConfigFile) -> ConfigFile {
        ConfigFile {
            input_path: overrides.input_path.or(self.input_path),
            base_directory: overrides.base_directory.or(self.base_directory),
            template_path: overrides.template_path.or(self.template_path),
        }
    }

    /// Joins relative paths onto `root`; absolute paths are kept as they are.
    pub fn resolve_relative_to<P: AsRef<Path>>(self, root: P) -> ConfigFile {
        let root = root.as_ref();
        let resolve = |path: Option<PathBuf>| {
            path.map(|p| if p.is_absolute() { p } else { root.join(p) })
        };
        ConfigFile {
            input_path: resolve(self.input_path),
            base_directory: resolve(self.base_directory),
            template_path: resolve(self.template_path),
        }
    }
}

impl From<&Args> for ConfigFile {
    fn from(args: &Args) -> Self {
        ConfigFile {
            input_path: args.input.clone(),
            base_directory: args.base_dir.clone(),
            template_path: args.template.clone(),
        }
    }
}

impl TryFrom<ConfigFile> for Config {
    type Error = Error;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let missing = |key: &str| {
            Error::ConfigError(format!(
                "'{key}' is not set in the configuration file or on the command line"
            ))
        };
        Ok(Config {
            input_path: file.input_path.ok_or_else(|| missing("inputPath"))?,
            base_directory: file.base_directory.ok_or_else(|| missing("baseDirectory"))?,
            template_path: file.template_path.ok_or_else(|| missing("templatePath"))?,
        })
    }
}

/// Returns the first of `config_files` that exists inside `dir`.
pub fn find_config_file<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content).map_err(|e| {
            Error::ConfigError(format!("Invalid configuration format: {e}"))
        }),
    }
}

/// Reads a configuration file and resolves its relative paths against the
/// directory the file lives in.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ConfigFile> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());

    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("cannot read '{}': {e}", config_path.display()))
    })?;
    let root = config_path.parent().unwrap_or_else(|| Path::new(""));

    Ok(parse_config(&content)?.resolve_relative_to(root))
}

/// Builds the configuration from an explicit `--config` file, or the first
/// known configuration file in `working_dir`, overlaid with command-line flags.
pub fn resolve_config<P: AsRef<Path>>(args: &Args, working_dir: P) -> Result<Config> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => find_config_file(working_dir, &CONFIG_FILES),
    };

    let from_file = match config_path {
        Some(path) => load_config(path)?,
        None => {
            debug!("No configuration file found, using command-line flags only");
            ConfigFile::default()
        }
    };

    let config = Config::try_from(from_file.merge(ConfigFile::from(args)))?;
    debug!("Resolved configuration: {config:?}");
    Ok(config)
}

/// Resolves the configuration relative to the current working directory.
pub fn get_config(args: &Args) -> Result<Config> {
    let working_dir = std::env::current_dir()?;
    resolve_config(args, working_dir)
}
