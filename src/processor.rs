//! Core provisioning orchestration.
//! Walks the entries in source order and, for every named entry whose folder
//! does not exist yet, creates the folder, copies the template into it and
//! fills in the placeholders.

use log::{debug, error, warn};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    constants::{CONFIG_FILE_EXTENSION, ICON_TOKEN, LINK_TOKEN, NAME_TOKEN},
    copier::copy_template,
    error::Result,
    provisioner,
    reader::Entry,
    rewriter::replace_tokens,
};

/// Outcome of processing a single named entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// The folder already existed and was left untouched
    Skipped,
    /// Folder created and configuration file written at the given path
    Provisioned(PathBuf),
    /// The template could not be copied; the new folder was removed again
    Failed(String),
}

/// Counts of entry outcomes for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub provisioned: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, status: &EntryStatus) {
        match status {
            EntryStatus::Skipped => self.skipped += 1,
            EntryStatus::Provisioned(_) => self.provisioned += 1,
            EntryStatus::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} provisioned, {} skipped, {} failed",
            self.provisioned, self.skipped, self.failed
        )
    }
}

/// Provisions entry folders under the configured base directory.
pub struct Processor<'a> {
    config: &'a Config,
}

/// Returns the folder an entry named `name` is provisioned into.
pub fn entry_folder<P: AsRef<Path>>(base_directory: P, name: &str) -> PathBuf {
    base_directory.as_ref().join(name)
}

/// Returns the configuration file name for an entry, e.g. `Chrome.ini`.
pub fn entry_file_name(name: &str) -> String {
    format!("{name}.{CONFIG_FILE_EXTENSION}")
}

/// Console line printed for an entry whose folder is already there.
pub fn folder_exists_message<P: AsRef<Path>>(name: &str, folder: P) -> String {
    format!("Folder for {name} exists: {}", folder.as_ref().display())
}

/// Console line printed before an entry folder is created.
pub fn folder_missing_message(name: &str) -> String {
    format!("Folder for {name} does not exist.")
}

fn substitution<'v>(value: Option<&'v str>, token: &str, name: &str) -> &'v str {
    value.unwrap_or_else(|| {
        warn!("Entry '{name}' has no {token}, using an empty string");
        ""
    })
}

impl<'a> Processor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Processes one entry.
    ///
    /// # Returns
    /// * `Ok(None)` - The entry has no name and was ignored
    /// * `Ok(Some(status))` - The entry was skipped, provisioned or failed to copy
    ///
    /// # Errors
    /// * `Error::IoError` if the folder cannot be created, or cannot be removed
    ///   again after a failed copy
    /// * Any error from rewriting the placeholders in the copied file
    pub fn process(&self, entry: &Entry) -> Result<Option<EntryStatus>> {
        let Some(name) = entry.provisionable_name() else {
            return Ok(None);
        };

        let folder = entry_folder(&self.config.base_directory, name);

        if provisioner::exists(&folder) {
            println!("{}", folder_exists_message(name, &folder));
            return Ok(Some(EntryStatus::Skipped));
        }

        println!("{}", folder_missing_message(name));
        provisioner::ensure(&folder)?;

        let file_name = entry_file_name(name);
        let target = match copy_template(&self.config.template_path, &folder, &file_name) {
            Ok(target) => target,
            Err(e) => {
                error!("{e}");
                // A failed entry leaves no folder behind.
                provisioner::remove(&folder)?;
                return Ok(Some(EntryStatus::Failed(e.to_string())));
            }
        };

        println!("{}", target.display());

        let link = substitution(entry.link.as_deref(), LINK_TOKEN, name);
        let icon = substitution(entry.icon.as_deref(), ICON_TOKEN, name);
        let replacements = [(NAME_TOKEN, name), (LINK_TOKEN, link), (ICON_TOKEN, icon)];
        replace_tokens(&target, &replacements)?;

        debug!("Provisioned {}", target.display());
        Ok(Some(EntryStatus::Provisioned(target)))
    }

    /// Processes all entries in order and returns the tally.
    ///
    /// Stops at the first fatal error; entries handled before it stay as they are.
    pub fn run(&self, entries: &[Entry]) -> Result<Summary> {
        let mut summary = Summary::default();
        for entry in entries {
            if let Some(status) = self.process(entry)? {
                summary.record(&status);
            }
        }

        println!(
            "Provisioning completed in {}: {summary}.",
            self.config.base_directory.display()
        );
        Ok(summary)
    }
}
