//! Reads the CSV entry list.
//! Every data row becomes a record keyed by the header row; only the
//! `APPNAME`, `APPLINK` and `APPICON` columns are consumed downstream.

use crate::constants::{ICON_COLUMN, LINK_COLUMN, NAME_COLUMN};
use crate::error::Result;
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// One CSV row, mapping column header to cell value in header order.
pub type Record = IndexMap<String, String>;

/// The fields of a record that drive provisioning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Folder and file name; entries without one are skipped
    pub name: Option<String>,
    pub link: Option<String>,
    pub icon: Option<String>,
}

impl Entry {
    /// Picks the known columns out of a record. Missing columns stay `None`.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.get(NAME_COLUMN).cloned(),
            link: record.get(LINK_COLUMN).cloned(),
            icon: record.get(ICON_COLUMN).cloned(),
        }
    }

    /// Returns the name only when it is present and non-empty.
    pub fn provisionable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Reads every data row of the CSV file at `path`.
///
/// The first row is the header. Rows may be shorter or longer than the header:
/// cells past the header are dropped and columns without a cell are left out
/// of the record.
///
/// # Errors
/// * `Error::CsvError` if the file is missing, unreadable or not valid CSV
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    debug!("Reading entries from {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        records.push(record);
    }

    debug!("Read {} records", records.len());
    Ok(records)
}

/// Reads the CSV file at `path` into entries, in source order.
pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    Ok(read_records(path)?.iter().map(Entry::from_record).collect())
}
