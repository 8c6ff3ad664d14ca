//! CSV backup of the product table

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use serde::Deserialize;

use crate::core::importer::CSV_HEADERS;
use crate::core::store::Inventory;

/// Default backup file, relative to the working directory
pub const DEFAULT_BACKUP_FILE: &str = "Backup.csv";

/// How an existing backup file is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupMode {
    /// Add to the end of the file; every backup starts with its own header row
    #[default]
    Append,
    /// Replace the file contents
    Truncate,
}

impl BackupMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "append" => Some(BackupMode::Append),
            "truncate" => Some(BackupMode::Truncate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackupMode::Append => "append",
            BackupMode::Truncate => "truncate",
        }
    }
}

/// Result of a completed backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    pub path: PathBuf,
    pub rows_written: usize,
}

/// Write a header row and every product (oldest first) to `path`
pub fn backup(store: &Inventory, path: &Path, mode: BackupMode) -> Result<BackupReport> {
    let products = store.list_by_id_ascending()?;

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        BackupMode::Append => options.append(true),
        BackupMode::Truncate => options.write(true).truncate(true),
    };
    let file = options.open(path).into_diagnostic()?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(CSV_HEADERS).into_diagnostic()?;
    for product in &products {
        wtr.write_record([
            product.name.clone(),
            product.price.to_string(),
            product.quantity.to_string(),
            product.last_updated.to_string(),
        ])
        .into_diagnostic()?;
    }
    wtr.flush().into_diagnostic()?;
    drop(wtr);

    if !path.is_file() {
        return Err(miette::miette!(
            "backup file {} does not exist after writing",
            path.display()
        ));
    }

    tracing::info!(
        path = %path.display(),
        rows = products.len(),
        mode = mode.as_str(),
        "backup written"
    );

    Ok(BackupReport {
        path: path.to_path_buf(),
        rows_written: products.len(),
    })
}
