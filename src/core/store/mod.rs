//! SQLite-backed product store
//!
//! This module owns the single `product` table:
//! - Products are keyed by a generated integer id that is never reused
//! - Product names are unique and act as the upsert key
//! - Prices are stored as integer cents, dates as ISO `YYYY-MM-DD` text

mod queries;
mod schema;

pub use queries::UpsertOutcome;

use std::fs;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use rusqlite::Connection;

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "inventory.db";

/// The product store backed by SQLite
pub struct Inventory {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Inventory {
    /// Open or create the database at `path` and make sure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).into_diagnostic()?;
            }
        }

        let conn = Connection::open(path).into_diagnostic()?;
        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.ensure_schema()?;

        Ok(store)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().into_diagnostic()?;
        let store = Self { conn, path: None };
        store.ensure_schema()?;

        Ok(store)
    }

    /// Location of the database file (`None` for in-memory stores)
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
