//! Core module - storage, import, backup and configuration

pub mod backup;
pub mod config;
pub mod importer;
pub mod product;
pub mod store;

pub use backup::{backup, BackupMode, BackupReport};
pub use config::Config;
pub use importer::{import_csv, ImportError, ImportStats};
pub use product::Product;
pub use store::{Inventory, UpsertOutcome};
